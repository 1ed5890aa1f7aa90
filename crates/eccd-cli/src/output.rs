use eccd_core::models::student::Student;
use eccd_instruments::Instrument;
use eccd_instruments::pipeline::ChildScores;
use serde::Serialize;

use crate::config::OutputFormat;

/// Scores for one student as emitted by `eccd score --format json`.
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub student_id: &'a str,
    pub student_name: &'a str,
    pub instrument_id: &'a str,
    pub scores: &'a ChildScores,
}

pub fn render(
    format: OutputFormat,
    instrument: &dyn Instrument,
    student: &Student,
    scores: &ChildScores,
) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = ScoreReport {
                student_id: &student.id,
                student_name: &student.name,
                instrument_id: instrument.id(),
                scores,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => {
            let birthdate = scores
                .birthdate
                .map_or_else(|| "-".to_string(), |d| d.to_string());
            Ok(format!(
                "# {} ({})\n\nBirthdate: {birthdate}\n\n{}",
                student.name,
                student.id,
                instrument.to_structured_input(scores)
            ))
        }
    }
}
