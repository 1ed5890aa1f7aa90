//! eccd-instruments
//!
//! Developmental checklist definitions and the score normalization engine.
//! Pure data and pure functions: raw checklist counts go in, scaled scores,
//! composites, standard scores and interpretations come out. Nothing here
//! fails; a value that cannot be scored is `None` and stays `None` downstream.

pub mod age;
pub mod checklist;
pub mod domain;
pub mod error;
pub mod instruments;
pub mod norms;
pub mod pipeline;
pub mod scoring;

use eccd_core::models::evaluation::EvaluationPeriod;
use jiff::civil::Date;

use domain::RawCounts;
use pipeline::{ChildScores, PeriodInput};
use scoring::{DomainDefinition, ValidationError};

/// Trait implemented by each developmental checklist.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "eccd_checklist").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ECCD Checklist").
    fn name(&self) -> &str;

    /// The domains this instrument measures.
    fn domains(&self) -> &[DomainDefinition];

    /// Flag raw counts larger than the domain's item count.
    fn validate_raw_counts(&self, counts: &RawCounts) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (domain, value) in counts.iter() {
            if let Some(def) = self.domains().iter().find(|d| d.domain == domain)
                && value > def.item_count
            {
                errors.push(ValidationError {
                    domain,
                    value,
                    max: def.item_count,
                    message: format!(
                        "{}: {} raw count {} exceeds {} items",
                        self.name(),
                        domain,
                        value,
                        def.item_count,
                    ),
                });
            }
        }
        errors
    }

    /// Score every evaluation period for one child.
    fn score(
        &self,
        birthdate: Option<Date>,
        inputs: &[(EvaluationPeriod, PeriodInput)],
    ) -> ChildScores {
        pipeline::score_child(birthdate, inputs)
    }

    /// Format scores as a Markdown summary, periods side by side.
    fn to_structured_input(&self, scores: &ChildScores) -> String {
        let mut output = format!("## {}\n\n", self.name());

        for period in &scores.periods {
            let date = period
                .evaluated_on
                .map_or_else(|| "-".to_string(), |d| d.to_string());
            let age = period.age.map_or_else(|| "-".to_string(), |a| a.to_string());
            let band = period.band.map_or("-", |b| b.label());
            output.push_str(&format!(
                "- {}: date {date}, age {age}, band {band}\n",
                period.period
            ));
        }
        output.push('\n');

        output.push_str("| Domain |");
        for period in &scores.periods {
            output.push_str(&format!(" {0} Raw | {0} Scaled |", period.period));
        }
        output.push_str("\n|---|");
        output.push_str(&"---|---|".repeat(scores.periods.len()));
        output.push('\n');

        for def in self.domains() {
            output.push_str(&format!("| {} |", def.domain));
            for period in &scores.periods {
                let cell = period.domain(def.domain);
                output.push_str(&format!(
                    " {} | {} |",
                    dash(cell.and_then(|c| c.raw)),
                    dash(cell.and_then(|c| c.scaled)),
                ));
            }
            output.push('\n');
        }

        let summary_rows: [(&str, fn(&pipeline::PeriodScores) -> String); 3] = [
            ("Sum of Scaled Scores", |p| dash(p.summary.composite)),
            ("Standard Score", |p| dash(p.summary.standard_score)),
            ("Interpretation", |p| {
                p.summary
                    .interpretation
                    .map_or_else(|| "-".to_string(), |i| i.to_string())
            }),
        ];
        for (label, cell) in summary_rows {
            output.push_str(&format!("| {label} |"));
            for period in &scores.periods {
                output.push_str(&format!("  | {} |", cell(period)));
            }
            output.push('\n');
        }

        output
    }
}

fn dash(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::eccd_checklist::EccdChecklist)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, failing with [`error::InstrumentError`].
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, error::InstrumentError> {
    get_instrument(id).ok_or_else(|| error::InstrumentError::UnknownInstrument(id.to_string()))
}
