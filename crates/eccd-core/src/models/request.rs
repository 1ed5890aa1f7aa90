use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::evaluation::{EvaluationPeriod, EvaluationRecord};
use crate::models::student::Student;

/// A student together with up to three evaluation records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRequest {
    pub student: Student,
    #[serde(default)]
    pub evaluations: Vec<EvaluationRecord>,
}

impl ScoringRequest {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let request: ScoringRequest = serde_json::from_str(json)?;
        if request.student.id.trim().is_empty() {
            return Err(CoreError::MissingField("student.id".to_string()));
        }
        Ok(request)
    }

    /// The record for `period`. Duplicate records for the same period are
    /// ignored after the first.
    pub fn evaluation(&self, period: EvaluationPeriod) -> Option<&EvaluationRecord> {
        self.evaluations.iter().find(|e| e.period == period)
    }
}
