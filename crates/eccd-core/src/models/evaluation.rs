use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::date::parse_iso_date;

/// One of the three checklist administrations in a school year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationPeriod {
    First,
    Second,
    Third,
}

impl EvaluationPeriod {
    pub const ALL: [EvaluationPeriod; 3] = [Self::First, Self::Second, Self::Third];

    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "1st Evaluation",
            Self::Second => "2nd Evaluation",
            Self::Third => "3rd Evaluation",
        }
    }
}

impl fmt::Display for EvaluationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pre-summed "yes" count for one domain label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabeledCount {
    pub domain: String,
    pub count: u32,
}

/// A single checklist item answer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistResponse {
    pub domain: String,
    pub item: u32,
    pub yes: bool,
}

/// Everything recorded for one evaluation period. Domain labels are
/// un-normalized; `raw_counts` and tallied `responses` accumulate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRecord {
    pub period: EvaluationPeriod,
    #[serde(default)]
    pub evaluation_date: Option<String>,
    #[serde(default)]
    pub raw_counts: Vec<LabeledCount>,
    #[serde(default)]
    pub responses: Vec<ChecklistResponse>,
}

impl EvaluationRecord {
    pub fn evaluation_date(&self) -> Option<jiff::civil::Date> {
        parse_iso_date(self.evaluation_date.as_deref())
    }
}
