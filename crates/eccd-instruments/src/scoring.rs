use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::age::AgeBand;
use crate::domain::Domain;
use crate::norms;

/// Inclusive raw-score bin mapping to one scaled score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBin {
    pub min: u32,
    pub max: u32,
    pub score: u32,
}

impl ScoreBin {
    pub const fn new(min: u32, max: u32, score: u32) -> Self {
        Self { min, max, score }
    }

    pub fn contains(&self, raw: u32) -> bool {
        self.min <= raw && raw <= self.max
    }
}

/// Sum of scaled scores mapped to a standard score (mean 100, SD 15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StandardScoreEntry {
    pub sum: u32,
    pub score: u32,
}

/// Qualitative band for a standard score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Interpretation {
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Low Average")]
    LowAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "High Average")]
    HighAverage,
    #[serde(rename = "Above Average")]
    AboveAverage,
}

impl Interpretation {
    pub fn from_standard_score(score: u32) -> Self {
        match score {
            0..70 => Self::BelowAverage,
            70..90 => Self::LowAverage,
            90..110 => Self::Average,
            110..130 => Self::HighAverage,
            _ => Self::AboveAverage,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BelowAverage => "Below Average",
            Self::LowAverage => "Low Average",
            Self::Average => "Average",
            Self::HighAverage => "High Average",
            Self::AboveAverage => "Above Average",
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scaled score for one domain, or `None` when it cannot be scored.
///
/// A raw count of zero means the domain was not evaluated and is never
/// scored, even though the lowest bin starts at zero.
pub fn scaled_score(domain: Domain, raw: Option<u32>, band: Option<AgeBand>) -> Option<u32> {
    let band = band?;
    let raw = raw.filter(|&r| r > 0)?;
    norms::scaled_bins(band, domain)?
        .iter()
        .find(|bin| bin.contains(raw))
        .map(|bin| bin.score)
}

/// Sum of the scored domains. `None` when nothing contributed.
pub fn composite<I>(scaled: I) -> Option<u32>
where
    I: IntoIterator<Item = Option<u32>>,
{
    let total: u32 = scaled.into_iter().flatten().sum();
    (total > 0).then_some(total)
}

/// Standard score for a composite, clamped to the ends of the table.
pub fn standard_score(composite: Option<u32>) -> Option<u32> {
    let composite = composite?;
    let table = norms::STANDARD_SCORES;
    table
        .iter()
        .find(|entry| entry.sum >= composite)
        .or_else(|| table.last())
        .map(|entry| entry.score)
}

pub fn interpret(standard_score: Option<u32>) -> Option<Interpretation> {
    standard_score.map(Interpretation::from_standard_score)
}

/// A raw count the checklist cannot have produced.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub domain: Domain,
    pub value: u32,
    pub max: u32,
    pub message: String,
}

/// Static description of one domain of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainDefinition {
    pub domain: Domain,
    /// Number of checklist items, i.e. the highest possible raw count.
    pub item_count: u32,
    pub description: Option<String>,
}
