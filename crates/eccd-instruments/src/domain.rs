//! Developmental domains and label normalization.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

/// The seven developmental domains measured by the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Domain {
    #[serde(rename = "Gross Motor")]
    GrossMotor,
    #[serde(rename = "Fine Motor")]
    FineMotor,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    #[serde(rename = "Receptive Language")]
    ReceptiveLanguage,
    #[serde(rename = "Expressive Language")]
    ExpressiveLanguage,
    #[serde(rename = "Cognitive")]
    Cognitive,
    #[serde(rename = "Social Emotional")]
    SocialEmotional,
}

impl Domain {
    /// Canonical order, matching the printed checklist.
    pub const ALL: [Domain; 7] = [
        Self::GrossMotor,
        Self::FineMotor,
        Self::SelfHelp,
        Self::ReceptiveLanguage,
        Self::ExpressiveLanguage,
        Self::Cognitive,
        Self::SocialEmotional,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GrossMotor => "Gross Motor",
            Self::FineMotor => "Fine Motor",
            Self::SelfHelp => "Self-Help",
            Self::ReceptiveLanguage => "Receptive Language",
            Self::ExpressiveLanguage => "Expressive Language",
            Self::Cognitive => "Cognitive",
            Self::SocialEmotional => "Social Emotional",
        }
    }

    /// Resolve an upstream label to a canonical domain.
    pub fn from_label(label: &str) -> Option<Domain> {
        let normalized = normalize_label(label);
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(&normalized))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduce an upstream domain label to its canonical name.
///
/// Only the part before the first `/` is considered. Anything mentioning
/// "Social" becomes "Social Emotional" and anything mentioning "Self-Help"
/// becomes "Self-Help"; other labels are returned trimmed but otherwise
/// unchanged.
pub fn normalize_label(label: &str) -> String {
    let head = label.split('/').next().unwrap_or_default().trim();
    if head.contains("Social") {
        Domain::SocialEmotional.name().to_string()
    } else if head.contains("Self-Help") {
        Domain::SelfHelp.name().to_string()
    } else {
        head.to_string()
    }
}

/// Raw "yes" counts per canonical domain for one evaluation period.
///
/// Labels that normalize to the same domain are summed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCounts {
    counts: BTreeMap<Domain, u32>,
}

impl RawCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(label, count)` pairs, skipping labels that are not one
    /// of the seven domains.
    pub fn from_labeled<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut counts = Self::new();
        for (label, count) in entries {
            counts.add_labeled(label.as_ref(), count);
        }
        counts
    }

    pub fn add(&mut self, domain: Domain, count: u32) {
        let entry = self.counts.entry(domain).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Returns `false` when the label does not resolve to a domain.
    pub fn add_labeled(&mut self, label: &str, count: u32) -> bool {
        match Domain::from_label(label) {
            Some(domain) => {
                self.add(domain, count);
                true
            }
            None => {
                debug!(label, count, "ignoring count for unknown domain");
                false
            }
        }
    }

    pub fn merge(&mut self, other: &RawCounts) {
        for (&domain, &count) in &other.counts {
            self.add(domain, count);
        }
    }

    pub fn get(&self, domain: Domain) -> Option<u32> {
        self.counts.get(&domain).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Domain, u32)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
