//! End-to-end scoring of a child's evaluation periods.
//!
//! Each period is scored on its own: its evaluation date picks the age band,
//! the band picks the scaled-score tables, and the scaled scores roll up
//! into a composite, a standard score and an interpretation. Anything that
//! cannot be scored comes back as `None` and only affects what depends on it.

use eccd_core::models::evaluation::EvaluationPeriod;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::age::{AgeAtEvaluation, AgeBand, age_at_evaluation};
use crate::domain::{Domain, RawCounts};
use crate::scoring::{self, Interpretation};

/// Inputs for one evaluation period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodInput {
    pub evaluated_on: Option<Date>,
    pub raw_counts: RawCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub domain: Domain,
    pub raw: Option<u32>,
    pub scaled: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodSummary {
    pub composite: Option<u32>,
    pub standard_score: Option<u32>,
    pub interpretation: Option<Interpretation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodScores {
    pub period: EvaluationPeriod,
    pub evaluated_on: Option<Date>,
    pub age: Option<AgeAtEvaluation>,
    pub band: Option<AgeBand>,
    /// One entry per domain, in canonical order.
    pub domains: Vec<DomainScore>,
    pub summary: PeriodSummary,
}

impl PeriodScores {
    pub fn domain(&self, domain: Domain) -> Option<&DomainScore> {
        self.domains.iter().find(|d| d.domain == domain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChildScores {
    pub birthdate: Option<Date>,
    /// First, second and third period, in that order.
    pub periods: Vec<PeriodScores>,
}

impl ChildScores {
    pub fn period(&self, period: EvaluationPeriod) -> Option<&PeriodScores> {
        self.periods.iter().find(|p| p.period == period)
    }
}

pub fn score_period(
    birthdate: Option<Date>,
    period: EvaluationPeriod,
    input: &PeriodInput,
) -> PeriodScores {
    let age = age_at_evaluation(birthdate, input.evaluated_on);
    let band = AgeBand::classify(age);
    if band.is_none() && input.evaluated_on.is_some() {
        debug!(%period, ?age, "age outside every norm band, period left unscored");
    }

    let domains: Vec<DomainScore> = Domain::ALL
        .into_iter()
        .map(|domain| {
            let raw = input.raw_counts.get(domain);
            DomainScore {
                domain,
                raw,
                scaled: scoring::scaled_score(domain, raw, band),
            }
        })
        .collect();

    let composite = scoring::composite(domains.iter().map(|d| d.scaled));
    let standard_score = scoring::standard_score(composite);

    PeriodScores {
        period,
        evaluated_on: input.evaluated_on,
        age,
        band,
        domains,
        summary: PeriodSummary {
            composite,
            standard_score,
            interpretation: scoring::interpret(standard_score),
        },
    }
}

/// Score all three periods. Periods without an entry in `inputs` are scored
/// from an empty input and come back fully unscored.
pub fn score_child(
    birthdate: Option<Date>,
    inputs: &[(EvaluationPeriod, PeriodInput)],
) -> ChildScores {
    let empty = PeriodInput::default();
    let periods = EvaluationPeriod::ALL
        .into_iter()
        .map(|period| {
            let input = inputs
                .iter()
                .find(|(p, _)| *p == period)
                .map_or(&empty, |(_, input)| input);
            score_period(birthdate, period, input)
        })
        .collect();

    ChildScores { birthdate, periods }
}
