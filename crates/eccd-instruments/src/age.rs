//! Age at evaluation and the norm age bands.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Calendar age, in completed years and months, on a given evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeAtEvaluation {
    pub years: u32,
    pub months: u32,
}

impl AgeAtEvaluation {
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    /// `years + months / 12`, for display only.
    pub fn decimal_years(&self) -> f64 {
        f64::from(self.years) + f64::from(self.months) / 12.0
    }
}

impl fmt::Display for AgeAtEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

/// Compute calendar years and months elapsed between `birthdate` and
/// `evaluated_on`.
///
/// A day-of-month shortfall borrows one month, and a negative month count
/// borrows one year, so `months` always lands in `0..=11`. Returns `None`
/// when either date is missing or the evaluation precedes the birthdate.
pub fn age_at_evaluation(
    birthdate: Option<Date>,
    evaluated_on: Option<Date>,
) -> Option<AgeAtEvaluation> {
    let (birth, eval) = (birthdate?, evaluated_on?);
    if eval < birth {
        return None;
    }

    let mut years = i32::from(eval.year()) - i32::from(birth.year());
    let mut months = i32::from(eval.month()) - i32::from(birth.month());
    if eval.day() < birth.day() {
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    Some(AgeAtEvaluation {
        years: u32::try_from(years).ok()?,
        months: u32::try_from(months).ok()?,
    })
}

/// Norm group a child is compared against.
///
/// Band labels use the checklist's `years.months` notation: `5.11` is five
/// years eleven months, not a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeBand {
    #[serde(rename = "3.1-4.0")]
    ThreeToFour,
    #[serde(rename = "4.1-5.0")]
    FourToFive,
    #[serde(rename = "5.1-5.11")]
    FiveToSix,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [Self::ThreeToFour, Self::FourToFive, Self::FiveToSix];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreeToFour => "3.1-4.0",
            Self::FourToFive => "4.1-5.0",
            Self::FiveToSix => "5.1-5.11",
        }
    }

    /// Inclusive age range covered by this band, in total months.
    pub fn month_range(&self) -> (u32, u32) {
        match self {
            Self::ThreeToFour => (37, 48),
            Self::FourToFive => (49, 60),
            Self::FiveToSix => (61, 71),
        }
    }

    /// Band for an age, or `None` when the age is unknown or outside every
    /// norm group.
    pub fn classify(age: Option<AgeAtEvaluation>) -> Option<AgeBand> {
        let months = age?.total_months();
        Self::ALL.into_iter().find(|band| {
            let (lo, hi) = band.month_range();
            (lo..=hi).contains(&months)
        })
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
