//! Turning an upstream scoring request into engine inputs.

use eccd_core::models::evaluation::{EvaluationPeriod, EvaluationRecord};
use eccd_core::models::request::ScoringRequest;
use eccd_instruments::Instrument;
use eccd_instruments::checklist::tally;
use eccd_instruments::domain::RawCounts;
use eccd_instruments::pipeline::PeriodInput;
use eccd_instruments::scoring::ValidationError;

pub fn period_input(record: &EvaluationRecord) -> PeriodInput {
    let mut raw_counts = RawCounts::from_labeled(
        record
            .raw_counts
            .iter()
            .map(|c| (c.domain.as_str(), c.count)),
    );
    raw_counts.merge(&tally(&record.responses));

    PeriodInput {
        evaluated_on: record.evaluation_date(),
        raw_counts,
    }
}

/// Engine inputs for every period present in the request, in ordinal order.
pub fn period_inputs(request: &ScoringRequest) -> Vec<(EvaluationPeriod, PeriodInput)> {
    EvaluationPeriod::ALL
        .into_iter()
        .filter_map(|period| {
            request
                .evaluation(period)
                .map(|record| (period, period_input(record)))
        })
        .collect()
}

/// Raw counts the instrument could not have produced, per period.
pub fn validate(
    instrument: &dyn Instrument,
    inputs: &[(EvaluationPeriod, PeriodInput)],
) -> Vec<(EvaluationPeriod, ValidationError)> {
    inputs
        .iter()
        .flat_map(|(period, input)| {
            instrument
                .validate_raw_counts(&input.raw_counts)
                .into_iter()
                .map(move |e| (*period, e))
        })
        .collect()
}
