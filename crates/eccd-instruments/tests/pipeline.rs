use eccd_core::models::evaluation::EvaluationPeriod;
use eccd_instruments::age::{AgeAtEvaluation, AgeBand};
use eccd_instruments::domain::{Domain, RawCounts};
use eccd_instruments::pipeline::{PeriodInput, score_child, score_period};
use eccd_instruments::scoring::Interpretation;
use jiff::civil::date;

fn input(evaluated_on: jiff::civil::Date, counts: &[(&str, u32)]) -> PeriodInput {
    PeriodInput {
        evaluated_on: Some(evaluated_on),
        raw_counts: RawCounts::from_labeled(counts.iter().copied()),
    }
}

#[test]
fn single_domain_scenario() {
    let born = date(2020, 1, 15);
    let period = score_period(
        Some(born),
        EvaluationPeriod::First,
        &input(date(2024, 2, 10), &[("Gross Motor", 6)]),
    );

    assert_eq!(period.age, Some(AgeAtEvaluation { years: 4, months: 0 }));
    assert_eq!(period.band, Some(AgeBand::ThreeToFour));

    let gross = period.domain(Domain::GrossMotor).unwrap();
    assert_eq!(gross.raw, Some(6));
    assert_eq!(gross.scaled, Some(5));

    let fine = period.domain(Domain::FineMotor).unwrap();
    assert_eq!(fine.raw, None);
    assert_eq!(fine.scaled, None);

    assert_eq!(period.summary.composite, Some(5));
    assert_eq!(period.summary.standard_score, Some(37));
    assert_eq!(
        period.summary.interpretation,
        Some(Interpretation::BelowAverage)
    );
}

#[test]
fn composite_is_the_sum_of_domain_scores() {
    let born = date(2019, 5, 1);
    let period = score_period(
        Some(born),
        EvaluationPeriod::Second,
        &input(
            date(2023, 11, 1),
            &[
                ("Gross Motor", 11),
                ("Fine Motor", 8),
                ("Self-Help/Eating", 10),
                ("Self-Help/Dressing", 11),
                ("Receptive Language", 4),
                ("Expressive Language", 7),
                ("Cognitive", 13),
                ("Social/Emotional Development", 0),
            ],
        ),
    );

    // 4y 6m
    assert_eq!(period.band, Some(AgeBand::FourToFive));
    assert_eq!(period.domain(Domain::SelfHelp).unwrap().raw, Some(21));
    assert_eq!(period.domain(Domain::SocialEmotional).unwrap().raw, Some(0));
    assert_eq!(period.domain(Domain::SocialEmotional).unwrap().scaled, None);

    let expected: u32 = period.domains.iter().filter_map(|d| d.scaled).sum();
    // 10 + 10 + 10 + 10 + 11 + 10
    assert_eq!(expected, 61);
    assert_eq!(period.summary.composite, Some(61));
    assert_eq!(period.summary.standard_score, Some(86));
    assert_eq!(
        period.summary.interpretation,
        Some(Interpretation::LowAverage)
    );
}

#[test]
fn all_zero_counts_leave_the_period_unscored() {
    let period = score_period(
        Some(date(2020, 1, 1)),
        EvaluationPeriod::First,
        &input(date(2024, 1, 1), &[("Gross Motor", 0), ("Cognitive", 0)]),
    );

    assert!(period.domains.iter().all(|d| d.scaled.is_none()));
    assert_eq!(period.summary.composite, None);
    assert_eq!(period.summary.standard_score, None);
    assert_eq!(period.summary.interpretation, None);
}

#[test]
fn missing_birthdate_degrades_scores_but_keeps_raw_counts() {
    let period = score_period(
        None,
        EvaluationPeriod::First,
        &input(date(2024, 1, 1), &[("Cognitive", 9)]),
    );

    assert_eq!(period.age, None);
    assert_eq!(period.band, None);
    assert_eq!(period.domain(Domain::Cognitive).unwrap().raw, Some(9));
    assert_eq!(period.domain(Domain::Cognitive).unwrap().scaled, None);
    assert_eq!(period.summary.composite, None);
}

#[test]
fn periods_are_scored_independently() {
    let born = date(2019, 1, 10);
    let inputs = [
        (
            EvaluationPeriod::First,
            input(date(2022, 6, 10), &[("Fine Motor", 5)]),
        ),
        (
            EvaluationPeriod::Third,
            input(date(2024, 3, 10), &[("Fine Motor", 5)]),
        ),
    ];

    let scores = score_child(Some(born), &inputs);
    assert_eq!(scores.periods.len(), 3);
    assert_eq!(
        scores
            .periods
            .iter()
            .map(|p| p.period)
            .collect::<Vec<_>>(),
        EvaluationPeriod::ALL.to_vec()
    );

    let first = scores.period(EvaluationPeriod::First).unwrap();
    let second = scores.period(EvaluationPeriod::Second).unwrap();
    let third = scores.period(EvaluationPeriod::Third).unwrap();

    // 3y 5m and 5y 2m: same raw count, different norm group.
    assert_eq!(first.band, Some(AgeBand::ThreeToFour));
    assert_eq!(third.band, Some(AgeBand::FiveToSix));
    assert_eq!(first.domain(Domain::FineMotor).unwrap().scaled, Some(9));
    assert_eq!(third.domain(Domain::FineMotor).unwrap().scaled, Some(1));

    assert_eq!(second.evaluated_on, None);
    assert!(second.domains.iter().all(|d| d.raw.is_none()));
    assert_eq!(second.summary.composite, None);
}

#[test]
fn scoring_is_idempotent() {
    let born = Some(date(2020, 9, 3));
    let inputs = [(
        EvaluationPeriod::First,
        input(date(2024, 10, 1), &[("Cognitive", 10), ("Gross Motor", 9)]),
    )];

    assert_eq!(score_child(born, &inputs), score_child(born, &inputs));
}

#[test]
fn child_outside_every_band_is_unscored() {
    let period = score_period(
        Some(date(2018, 1, 1)),
        EvaluationPeriod::First,
        &input(date(2024, 6, 1), &[("Gross Motor", 12)]),
    );

    assert_eq!(period.age, Some(AgeAtEvaluation { years: 6, months: 5 }));
    assert_eq!(period.band, None);
    assert_eq!(period.summary.interpretation, None);
}
