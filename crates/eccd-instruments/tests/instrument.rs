use eccd_core::models::evaluation::EvaluationPeriod;
use eccd_instruments::domain::{Domain, RawCounts};
use eccd_instruments::error::InstrumentError;
use eccd_instruments::pipeline::PeriodInput;
use eccd_instruments::{all_instruments, get_instrument, require_instrument};
use jiff::civil::date;

#[test]
fn eccd_checklist_is_registered() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["eccd_checklist"]);

    let eccd = get_instrument("eccd_checklist").unwrap();
    assert_eq!(eccd.name(), "ECCD Checklist");
    let domains: Vec<Domain> = eccd.domains().iter().map(|d| d.domain).collect();
    assert_eq!(domains, Domain::ALL.to_vec());
}

#[test]
fn unknown_instrument_is_an_error() {
    assert!(get_instrument("vineland3").is_none());
    let err = require_instrument("vineland3").err().unwrap();
    assert!(matches!(err, InstrumentError::UnknownInstrument(id) if id == "vineland3"));
}

#[test]
fn counts_above_item_count_fail_validation() {
    let eccd = get_instrument("eccd_checklist").unwrap();
    let counts = RawCounts::from_labeled([("Receptive Language", 6), ("Gross Motor", 13)]);

    let errors = eccd.validate_raw_counts(&counts);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].domain, Domain::ReceptiveLanguage);
    assert_eq!(errors[0].value, 6);
    assert_eq!(errors[0].max, 5);
    assert!(errors[0].message.contains("exceeds 5 items"));

    let err: InstrumentError = errors[0].clone().into();
    assert!(err.to_string().starts_with("validation failed: "));
}

#[test]
fn structured_input_lays_periods_side_by_side() {
    let eccd = get_instrument("eccd_checklist").unwrap();
    let inputs = [(
        EvaluationPeriod::First,
        PeriodInput {
            evaluated_on: Some(date(2024, 2, 10)),
            raw_counts: RawCounts::from_labeled([("Gross Motor", 6)]),
        },
    )];
    let scores = eccd.score(Some(date(2020, 1, 15)), &inputs);
    let text = eccd.to_structured_input(&scores);

    assert!(text.starts_with("## ECCD Checklist\n"));
    assert!(text.contains("- 1st Evaluation: date 2024-02-10, age 4y 0m, band 3.1-4.0\n"));
    assert!(text.contains("- 2nd Evaluation: date -, age -, band -\n"));
    assert!(text.contains(
        "| Domain | 1st Evaluation Raw | 1st Evaluation Scaled | 2nd Evaluation Raw |"
    ));
    assert!(text.contains("| Gross Motor | 6 | 5 | - | - | - | - |\n"));
    assert!(text.contains("| Sum of Scaled Scores |  | 5 |  | - |  | - |\n"));
    assert!(text.contains("| Standard Score |  | 37 |  | - |  | - |\n"));
    assert!(text.contains("| Interpretation |  | Below Average |  | - |  | - |\n"));
}
