use eccd_cli::config::OutputFormat;
use eccd_cli::input::{period_inputs, validate};
use eccd_cli::output::render;
use eccd_core::models::evaluation::EvaluationPeriod;
use eccd_core::models::request::ScoringRequest;
use eccd_instruments::domain::Domain;
use eccd_instruments::get_instrument;

const REQUEST: &str = r#"{
    "student": { "id": "s-42", "name": "Ben", "birthdate": "2020-01-15" },
    "evaluations": [
        {
            "period": "third",
            "evaluation_date": "2025-03-01",
            "raw_counts": [{ "domain": "Receptive Language", "count": 9 }]
        },
        {
            "period": "first",
            "evaluation_date": "2024-02-10T00:00:00.000Z",
            "raw_counts": [
                { "domain": "Gross Motor", "count": 4 },
                { "domain": "Self-Help/Eating", "count": 3 }
            ],
            "responses": [
                { "domain": "Gross Motor", "item": 1, "yes": true },
                { "domain": "Gross Motor", "item": 2, "yes": true },
                { "domain": "Self-Help/Dressing", "item": 1, "yes": true }
            ]
        }
    ]
}"#;

#[test]
fn counts_and_responses_accumulate_per_period() {
    let request = ScoringRequest::from_json(REQUEST).unwrap();
    let inputs = period_inputs(&request);

    let periods: Vec<EvaluationPeriod> = inputs.iter().map(|(p, _)| *p).collect();
    assert_eq!(periods, vec![EvaluationPeriod::First, EvaluationPeriod::Third]);

    let first = &inputs[0].1;
    assert_eq!(first.evaluated_on, Some(jiff::civil::date(2024, 2, 10)));
    assert_eq!(first.raw_counts.get(Domain::GrossMotor), Some(6));
    assert_eq!(first.raw_counts.get(Domain::SelfHelp), Some(4));
}

#[test]
fn impossible_counts_are_reported_with_their_period() {
    let request = ScoringRequest::from_json(REQUEST).unwrap();
    let inputs = period_inputs(&request);
    let eccd = get_instrument("eccd_checklist").unwrap();

    let problems = validate(eccd.as_ref(), &inputs);
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].0, EvaluationPeriod::Third);
    assert_eq!(problems[0].1.domain, Domain::ReceptiveLanguage);
}

#[test]
fn json_report_carries_student_and_scores() {
    let request = ScoringRequest::from_json(REQUEST).unwrap();
    let inputs = period_inputs(&request);
    let eccd = get_instrument("eccd_checklist").unwrap();
    let scores = eccd.score(request.student.birthdate(), &inputs);

    let rendered = render(OutputFormat::Json, eccd.as_ref(), &request.student, &scores).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["student_id"], "s-42");
    assert_eq!(value["instrument_id"], "eccd_checklist");
    let first = &value["scores"]["periods"][0];
    assert_eq!(first["period"], "first");
    assert_eq!(first["band"], "3.1-4.0");
    assert_eq!(first["domains"][0]["domain"], "Gross Motor");
    assert_eq!(first["domains"][0]["scaled"], 5);
    assert!(first["domains"][1]["scaled"].is_null());
    assert!(value["scores"]["periods"][1]["summary"]["composite"].is_null());
    // Receptive Language 9 is above the ceiling, so the third period is empty.
    assert!(value["scores"]["periods"][2]["summary"]["interpretation"].is_null());
}

#[test]
fn text_report_uses_dashes_for_unscored_values() {
    let request = ScoringRequest::from_json(REQUEST).unwrap();
    let inputs = period_inputs(&request);
    let eccd = get_instrument("eccd_checklist").unwrap();
    let scores = eccd.score(request.student.birthdate(), &inputs);

    let rendered = render(OutputFormat::Text, eccd.as_ref(), &request.student, &scores).unwrap();
    assert!(rendered.starts_with("# Ben (s-42)\n\nBirthdate: 2020-01-15\n\n## ECCD Checklist"));
    assert!(rendered.contains("| Receptive Language | - | - | - | - | 9 | - |"));
}
