// tests/form.rs
use fan_roi::{
    CalculatorForm, EstimatorConfig, Error, Field, FieldError, Genre, GenreCategory,
};

#[test]
fn default_form_validates() {
    let cfg = EstimatorConfig::default();
    let input = CalculatorForm::default().validate(&cfg).unwrap();
    assert_eq!(input.monthly_spend, 500.0);
    assert_eq!(input.monthly_stream_volume, 10_000);
    assert_eq!(input.genre, GenreCategory::Known(Genre::Pop));
}

#[test]
fn below_minimums_show_page_messages() {
    let cfg = EstimatorConfig::default();
    let errs = CalculatorForm::new("80", "999", "rock").validate(&cfg).unwrap_err();

    assert_eq!(errs.0.len(), 2);
    let spend = errs.get(Field::MonthlySpend).unwrap();
    assert_eq!(spend, &FieldError::BelowMinimum { field: Field::MonthlySpend, min: 100.0 });
    assert_eq!(spend.message(&cfg), "Please enter a valid amount (minimum $100)");

    let streams = errs.get(Field::MonthlyStreams).unwrap();
    assert_eq!(
        streams.message(&cfg),
        "Please enter a valid number of streams (minimum 1,000)"
    );
}

#[test]
fn minimums_are_inclusive() {
    let cfg = EstimatorConfig::default();
    let input = CalculatorForm::new("100", "1000", "indie").validate(&cfg).unwrap();
    assert_eq!(input.monthly_spend, 100.0);
    assert_eq!(input.monthly_stream_volume, 1_000);
}

#[test]
fn blank_and_garbage_fields() {
    let cfg = EstimatorConfig::default();

    let errs = CalculatorForm::new("  ", "", "").validate(&cfg).unwrap_err();
    assert_eq!(
        errs.0,
        vec![
            FieldError::Required(Field::MonthlySpend),
            FieldError::Required(Field::MonthlyStreams),
            FieldError::Required(Field::Genre),
        ]
    );

    let errs = CalculatorForm::new("lots", "12.5", "pop").validate(&cfg).unwrap_err();
    assert!(matches!(
        errs.get(Field::MonthlySpend),
        Some(FieldError::NotANumber { .. })
    ));
    assert!(matches!(
        errs.get(Field::MonthlyStreams),
        Some(FieldError::NotANumber { .. })
    ));
    assert_eq!(errs.get(Field::Genre), None);
}

#[test]
fn minimums_follow_config() {
    let mut cfg = EstimatorConfig::default();
    cfg.min_monthly_spend = 1_500.0;
    cfg.min_stream_volume = 25_000;

    let errs = CalculatorForm::default().validate(&cfg).unwrap_err();
    let msgs: Vec<String> = errs.iter().map(|e| e.message(&cfg)).collect();
    assert_eq!(
        msgs,
        vec![
            "Please enter a valid amount (minimum $1,500)".to_string(),
            "Please enter a valid number of streams (minimum 25,000)".to_string(),
        ]
    );
}

#[test]
fn unknown_genre_is_not_a_form_error() {
    let cfg = EstimatorConfig::default();
    let input = CalculatorForm::new("500", "10000", "polka").validate(&cfg).unwrap();
    assert_eq!(input.genre, GenreCategory::Unrecognized("polka".to_string()));
}

#[test]
fn lenient_parse_ignores_minimums() {
    let input = CalculatorForm::new("50", "20", "pop").parse_lenient().unwrap();
    assert_eq!(input.monthly_spend, 50.0);
    assert_eq!(input.monthly_stream_volume, 20);

    assert!(CalculatorForm::new("", "20", "pop").parse_lenient().is_none());
}

#[test]
fn form_errors_convert_to_crate_error() {
    let cfg = EstimatorConfig::default();
    let errs = CalculatorForm::new("80", "10000", "pop").validate(&cfg).unwrap_err();
    let err: Error = errs.into();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(err.to_string(), "Invalid input: monthly spend must be at least 100");
}

#[test]
fn genre_option_labels() {
    let labels: Vec<&str> = Genre::ALL.iter().map(|g| g.label()).collect();
    assert_eq!(
        labels,
        ["Pop", "Hip-Hop/Rap", "Electronic/EDM", "Rock", "Indie", "Other"]
    );
}
