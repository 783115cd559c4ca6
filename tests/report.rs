// tests/report.rs
use fan_roi::report::{
    NOT_APPLICABLE, format_amount, format_cost_per_fan, group_thousands, roi_bar_width,
    roi_display,
};
use fan_roi::{CalculatorInput, EstimatorConfig, Genre, Report, compute};

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(8_800), "8,800");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn amounts() {
    assert_eq!(format_amount(201.0), "201");
    assert_eq!(format_amount(-199.0), "-199");
    assert_eq!(format_amount(1_234.5), "1,234.5");
    assert_eq!(format_amount(0.1234), "0.123");
    assert_eq!(format_amount(f64::INFINITY), NOT_APPLICABLE);
}

#[test]
fn cost_per_fan_and_roi() {
    assert_eq!(format_cost_per_fan(Some(500.0 / 1_200.0)), "$0.42");
    assert_eq!(format_cost_per_fan(None), "N/A");

    assert_eq!(roi_display(528.000_000_1), 528);
    assert_eq!(roi_display(f64::NAN), 0);
    assert_eq!(roi_bar_width(528.0), 100.0);
    assert_eq!(roi_bar_width(42.5), 42.5);
    assert_eq!(roi_bar_width(-3.0), 0.0);
}

#[test]
fn report_for_reference_scenario() {
    let cfg = EstimatorConfig::default();
    let input = CalculatorInput::new(500.0, 10_000, Genre::Pop);
    let rep = Report::new(&input, &compute(&cfg, &input), &cfg);

    assert_eq!(rep.real_fans, "1,200");
    assert_eq!(rep.bot_plays, "8,800");
    assert_eq!(rep.current_cost_per_fan, "$0.42");
    assert_eq!(rep.projected_real_fans, "3,840");
    assert_eq!(rep.monthly_savings, "$201");
    assert_eq!(rep.projected_cost_per_fan, "$0.08");
    assert_eq!(rep.roi, "528%");
    assert_eq!(rep.roi_bar_width, 100.0);

    let text = rep.to_string();
    assert!(text.contains("Real Fans Generated    1,200"), "{text}");
    assert!(text.contains("Overall ROI Improvement  528%"), "{text}");
}

#[test]
fn report_for_degenerate_and_losing_inputs() {
    let cfg = EstimatorConfig::default();

    let input = CalculatorInput::new(500.0, 5, Genre::Pop);
    let rep = Report::new(&input, &compute(&cfg, &input), &cfg);
    assert_eq!(rep.current_cost_per_fan, NOT_APPLICABLE);
    assert_eq!(rep.projected_cost_per_fan, NOT_APPLICABLE);

    let input = CalculatorInput::new(100.0, 1_000, "polka");
    let rep = Report::new(&input, &compute(&cfg, &input), &cfg);
    assert_eq!(rep.monthly_savings, "$-199");
    assert_eq!(rep.roi, "0%");
    assert!(rep.to_string().contains("(fallback)"));
}
