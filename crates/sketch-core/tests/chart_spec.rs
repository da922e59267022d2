// File: crates/sketch-core/tests/chart_spec.rs
// Purpose: Chart configuration derived from raw form values.

use sketch_core::chart::parse_number;
use sketch_core::{parse_data_values, ChartForm, ChartKind, ChartSpec, SketchError};

#[test]
fn three_values_get_three_labels() {
    let spec = ChartSpec::from_form(&ChartForm::new("Sales", "bar", "1,2,3")).expect("valid form");
    assert_eq!(spec.title, "Sales");
    assert_eq!(spec.kind, ChartKind::Bar);
    assert_eq!(spec.values, vec![1.0, 2.0, 3.0]);
    assert_eq!(spec.labels(), vec!["Point 1", "Point 2", "Point 3"]);
}

#[test]
fn non_numeric_token_becomes_nan() {
    let spec = ChartSpec::from_form(&ChartForm::new("", "line", "1,x,3")).expect("does not fail");
    assert_eq!(spec.values.len(), 3);
    assert_eq!(spec.values[0], 1.0);
    assert!(spec.values[1].is_nan());
    assert_eq!(spec.values[2], 3.0);
    assert_eq!(spec.labels().len(), 3);
}

#[test]
fn whitespace_and_blank_tokens() {
    assert_eq!(parse_data_values(" 4 , 5.5,\t6 "), vec![4.0, 5.5, 6.0]);
    // a blank token counts as zero, so an empty field is one zero point
    assert_eq!(parse_data_values(""), vec![0.0]);
    assert_eq!(parse_data_values("1,,2"), vec![1.0, 0.0, 2.0]);
}

#[test]
fn number_forms() {
    assert_eq!(parse_number("1e3"), 1000.0);
    assert_eq!(parse_number("-2.5"), -2.5);
    assert_eq!(parse_number(".5"), 0.5);
    assert_eq!(parse_number("0x10"), 16.0);
    assert_eq!(parse_number("Infinity"), f64::INFINITY);
    assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_number("inf").is_nan());
    assert!(parse_number("nan").is_nan());
    assert!(parse_number("1,5").is_nan());
    assert!(parse_number("12px").is_nan());
    assert!(parse_number("--1").is_nan());
}

#[test]
fn chart_kinds_parse_case_insensitively() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.name().parse::<ChartKind>().unwrap(), kind);
        assert_eq!(kind.name().to_uppercase().parse::<ChartKind>().unwrap(), kind);
    }
    assert!(ChartKind::Pie.is_radial());
    assert!(!ChartKind::Line.is_radial());
}

#[test]
fn unknown_chart_type_is_rejected() {
    let err = ChartSpec::from_form(&ChartForm::new("t", "radar", "1")).unwrap_err();
    assert!(matches!(err, SketchError::UnknownChartKind(ref s) if s == "radar"));
}
