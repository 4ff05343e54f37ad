//! 단위 변환과 표시 포맷 회귀 테스트.
use bcn_engineering_suite::category::Category;
use bcn_engineering_suite::conversion::{self, convert, convert_or_placeholder, ConversionError};
use bcn_engineering_suite::format::{is_nonzero_rendering, parse_number, to_fixed, to_grouped};
use bcn_engineering_suite::units::{convert_temperature, TemperatureUnit};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn boiling_point_celsius_to_fahrenheit() {
    let c = convert(Category::Temperature, "c", "f", "100").expect("convert");
    assert_eq!(c.display, "212.0000");
}

#[test]
fn absolute_zero_kelvin_to_celsius() {
    let c = convert(Category::Temperature, "k", "c", "0").expect("convert");
    assert_eq!(c.display, "-273.1500");
}

#[test]
fn freezing_point_round_trip_through_fahrenheit() {
    let f = convert(Category::Temperature, "c", "f", "0").expect("c->f");
    assert_eq!(f.display, "32.0000");
    let back = convert(Category::Temperature, "f", "c", &f.display).expect("f->c");
    assert_eq!(back.display, "0.0000");
}

#[test]
fn rankine_pivots_through_celsius() {
    let v = convert_temperature(491.67, TemperatureUnit::Rankine, TemperatureUnit::Kelvin);
    assert_close(v, 273.15, 1e-9);
}

#[test]
fn pressure_uses_psi_base_and_six_decimals() {
    let c = convert(Category::Pressure, "psi", "bar", "100").expect("convert");
    assert_eq!(c.display, "6.894760");
    assert_eq!(c.input_label(), "100 PSI");
    assert_eq!(c.result_label(), "6.894760 Bar");
}

#[test]
fn linear_round_trip_recovers_input() {
    // 표시 문자열(소수 6자리)을 다시 넣으므로 반올림 오차가 배율 비만큼 커진다.
    let half_step = 0.5e-6;
    for category in Category::ALL {
        if category == Category::Temperature {
            continue;
        }
        let Some(units) = category.units() else {
            continue;
        };
        for a in units {
            for b in units {
                let there = convert(category, a.id, b.id, "12.5").expect("there");
                let back = convert(category, b.id, a.id, &there.display).expect("back");
                let back_value = parse_number(&back.display).expect("rendered number");
                let tol = half_step * (a.factor / b.factor) * 1.000_001 + half_step + 1e-9;
                assert!(
                    (back_value - 12.5).abs() <= tol,
                    "{category}: {} -> {} -> {} gave {back_value}, tol={tol}",
                    a.id,
                    b.id,
                    a.id
                );
            }
        }
    }
}

#[test]
fn unit_ids_are_case_insensitive() {
    let c = convert(Category::Pressure, "PSI", "Bar", "1").expect("convert");
    assert_eq!(c.from.id, "psi");
    assert_eq!(c.to.id, "bar");
}

#[test]
fn unparseable_input_is_rejected_and_degrades_to_placeholder() {
    let err = convert(Category::Length, "m", "ft", "abc").unwrap_err();
    assert_eq!(err, ConversionError::InvalidInput("abc".to_owned()));
    assert!(convert_or_placeholder(Category::Length, "m", "ft", "").is_placeholder());
    assert_eq!(conversion::PLACEHOLDER, "0");
}

#[test]
fn unknown_unit_and_module_categories_are_errors() {
    assert!(matches!(
        convert(Category::Pressure, "psi", "furlong", "1"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert_eq!(
        convert(Category::IdealGas, "a", "b", "1").unwrap_err(),
        ConversionError::NotConvertible(Category::IdealGas)
    );
}

#[test]
fn zero_result_is_not_considered_nonzero() {
    let c = convert(Category::Length, "m", "ft", "0").expect("convert");
    assert_eq!(c.display, "0.000000");
    assert!(!c.is_nonzero());
    let tiny = convert(Category::Length, "mm", "km", "0.0001").expect("convert");
    assert_eq!(tiny.display, "0.000000");
    assert!(!tiny.is_nonzero());
}

#[test]
fn to_fixed_rounds_exact_ties_away_from_zero() {
    assert_eq!(to_fixed(0.5, 0), "1");
    assert_eq!(to_fixed(2.5, 0), "3");
    assert_eq!(to_fixed(-1.5, 0), "-2");
    assert_eq!(to_fixed(0.125, 2), "0.13");
    // 1.005는 이진수로 1.00499...라 내림된다.
    assert_eq!(to_fixed(1.005, 2), "1.00");
}

#[test]
fn to_fixed_special_values() {
    assert_eq!(to_fixed(-0.0, 2), "0.00");
    assert_eq!(to_fixed(-0.0001, 2), "-0.00");
    assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
    assert_eq!(to_fixed(f64::NEG_INFINITY, 4), "-Infinity");
    assert_eq!(to_fixed(f64::NAN, 2), "NaN");
}

#[test]
fn nonzero_rendering_detection() {
    assert!(!is_nonzero_rendering("0.000000"));
    assert!(!is_nonzero_rendering("-0.00"));
    assert!(is_nonzero_rendering("0.000001"));
    assert!(is_nonzero_rendering("-Infinity"));
}

#[test]
fn parse_number_trims_and_rejects_garbage() {
    assert_eq!(parse_number(" 42.5 \n"), Some(42.5));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("1,000"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("-2e3"), Some(-2000.0));
}

#[test]
fn grouped_rendering_matches_locale_style() {
    assert_eq!(to_grouped(240.0), "240");
    assert_eq!(to_grouped(24000.5), "24,000.5");
    assert_eq!(to_grouped(1_234_567.0), "1,234,567");
    assert_eq!(to_grouped(-1234.5678), "-1,234.568");
    assert_eq!(to_grouped(0.1 + 0.2), "0.3");
}

#[test]
fn only_the_infinity_spelling_parses_as_infinite() {
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("-infinity"), None);
    assert_eq!(parse_number("nan"), None);
    assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
    assert_eq!(parse_number(" -Infinity "), Some(f64::NEG_INFINITY));
    assert!(convert_or_placeholder(Category::Pressure, "psi", "bar", "inf").is_placeholder());
}
