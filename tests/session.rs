//! 세션 상태와 자리표시 동작 테스트.
use bcn_engineering_suite::calculators::ideal_gas::SolveFor;
use bcn_engineering_suite::calculators::torque::FrictionFactor;
use bcn_engineering_suite::category::Category;
use bcn_engineering_suite::config::Config;
use bcn_engineering_suite::outcome::{Outcome, NOT_AVAILABLE};
use bcn_engineering_suite::session::Session;
use bcn_engineering_suite::tables::materials::UnitSystem;

#[test]
fn defaults_select_first_two_pressure_units() {
    let s = Session::new();
    assert_eq!(s.category(), Category::Pressure);
    assert_eq!((s.from_unit(), s.to_unit()), ("psi", "bar"));
    assert_eq!(s.input, "1");
    assert_eq!(s.conversion_display(), "0.068948");
}

#[test]
fn selecting_category_resets_unit_pair() {
    let mut s = Session::new();
    s.set_units("kpa", "atm").expect("valid units");
    s.select_category(Category::Temperature);
    assert_eq!((s.from_unit(), s.to_unit()), ("c", "f"));
    s.select_category(Category::Pressure);
    assert_eq!((s.from_unit(), s.to_unit()), ("psi", "bar"));
}

#[test]
fn module_categories_keep_unit_pair() {
    let mut s = Session::new();
    s.select_category(Category::Steam);
    assert_eq!(s.category(), Category::Steam);
    assert_eq!(s.from_unit(), "psi");
    assert!(s.conversion().is_placeholder());
}

#[test]
fn configured_preset_overrides_first_two_units() {
    let mut cfg = Config::default();
    cfg.set_preset(Category::Length, "ft", "m");
    cfg.default_category = Category::Length;
    let s = Session::from_config(&cfg);
    assert_eq!((s.from_unit(), s.to_unit()), ("ft", "m"));
}

#[test]
fn nonzero_conversion_is_logged_with_unit_names() {
    let mut s = Session::new();
    s.select_category(Category::Temperature);
    let c = s.convert("100").value().expect("conversion");
    assert_eq!(c.display, "212.0000");
    let entry = s.history().next().expect("logged");
    assert_eq!(entry.module, Category::Temperature);
    assert_eq!(entry.input, "100 Celsius (°C)");
    assert_eq!(entry.result, "212.0000 Fahrenheit (°F)");
}

#[test]
fn invalid_or_zero_conversion_is_not_logged() {
    let mut s = Session::new();
    assert!(s.convert("abc").is_placeholder());
    assert_eq!(s.conversion_display(), "0");
    assert!(s.convert("0").value().is_some());
    assert!(s.activity_log().is_empty());
}

#[test]
fn inf_spelling_is_a_placeholder_and_not_logged() {
    let mut s = Session::new();
    assert!(s.convert("inf").is_placeholder());
    assert_eq!(s.conversion_display(), "0");
    assert!(s.activity_log().is_empty());
}

#[test]
fn six_conversions_keep_five_newest() {
    let mut s = Session::new();
    for v in ["1", "2", "3", "4", "5", "6"] {
        s.convert(v);
    }
    let inputs: Vec<&str> = s.history().map(|e| e.input.as_str()).collect();
    assert_eq!(inputs, vec!["6 PSI", "5 PSI", "4 PSI", "3 PSI", "2 PSI"]);
}

#[test]
fn ideal_gas_outcomes() {
    let mut s = Session::new();
    assert_eq!(s.ideal_gas_display(), Outcome::Value("101388.16".to_owned()));
    s.gas.solve_for = SolveFor::Temperature;
    assert_eq!(s.ideal_gas_display(), Outcome::Value("272.98".to_owned()));
    s.gas.volume = "0.022414".to_owned();
    assert_eq!(s.ideal_gas_display().render_or(NOT_AVAILABLE), "273.15");

    s.gas.solve_for = SolveFor::Pressure;
    s.gas.volume = "0".to_owned();
    assert!(s.ideal_gas().is_placeholder());
    s.gas.volume = "abc".to_owned();
    assert_eq!(s.ideal_gas_display().render_or(NOT_AVAILABLE), "N/A");
}

#[test]
fn psv_defaults_and_blank_input() {
    let mut s = Session::new();
    assert_eq!(s.psv().map(|r| r.orifice.letter), Some("P"));
    s.psv.mass_flow = String::new();
    assert!(s.psv().is_none());
    s.psv.mass_flow = "50000".to_owned();
    s.psv.z = "oops".to_owned();
    assert!(s.psv().is_some_and(|r| r.required_area_in2.is_nan()));
}

#[test]
fn electrical_defaults() {
    let mut s = Session::new();
    assert_eq!(s.power_watts(), 240.0);
    assert_eq!(s.wire_size().map(|d| d.mm_display()), Some("2.053".to_owned()));
    let rows = s.run_length_rows();
    assert_eq!(rows.len(), 15);
    assert!(rows.iter().any(|r| r.overloaded));
    s.circuit.amps = "x".to_owned();
    assert_eq!(s.power_watts(), 0.0);
    assert!(s.run_length_rows().iter().all(|r| r.max_feet == 0.0));
}

#[test]
fn reference_lookups_use_defaults() {
    let mut s = Session::new();
    assert_eq!(s.pipe_dimensions().map(|d| d.id_in), Some(0.622));
    assert_eq!(s.tubing().map(|t| t.id_in), Some(0.402));
    assert_eq!(s.flange().map(|f| f.stud_qty), Some(4));
    assert_eq!(s.torque_ft_lb(), 142.0);
    s.friction = FrictionFactor::Noncoated;
    assert_eq!(s.torque_ft_lb(), 189.0);
    s.bolt_size = "9".to_owned();
    assert_eq!(s.torque_ft_lb(), 0.0);
    s.flange_class = 2500;
    assert!(s.flange().is_none());
}

#[test]
fn steam_rows_follow_selected_unit() {
    let mut s = Session::new();
    let rows = s.steam_rows();
    assert_eq!(rows[0].display_pressure, "0.0");
    assert_eq!(rows.last().map(|r| r.display_pressure.as_str()), Some("300.0"));
    s.steam_pressure_unit = "bar".to_owned();
    assert_eq!(s.steam_rows()[0].display_pressure, "0.00");
    s.steam_pressure_unit = "furlongs".to_owned();
    assert_eq!(s.steam_unit_name(), "PSI");
}

#[test]
fn materials_follow_search_and_unit_system() {
    let mut s = Session::new();
    assert_eq!(s.materials().len(), 15);
    s.material_search = "pvc".to_owned();
    let found = s.materials();
    assert_eq!(found.len(), 1);
    s.material_system = UnitSystem::Imperial;
    assert_eq!(found[0].density_label(s.material_system), "86.2 lb/ft³");
}
