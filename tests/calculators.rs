//! 이상기체, 안전밸브, 전선, 전력, 토크 계산 테스트.
use bcn_engineering_suite::calculators::electrical::power_watts;
use bcn_engineering_suite::calculators::ideal_gas::{solve, GasState, SolveFor};
use bcn_engineering_suite::calculators::psv::{
    critical_flow_coefficient, size_relief_orifice, PsvInput,
};
use bcn_engineering_suite::calculators::torque::{bolt_torque, to_newton_meters, FrictionFactor};
use bcn_engineering_suite::calculators::wire::{
    awg_diameter, max_run_feet, run_length_table, SystemType,
};
use bcn_engineering_suite::format::to_fixed;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn ideal_gas_solves_each_variable() {
    let state = GasState::default();
    assert_eq!(SolveFor::Pressure.render(solve(&state, SolveFor::Pressure)), "101388.16");
    assert_eq!(SolveFor::Volume.render(solve(&state, SolveFor::Volume)), "0.0224");
    assert_eq!(SolveFor::Moles.render(solve(&state, SolveFor::Moles)), "0.9994");
    assert_eq!(SolveFor::Temperature.render(solve(&state, SolveFor::Temperature)), "272.98");
}

#[test]
fn ideal_gas_standard_molar_volume_gives_standard_temperature() {
    let state = GasState {
        volume_m3: 0.022414,
        ..GasState::default()
    };
    assert_eq!(SolveFor::Temperature.render(solve(&state, SolveFor::Temperature)), "273.15");
}

#[test]
fn ideal_gas_zero_volume_is_not_finite() {
    let state = GasState {
        volume_m3: 0.0,
        ..GasState::default()
    };
    assert!(!solve(&state, SolveFor::Pressure).is_finite());
}

#[test]
fn solve_for_symbols() {
    assert_eq!(SolveFor::from_symbol("n"), Some(SolveFor::Moles));
    assert_eq!(SolveFor::from_symbol(" T "), Some(SolveFor::Temperature));
    assert_eq!(SolveFor::from_symbol("x"), None);
    assert_eq!(SolveFor::Volume.unit(), "m³");
}

#[test]
fn psv_reference_case_selects_p_orifice() {
    let r = size_relief_orifice(&PsvInput::default()).expect("psv result");
    assert_close(r.coefficient_c, 356.06, 0.01);
    assert_close(r.relieving_pressure_psia, 124.7, 1e-9);
    assert_close(r.required_area_in2, 5.305, 1e-3);
    assert_eq!(r.orifice.letter, "P");
    assert!(!r.is_oversize());
}

#[test]
fn psv_critical_flow_coefficient_for_air() {
    assert_close(critical_flow_coefficient(1.4), 356.06, 0.01);
}

#[test]
fn psv_missing_required_input_gives_no_result() {
    let zero_flow = PsvInput {
        mass_flow_lb_per_h: 0.0,
        ..PsvInput::default()
    };
    assert!(size_relief_orifice(&zero_flow).is_none());

    let nan_k = PsvInput {
        specific_heat_ratio: f64::NAN,
        ..PsvInput::default()
    };
    assert!(size_relief_orifice(&nan_k).is_none());

    // -459.67 °F는 절대온도 0이다.
    let absolute_zero = PsvInput {
        temperature_f: -459.67,
        ..PsvInput::default()
    };
    assert!(size_relief_orifice(&absolute_zero).is_none());
}

#[test]
fn psv_zero_compressibility_is_not_checked() {
    let z_zero = PsvInput {
        compressibility: 0.0,
        ..PsvInput::default()
    };
    let r = size_relief_orifice(&z_zero).expect("z is not validated");
    assert_eq!(r.required_area_in2, 0.0);
    assert_eq!(r.orifice.letter, "D");
}

#[test]
fn psv_oversize_is_reported_not_clamped() {
    let huge = PsvInput {
        mass_flow_lb_per_h: 5_000_000.0,
        ..PsvInput::default()
    };
    let r = size_relief_orifice(&huge).expect("psv result");
    assert!(r.required_area_in2 > 26.0);
    assert_eq!(r.orifice.letter, "N/A");
    assert_eq!(r.orifice.area_in2, 0.0);
    assert!(r.is_oversize());
}

#[test]
fn awg_12_diameter() {
    let d = awg_diameter("12").expect("awg 12");
    assert_eq!(d.area_display(), "3.310");
    assert_eq!(d.mm_display(), "2.053");
    assert_eq!(d.inches_display(), "0.0808");
    assert!(awg_diameter("13").is_none());
}

#[test]
fn max_run_for_each_system_type() {
    assert_eq!(to_fixed(max_run_feet(20.0, 120.0, 1.93, SystemType::Dc), 1), "46.6");
    assert_eq!(
        max_run_feet(20.0, 120.0, 1.93, SystemType::AcSinglePhase),
        max_run_feet(20.0, 120.0, 1.93, SystemType::Dc)
    );
    assert_close(max_run_feet(20.0, 120.0, 1.93, SystemType::AcThreePhase), 53.846, 1e-3);
}

#[test]
fn max_run_is_zero_for_non_positive_or_missing_inputs() {
    assert_eq!(max_run_feet(0.0, 120.0, 1.93, SystemType::Dc), 0.0);
    assert_eq!(max_run_feet(20.0, -1.0, 1.93, SystemType::Dc), 0.0);
    assert_eq!(max_run_feet(20.0, 120.0, 0.0, SystemType::Dc), 0.0);
    assert_eq!(max_run_feet(f64::NAN, 120.0, 1.93, SystemType::Dc), 0.0);
}

#[test]
fn overload_flag_follows_ampacity() {
    let row_12 = |amps| {
        run_length_table(amps, 120.0, SystemType::Dc)
            .into_iter()
            .find(|r| r.wire.awg == "12")
            .expect("awg 12 row")
    };
    assert!(row_12(25.0).overloaded);
    assert!(!row_12(15.0).overloaded);
    assert!(!row_12(20.0).overloaded);
}

#[test]
fn system_type_codes() {
    assert_eq!(SystemType::from_code("ac3"), Some(SystemType::AcThreePhase));
    assert_eq!(SystemType::from_code("AC2"), None);
    assert_close(SystemType::AcThreePhase.phase_factor(), 3f64.sqrt(), 1e-12);
}

#[test]
fn power_is_product_or_zero() {
    assert_eq!(power_watts(24.0, 10.0), 240.0);
    assert_eq!(power_watts(f64::NAN, 10.0), 0.0);
}

#[test]
fn bolt_torque_lookup() {
    assert_eq!(bolt_torque("3/4", FrictionFactor::Coated), 142.0);
    assert_eq!(bolt_torque("3/4", FrictionFactor::Noncoated), 189.0);
    assert_eq!(bolt_torque("5", FrictionFactor::Coated), 0.0);
    assert_eq!(to_fixed(to_newton_meters(142.0), 1), "192.5");
}

#[test]
fn friction_factor_keys() {
    assert_eq!(FrictionFactor::from_key("0.20"), Some(FrictionFactor::Noncoated));
    assert_eq!(FrictionFactor::from_key("0.3"), None);
    assert_eq!(FrictionFactor::Coated.label(), "0.15 (Coated Bolts)");
}
