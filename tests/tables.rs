//! 참조표 조회 테스트.
use bcn_engineering_suite::format::to_fixed;
use bcn_engineering_suite::tables::constants::find_constant;
use bcn_engineering_suite::tables::flange::{find_flange, flange_classes, flange_sizes};
use bcn_engineering_suite::tables::materials::{find_material, search, UnitSystem};
use bcn_engineering_suite::tables::orifice::{find_orifice, select_orifice, API_526_ORIFICES};
use bcn_engineering_suite::tables::pipe::{
    find_tubing, pipe_dimensions, schedules_for, tubing_ods, tubing_walls,
};
use bcn_engineering_suite::tables::steam::{display_pressure, interpolate, steam_at};
use bcn_engineering_suite::tables::torque::find_bolt;
use bcn_engineering_suite::tables::wire::{find_wire, WIRE_TABLE};
use bcn_engineering_suite::units::{find_unit, pressure};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn half_inch_schedule_40_pipe() {
    let d = pipe_dimensions("1/2", "40").expect("known nps");
    assert_eq!(d.od_in, 0.840);
    assert_eq!(d.wall_in, 0.109);
    assert_eq!(d.id_in, 0.622);
    assert_eq!(to_fixed(d.id_mm(), 2), "15.80");
}

#[test]
fn pipe_schedule_miss_is_defined() {
    assert!(pipe_dimensions("7", "40").is_none());
    let d = pipe_dimensions("1/2", "999").expect("known nps");
    assert_eq!(d.od_in, 0.840);
    assert_eq!(d.wall_in, 0.0);
    assert_eq!(d.id_in, 0.0);
    assert!(schedules_for("7").is_empty());
    assert!(schedules_for("1/2").contains(&"40"));
}

#[test]
fn tubing_lookup_and_options() {
    let t = find_tubing("1/2", "0.049").expect("tubing");
    assert_eq!(t.id_in, 0.402);
    assert!(find_tubing("1/2", "0.5").is_none());
    let ods = tubing_ods();
    let mut deduped = ods.clone();
    deduped.dedup();
    assert_eq!(ods, deduped);
    assert!(ods.contains(&"1/2"));
    assert_eq!(tubing_walls("1/2"), vec!["0.035", "0.049", "0.065", "0.083"]);
}

#[test]
fn flange_lookup_and_options() {
    let f = find_flange("2", 150).expect("2 in class 150");
    assert_eq!(f.stud_qty, 4);
    assert_eq!(f.stud_size, "5/8");
    assert!(find_flange("2", 900).is_none());
    assert_eq!(flange_classes(), vec![150, 300, 600]);
    let sizes = flange_sizes();
    assert_eq!(sizes.first(), Some(&"1/2"));
    assert_eq!(sizes.iter().filter(|s| **s == "2").count(), 1);
}

#[test]
fn orifice_selection_is_first_large_enough() {
    assert_eq!(select_orifice(5.305).letter, "P");
    assert_eq!(select_orifice(0.0).letter, "D");
    assert_eq!(select_orifice(4.34).letter, "N");
    assert_eq!(select_orifice(30.0).letter, "N/A");
    assert!(API_526_ORIFICES.windows(2).all(|w| w[0].area_in2 < w[1].area_in2));
    assert_eq!(find_orifice("q").map(|o| o.area_in2), Some(11.05));
}

#[test]
fn steam_table_exact_and_interpolated() {
    assert_eq!(steam_at(100.0).map(|s| s.temp_f), Some(337.9));
    assert!(steam_at(110.0).is_none());
    let s = interpolate(110.0).expect("inside table");
    assert_close(s.temp_f, 343.9, 1e-9);
    assert!(interpolate(400.0).is_none());
    assert!(interpolate(-1.0).is_none());
}

#[test]
fn steam_pressure_display_per_unit() {
    let row = steam_at(100.0).expect("row");
    let psi = find_unit(pressure::UNITS, "psi").expect("psi");
    let bar = find_unit(pressure::UNITS, "bar").expect("bar");
    assert_eq!(display_pressure(row, psi), "100.0");
    assert_eq!(display_pressure(row, bar), "6.89");
}

#[test]
fn materials_search_is_case_insensitive_substring() {
    assert_eq!(search("STEEL").len(), 3);
    assert_eq!(search("").len(), 15);
    assert!(search("unobtainium").is_empty());
    let al = find_material("aluminum 6061-t6").expect("aluminum");
    assert_eq!(al.density_label(UnitSystem::Si), "2700 kg/m³");
    assert_eq!(al.modulus_label(UnitSystem::Imperial), "10 Mpsi");
}

#[test]
fn wire_and_bolt_lookup() {
    assert_eq!(WIRE_TABLE.len(), 15);
    let w = find_wire("12").expect("awg 12");
    assert_eq!(w.ampacity_a, 20.0);
    assert_eq!(w.resistance_ohm_per_kft, 1.93);
    assert!(find_bolt("3/4").is_some());
    assert!(find_bolt("2").is_none());
}

#[test]
fn constant_lookup() {
    let g = find_constant("standard gravity").expect("g");
    assert_eq!(g.value, "9.80665");
    assert_eq!(g.unit, "m/s²");
}
