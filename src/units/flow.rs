use super::Unit;

/// 체적 유량 단위. 기준 단위는 US gpm이다.
pub const UNITS: &[Unit] = &[
    Unit::new("gpm", "GPM (US)", 1.0),
    Unit::new("lpm", "L/min", 3.78541),
    Unit::new("m3h", "m³/h", 0.227125),
    Unit::new("lps", "L/s", 0.0630902),
    Unit::new("cfm", "ft³/min", 0.133681),
    Unit::new("bpd", "bbl/day", 34.2857),
];
