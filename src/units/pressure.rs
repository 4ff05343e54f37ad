use super::Unit;

/// 압력 단위. 기준 단위는 psi이다.
///
/// 증기표 압력(psig)에 `factor`를 곱해 다른 단위로 표시하므로 psi의 배율은 1이어야 한다.
pub const UNITS: &[Unit] = &[
    Unit::new("psi", "PSI", 1.0),
    Unit::new("bar", "Bar", 0.0689476),
    Unit::new("kpa", "kPa", 6.89476),
    Unit::new("mpa", "MPa", 0.00689476),
    Unit::new("atm", "Atmosphere", 0.0680460),
    Unit::new("inh2o", "in H2O", 27.7076),
    Unit::new("mmhg", "mmHg", 51.7149),
    Unit::new("kgcm2", "kg/cm²", 0.0703070),
];
