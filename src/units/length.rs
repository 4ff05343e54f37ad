use super::Unit;

/// 길이 단위. 기준 단위는 미터이다.
pub const UNITS: &[Unit] = &[
    Unit::new("m", "Meters", 1.0),
    Unit::new("ft", "Feet", 3.28084),
    Unit::new("in", "Inches", 39.3701),
    Unit::new("mm", "Millimeters", 1000.0),
    Unit::new("cm", "Centimeters", 100.0),
    Unit::new("km", "Kilometers", 0.001),
    Unit::new("yd", "Yards", 1.09361),
    Unit::new("mi", "Miles", 0.000621371),
];
