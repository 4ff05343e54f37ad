use super::Unit;

/// 체적 단위. 기준 단위는 리터이다.
pub const UNITS: &[Unit] = &[
    Unit::new("l", "Liters", 1.0),
    Unit::new("gal", "Gallons (US)", 0.264172),
    Unit::new("m3", "Cubic Meters", 0.001),
    Unit::new("ft3", "Cubic Feet", 0.0353147),
    Unit::new("bbl", "Barrels (Oil)", 0.00628981),
    Unit::new("ml", "Milliliters", 1000.0),
    Unit::new("in3", "Cubic Inches", 61.0237),
];
