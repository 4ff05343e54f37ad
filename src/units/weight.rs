use super::Unit;

/// 질량(중량) 단위. 기준 단위는 kg이다.
pub const UNITS: &[Unit] = &[
    Unit::new("kg", "Kilograms", 1.0),
    Unit::new("lb", "Pounds", 2.20462),
    Unit::new("g", "Grams", 1000.0),
    Unit::new("oz", "Ounces", 35.274),
    Unit::new("t", "Metric Tons", 0.001),
    Unit::new("ton", "Short Tons", 0.00110231),
];
