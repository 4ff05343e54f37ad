use serde::{Deserialize, Serialize};

use super::Unit;

/// 온도 단위 목록. 배율은 쓰지 않으며 변환은 [`convert_temperature`]가 맡는다.
pub const UNITS: &[Unit] = &[
    Unit::new("c", "Celsius (°C)", 1.0),
    Unit::new("f", "Fahrenheit (°F)", 1.0),
    Unit::new("k", "Kelvin (K)", 1.0),
    Unit::new("r", "Rankine (°R)", 1.0),
];

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    /// 단위 목록의 식별자(`c`, `f`, `k`, `r`)로부터 단위를 얻는다.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "c" => Some(TemperatureUnit::Celsius),
            "f" => Some(TemperatureUnit::Fahrenheit),
            "k" => Some(TemperatureUnit::Kelvin),
            "r" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Rankine => (value - 491.67) / 1.8,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 1.8 + 32.0,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Rankine => value_c * 1.8 + 491.67,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let c = to_celsius(value, from);
    from_celsius(c, to)
}
