//! 변환 가능한 범주별 단위 목록.
//!
//! 선형 범주의 각 단위는 범주 기준 단위 1에 해당하는 자기 단위의 양(`factor`)을 갖는다.
//! 온도는 배율 대신 섭씨를 거치는 고정 변환식을 쓴다.

pub mod flow;
pub mod length;
pub mod pressure;
pub mod temperature;
pub mod volume;
pub mod weight;

pub use temperature::{convert_temperature, TemperatureUnit};

/// 한 범주 안에서 선택할 수 있는 단위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// 범주 안에서 유일한 식별자
    pub id: &'static str,
    /// 표시용 이름
    pub name: &'static str,
    /// 기준 단위 1에 해당하는 이 단위의 양. 0이 아니고 유한해야 한다.
    pub factor: f64,
}

impl Unit {
    pub const fn new(id: &'static str, name: &'static str, factor: f64) -> Self {
        Self { id, name, factor }
    }
}

/// 단위 목록에서 식별자로 단위를 찾는다. 대소문자를 구분하지 않는다.
pub fn find_unit(units: &'static [Unit], id: &str) -> Option<&'static Unit> {
    let id = id.trim();
    units.iter().find(|u| u.id.eq_ignore_ascii_case(id))
}

/// 공통 기준 단위를 거쳐 선형 변환한다.
pub fn convert_linear(value: f64, from: &Unit, to: &Unit) -> f64 {
    let base = value / from.factor;
    base * to.factor
}
