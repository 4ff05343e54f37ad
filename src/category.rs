use serde::{Deserialize, Serialize};

use crate::units::{self, Unit};

/// 화면에서 고를 수 있는 모듈(범주).
///
/// 앞의 여섯 개는 단위 변환 범주이고 나머지는 계산기·참조표 모듈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pressure,
    Temperature,
    Flow,
    Volume,
    Weight,
    Length,
    IdealGas,
    WireSize,
    PipeSchedules,
    Flanges,
    Torque,
    Electrical,
    Tables,
    Constants,
    Steam,
    #[serde(rename = "PSV")]
    Psv,
    Materials,
    #[serde(rename = "AI")]
    Ai,
}

impl Category {
    /// 화면 순서대로 나열한 전체 범주.
    pub const ALL: [Category; 18] = [
        Category::Pressure,
        Category::Temperature,
        Category::Flow,
        Category::Volume,
        Category::Weight,
        Category::Length,
        Category::IdealGas,
        Category::WireSize,
        Category::PipeSchedules,
        Category::Flanges,
        Category::Torque,
        Category::Electrical,
        Category::Tables,
        Category::Constants,
        Category::Steam,
        Category::Psv,
        Category::Materials,
        Category::Ai,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Pressure => "Pressure",
            Category::Temperature => "Temperature",
            Category::Flow => "Flow",
            Category::Volume => "Volume",
            Category::Weight => "Weight",
            Category::Length => "Length",
            Category::IdealGas => "IdealGas",
            Category::WireSize => "WireSize",
            Category::PipeSchedules => "PipeSchedules",
            Category::Flanges => "Flanges",
            Category::Torque => "Torque",
            Category::Electrical => "Electrical",
            Category::Tables => "Tables",
            Category::Constants => "Constants",
            Category::Steam => "Steam",
            Category::Psv => "PSV",
            Category::Materials => "Materials",
            Category::Ai => "AI",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Pressure => "Pressure",
            Category::Temperature => "Temperature",
            Category::Flow => "Flow Rate",
            Category::Volume => "Volume",
            Category::Weight => "Weight",
            Category::Length => "Length",
            Category::IdealGas => "Ideal Gas Law",
            Category::WireSize => "Wire Size (AWG)",
            Category::PipeSchedules => "Pipe Schedules",
            Category::Flanges => "Flange Bolting",
            Category::Torque => "Bolt Torque",
            Category::Electrical => "Electrical Power",
            Category::Tables => "Voltage Drop Tables",
            Category::Constants => "Physical Constants",
            Category::Steam => "Steam Tables",
            Category::Psv => "PSV Sizing",
            Category::Materials => "Materials",
            Category::Ai => "Engineering Assistant",
        }
    }

    /// 단위 변환 범주면 순서가 정해진 단위 목록을 돌려준다.
    pub fn units(self) -> Option<&'static [Unit]> {
        match self {
            Category::Pressure => Some(units::pressure::UNITS),
            Category::Temperature => Some(units::temperature::UNITS),
            Category::Flow => Some(units::flow::UNITS),
            Category::Volume => Some(units::volume::UNITS),
            Category::Weight => Some(units::weight::UNITS),
            Category::Length => Some(units::length::UNITS),
            _ => None,
        }
    }

    pub fn is_unit_category(self) -> bool {
        self.units().is_some()
    }

    /// 식별자 또는 표시 이름으로 범주를 찾는다. 대소문자를 구분하지 않는다.
    pub fn from_id(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s) || c.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
