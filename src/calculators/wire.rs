//! AWG 직경 계산과 전압 강하 기준 최대 배선 길이.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::format::to_fixed;
use crate::tables::wire::{find_wire, WireTableEntry, WIRE_TABLE};

/// 허용 전압 강하 비율(3%)
pub const ALLOWABLE_DROP_FRACTION: f64 = 0.03;

/// 회로 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "AC1")]
    AcSinglePhase,
    #[serde(rename = "AC3")]
    AcThreePhase,
}

impl SystemType {
    pub const ALL: [SystemType; 3] = [
        SystemType::Dc,
        SystemType::AcSinglePhase,
        SystemType::AcThreePhase,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SystemType::Dc => "DC",
            SystemType::AcSinglePhase => "AC1",
            SystemType::AcThreePhase => "AC3",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
    }

    /// 삼상은 √3, 직류와 단상은 왕복 도체를 고려해 2.
    pub fn phase_factor(self) -> f64 {
        match self {
            SystemType::AcThreePhase => 3f64.sqrt(),
            SystemType::Dc | SystemType::AcSinglePhase => 2.0,
        }
    }
}

/// 단면적으로부터 구한 도체 직경.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireDiameter {
    pub area_mm2: f64,
    pub diameter_mm: f64,
    pub diameter_in: f64,
}

impl WireDiameter {
    /// 직경(mm) 소수 3자리
    pub fn mm_display(&self) -> String {
        to_fixed(self.diameter_mm, 3)
    }

    /// 직경(in) 소수 4자리
    pub fn inches_display(&self) -> String {
        to_fixed(self.diameter_in, 4)
    }

    /// 단면적(mm²) 소수 3자리
    pub fn area_display(&self) -> String {
        to_fixed(self.area_mm2, 3)
    }
}

/// d = 2 * sqrt(A / π)
pub fn diameter_from_area(area_mm2: f64) -> WireDiameter {
    let diameter_mm = 2.0 * (area_mm2 / PI).sqrt();
    WireDiameter {
        area_mm2,
        diameter_mm,
        diameter_in: diameter_mm / 25.4,
    }
}

/// 표의 AWG 코드로 직경을 구한다. 표에 없으면 `None`.
pub fn awg_diameter(awg: &str) -> Option<WireDiameter> {
    find_wire(awg).map(|w| diameter_from_area(w.area_mm2))
}

/// 3% 전압 강하를 넘지 않는 최대 편도 길이(ft).
///
/// 전류, 전압, 저항 중 하나라도 0 이하이거나 숫자가 아니면 0을 돌려준다.
pub fn max_run_feet(amps: f64, volts: f64, resistance_per_kft: f64, system: SystemType) -> f64 {
    if [amps, volts, resistance_per_kft]
        .into_iter()
        .any(|v| v.is_nan() || v <= 0.0)
    {
        return 0.0;
    }
    let max_drop_volts = ALLOWABLE_DROP_FRACTION * volts;
    (max_drop_volts * 1000.0) / (amps * resistance_per_kft * system.phase_factor())
}

/// 전선 표 한 행에 대한 최대 길이와 과부하 여부.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunLengthRow {
    pub wire: &'static WireTableEntry,
    pub max_feet: f64,
    /// 전류가 허용 전류를 넘으면 true
    pub overloaded: bool,
}

impl RunLengthRow {
    pub fn max_feet_display(&self) -> String {
        to_fixed(self.max_feet, 1)
    }
}

pub fn is_overloaded(amps: f64, wire: &WireTableEntry) -> bool {
    amps > wire.ampacity_a
}

/// 전선 표 전체에 대해 최대 길이와 과부하 표시를 계산한다.
pub fn run_length_table(amps: f64, volts: f64, system: SystemType) -> Vec<RunLengthRow> {
    WIRE_TABLE
        .iter()
        .map(|wire| RunLengthRow {
            wire,
            max_feet: max_run_feet(amps, volts, wire.resistance_ohm_per_kft, system),
            overloaded: is_overloaded(amps, wire),
        })
        .collect()
}
