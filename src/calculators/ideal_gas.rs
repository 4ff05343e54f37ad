use serde::{Deserialize, Serialize};

use crate::format::to_fixed;

/// 일반 기체 상수 [J/(mol·K)]
pub const GAS_CONSTANT: f64 = 8.31446;

/// PV = nRT에서 구할 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveFor {
    #[serde(rename = "P")]
    Pressure,
    #[serde(rename = "V")]
    Volume,
    #[serde(rename = "n")]
    Moles,
    #[serde(rename = "T")]
    Temperature,
}

impl SolveFor {
    pub const ALL: [SolveFor; 4] = [
        SolveFor::Pressure,
        SolveFor::Volume,
        SolveFor::Moles,
        SolveFor::Temperature,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            SolveFor::Pressure => "P",
            SolveFor::Volume => "V",
            SolveFor::Moles => "n",
            SolveFor::Temperature => "T",
        }
    }

    /// `P`, `V`, `n`, `T` 기호로부터 얻는다. `n`만 소문자로 구분하며 나머지는 대소문자 무관.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.trim() {
            "P" | "p" => Some(SolveFor::Pressure),
            "V" | "v" => Some(SolveFor::Volume),
            "n" | "N" => Some(SolveFor::Moles),
            "T" | "t" => Some(SolveFor::Temperature),
            _ => None,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SolveFor::Pressure => "Pa",
            SolveFor::Volume => "m³",
            SolveFor::Moles => "mol",
            SolveFor::Temperature => "K",
        }
    }

    /// 결과 표시 자릿수. P와 T는 2자리, V와 n은 4자리.
    pub fn decimals(self) -> usize {
        match self {
            SolveFor::Pressure | SolveFor::Temperature => 2,
            SolveFor::Volume | SolveFor::Moles => 4,
        }
    }

    pub fn render(self, value: f64) -> String {
        to_fixed(value, self.decimals())
    }
}

/// 이상기체 상태. 구하는 변수의 칸은 계산에 쓰이지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    pub pressure_pa: f64,
    pub volume_m3: f64,
    pub moles: f64,
    pub temperature_k: f64,
}

impl Default for GasState {
    fn default() -> Self {
        Self {
            pressure_pa: 101_325.0,
            volume_m3: 0.0224,
            moles: 1.0,
            temperature_k: 273.15,
        }
    }
}

/// 나머지 세 값으로 선택한 변수를 구한다.
pub fn solve(state: &GasState, solve_for: SolveFor) -> f64 {
    let GasState {
        pressure_pa: p,
        volume_m3: v,
        moles: n,
        temperature_k: t,
    } = *state;
    let r = GAS_CONSTANT;
    match solve_for {
        SolveFor::Pressure => (n * r * t) / v,
        SolveFor::Volume => (n * r * t) / p,
        SolveFor::Moles => (p * v) / (r * t),
        SolveFor::Temperature => (p * v) / (n * r),
    }
}
