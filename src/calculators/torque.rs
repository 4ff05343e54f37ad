use serde::{Deserialize, Serialize};

use crate::tables::torque::find_bolt;

/// 볼트 상태에 따른 마찰계수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrictionFactor {
    /// 0.15, 코팅 볼트
    #[serde(rename = "0.15")]
    Coated,
    /// 0.20, 비코팅 볼트
    #[serde(rename = "0.20")]
    Noncoated,
}

impl FrictionFactor {
    pub const ALL: [FrictionFactor; 2] = [FrictionFactor::Coated, FrictionFactor::Noncoated];

    /// 토크 표의 키 문자열.
    pub fn key(self) -> &'static str {
        match self {
            FrictionFactor::Coated => "0.15",
            FrictionFactor::Noncoated => "0.20",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FrictionFactor::Coated => "0.15 (Coated Bolts)",
            FrictionFactor::Noncoated => "0.20 (Noncoated Bolts)",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim() {
            "0.15" => Some(FrictionFactor::Coated),
            "0.20" | "0.2" => Some(FrictionFactor::Noncoated),
            _ => None,
        }
    }
}

/// 볼트 크기와 마찰계수로 목표 토크(ft-lb)를 찾는다. 표에 없으면 0.
pub fn bolt_torque(bolt_size: &str, friction: FrictionFactor) -> f64 {
    find_bolt(bolt_size)
        .and_then(|entry| entry.torque_for(friction.key()))
        .unwrap_or(0.0)
}

/// 1 ft-lb에 해당하는 N·m
pub const NEWTON_METERS_PER_FT_LB: f64 = 1.35582;

pub fn to_newton_meters(ft_lb: f64) -> f64 {
    ft_lb * NEWTON_METERS_PER_FT_LB
}
