/// 마찰계수 한 값에 대한 목표 토크.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionTorque {
    /// 마찰계수 표기 (`"0.15"`, `"0.20"`)
    pub friction_factor: &'static str,
    pub ft_lb: f64,
}

/// PCC-1 목표 토크 표의 한 행(볼트 루트 응력 50 ksi 기준).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueEntry {
    pub bolt_size: &'static str,
    pub torques: [FrictionTorque; 2],
}

const fn tq(bolt_size: &'static str, coated: f64, noncoated: f64) -> TorqueEntry {
    TorqueEntry {
        bolt_size,
        torques: [
            FrictionTorque {
                friction_factor: "0.15",
                ft_lb: coated,
            },
            FrictionTorque {
                friction_factor: "0.20",
                ft_lb: noncoated,
            },
        ],
    }
}

pub const TORQUE_DATA: &[TorqueEntry] = &[
    tq("1/2", 39.0, 52.0),
    tq("5/8", 79.0, 105.0),
    tq("3/4", 142.0, 189.0),
    tq("7/8", 229.0, 306.0),
    tq("1", 344.0, 459.0),
    tq("1-1/8", 512.0, 682.0),
    tq("1-1/4", 726.0, 968.0),
    tq("1-3/8", 993.0, 1323.0),
    tq("1-1/2", 1317.0, 1756.0),
];

pub fn find_bolt(bolt_size: &str) -> Option<&'static TorqueEntry> {
    let bolt_size = bolt_size.trim();
    TORQUE_DATA.iter().find(|t| t.bolt_size == bolt_size)
}

impl TorqueEntry {
    /// 마찰계수 표기로 토크를 찾는다.
    pub fn torque_for(&self, friction_factor: &str) -> Option<f64> {
        let key = friction_factor.trim();
        self.torques
            .iter()
            .find(|t| t.friction_factor == key)
            .map(|t| t.ft_lb)
    }
}
