/// API 526 표준 오리피스.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orifice {
    pub letter: &'static str,
    /// 유효 면적(in²)
    pub area_in2: f64,
}

impl Orifice {
    pub fn is_standard(&self) -> bool {
        self.area_in2 > 0.0
    }
}

/// 표준 오리피스 중 어떤 것도 충분하지 않을 때의 표시. 면적 0.
pub static NOT_APPLICABLE: Orifice = Orifice {
    letter: "N/A",
    area_in2: 0.0,
};

/// 면적 오름차순.
pub static API_526_ORIFICES: [Orifice; 14] = [
    Orifice { letter: "D", area_in2: 0.110 },
    Orifice { letter: "E", area_in2: 0.196 },
    Orifice { letter: "F", area_in2: 0.307 },
    Orifice { letter: "G", area_in2: 0.503 },
    Orifice { letter: "H", area_in2: 0.785 },
    Orifice { letter: "J", area_in2: 1.287 },
    Orifice { letter: "K", area_in2: 1.838 },
    Orifice { letter: "L", area_in2: 2.853 },
    Orifice { letter: "M", area_in2: 3.60 },
    Orifice { letter: "N", area_in2: 4.34 },
    Orifice { letter: "P", area_in2: 6.38 },
    Orifice { letter: "Q", area_in2: 11.05 },
    Orifice { letter: "R", area_in2: 16.0 },
    Orifice { letter: "T", area_in2: 26.0 },
];

/// 필요 면적 이상인 가장 작은 표준 오리피스를 고른다. 없으면 [`NOT_APPLICABLE`].
pub fn select_orifice(required_area_in2: f64) -> &'static Orifice {
    API_526_ORIFICES
        .iter()
        .find(|o| o.area_in2 >= required_area_in2)
        .unwrap_or(&NOT_APPLICABLE)
}

pub fn find_orifice(letter: &str) -> Option<&'static Orifice> {
    API_526_ORIFICES
        .iter()
        .find(|o| o.letter.eq_ignore_ascii_case(letter.trim()))
}
