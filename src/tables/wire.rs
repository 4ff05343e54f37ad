/// 구리 도체 AWG 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireTableEntry {
    pub awg: &'static str,
    /// 단면적(mm²)
    pub area_mm2: f64,
    /// 허용 전류(A), 60°C 절연 기준
    pub ampacity_a: f64,
    /// 직류 저항(Ω / 1000 ft)
    pub resistance_ohm_per_kft: f64,
}

const fn row(
    awg: &'static str,
    area_mm2: f64,
    ampacity_a: f64,
    resistance_ohm_per_kft: f64,
) -> WireTableEntry {
    WireTableEntry {
        awg,
        area_mm2,
        ampacity_a,
        resistance_ohm_per_kft,
    }
}

/// 가는 선부터 굵은 선 순서.
pub const WIRE_TABLE: &[WireTableEntry] = &[
    row("18", 0.823, 7.0, 7.77),
    row("16", 1.31, 10.0, 4.89),
    row("14", 2.08, 15.0, 3.07),
    row("12", 3.31, 20.0, 1.93),
    row("10", 5.26, 30.0, 1.21),
    row("8", 8.37, 40.0, 0.764),
    row("6", 13.3, 55.0, 0.491),
    row("4", 21.2, 70.0, 0.308),
    row("3", 26.7, 85.0, 0.245),
    row("2", 33.6, 95.0, 0.194),
    row("1", 42.4, 110.0, 0.154),
    row("1/0", 53.5, 125.0, 0.122),
    row("2/0", 67.4, 145.0, 0.0967),
    row("3/0", 85.0, 165.0, 0.0766),
    row("4/0", 107.0, 195.0, 0.0608),
];

pub fn find_wire(awg: &str) -> Option<&'static WireTableEntry> {
    let awg = awg.trim();
    WIRE_TABLE.iter().find(|w| w.awg == awg)
}
