//! API 520 임계 유동 기체 안전밸브 오리피스 사이징.

use crate::tables::orifice::{select_orifice, Orifice};

/// 방출 계수 Kd
pub const DISCHARGE_COEFFICIENT: f64 = 0.975;
/// 배압 보정 계수 Kb (사용자 조정 없음)
pub const BACKPRESSURE_CORRECTION: f64 = 1.0;
/// 파열판 조합 보정 계수 Kc (사용자 조정 없음)
pub const COMBINATION_CORRECTION: f64 = 1.0;
/// 설정 압력 대비 축적 배율(10% accumulation)
pub const ACCUMULATION_FACTOR: f64 = 1.1;
/// 대기압 [psi]
pub const ATMOSPHERIC_PSI: f64 = 14.7;
/// °F → °R
pub const RANKINE_OFFSET: f64 = 459.67;

/// 안전밸브 사이징 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsvInput {
    /// 질량 유량 W [lb/hr]
    pub mass_flow_lb_per_h: f64,
    /// 설정 압력 [psig]
    pub set_pressure_psig: f64,
    /// 방출 온도 [°F]
    pub temperature_f: f64,
    /// 분자량 M
    pub molecular_weight: f64,
    /// 비열비 k
    pub specific_heat_ratio: f64,
    /// 압축 계수 Z
    pub compressibility: f64,
}

impl Default for PsvInput {
    fn default() -> Self {
        Self {
            mass_flow_lb_per_h: 50_000.0,
            set_pressure_psig: 100.0,
            temperature_f: 150.0,
            molecular_weight: 28.9,
            specific_heat_ratio: 1.4,
            compressibility: 1.0,
        }
    }
}

/// 사이징 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsvResult {
    /// 필요 유효 면적 A [in²]
    pub required_area_in2: f64,
    /// 임계 유동 계수 C
    pub coefficient_c: f64,
    /// 방출 압력 P1 [psia]
    pub relieving_pressure_psia: f64,
    /// 방출 온도 [°R]
    pub temperature_r: f64,
    /// 선택된 표준 오리피스. 너무 크면 "N/A"
    pub orifice: &'static Orifice,
}

impl PsvResult {
    pub fn is_oversize(&self) -> bool {
        !self.orifice.is_standard()
    }
}

/// C = 520 * sqrt(k * (2/(k+1))^((k+1)/(k-1)))
pub fn critical_flow_coefficient(k: f64) -> f64 {
    520.0 * (k * (2.0 / (k + 1.0)).powf((k + 1.0) / (k - 1.0))).sqrt()
}

/// P1 = 1.1 * Pset + 14.7 [psia]
pub fn relieving_pressure_psia(set_pressure_psig: f64) -> f64 {
    set_pressure_psig * ACCUMULATION_FACTOR + ATMOSPHERIC_PSI
}

/// 필요 면적과 표준 오리피스를 계산한다.
///
/// W, Pset, 절대온도, M, k 중 하나라도 0이거나 NaN이면 결과가 없다. Z는 검사하지 않는다.
pub fn size_relief_orifice(input: &PsvInput) -> Option<PsvResult> {
    let w = input.mass_flow_lb_per_h;
    let p_set = input.set_pressure_psig;
    let t_r = input.temperature_f + RANKINE_OFFSET;
    let m = input.molecular_weight;
    let k = input.specific_heat_ratio;
    let z = input.compressibility;
    if ![w, p_set, t_r, m, k].into_iter().all(is_present) {
        return None;
    }

    let c = critical_flow_coefficient(k);
    let p1 = relieving_pressure_psia(p_set);
    let area = (w
        / (c * DISCHARGE_COEFFICIENT * p1 * BACKPRESSURE_CORRECTION * COMBINATION_CORRECTION))
        * ((t_r * z) / m).sqrt();
    Some(PsvResult {
        required_area_in2: area,
        coefficient_c: c,
        relieving_pressure_psia: p1,
        temperature_r: t_r,
        orifice: select_orifice(area),
    })
}

fn is_present(v: f64) -> bool {
    v != 0.0 && !v.is_nan()
}
