use thiserror::Error;
use tracing::debug;

use crate::category::Category;
use crate::format::{is_nonzero_rendering, parse_number, to_fixed};
use crate::outcome::Outcome;
use crate::units::{convert_linear, convert_temperature, find_unit, TemperatureUnit, Unit};

/// 입력을 해석할 수 없을 때 변환 결과 자리에 보여주는 값.
pub const PLACEHOLDER: &str = "0";

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 숫자로 해석할 수 없는 입력
    #[error("invalid numeric input: {0:?}")]
    InvalidInput(String),
    /// 범주에 없는 단위 식별자
    #[error("unknown unit '{unit}' for {category}")]
    UnknownUnit { category: Category, unit: String },
    /// 단위 목록이 없는 모듈 범주
    #[error("{0} is not a unit-conversion category")]
    NotConvertible(Category),
}

/// 한 번의 성공한 변환.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub category: Category,
    pub from: &'static Unit,
    pub to: &'static Unit,
    /// 사용자가 입력한 원문(앞뒤 공백 제거)
    pub input: String,
    /// 반올림 전 변환 값
    pub value: f64,
    /// 표시 자릿수로 반올림한 결과. 기록과 복사는 이 문자열을 쓴다.
    pub display: String,
}

impl Conversion {
    /// 기록용 입력 표시 (`값 단위이름`).
    pub fn input_label(&self) -> String {
        format!("{} {}", self.input, self.from.name)
    }

    /// 기록용 결과 표시 (`결과 단위이름`).
    pub fn result_label(&self) -> String {
        format!("{} {}", self.display, self.to.name)
    }

    /// 반올림된 결과가 0이 아닌지 확인한다. 활동 기록 대상 여부를 가른다.
    pub fn is_nonzero(&self) -> bool {
        is_nonzero_rendering(&self.display)
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// 범주별 결과 표시 자릿수. 온도 4자리, 나머지 6자리.
pub fn display_decimals(category: Category) -> usize {
    if category == Category::Temperature {
        4
    } else {
        6
    }
}

/// 수치 하나를 변환한다. 온도는 섭씨를 거치는 고정식을, 그 외는 배율을 쓴다.
pub fn convert_value(category: Category, value: f64, from: &Unit, to: &Unit) -> f64 {
    if category == Category::Temperature {
        if let (Some(f), Some(t)) = (
            TemperatureUnit::from_id(from.id),
            TemperatureUnit::from_id(to.id),
        ) {
            return convert_temperature(value, f, t);
        }
    }
    convert_linear(value, from, to)
}

/// 범주와 단위 식별자, 입력 문자열로 변환 결과를 만든다.
pub fn convert(
    category: Category,
    from_unit_id: &str,
    to_unit_id: &str,
    raw_input: &str,
) -> Result<Conversion, ConversionError> {
    let units = category
        .units()
        .ok_or(ConversionError::NotConvertible(category))?;
    let from = find_unit(units, from_unit_id).ok_or_else(|| ConversionError::UnknownUnit {
        category,
        unit: from_unit_id.to_owned(),
    })?;
    let to = find_unit(units, to_unit_id).ok_or_else(|| ConversionError::UnknownUnit {
        category,
        unit: to_unit_id.to_owned(),
    })?;
    let value = parse_number(raw_input)
        .ok_or_else(|| ConversionError::InvalidInput(raw_input.to_owned()))?;

    let converted = convert_value(category, value, from, to);
    let rendered = to_fixed(converted, display_decimals(category));
    debug!(%category, from = from.id, to = to.id, result = rendered.as_str(), "converted");
    Ok(Conversion {
        category,
        from,
        to,
        input: raw_input.trim().to_owned(),
        value: converted,
        display: rendered,
    })
}

/// 오류 대신 자리표시를 돌려주는 변환. 표시 계층은 이 결과만 다룬다.
pub fn convert_or_placeholder(
    category: Category,
    from_unit_id: &str,
    to_unit_id: &str,
    raw_input: &str,
) -> Outcome<Conversion> {
    match convert(category, from_unit_id, to_unit_id, raw_input) {
        Ok(conversion) => Outcome::Value(conversion),
        Err(err) => {
            debug!(error = %err, "conversion degraded to placeholder");
            Outcome::Placeholder
        }
    }
}
