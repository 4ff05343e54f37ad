use std::fmt::Display;

/// 값이 없을 때 화면에 쓰는 표시.
pub const NOT_AVAILABLE: &str = "N/A";

/// 입력이 어떤 문자열이든 실패하지 않는 계산 결과.
///
/// 숫자로 해석할 수 없는 입력이나 유한하지 않은 결과는 `Placeholder`가 된다.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Value(T),
    Placeholder,
}

impl<T> Outcome<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Placeholder => None,
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Value(v) => Outcome::Value(v),
            Outcome::Placeholder => Outcome::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Outcome::Placeholder)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Value(v) => Outcome::Value(f(v)),
            Outcome::Placeholder => Outcome::Placeholder,
        }
    }
}

impl Outcome<f64> {
    /// 유한한 값만 결과로 인정한다.
    pub fn finite(value: f64) -> Self {
        if value.is_finite() {
            Outcome::Value(value)
        } else {
            Outcome::Placeholder
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Outcome::Value(v),
            None => Outcome::Placeholder,
        }
    }
}

impl<T: Display> Outcome<T> {
    /// 값이 있으면 그대로, 없으면 `placeholder`를 표시 문자열로 돌려준다.
    pub fn render_or(&self, placeholder: &str) -> String {
        match self {
            Outcome::Value(v) => v.to_string(),
            Outcome::Placeholder => placeholder.to_owned(),
        }
    }
}
