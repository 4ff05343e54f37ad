//! 입력 문자열 해석과 표시용 고정 소수점 포맷.

/// 사용자가 입력한 문자열을 실수로 해석한다.
///
/// 앞뒤 공백은 무시한다. 비어 있거나 숫자가 아니면 `None`을 돌려준다.
/// 무한대는 `Infinity` 표기만 받고 `inf`, `nan` 같은 표기는 거부한다.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// 해석에 실패하면 NaN을 돌려준다. 계산식에 그대로 흘려보내는 입력 칸에서 쓴다.
pub fn parse_or_nan(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(f64::NAN)
}

/// 값을 소수점 `digits`자리 문자열로 만든다.
///
/// 정확히 중간값인 경우 0에서 먼 쪽으로 올림하며, 음수 0은 부호 없이 표시한다.
/// 무한대는 `Infinity`/`-Infinity`, NaN은 `NaN`으로 표시한다.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let rounded = if is_decimal_tie(magnitude, digits) {
        // 중간값 바로 위의 표현 가능한 값으로 옮겨 올림 방향을 고정한다.
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };
    format!("{sign}{rounded:.digits$}")
}

/// 렌더링된 문자열이 0이 아닌 수를 나타내는지 확인한다.
pub fn is_nonzero_rendering(rendered: &str) -> bool {
    rendered
        .bytes()
        .any(|b| b.is_ascii_digit() && b != b'0')
        || rendered.contains("Infinity")
}

fn is_decimal_tie(magnitude: f64, digits: usize) -> bool {
    // 이진 유리수인 중간값은 digits+1 자리에서 끝나므로 충분한 자릿수로 전개해 확인한다.
    let expanded = format!("{:.*}", digits + 40, magnitude);
    let Some((_, fraction)) = expanded.split_once('.') else {
        return false;
    };
    let tail = &fraction[digits..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}

/// 천 단위 구분 기호를 넣고 소수점 이하를 최대 3자리까지 표시한다(`24,000.5`).
pub fn to_grouped(value: f64) -> String {
    if !value.is_finite() {
        return to_fixed(value, 0);
    }
    let fixed = to_fixed(value, 3);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if grouped.bytes().all(|b| b == b'0' || b == b',') && frac_part.is_empty() {
        ""
    } else {
        sign
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
