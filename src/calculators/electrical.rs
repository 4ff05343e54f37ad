/// 전력 P = V × I [W]. 입력이 숫자가 아니어서 NaN이 되면 0.
pub fn power_watts(volts: f64, amps: f64) -> f64 {
    let watts = volts * amps;
    if watts.is_nan() {
        0.0
    } else {
        watts
    }
}
