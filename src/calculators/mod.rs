//! 닫힌 형태의 공학 계산기 모음. 서로 호출하지 않는 순수 함수들이다.
//!
//! 0으로 나누기 같은 퇴화 입력은 따로 막지 않으며 유한하지 않은 값이 그대로 나온다.
//! 표시 계층([`crate::session`])이 이런 값을 자리표시로 바꾼다.

pub mod electrical;
pub mod ideal_gas;
pub mod psv;
pub mod torque;
pub mod wire;
