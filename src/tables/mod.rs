//! 정적 참조표와 조회 함수 모음.
//!
//! 모든 표는 프로그램에 포함된 읽기 전용 데이터이며, 조회는 작은 표에 대한 선형 탐색이다.
//! 찾지 못하면 `None`(또는 0)을 돌려주고 호출 측이 "N/A"로 표시한다.
//! 값은 참고용이며 설계 시 최신 규격으로 검증해야 한다.

pub mod constants;
pub mod flange;
pub mod materials;
pub mod orifice;
pub mod pipe;
pub mod steam;
pub mod torque;
pub mod wire;
