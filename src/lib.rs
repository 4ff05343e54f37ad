//! 단위 변환, 공학 계산기, 참조표를 라이브러리로 두고 CLI는 그 위의 표시 계층으로만 둔다.

pub mod app;
pub mod assistant;
pub mod calculators;
pub mod category;
pub mod config;
pub mod conversion;
pub mod format;
pub mod history;
pub mod outcome;
pub mod session;
pub mod tables;
pub mod ui_cli;
pub mod units;
