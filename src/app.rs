use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::assistant::{AskOutcome, AssistantDesk, GeminiAssistant, ServiceError};
use crate::category::Category;
use crate::config::{AssistantConfig, Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::session::Session;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("assistant setup failed: {0}")]
    Service(#[from] ServiceError),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

impl AppError {
    /// 표준 입력이 끝나 더 읽을 수 없는 경우.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// 대화형 메뉴 루프를 실행한다. 실행 내내 세션 하나(활동 기록 하나)를 유지한다.
pub async fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let desk = AssistantDesk::new(GeminiAssistant::from_config(&config.assistant)?);
    let mut session = Session::from_config(config);
    info!(category = %session.category(), "shell started");
    loop {
        let step = match ui_cli::main_menu(&session)? {
            MenuChoice::Module(Category::Ai) => ui_cli::handle_ask(&desk).await,
            MenuChoice::Module(category) => {
                session.select_category(category);
                ui_cli::handle_module(&mut session)
            }
            MenuChoice::Settings => ui_cli::handle_settings(config, &mut session)
                .and_then(|()| config.save(config_path).map_err(AppError::from)),
            MenuChoice::Exit => break,
        };
        match step {
            Err(err) if err.is_end_of_input() => break,
            other => other?,
        }
    }
    config.save(config_path)?;
    println!("Goodbye.");
    Ok(())
}

/// 한 번의 단위 변환 결과 표시. 범주는 id 또는 표시 이름으로 받는다.
///
/// 숫자가 아닌 입력은 오류 대신 자리표시 `"0"`이 된다. 범주나 단위를 모르면 오류.
pub fn run_convert(category: &str, from: &str, to: &str, value: &str) -> Result<String, AppError> {
    let category = Category::from_id(category)
        .ok_or_else(|| AppError::UnknownCategory(category.to_owned()))?;
    match conversion::convert(category, from, to, value) {
        Ok(c) => Ok(c.result_label()),
        Err(ConversionError::InvalidInput(raw)) => {
            debug!(input = raw.as_str(), "non-numeric input shown as placeholder");
            Ok(conversion::PLACEHOLDER.to_owned())
        }
        Err(err) => Err(err.into()),
    }
}

/// 한 번의 질의응답.
pub async fn run_ask(cfg: &AssistantConfig, query: &str) -> Result<AskOutcome, AppError> {
    let desk = AssistantDesk::new(GeminiAssistant::from_config(cfg)?);
    Ok(desk.submit(query).await)
}
