//! 공학 질의응답 보조 기능의 경계.
//!
//! 실제 제공자는 [`TextAssistant`] 뒤에 숨고, 사용자에게는 항상 문자열이 돌아간다.
//! 실패는 여기서 고정된 안내 문구로 바뀐다.

pub mod gemini;

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

pub use gemini::GeminiAssistant;

pub const MISSING_KEY_MESSAGE: &str =
    "API Key is missing. Please ensure your environment is configured.";
pub const NO_ANSWER_MESSAGE: &str = "I'm sorry, I couldn't process that request.";
pub const SERVICE_FAILURE_MESSAGE: &str =
    "An error occurred while contacting the engineering assistant. Please try again later.";

/// 제공자 호출 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("assistant credential is not configured")]
    MissingCredential,
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("provider returned no text")]
    EmptyResponse,
    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ServiceError {
    /// 사용자에게 보여줄 고정 문구.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ServiceError::MissingCredential => MISSING_KEY_MESSAGE,
            ServiceError::EmptyResponse => NO_ANSWER_MESSAGE,
            ServiceError::Transport(_) | ServiceError::Provider { .. } | ServiceError::Parse(_) => {
                SERVICE_FAILURE_MESSAGE
            }
        }
    }
}

/// 질문 하나에 텍스트 답변 하나를 돌려주는 제공자.
#[async_trait]
pub trait TextAssistant: Send + Sync {
    async fn ask(&self, query: &str) -> Result<String, ServiceError>;
}

/// 제공자에게 묻고 결과를 항상 표시 가능한 문자열로 돌려준다.
pub async fn ask(assistant: &dyn TextAssistant, query: &str) -> String {
    match assistant.ask(query).await {
        Ok(text) if text.trim().is_empty() => NO_ANSWER_MESSAGE.to_owned(),
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "assistant request failed");
            err.fallback_message().to_owned()
        }
    }
}

/// 제출 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    Answered(String),
    /// 이전 질문이 아직 처리 중
    Busy,
    /// 공백뿐인 질문
    Ignored,
}

/// 한 번에 하나의 질문만 처리하는 창구.
pub struct AssistantDesk<A> {
    assistant: A,
    in_flight: AtomicBool,
}

impl<A: TextAssistant> AssistantDesk<A> {
    pub fn new(assistant: A) -> Self {
        Self {
            assistant,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn assistant(&self) -> &A {
        &self.assistant
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit(&self, query: &str) -> AskOutcome {
        let query = query.trim();
        if query.is_empty() {
            return AskOutcome::Ignored;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("assistant busy, submission dropped");
            return AskOutcome::Busy;
        }
        let _guard = InFlight(&self.in_flight);
        AskOutcome::Answered(ask(&self.assistant, query).await)
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
