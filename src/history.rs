//! 최근 변환 기록. 세션 동안만 유지되며 최대 5건을 최신순으로 보관한다.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::category::Category;

/// 보관하는 최대 기록 수.
pub const CAPACITY: usize = 5;

/// 한 번의 변환 기록. 만들어진 뒤에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// 생성 순서대로 증가하는 식별자(밀리초 시각 기반)
    pub id: String,
    /// 사람이 읽는 시각 (예: `03:45 PM`)
    pub timestamp: String,
    pub module: Category,
    pub input: String,
    pub result: String,
}

/// 용량이 고정된 최근 활동 기록.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    last_id: i64,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 시각으로 기록을 추가한다.
    pub fn record(&mut self, module: Category, input: &str, result: &str) -> LogEntry {
        self.record_at(Local::now(), module, input, result)
    }

    /// 지정한 시각으로 기록을 맨 앞에 추가하고 용량을 넘는 오래된 기록을 버린다.
    pub fn record_at(
        &mut self,
        at: DateTime<Local>,
        module: Category,
        input: &str,
        result: &str,
    ) -> LogEntry {
        // 같은 밀리초에 여러 건이 들어와도 식별자가 겹치지 않게 한다.
        let id = at.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        let entry = LogEntry {
            id: id.to_string(),
            timestamp: at.format("%I:%M %p").to_string(),
            module,
            input: input.to_owned(),
            result: result.to_owned(),
        };
        self.entries.push_front(entry.clone());
        self.entries.truncate(CAPACITY);
        debug!(id = %entry.id, %module, len = self.entries.len(), "activity recorded");
        entry
    }

    /// 최신순으로 기록을 돌려준다.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
