// 폼 상태 + 세션 저장소 (한 사용자 세션 범위)
use chrono::NaiveDate;
use serde::Serialize;

use crate::roster::Roster;
use crate::session::{SessionKey, SessionStore};
use crate::zones::{Zone, ZoneMap};

/// 위젯 값
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    pub date: NaiveDate,
    /// 선택 순서 유지
    pub selected_players: Vec<String>,
    pub active_zone: Option<Zone>,
}

impl FormState {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, selected_players: Vec::new(), active_zone: None }
    }

    pub fn session_key(&self) -> SessionKey {
        SessionKey(self.date)
    }

    /// 제출 폼 표시 조건: 활성 구역 + 선수 1명 이상
    pub fn entry_ready(&self) -> bool {
        self.active_zone.is_some() && !self.selected_players.is_empty()
    }

    pub fn is_selected(&self, player: &str) -> bool {
        self.selected_players.iter().any(|p| p == player)
    }
}

/// 이벤트 사이에 넘겨지는 전체 상태
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub form: FormState,
    pub store: SessionStore,
}

impl AppState {
    pub fn new(date: NaiveDate) -> Self {
        Self { form: FormState::new(date), store: SessionStore::new() }
    }
}

/// 이벤트 처리에 필요한 고정 데이터
#[derive(Debug, Clone)]
pub struct FormContext {
    pub zones: ZoneMap,
    pub roster: Roster,
}

impl Default for FormContext {
    fn default() -> Self {
        Self { zones: ZoneMap::builtin().clone(), roster: Roster::default() }
    }
}
