//! # Shot Entry Form
//!
//! 날짜 선택 → 선수 멀티 선택 → 구역 선택(캔버스 클릭 또는 라디오) → 성공 수 제출.
//!
//! 상태 전이는 [`update`] 순수 함수가 담당하고, [`Form`]은 상태를 소유하며
//! 이벤트를 하나씩 흘려보내는 얇은 드라이버다.

pub mod event;
pub mod notice;
pub mod state;
pub mod update;
pub mod view;

pub use event::{FormEvent, ShotEntry};
pub use notice::{Notice, NoticeLevel};
pub use state::{AppState, FormContext, FormState};
pub use update::{update, Transition};
pub use view::{session_view, PlayerView, SessionView, ZoneLine};

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::error::Result;
use crate::session::SessionKey;

pub const MSG_NO_DATA: &str = "Nessun dato ancora per questa sessione.";

/// 상태 소유 드라이버
#[derive(Debug, Clone)]
pub struct Form {
    ctx: FormContext,
    state: AppState,
}

impl Form {
    pub fn new(ctx: FormContext, date: NaiveDate) -> Self {
        Self { ctx, state: AppState::new(date) }
    }

    pub fn from_config(config: &AppConfig, date: NaiveDate) -> Result<Self> {
        let ctx = FormContext { zones: config.zone_map()?, roster: config.roster() };
        Ok(Self::new(ctx, date))
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Vec<Notice> {
        log::debug!("Form event: {:?}", event);
        // 빈 자리표시 상태 (할당 없음). update가 돌려준 상태로 곧바로 교체된다.
        let placeholder = AppState::new(self.state.form.date);
        let state = std::mem::replace(&mut self.state, placeholder);
        let transition = update(state, event, &self.ctx);
        self.state = transition.state;
        transition.notices
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn context(&self) -> &FormContext {
        &self.ctx
    }

    pub fn session_key(&self) -> SessionKey {
        self.state.form.session_key()
    }

    /// 현재 날짜의 세션 화면. 데이터가 없으면 안내 메시지.
    pub fn view(&self) -> std::result::Result<SessionView, Notice> {
        session_view(&self.state.store, self.session_key()).ok_or_else(|| Notice::info(MSG_NO_DATA))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ShotRecord;
    use crate::zones::{CanvasPoint, Zone};

    fn form() -> Form {
        Form::new(FormContext::default(), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
    }

    #[test]
    fn test_dispatch_walkthrough() {
        let mut form = form();
        assert_eq!(form.view().unwrap_err(), Notice::info(MSG_NO_DATA));

        form.dispatch(FormEvent::SelectPlayers { players: vec!["A".into()] });
        let notices = form.dispatch(FormEvent::click(CanvasPoint::new(300.0, 350.0)));
        assert_eq!(notices, vec![Notice::success("Zona selezionata: Centro")]);

        form.dispatch(FormEvent::Submit(ShotEntry::new("A", 3, 1, 0)));
        form.dispatch(FormEvent::Submit(ShotEntry::new("A", 1, 0, 0)));

        let view = form.view().unwrap();
        assert_eq!(view.players[0].lines[0].counts, ShotRecord::made(4, 1, 0));
        assert_eq!(view.players[0].lines[0].zone, Zone::TopOfKey);
    }

    #[test]
    fn test_dispatch_carries_state_across_rejected_events() {
        let date = NaiveDate::from_ymd_opt(2019, 3, 2).unwrap();
        let mut form = Form::new(FormContext::default(), date);
        form.dispatch(FormEvent::SelectPlayers { players: vec!["A".into()] });
        form.dispatch(FormEvent::PickZone { zone: Zone::LeftWing });
        form.dispatch(FormEvent::Submit(ShotEntry::new("A", 2, 0, 0)));

        // 거부되는 이벤트 뒤에도 날짜, 선택, 저장소가 그대로
        let notices = form.dispatch(FormEvent::click(CanvasPoint::new(5.0, 5.0)));
        assert!(notices[0].is_warning());
        let notices = form.dispatch(FormEvent::Submit(ShotEntry::new("Z", 1, 0, 0)));
        assert!(notices[0].is_warning());

        assert_eq!(form.state().form.date, date);
        assert_eq!(form.state().form.selected_players, vec!["A"]);
        assert_eq!(form.state().form.active_zone, Some(Zone::LeftWing));
        assert_eq!(form.state().store.get(SessionKey(date), "A", Zone::LeftWing), Some(&ShotRecord::made(2, 0, 0)));
    }

    #[test]
    fn test_from_config_uses_configured_roster() {
        let config = AppConfig { roster: vec!["Rossi".into()], ..AppConfig::default() };
        let mut form = Form::from_config(&config, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()).unwrap();
        let notices = form.dispatch(FormEvent::SelectPlayers { players: vec!["A".into(), "Rossi".into()] });
        assert!(notices[0].is_warning());
        assert_eq!(form.state().form.selected_players, vec!["Rossi"]);
    }
}
