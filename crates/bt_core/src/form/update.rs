//! Form reducer
//!
//! `(상태, 이벤트) → (새 상태, 안내 메시지)` 순수 함수.
//! 잘못된 입력은 에러가 아니라 경고 메시지가 되고 상태는 바뀌지 않는다.

use super::event::{FormEvent, ShotEntry};
use super::notice::Notice;
use super::state::{AppState, FormContext};
use crate::zones::{CanvasPoint, Zone};

pub const MSG_SELECT_PLAYERS: &str = "Seleziona almeno un giocatore per iniziare.";
pub const MSG_OUTSIDE_ZONES: &str = "Clic al di fuori delle zone riconosciute.";
pub const MSG_ENTRY_NOT_READY: &str = "Seleziona una zona e un giocatore per inserire i tiri.";
pub const MSG_SAVED: &str = "Dati salvati!";

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub notices: Vec<Notice>,
}

impl Transition {
    fn new(state: AppState) -> Self {
        Self { state, notices: Vec::new() }
    }

    fn notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }
}

pub fn update(state: AppState, event: FormEvent, ctx: &FormContext) -> Transition {
    match event {
        FormEvent::SetDate { date } => {
            let mut state = state;
            state.form.date = date;
            let key = state.form.session_key();
            Transition::new(state).notice(Notice::info(format!("Data della sessione: {}", key)))
        }
        FormEvent::SelectPlayers { players } => select_players(state, &players, ctx),
        FormEvent::CanvasClick { x, y } => canvas_click(state, CanvasPoint::new(x, y), ctx),
        FormEvent::PickZone { zone } => activate_zone(state, zone),
        FormEvent::Submit(entry) => submit(state, entry),
    }
}

fn select_players(mut state: AppState, players: &[String], ctx: &FormContext) -> Transition {
    let selection = ctx.roster.select(players);
    state.form.selected_players = selection.accepted;

    let mut notices = Vec::new();
    if !selection.rejected.is_empty() {
        notices.push(Notice::warning(format!(
            "Giocatori non presenti nel roster: {}",
            selection.rejected.join(", ")
        )));
    }
    if state.form.selected_players.is_empty() {
        notices.push(Notice::warning(MSG_SELECT_PLAYERS));
    } else {
        notices.push(Notice::success(format!(
            "Hai selezionato: {}",
            state.form.selected_players.join(", ")
        )));
    }
    Transition { state, notices }
}

fn canvas_click(state: AppState, point: CanvasPoint, ctx: &FormContext) -> Transition {
    match ctx.zones.hit_test(point) {
        Some(zone) => activate_zone(state, zone),
        None => {
            log::debug!("Click at ({}, {}) outside every zone", point.x, point.y);
            Transition::new(state).notice(Notice::warning(MSG_OUTSIDE_ZONES))
        }
    }
}

fn activate_zone(mut state: AppState, zone: Zone) -> Transition {
    state.form.active_zone = Some(zone);
    log::info!("Active zone: {}", zone);
    Transition::new(state).notice(Notice::success(format!("Zona selezionata: {}", zone)))
}

fn submit(mut state: AppState, entry: ShotEntry) -> Transition {
    let zone = match state.form.active_zone {
        Some(zone) if state.form.entry_ready() => zone,
        _ => return Transition::new(state).notice(Notice::info(MSG_ENTRY_NOT_READY)),
    };
    if !state.form.is_selected(&entry.player) {
        let message = format!("Giocatore non selezionato: {}", entry.player);
        return Transition::new(state).notice(Notice::warning(message));
    }

    let key = state.form.session_key();
    match state.store.record(key, &entry.player, zone, &entry.counts()) {
        Ok(updated) => {
            log::info!(
                "Saved shots for {} in {} on {}: 2PT {} 3PT {} PAT {}",
                entry.player,
                zone,
                key,
                updated.two_pt,
                updated.three_pt,
                updated.pat
            );
            Transition::new(state).notice(Notice::success(MSG_SAVED))
        }
        Err(err) => {
            log::warn!("Rejected submission: {}", err);
            Transition::new(state).notice(Notice::warning(err.to_string()))
        }
    }
}
