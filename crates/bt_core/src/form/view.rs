// "Dati della sessione" 화면: 날짜별 선수 → 구역 줄
use serde::Serialize;
use std::fmt;

use crate::session::{SessionKey, SessionStore, ShotRecord};
use crate::zones::Zone;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneLine {
    pub zone: Zone,
    pub counts: ShotRecord,
}

impl fmt::Display for ZoneLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "- {} → 2PT: {} | 3PT: {} | PAT: {}",
            self.zone, self.counts.two_pt, self.counts.three_pt, self.counts.pat
        )?;
        if self.counts.attempts > 0 {
            write!(f, " | Tentativi: {}", self.counts.attempts)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub player: String,
    pub lines: Vec<ZoneLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub date: SessionKey,
    pub players: Vec<PlayerView>,
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Dati della sessione {}", self.date)?;
        for player in &self.players {
            writeln!(f, "{}", player.player)?;
            for line in &player.lines {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}

/// 기록이 없는 날짜면 None
pub fn session_view(store: &SessionStore, key: SessionKey) -> Option<SessionView> {
    let session = store.session(key).filter(|s| !s.is_empty())?;
    let players = session
        .players()
        .map(|(name, shots)| PlayerView {
            player: name.clone(),
            lines: shots.zones().map(|(zone, counts)| ZoneLine { zone: *zone, counts: *counts }).collect(),
        })
        .collect();
    Some(SessionView { date: key, players })
}
