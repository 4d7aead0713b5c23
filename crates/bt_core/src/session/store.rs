//! Session Store
//!
//! 날짜 → 선수 → 구역 → 기록 3단계 키 구조. 프로세스 메모리에만 존재한다.
//! 각 단계는 첫 제출 시 기본값으로 생성된다.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::ShotTotals;
use super::record::ShotRecord;
use crate::error::{Result, ShotError};
use crate::zones::Zone;

pub const SESSION_KEY_FORMAT: &str = "%Y-%m-%d";

/// 세션 키 (훈련 날짜), `YYYY-MM-DD`로 직렬화
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(pub NaiveDate);

impl SessionKey {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SessionKey {
    fn from(date: NaiveDate) -> Self {
        SessionKey(date)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(SESSION_KEY_FORMAT))
    }
}

impl FromStr for SessionKey {
    type Err = ShotError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), SESSION_KEY_FORMAT)
            .map(SessionKey)
            .map_err(|_| ShotError::InvalidDate(s.to_string()))
    }
}

/// 한 선수의 구역별 기록
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerShots {
    zones: BTreeMap<Zone, ShotRecord>,
}

impl PlayerShots {
    /// 구역 누적. 넘치면 None이고 기존 기록은 그대로
    pub fn record(&mut self, zone: Zone, counts: &ShotRecord) -> Option<&ShotRecord> {
        let entry = self.zones.entry(zone).or_default();
        *entry = entry.checked_add(counts)?;
        Some(&*entry)
    }

    pub fn get(&self, zone: Zone) -> Option<&ShotRecord> {
        self.zones.get(&zone)
    }

    /// 구역 순서(왼쪽 코너 → 오른쪽 코너)로 순회
    pub fn zones(&self) -> impl Iterator<Item = (&Zone, &ShotRecord)> {
        self.zones.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn totals(&self) -> ShotTotals {
        self.zones.values().sum()
    }
}

/// 하루 세션: 선수 → 구역 기록
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    players: BTreeMap<String, PlayerShots>,
}

impl Session {
    pub fn record(&mut self, player: &str, zone: Zone, counts: &ShotRecord) -> Result<ShotRecord> {
        let shots = self.players.entry(player.to_string()).or_default();
        shots
            .record(zone, counts)
            .copied()
            .ok_or_else(|| ShotError::CountOverflow { player: player.to_string(), zone })
    }

    pub fn player(&self, name: &str) -> Option<&PlayerShots> {
        self.players.get(name)
    }

    /// 선수 이름순
    pub fn players(&self) -> impl Iterator<Item = (&String, &PlayerShots)> {
        self.players.iter()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// 세션 전체 합계 (모든 선수·구역)
    pub fn totals(&self) -> ShotTotals {
        self.players.values().map(PlayerShots::totals).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStore {
    sessions: BTreeMap<SessionKey, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// (날짜, 선수, 구역) 기록에 더한다. 없으면 만든다.
    pub fn record(
        &mut self,
        key: SessionKey,
        player: &str,
        zone: Zone,
        counts: &ShotRecord,
    ) -> Result<ShotRecord> {
        let session = self.sessions.entry(key).or_default();
        let updated = session.record(player, zone, counts)?;
        log::debug!(
            "Recorded {:?} for {} in {} on {} -> {:?}",
            counts,
            player,
            zone,
            key,
            updated
        );
        Ok(updated)
    }

    pub fn session(&self, key: SessionKey) -> Option<&Session> {
        self.sessions.get(&key)
    }

    pub fn get(&self, key: SessionKey, player: &str, zone: Zone) -> Option<&ShotRecord> {
        self.session(key)?.player(player)?.get(zone)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SessionKey> {
        self.sessions.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
