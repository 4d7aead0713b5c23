// 폼 이벤트 (위젯 변경, 캔버스 클릭, 제출)
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::session::ShotRecord;
use crate::zones::{CanvasPoint, Zone};

/// 사용자 상호작용 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormEvent {
    /// 세션 날짜 변경
    SetDate { date: NaiveDate },

    /// 참석 선수 멀티 선택 (전체 교체)
    SelectPlayers { players: Vec<String> },

    /// 캔버스 클릭 (히트 테스트로 구역 선택)
    CanvasClick { x: f64, y: f64 },

    /// 라디오 버튼 구역 선택
    PickZone { zone: Zone },

    /// 활성 구역에 성공 수 더하기
    Submit(ShotEntry),
}

impl FormEvent {
    pub fn click(point: CanvasPoint) -> Self {
        FormEvent::CanvasClick { x: point.x, y: point.y }
    }
}

/// 제출 폼 값. 음수는 타입으로 배제된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotEntry {
    pub player: String,
    #[serde(default, rename = "2pt")]
    pub two_pt: u32,
    #[serde(default, rename = "3pt")]
    pub three_pt: u32,
    #[serde(default)]
    pub pat: u32,
    #[serde(default)]
    pub attempts: u32,
}

impl ShotEntry {
    pub fn new(player: impl Into<String>, two_pt: u32, three_pt: u32, pat: u32) -> Self {
        Self { player: player.into(), two_pt, three_pt, pat, attempts: 0 }
    }

    pub fn counts(&self) -> ShotRecord {
        ShotRecord::made(self.two_pt, self.three_pt, self.pat).with_attempts(self.attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_type_tagged() {
        let event: FormEvent = serde_json::from_str(r#"{"type": "PickZone", "zone": "Ala destra"}"#).unwrap();
        assert_eq!(event, FormEvent::PickZone { zone: Zone::RightWing });

        let event: FormEvent =
            serde_json::from_str(r#"{"type": "SetDate", "date": "2024-01-10"}"#).unwrap();
        assert_eq!(event, FormEvent::SetDate { date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap() });
    }

    #[test]
    fn test_submit_defaults_missing_counts_to_zero() {
        let event: FormEvent =
            serde_json::from_str(r#"{"type": "Submit", "player": "A", "2pt": 1}"#).unwrap();
        assert_eq!(event, FormEvent::Submit(ShotEntry::new("A", 1, 0, 0)));
    }

    #[test]
    fn test_negative_counts_do_not_parse() {
        let parsed: Result<FormEvent, _> =
            serde_json::from_str(r#"{"type": "Submit", "player": "A", "2pt": -1}"#);
        assert!(parsed.is_err());
    }
}
