// 구역별 성공 슛 누적 기록
use serde::{Deserialize, Serialize};

/// 한 선수·한 구역의 누적 기록
///
/// 제출마다 더해지기만 한다 (감소/초기화 없음).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// 2점 성공
    #[serde(rename = "2pt")]
    pub two_pt: u32,
    /// 3점 성공
    #[serde(rename = "3pt")]
    pub three_pt: u32,
    /// 2점 중 드리블-정지-슛 (Palleggio, Arresto e Tiro) 성공
    pub pat: u32,
    /// 구역 내 시도 수 (입력하지 않으면 0)
    #[serde(default)]
    pub attempts: u32,
}

impl ShotRecord {
    pub fn made(two_pt: u32, three_pt: u32, pat: u32) -> Self {
        Self { two_pt, three_pt, pat, attempts: 0 }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// 성공 합계 (2PT + 3PT + PAT)
    pub fn total_made(&self) -> u64 {
        self.two_pt as u64 + self.three_pt as u64 + self.pat as u64
    }

    /// 필드별 덧셈. 어느 하나라도 넘치면 None (기존 값 유지)
    pub fn checked_add(&self, other: &ShotRecord) -> Option<ShotRecord> {
        Some(ShotRecord {
            two_pt: self.two_pt.checked_add(other.two_pt)?,
            three_pt: self.three_pt.checked_add(other.three_pt)?,
            pat: self.pat.checked_add(other.pat)?,
            attempts: self.attempts.checked_add(other.attempts)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_accumulates_every_field() {
        let a = ShotRecord::made(3, 1, 0).with_attempts(6);
        let b = ShotRecord::made(1, 0, 2).with_attempts(4);
        assert_eq!(a.checked_add(&b), Some(ShotRecord::made(4, 1, 2).with_attempts(10)));
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = ShotRecord::made(u32::MAX, 0, 0);
        assert_eq!(a.checked_add(&ShotRecord::made(1, 0, 0)), None);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(ShotRecord::made(4, 1, 0)).unwrap();
        assert_eq!(json, serde_json::json!({"2pt": 4, "3pt": 1, "pat": 0, "attempts": 0}));

        let parsed: ShotRecord = serde_json::from_str(r#"{"2pt": 2, "3pt": 0, "pat": 1}"#).unwrap();
        assert_eq!(parsed, ShotRecord::made(2, 0, 1));
    }

    #[test]
    fn test_total_made_excludes_attempts() {
        assert_eq!(ShotRecord::made(2, 3, 4).with_attempts(20).total_made(), 9);
        assert!(ShotRecord::default().is_zero());
    }
}
