// 세션 집계 (선수별/전체 2PT·3PT·PAT 합계)
use std::iter::Sum;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use super::record::ShotRecord;
use super::store::Session;

/// 합계. 누적 기록(u32)을 여러 개 더하므로 u64
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotTotals {
    #[serde(rename = "2pt")]
    pub two_pt: u64,
    #[serde(rename = "3pt")]
    pub three_pt: u64,
    pub pat: u64,
    pub attempts: u64,
}

impl ShotTotals {
    pub fn total_made(&self) -> u64 {
        self.two_pt + self.three_pt + self.pat
    }
}

impl AddAssign<&ShotRecord> for ShotTotals {
    fn add_assign(&mut self, record: &ShotRecord) {
        self.two_pt += record.two_pt as u64;
        self.three_pt += record.three_pt as u64;
        self.pat += record.pat as u64;
        self.attempts += record.attempts as u64;
    }
}

impl AddAssign for ShotTotals {
    fn add_assign(&mut self, other: ShotTotals) {
        self.two_pt += other.two_pt;
        self.three_pt += other.three_pt;
        self.pat += other.pat;
        self.attempts += other.attempts;
    }
}

impl<'a> Sum<&'a ShotRecord> for ShotTotals {
    fn sum<I: Iterator<Item = &'a ShotRecord>>(iter: I) -> Self {
        let mut totals = ShotTotals::default();
        for record in iter {
            totals += record;
        }
        totals
    }
}

impl Sum for ShotTotals {
    fn sum<I: Iterator<Item = ShotTotals>>(iter: I) -> Self {
        let mut totals = ShotTotals::default();
        for t in iter {
            totals += t;
        }
        totals
    }
}

/// 리포트 마지막 표의 한 행
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTotalsRow {
    pub player: String,
    pub totals: ShotTotals,
}

/// 세션 요약: 선수별 합계 + 전체 합계
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub rows: Vec<PlayerTotalsRow>,
    pub overall: ShotTotals,
}

impl SessionSummary {
    pub fn from_session(session: &Session) -> Self {
        let rows: Vec<PlayerTotalsRow> = session
            .players()
            .map(|(player, shots)| PlayerTotalsRow { player: player.clone(), totals: shots.totals() })
            .collect();
        let overall = rows.iter().map(|r| r.totals).sum();
        Self { rows, overall }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Zone;
    use proptest::prelude::*;

    #[test]
    fn test_summary_rows_and_overall() {
        let mut session = Session::default();
        session.record("A", Zone::TopOfKey, &ShotRecord::made(4, 1, 0)).unwrap();
        session.record("A", Zone::LeftCorner, &ShotRecord::made(0, 2, 1)).unwrap();
        session.record("B", Zone::RightWing, &ShotRecord::made(3, 0, 2).with_attempts(9)).unwrap();

        let summary = SessionSummary::from_session(&session);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].player, "A");
        assert_eq!(
            summary.rows[0].totals,
            ShotTotals { two_pt: 4, three_pt: 3, pat: 1, attempts: 0 }
        );
        assert_eq!(
            summary.overall,
            ShotTotals { two_pt: 7, three_pt: 3, pat: 3, attempts: 9 }
        );
        assert_eq!(summary.overall, session.totals());
        assert_eq!(summary.overall.total_made(), 13);
    }

    #[test]
    fn test_empty_session_totals_are_zero() {
        let summary = SessionSummary::from_session(&Session::default());
        assert!(summary.rows.is_empty());
        assert_eq!(summary.overall, ShotTotals::default());
    }

    #[test]
    fn test_totals_do_not_overflow_u32() {
        let mut session = Session::default();
        session.record("A", Zone::TopOfKey, &ShotRecord::made(u32::MAX, 0, 0)).unwrap();
        session.record("B", Zone::TopOfKey, &ShotRecord::made(u32::MAX, 0, 0)).unwrap();
        assert_eq!(session.totals().two_pt, 2 * u32::MAX as u64);
    }

    proptest! {
        #[test]
        fn prop_totals_equal_sum_of_submissions(
            entries in prop::collection::vec(
                (0usize..4, 0usize..Zone::COUNT, 0u32..50, 0u32..50, 0u32..50),
                0..40,
            )
        ) {
            let players = ["A", "B", "C", "D"];
            let zones = Zone::all();
            let mut session = Session::default();
            let mut expected = ShotTotals::default();

            for (p, z, two, three, pat) in entries {
                let counts = ShotRecord::made(two, three, pat);
                session.record(players[p], zones[z], &counts).unwrap();
                expected += &counts;
            }

            let summary = SessionSummary::from_session(&session);
            prop_assert_eq!(summary.overall, expected);
            prop_assert_eq!(session.totals(), expected);

            let row_sum: ShotTotals = summary.rows.iter().map(|r| r.totals).sum();
            prop_assert_eq!(row_sum, expected);
        }
    }
}
