// 팀 로스터 (선택 가능한 선수 목록)
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROSTER: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect())
    }
}

/// 선택 결과: 로스터에 있는 선수 / 없는 이름
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

impl Roster {
    pub fn new(players: Vec<String>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    /// 멀티 선택 검증. 공백 제거, 중복은 한 번만, 선택 순서 유지
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Selection {
        let mut selection = Selection::default();
        for name in names.iter().map(|n| n.as_ref().trim()).filter(|n| !n.is_empty()) {
            if !self.contains(name) {
                selection.rejected.push(name.to_string());
            } else if !selection.accepted.iter().any(|p| p == name) {
                selection.accepted.push(name.to_string());
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert_eq!(roster.players().len(), 9);
        assert!(roster.contains("A"));
        assert!(!roster.contains("Z"));
    }

    #[test]
    fn test_select_keeps_order_and_dedups() {
        let roster = Roster::default();
        let selection = roster.select(&["C", " A ", "C", "Z", ""]);
        assert_eq!(selection.accepted, vec!["C", "A"]);
        assert_eq!(selection.rejected, vec!["Z"]);
    }
}
