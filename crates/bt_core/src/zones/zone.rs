// 코트 구역 정의 (7개 고정 구역)
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Result, ShotError};

/// 하프코트 슈팅 구역
///
/// 선언 순서가 곧 히트 테스트/리포트 순서다 (왼쪽 코너 → 오른쪽 코너).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Zone {
    #[serde(rename = "Angolo sinistro")]
    #[strum(to_string = "Angolo sinistro", serialize = "left_corner")]
    LeftCorner,
    #[serde(rename = "Ala sinistra")]
    #[strum(to_string = "Ala sinistra", serialize = "left_wing")]
    LeftWing,
    #[serde(rename = "Centro sinistra")]
    #[strum(to_string = "Centro sinistra", serialize = "left_slot")]
    LeftSlot,
    #[serde(rename = "Centro")]
    #[strum(to_string = "Centro", serialize = "top_of_key")]
    TopOfKey,
    #[serde(rename = "Centro destra")]
    #[strum(to_string = "Centro destra", serialize = "right_slot")]
    RightSlot,
    #[serde(rename = "Ala destra")]
    #[strum(to_string = "Ala destra", serialize = "right_wing")]
    RightWing,
    #[serde(rename = "Angolo destro")]
    #[strum(to_string = "Angolo destro", serialize = "right_corner")]
    RightCorner,
}

impl Zone {
    pub const COUNT: usize = 7;

    /// 화면 표시용 라벨 (이탈리아어)
    pub fn label(&self) -> &'static str {
        match self {
            Zone::LeftCorner => "Angolo sinistro",
            Zone::LeftWing => "Ala sinistra",
            Zone::LeftSlot => "Centro sinistra",
            Zone::TopOfKey => "Centro",
            Zone::RightSlot => "Centro destra",
            Zone::RightWing => "Ala destra",
            Zone::RightCorner => "Angolo destro",
        }
    }

    /// 라디오 버튼 순번 (1부터)
    pub fn index(&self) -> usize {
        Zone::iter().position(|z| z == *self).map(|i| i + 1).unwrap_or(0)
    }

    pub fn all() -> Vec<Zone> {
        Zone::iter().collect()
    }

    /// 라디오 선택 파싱: 라벨, 짧은 식별자, 또는 1-7 순번
    pub fn parse_choice(input: &str) -> Result<Zone> {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return (1..=Self::COUNT)
                .contains(&n)
                .then(|| Zone::iter().nth(n - 1))
                .flatten()
                .ok_or_else(|| ShotError::UnknownZone(trimmed.to_string()));
        }
        trimmed.parse::<Zone>().map_err(|_| ShotError::UnknownZone(trimmed.to_string()))
    }
}
