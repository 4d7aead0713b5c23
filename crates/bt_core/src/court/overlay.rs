// 코트 다이어그램 주석 (구역 마커, 구역별 성공 수)
use serde::Serialize;

use super::geometry::CourtPoint;
use crate::session::{PlayerShots, ShotRecord};
use crate::zones::ZoneMap;

/// 주석 줄 간격 (코트 단위)
pub const LINE_SPACING: f32 = 18.0;
/// 기본 다이어그램에서 마커 위 라벨 높이
const MARKER_LABEL_RISE: f32 = 14.0;

pub const MARKER_COLOR: [u8; 3] = [200, 30, 30];
pub const LABEL_COLOR: [u8; 3] = [20, 20, 20];

/// 리포트에 표시되는 성공 슛 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShotKind {
    TwoPoint,
    ThreePoint,
    /// Palleggio, arresto e tiro
    Pat,
}

impl ShotKind {
    pub const ALL: [ShotKind; 3] = [ShotKind::TwoPoint, ShotKind::ThreePoint, ShotKind::Pat];

    pub fn label(&self) -> &'static str {
        match self {
            ShotKind::TwoPoint => "2PT",
            ShotKind::ThreePoint => "3PT",
            ShotKind::Pat => "PAT",
        }
    }

    pub fn color(&self) -> [u8; 3] {
        match self {
            ShotKind::TwoPoint => [31, 119, 180],
            ShotKind::ThreePoint => [44, 160, 44],
            ShotKind::Pat => [255, 127, 14],
        }
    }

    pub fn made(&self, record: &ShotRecord) -> u32 {
        match self {
            ShotKind::TwoPoint => record.two_pt,
            ShotKind::ThreePoint => record.three_pt,
            ShotKind::Pat => record.pat,
        }
    }

    /// 앵커 기준 세로 오프셋 (코트 단위, 아래로)
    fn row_offset(&self) -> f32 {
        match self {
            ShotKind::TwoPoint => 0.0,
            ShotKind::ThreePoint => -LINE_SPACING,
            ShotKind::Pat => -2.0 * LINE_SPACING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnnotationKind {
    /// 채워진 점
    Marker,
    /// 텍스트 (좌표 = 텍스트 기준선 중앙)
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub text: String,
    pub at: CourtPoint,
    pub color: [u8; 3],
}

impl Annotation {
    pub fn marker(at: CourtPoint, color: [u8; 3]) -> Self {
        Self { kind: AnnotationKind::Marker, text: String::new(), at, color }
    }

    pub fn text(text: impl Into<String>, at: CourtPoint, color: [u8; 3]) -> Self {
        Self { kind: AnnotationKind::Text, text: text.into(), at, color }
    }
}

/// 기본 다이어그램: 7개 슈팅 위치에 라벨 붙은 점
pub fn position_markers(map: &ZoneMap) -> Vec<Annotation> {
    map.regions()
        .flat_map(|region| {
            [
                Annotation::marker(region.court, MARKER_COLOR),
                Annotation::text(
                    region.zone.label(),
                    region.court.offset(0.0, MARKER_LABEL_RISE),
                    LABEL_COLOR,
                ),
            ]
        })
        .collect()
}

/// 리포트 다이어그램: 구역 앵커 아래로 2PT/3PT/PAT 성공 수, 0은 생략
pub fn zone_count_annotations(map: &ZoneMap, shots: &PlayerShots) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    for (zone, record) in shots.zones() {
        let Some(anchor) = map.anchor(*zone) else {
            log::warn!("No court anchor for zone {}", zone);
            continue;
        };
        for kind in ShotKind::ALL {
            let made = kind.made(record);
            if made == 0 {
                continue;
            }
            annotations.push(Annotation::text(
                format!("{}: {}", kind.label(), made),
                anchor.offset(0.0, kind.row_offset()),
                kind.color(),
            ));
        }
    }
    annotations
}
