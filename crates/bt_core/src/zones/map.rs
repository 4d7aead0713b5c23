//! Zone Map - 캔버스 사각형 + 코트 앵커
//!
//! `data/zones.yaml`을 컴파일 타임에 임베딩하고 최초 호출 시 파싱한다.
//! 설정 파일로 다른 YAML을 지정하면 같은 검증을 거쳐 교체된다.
//!
//! ## 사용법
//!
//! ```rust
//! use bt_core::zones::{CanvasPoint, Zone, ZoneMap};
//!
//! let map = ZoneMap::builtin();
//! assert_eq!(map.hit_test(CanvasPoint::new(300.0, 350.0)), Some(Zone::TopOfKey));
//! assert_eq!(map.hit_test(CanvasPoint::new(300.0, 10.0)), None);
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::court::geometry::CourtPoint;
use crate::error::{Result, ShotError};
use crate::zones::Zone;

/// 기본 구역 맵 YAML (컴파일 타임 임베딩)
pub const ZONES_YAML: &str = include_str!("../../../../data/zones.yaml");

static BUILTIN_ZONE_MAP: OnceLock<ZoneMap> = OnceLock::new();

/// 캔버스 클릭 좌표 (픽셀, 좌상단 원점)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// 축 정렬 사각형, 경계 포함
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    /// [x1, x2]
    pub x: [f64; 2],
    /// [y1, y2]
    pub y: [f64; 2],
}

impl CanvasRect {
    pub fn contains(&self, p: CanvasPoint) -> bool {
        self.x[0] <= p.x && p.x <= self.x[1] && self.y[0] <= p.y && p.y <= self.y[1]
    }

    pub fn width(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    pub fn height(&self) -> f64 {
        self.y[1] - self.y[0]
    }

    fn is_well_formed(&self) -> bool {
        self.x.iter().chain(self.y.iter()).all(|v| v.is_finite())
            && self.x[0] <= self.x[1]
            && self.y[0] <= self.y[1]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRegion {
    pub zone: Zone,
    /// 캔버스 히트 영역
    pub canvas: CanvasRect,
    /// 코트 다이어그램 앵커 (리포트 주석 위치)
    pub court: CourtPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneMap {
    pub canvas: CanvasSize,
    zones: Vec<ZoneRegion>,
}

impl ZoneMap {
    /// 임베딩된 기본 구역 맵
    ///
    /// # Panics
    ///
    /// 임베딩된 YAML이 잘못된 경우 패닉 (정상 빌드에서는 발생하지 않음).
    pub fn builtin() -> &'static ZoneMap {
        BUILTIN_ZONE_MAP.get_or_init(|| {
            ZoneMap::from_yaml_str(ZONES_YAML).expect("Failed to parse data/zones.yaml")
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<ZoneMap> {
        let map: ZoneMap = serde_yaml::from_str(yaml)?;
        map.validate()?;
        Ok(map)
    }

    pub fn load(path: &Path) -> Result<ZoneMap> {
        let yaml = std::fs::read_to_string(path)?;
        let map = Self::from_yaml_str(&yaml)?;
        log::info!("Loaded zone map from {}", path.display());
        Ok(map)
    }

    fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ShotError::InvalidZoneMap("canvas size must be positive".into()));
        }
        if self.zones.len() != Zone::COUNT {
            return Err(ShotError::InvalidZoneMap(format!(
                "expected {} zones, found {}",
                Zone::COUNT,
                self.zones.len()
            )));
        }

        let mut seen = HashSet::new();
        for region in &self.zones {
            if !seen.insert(region.zone) {
                return Err(ShotError::InvalidZoneMap(format!(
                    "zone {} declared twice",
                    region.zone
                )));
            }

            let rect = &region.canvas;
            let inside_canvas = rect.x[0] >= 0.0
                && rect.y[0] >= 0.0
                && rect.x[1] <= self.canvas.width as f64
                && rect.y[1] <= self.canvas.height as f64;
            if !rect.is_well_formed() || !inside_canvas {
                return Err(ShotError::InvalidZoneMap(format!(
                    "bad canvas rectangle for {}",
                    region.zone
                )));
            }

            if !region.court.is_on_court() {
                return Err(ShotError::InvalidZoneMap(format!(
                    "court anchor for {} lies outside the half court",
                    region.zone
                )));
            }
        }
        Ok(())
    }

    /// 클릭 위치의 구역. 선언 순서상 먼저 포함하는 사각형이 이긴다.
    pub fn hit_test(&self, point: CanvasPoint) -> Option<Zone> {
        self.zones.iter().find(|r| r.canvas.contains(point)).map(|r| r.zone)
    }

    pub fn regions(&self) -> impl Iterator<Item = &ZoneRegion> {
        self.zones.iter()
    }

    pub fn region(&self, zone: Zone) -> Option<&ZoneRegion> {
        self.zones.iter().find(|r| r.zone == zone)
    }

    pub fn anchor(&self, zone: Zone) -> Option<CourtPoint> {
        self.region(zone).map(|r| r.court)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builtin_map_covers_every_zone() {
        let map = ZoneMap::builtin();
        assert_eq!(map.canvas, CanvasSize { width: 600, height: 400 });
        assert_eq!(map.regions().count(), Zone::COUNT);
        for zone in Zone::all() {
            assert!(map.region(zone).is_some(), "{} missing", zone);
        }
    }

    #[test]
    fn test_hit_test_known_points() {
        let map = ZoneMap::builtin();
        assert_eq!(map.hit_test(CanvasPoint::new(50.0, 350.0)), Some(Zone::LeftCorner));
        assert_eq!(map.hit_test(CanvasPoint::new(225.0, 310.0)), Some(Zone::LeftSlot));
        assert_eq!(map.hit_test(CanvasPoint::new(599.0, 399.0)), Some(Zone::RightCorner));
        assert_eq!(map.hit_test(CanvasPoint::new(300.0, 299.9)), None);
        assert_eq!(map.hit_test(CanvasPoint::new(-1.0, 350.0)), None);
    }

    #[test]
    fn test_shared_edge_goes_to_earlier_zone() {
        let map = ZoneMap::builtin();
        assert_eq!(map.hit_test(CanvasPoint::new(100.0, 350.0)), Some(Zone::LeftCorner));
        assert_eq!(map.hit_test(CanvasPoint::new(250.0, 350.0)), Some(Zone::LeftSlot));
        assert_eq!(map.hit_test(CanvasPoint::new(500.0, 300.0)), Some(Zone::RightWing));
    }

    #[test]
    fn test_rejects_missing_zone() {
        let yaml = r#"
canvas: { width: 600, height: 400 }
zones:
  - zone: Centro
    canvas: { x: [0, 100], y: [0, 100] }
    court: { x: 0.0, y: 200.0 }
"#;
        let err = ZoneMap::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ShotError::InvalidZoneMap(_)));
    }

    #[test]
    fn test_rejects_duplicate_zone() {
        let mut yaml = String::from("canvas: { width: 600, height: 400 }\nzones:\n");
        for _ in 0..Zone::COUNT {
            yaml.push_str(
                "  - zone: Centro\n    canvas: { x: [0, 10], y: [0, 10] }\n    court: { x: 0.0, y: 0.0 }\n",
            );
        }
        let err = ZoneMap::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("declared twice"));
    }

    #[test]
    fn test_rejects_rectangle_outside_canvas() {
        let yaml = ZONES_YAML.replace("x: [500, 600]", "x: [500, 700]");
        let err = ZoneMap::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("Angolo destro"));
    }

    #[test]
    fn test_rejects_anchor_off_the_half_court() {
        let yaml = ZONES_YAML.replace("x: -205.0, y: 30.0", "x: -400.0, y: 30.0");
        let err = ZoneMap::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("Angolo sinistro lies outside the half court"));

        // 경계 위는 허용
        let yaml = ZONES_YAML.replace("x: -205.0, y: 30.0", "x: -250.0, y: -47.5");
        assert!(ZoneMap::from_yaml_str(&yaml).is_ok());
    }

    #[test]
    fn test_unknown_zone_label_is_yaml_error() {
        let yaml = ZONES_YAML.replace("zone: Centro\n", "zone: Lunetta\n");
        assert!(matches!(ZoneMap::from_yaml_str(&yaml), Err(ShotError::Yaml(_))));
    }

    fn strictly_inside(rect: &CanvasRect, fx: f64, fy: f64) -> CanvasPoint {
        // fx, fy in (0, 1)
        CanvasPoint::new(rect.x[0] + rect.width() * fx, rect.y[0] + rect.height() * fy)
    }

    proptest! {
        #[test]
        fn prop_inside_rectangle_hits_zone(idx in 0usize..Zone::COUNT, fx in 0.01f64..0.99, fy in 0.01f64..0.99) {
            let map = ZoneMap::builtin();
            let region = map.regions().nth(idx).unwrap();
            let p = strictly_inside(&region.canvas, fx, fy);
            prop_assert_eq!(map.hit_test(p), Some(region.zone));
        }

        #[test]
        fn prop_outside_all_rectangles_is_none(x in -500.0f64..1100.0, y in -500.0f64..900.0) {
            let map = ZoneMap::builtin();
            let p = CanvasPoint::new(x, y);
            let covered = map.regions().any(|r| r.canvas.contains(p));
            prop_assume!(!covered);
            prop_assert_eq!(map.hit_test(p), None);
        }
    }
}
