// 슈팅 구역: 고정 7개 구역 + 캔버스/코트 좌표 맵

pub mod map;
pub mod zone;

pub use map::{CanvasPoint, CanvasRect, CanvasSize, ZoneMap, ZoneRegion, ZONES_YAML};
pub use zone::Zone;
