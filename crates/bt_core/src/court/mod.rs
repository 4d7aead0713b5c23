//! Court diagram: 고정 하프코트 템플릿 + 구역 주석 렌더링

pub mod frame;
pub mod geometry;
pub mod overlay;
pub mod raster;
pub mod text;

pub use frame::CourtFrame;
pub use geometry::{court_template, CourtPoint, Shape};
pub use overlay::{position_markers, zone_count_annotations, Annotation, AnnotationKind, ShotKind};
pub use raster::{load_background, save_png, CourtRenderer};
pub use text::LabelFont;
