//! Half-court template geometry
//!
//! ## Coordinate System
//!
//! Abstract court units (1 unit = 1/10 ft), independent of pixels:
//! - X: -250 = left sideline, +250 = right sideline
//! - Y: -47.5 = baseline, 422.5 = half-court line
//! - Hoop centre at the origin, Y grows away from the basket
//!
//! `CourtFrame` maps these units to image pixels.

use serde::{Deserialize, Serialize};

pub const COURT_MIN_X: f32 = -250.0;
pub const COURT_MAX_X: f32 = 250.0;
pub const COURT_MIN_Y: f32 = -47.5;
pub const COURT_MAX_Y: f32 = 422.5;

pub const COURT_WIDTH: f32 = COURT_MAX_X - COURT_MIN_X;
pub const COURT_LENGTH: f32 = COURT_MAX_Y - COURT_MIN_Y;

const HOOP_RADIUS: f32 = 7.5;
const BACKBOARD_HALF_WIDTH: f32 = 30.0;
const BACKBOARD_Y: f32 = -7.5;
const KEY_OUTER_HALF_WIDTH: f32 = 80.0;
const KEY_INNER_HALF_WIDTH: f32 = 60.0;
const FREE_THROW_Y: f32 = 142.5;
const FREE_THROW_RADIUS: f32 = 60.0;
const RESTRICTED_RADIUS: f32 = 40.0;
const THREE_POINT_RADIUS: f32 = 237.5;
const CORNER_THREE_X: f32 = 220.0;
const CENTER_OUTER_RADIUS: f32 = 60.0;
const CENTER_INNER_RADIUS: f32 = 20.0;

/// 아크 근사 시 선분 하나가 덮는 최대 각도 (도)
const ARC_STEP_DEG: f32 = 2.0;
/// 점선 아크: 칠하는 구간/건너뛰는 구간 (도)
const DASH_ON_DEG: f32 = 8.0;
const DASH_OFF_DEG: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtPoint {
    pub x: f32,
    pub y: f32,
}

impl CourtPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn is_on_court(&self) -> bool {
        (COURT_MIN_X..=COURT_MAX_X).contains(&self.x) && (COURT_MIN_Y..=COURT_MAX_Y).contains(&self.y)
    }
}

/// 템플릿 도형
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: CourtPoint, to: CourtPoint },
    Rect { min: CourtPoint, max: CourtPoint },
    Circle { center: CourtPoint, radius: f32 },
    /// 각도는 도 단위, +X 축 기준 반시계 방향
    Arc { center: CourtPoint, radius: f32, start_deg: f32, end_deg: f32, dashed: bool },
}

impl Shape {
    /// 래스터/벡터 출력용 폴리라인으로 평탄화
    pub fn polylines(&self) -> Vec<Vec<CourtPoint>> {
        match *self {
            Shape::Line { from, to } => vec![vec![from, to]],
            Shape::Rect { min, max } => vec![vec![
                min,
                CourtPoint::new(max.x, min.y),
                max,
                CourtPoint::new(min.x, max.y),
                min,
            ]],
            Shape::Circle { center, radius } => vec![arc_points(center, radius, 0.0, 360.0)],
            Shape::Arc { center, radius, start_deg, end_deg, dashed: false } => {
                vec![arc_points(center, radius, start_deg, end_deg)]
            }
            Shape::Arc { center, radius, start_deg, end_deg, dashed: true } => {
                let mut dashes = Vec::new();
                let mut from = start_deg;
                while from < end_deg {
                    let to = (from + DASH_ON_DEG).min(end_deg);
                    dashes.push(arc_points(center, radius, from, to));
                    from = to + DASH_OFF_DEG;
                }
                dashes
            }
        }
    }
}

fn arc_points(center: CourtPoint, radius: f32, start_deg: f32, end_deg: f32) -> Vec<CourtPoint> {
    let sweep = end_deg - start_deg;
    let steps = ((sweep.abs() / ARC_STEP_DEG).ceil() as usize).max(1);
    (0..=steps)
        .map(|i| {
            let deg = start_deg + sweep * i as f32 / steps as f32;
            let rad = deg.to_radians();
            CourtPoint::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
        })
        .collect()
}

/// 3점 아크가 코너 직선과 만나는 높이
pub fn three_point_break_y() -> f32 {
    (THREE_POINT_RADIUS.powi(2) - CORNER_THREE_X.powi(2)).sqrt()
}

/// 고정 하프코트 템플릿: 외곽선, 키, 자유투 서클, 제한구역, 3점 라인, 림, 백보드, 센터 서클
pub fn court_template() -> Vec<Shape> {
    let hoop = CourtPoint::new(0.0, 0.0);
    let free_throw = CourtPoint::new(0.0, FREE_THROW_Y);
    let half_court = CourtPoint::new(0.0, COURT_MAX_Y);
    let break_y = three_point_break_y();
    let break_deg = break_y.atan2(CORNER_THREE_X).to_degrees();

    vec![
        // Boundary
        Shape::Rect {
            min: CourtPoint::new(COURT_MIN_X, COURT_MIN_Y),
            max: CourtPoint::new(COURT_MAX_X, COURT_MAX_Y),
        },
        // Hoop + backboard
        Shape::Circle { center: hoop, radius: HOOP_RADIUS },
        Shape::Line {
            from: CourtPoint::new(-BACKBOARD_HALF_WIDTH, BACKBOARD_Y),
            to: CourtPoint::new(BACKBOARD_HALF_WIDTH, BACKBOARD_Y),
        },
        // Key
        Shape::Rect {
            min: CourtPoint::new(-KEY_OUTER_HALF_WIDTH, COURT_MIN_Y),
            max: CourtPoint::new(KEY_OUTER_HALF_WIDTH, FREE_THROW_Y),
        },
        Shape::Rect {
            min: CourtPoint::new(-KEY_INNER_HALF_WIDTH, COURT_MIN_Y),
            max: CourtPoint::new(KEY_INNER_HALF_WIDTH, FREE_THROW_Y),
        },
        // Free-throw circle: solid top half, dashed bottom half
        Shape::Arc {
            center: free_throw,
            radius: FREE_THROW_RADIUS,
            start_deg: 0.0,
            end_deg: 180.0,
            dashed: false,
        },
        Shape::Arc {
            center: free_throw,
            radius: FREE_THROW_RADIUS,
            start_deg: 180.0,
            end_deg: 360.0,
            dashed: true,
        },
        // Restricted area
        Shape::Arc { center: hoop, radius: RESTRICTED_RADIUS, start_deg: 0.0, end_deg: 180.0, dashed: false },
        // Three-point line
        Shape::Line {
            from: CourtPoint::new(-CORNER_THREE_X, COURT_MIN_Y),
            to: CourtPoint::new(-CORNER_THREE_X, break_y),
        },
        Shape::Line {
            from: CourtPoint::new(CORNER_THREE_X, COURT_MIN_Y),
            to: CourtPoint::new(CORNER_THREE_X, break_y),
        },
        Shape::Arc {
            center: hoop,
            radius: THREE_POINT_RADIUS,
            start_deg: break_deg,
            end_deg: 180.0 - break_deg,
            dashed: false,
        },
        // Centre court
        Shape::Arc {
            center: half_court,
            radius: CENTER_OUTER_RADIUS,
            start_deg: 180.0,
            end_deg: 360.0,
            dashed: false,
        },
        Shape::Arc {
            center: half_court,
            radius: CENTER_INNER_RADIUS,
            start_deg: 180.0,
            end_deg: 360.0,
            dashed: false,
        },
    ]
}
