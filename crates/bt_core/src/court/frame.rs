// 코트 좌표 → 이미지 픽셀 변환
use super::geometry::{CourtPoint, COURT_LENGTH, COURT_MAX_Y, COURT_MIN_X, COURT_WIDTH};

/// 이미지 프레임 (픽셀 = 코트 단위 × scale)
///
/// 베이스라인이 이미지 아래쪽, 하프라인이 위쪽에 온다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtFrame {
    pub scale: f32,
    /// 코트 외곽 여백 (픽셀)
    pub margin: u32,
}

impl Default for CourtFrame {
    fn default() -> Self {
        Self { scale: 2.0, margin: 10 }
    }
}

impl CourtFrame {
    pub fn new(scale: f32) -> Self {
        Self { scale, ..Self::default() }
    }

    pub fn width(&self) -> u32 {
        (COURT_WIDTH * self.scale).round() as u32 + 2 * self.margin
    }

    pub fn height(&self) -> u32 {
        (COURT_LENGTH * self.scale).round() as u32 + 2 * self.margin
    }

    pub fn to_pixel(&self, p: CourtPoint) -> (f32, f32) {
        let m = self.margin as f32;
        ((p.x - COURT_MIN_X) * self.scale + m, (COURT_MAX_Y - p.y) * self.scale + m)
    }

    /// 이미지 내 상대 위치 (0-1), y는 아래에서 위로 증가
    ///
    /// PDF처럼 좌하단 원점 좌표계에 주석을 얹을 때 사용.
    pub fn to_unit(&self, p: CourtPoint) -> (f32, f32) {
        let (px, py) = self.to_pixel(p);
        (px / self.width() as f32, 1.0 - py / self.height() as f32)
    }
}
