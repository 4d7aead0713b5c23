use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use crate::error::{Result, ShotError};

/// PNG 라벨용 TTF/OTF 폰트
///
/// PDF 리포트는 내장 Helvetica로 텍스트를 그리므로 폰트 없이도 동작한다.
#[derive(Clone)]
pub struct LabelFont {
    font: FontArc,
    size_px: f32,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont").field("size_px", &self.size_px).finish()
    }
}

impl LabelFont {
    pub fn from_bytes(font_data: Vec<u8>, size_px: f32) -> Result<Self> {
        let font = FontArc::try_from_vec(font_data).map_err(|e| ShotError::Font(e.to_string()))?;
        Ok(Self { font, size_px })
    }

    pub fn load(path: &Path, size_px: f32) -> Result<Self> {
        let data = std::fs::read(path)?;
        log::debug!("Loaded label font {} ({} bytes)", path.display(), data.len());
        Self::from_bytes(data, size_px)
    }

    fn scale(&self) -> PxScale {
        PxScale::from(self.size_px)
    }

    /// 한 줄 텍스트 폭 (픽셀)
    pub fn line_width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale());
        text.chars()
            .filter(|c| !c.is_control())
            .map(|c| scaled.h_advance(self.font.glyph_id(c)))
            .sum()
    }

    /// (cx, baseline_y) 기준 가운데 정렬로 그린다
    pub fn draw_centered(&self, img: &mut RgbImage, text: &str, cx: f32, baseline_y: f32, color: Rgb<u8>) {
        let scaled = self.font.as_scaled(self.scale());
        let x = cx - self.line_width(text) / 2.0;
        // draw_text_mut의 y는 글자 상단 기준
        let top = baseline_y - scaled.ascent();
        draw_text_mut(img, color, x.round() as i32, top.round() as i32, self.scale(), &self.font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_bytes_are_rejected() {
        let err = LabelFont::from_bytes(vec![0, 1, 2, 3], 14.0).unwrap_err();
        assert!(matches!(err, ShotError::Font(_)));
    }

    #[test]
    fn test_missing_font_file_is_io_error() {
        let err = LabelFont::load(Path::new("/nonexistent/font.ttf"), 14.0).unwrap_err();
        assert!(matches!(err, ShotError::Io(_)));
    }
}
