//! Court diagram rasterizer
//!
//! 템플릿 선을 RGB 이미지로 그리고 주석(마커/텍스트)을 얹는다.
//! 래스터 텍스트에는 `LabelFont`가 필요하다. 폰트 없이 텍스트 주석을 넘기면
//! `ShotError::MissingFont`. PDF 쪽은 마커만 래스터로 받고 라벨은 벡터로 그린다.

use std::path::Path;

use image::{imageops, DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use super::frame::CourtFrame;
use super::geometry::{court_template, CourtPoint};
use super::overlay::{Annotation, AnnotationKind};
use super::text::LabelFont;
use crate::error::{Result, ShotError};
use crate::zones::ZoneMap;

pub const FLOOR_COLOR: Rgb<u8> = Rgb([250, 246, 238]);
pub const LINE_COLOR: Rgb<u8> = Rgb([30, 30, 30]);
pub const ZONE_OUTLINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// 마커 반지름 (코트 단위)
const MARKER_RADIUS: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct CourtRenderer {
    pub frame: CourtFrame,
    /// 선 두께 (픽셀)
    pub line_width: u32,
    font: Option<LabelFont>,
}

impl Default for CourtRenderer {
    fn default() -> Self {
        Self::new(CourtFrame::default())
    }
}

impl CourtRenderer {
    pub fn new(frame: CourtFrame) -> Self {
        Self { frame, line_width: 2, font: None }
    }

    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = Some(font);
        self
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// 빈 코트 템플릿
    pub fn render_template(&self) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.frame.width(), self.frame.height(), FLOOR_COLOR);
        for shape in court_template() {
            for line in shape.polylines() {
                for pair in line.windows(2) {
                    self.stroke(&mut img, pair[0], pair[1], LINE_COLOR);
                }
            }
        }
        img
    }

    /// 템플릿 + 주석
    pub fn render(&self, annotations: &[Annotation]) -> Result<RgbImage> {
        let mut img = self.render_template();
        self.draw_annotations(&mut img, annotations)?;
        Ok(img)
    }

    /// 텍스트 주석이 있는데 폰트가 없으면 아무것도 그리지 않고 에러
    pub fn draw_annotations(&self, img: &mut RgbImage, annotations: &[Annotation]) -> Result<()> {
        let font = self.font.as_ref();
        if font.is_none() && annotations.iter().any(|a| a.kind == AnnotationKind::Text) {
            return Err(ShotError::MissingFont);
        }
        for annotation in annotations {
            let (px, py) = self.frame.to_pixel(annotation.at);
            let color = Rgb(annotation.color);
            match annotation.kind {
                AnnotationKind::Marker => {
                    let radius = (MARKER_RADIUS * self.frame.scale).round().max(1.0) as i32;
                    draw_filled_circle_mut(img, (px.round() as i32, py.round() as i32), radius, color);
                }
                AnnotationKind::Text => {
                    if let Some(font) = font {
                        font.draw_centered(img, &annotation.text, px, py, color);
                    }
                }
            }
        }
        Ok(())
    }

    fn stroke(&self, img: &mut RgbImage, a: CourtPoint, b: CourtPoint, color: Rgb<u8>) {
        let (x0, y0) = self.frame.to_pixel(a);
        let (x1, y1) = self.frame.to_pixel(b);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len = (dx * dx + dy * dy).sqrt();
        if len < f32::EPSILON {
            return;
        }
        // 법선 방향으로 평행선을 겹쳐 두께를 만든다
        let (nx, ny) = (-dy / len, dx / len);
        let half = (self.line_width.max(1) - 1) as f32 / 2.0;
        for i in 0..self.line_width.max(1) {
            let o = i as f32 - half;
            draw_line_segment_mut(img, (x0 + nx * o, y0 + ny * o), (x1 + nx * o, y1 + ny * o), color);
        }
    }

    /// 캔버스 변형: 배경 코트 사진 위에 구역 사각형 윤곽
    pub fn render_canvas(&self, background: &DynamicImage, map: &ZoneMap) -> RgbImage {
        let mut img = imageops::resize(
            &background.to_rgb8(),
            map.canvas.width,
            map.canvas.height,
            imageops::FilterType::Triangle,
        );
        for region in map.regions() {
            let rect = region.canvas;
            let w = rect.width().round().max(1.0) as u32;
            let h = rect.height().round().max(1.0) as u32;
            draw_hollow_rect_mut(
                &mut img,
                Rect::at(rect.x[0].round() as i32, rect.y[0].round() as i32).of_size(w, h),
                ZONE_OUTLINE_COLOR,
            );
            if let Some(font) = &self.font {
                let cx = (rect.x[0] + rect.width() / 2.0) as f32;
                let cy = (rect.y[0] + rect.height() / 2.0) as f32;
                font.draw_centered(&mut img, region.zone.label(), cx, cy, ZONE_OUTLINE_COLOR);
            }
        }
        img
    }
}

/// 배경 코트 이미지 로드 (캔버스 변형). 파일이 없으면 에러.
pub fn load_background(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path)?;
    log::info!("Loaded court image {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// PNG 저장
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    img.save_with_format(path, image::ImageFormat::Png)?;
    log::debug!("Wrote {}x{} PNG to {}", img.width(), img.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::overlay::{position_markers, MARKER_COLOR};
    use tempfile::tempdir;

    #[test]
    fn test_template_draws_lines() {
        let renderer = CourtRenderer::new(CourtFrame { scale: 1.0, margin: 10 });
        let img = renderer.render_template();
        assert_eq!(img.dimensions(), (520, 490));

        let inked = img.pixels().filter(|p| **p == LINE_COLOR).count();
        assert!(inked > 1000, "expected court lines, got {} pixels", inked);

        // 코트 중앙의 빈 바닥
        let (fx, fy) = renderer.frame.to_pixel(CourtPoint::new(150.0, 300.0));
        assert_eq!(*img.get_pixel(fx as u32, fy as u32), FLOOR_COLOR);
    }

    #[test]
    fn test_markers_are_drawn_at_anchors() {
        let renderer = CourtRenderer::default();
        let map = ZoneMap::builtin();
        let markers: Vec<_> =
            position_markers(map).into_iter().filter(|a| a.kind == AnnotationKind::Marker).collect();
        let img = renderer.render(&markers).unwrap();

        for region in map.regions() {
            let (px, py) = renderer.frame.to_pixel(region.court);
            assert_eq!(*img.get_pixel(px.round() as u32, py.round() as u32), Rgb(MARKER_COLOR));
        }
    }

    #[test]
    fn test_text_without_font_is_an_error() {
        let renderer = CourtRenderer::default();
        assert!(!renderer.has_font());
        let err = renderer.render(&position_markers(ZoneMap::builtin())).unwrap_err();
        assert!(matches!(err, ShotError::MissingFont));

        let mut img = renderer.render_template();
        let before = img.clone();
        let label = Annotation::text("2PT: 4", CourtPoint::new(150.0, 300.0), [0, 0, 255]);
        assert!(renderer.draw_annotations(&mut img, &[label]).is_err());
        assert_eq!(img, before);
    }

    #[test]
    fn test_canvas_overlay_outlines_zones() {
        let renderer = CourtRenderer::default();
        let map = ZoneMap::builtin();
        let background = DynamicImage::ImageRgb8(RgbImage::from_pixel(1200, 800, Rgb([10, 120, 10])));

        let img = renderer.render_canvas(&background, map);
        assert_eq!(img.dimensions(), (600, 400));
        assert_eq!(*img.get_pixel(50, 300), ZONE_OUTLINE_COLOR);
        assert_eq!(*img.get_pixel(50, 100), Rgb([10, 120, 10]));
    }

    #[test]
    fn test_save_png_roundtrip_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("court.png");
        let img = CourtRenderer::new(CourtFrame { scale: 0.5, margin: 4 }).render_template();

        save_png(&img, &path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), img.dimensions());
    }

    #[test]
    fn test_missing_background_is_error() {
        assert!(load_background(Path::new("/nonexistent/campo.jpg")).is_err());
    }
}
