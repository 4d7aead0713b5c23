//! PDF page layout (A4, printpdf)
//!
//! 좌표는 mm, 원점은 페이지 좌하단. 코트 이미지는 래스터로 넣고
//! 구역 라벨과 성공 수는 내장 Helvetica 벡터 텍스트로 이미지 위에 얹는다.

use std::io::BufWriter;

use image::RgbImage;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Line, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Px, Rgb,
};

use crate::court::{Annotation, AnnotationKind, CourtFrame, ShotKind};
use crate::error::{Result, ShotError};
use crate::session::{SessionKey, SessionSummary, ShotRecord, ShotTotals};
use crate::zones::Zone;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

const TITLE_SIZE: f32 = 18.0;
const SUBTITLE_SIZE: f32 = 11.0;
const TABLE_SIZE: f32 = 10.0;
const ANNOTATION_SIZE: f32 = 9.0;

const DIAGRAM_WIDTH_MM: f32 = 150.0;
const ROW_HEIGHT_MM: f32 = 7.0;
const TABLE_COLUMNS: [f32; 5] = [MARGIN_MM, 80.0, 105.0, 130.0, 155.0];

/// Helvetica 평균 글자 폭 (em 비율), 가운데 정렬 근사용
const HELVETICA_AVG_EM: f32 = 0.5;
const PT_TO_MM: f32 = 25.4 / 72.0;

/// 한 선수 페이지 입력
#[derive(Debug, Clone)]
pub struct PlayerPage {
    pub player: String,
    /// 마커만 그려진 코트 래스터
    pub diagram: RgbImage,
    /// 이미지 위 벡터 텍스트
    pub annotations: Vec<Annotation>,
    pub zones: Vec<(Zone, ShotRecord)>,
    pub totals: ShotTotals,
}

/// 저장된 PDF + 실제로 만든 페이지 수
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// A4 페이지 공급. 첫 호출은 `PdfDocument::new`가 만든 페이지를 쓴다.
struct Pages<'a> {
    doc: &'a PdfDocumentReference,
    first: Option<(PdfPageIndex, PdfLayerIndex)>,
    count: usize,
}

impl<'a> Pages<'a> {
    fn new(doc: &'a PdfDocumentReference, page: PdfPageIndex, layer: PdfLayerIndex) -> Self {
        Self { doc, first: Some((page, layer)), count: 0 }
    }

    fn next_page(&mut self) -> PdfLayerReference {
        let (page, layer) = match self.first.take() {
            Some(first) => first,
            None => self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1"),
        };
        self.count += 1;
        self.doc.get_page(page).get_layer(layer)
    }
}

fn begin(title: &str) -> Result<(PdfDocumentReference, PdfPageIndex, PdfLayerIndex, Fonts)> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(|e| ShotError::Pdf(e.to_string()))?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(|e| ShotError::Pdf(e.to_string()))?,
    };
    Ok((doc, page, layer, fonts))
}

fn finish(doc: PdfDocumentReference, pages: usize) -> Result<RenderedPdf> {
    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer).map_err(|e| ShotError::Pdf(e.to_string()))?;
    let bytes = writer.into_inner().map_err(|e| ShotError::Pdf(e.to_string()))?;
    Ok(RenderedPdf { bytes, pages })
}

/// 세션 리포트: 선수마다 한 페이지, 이어서 합계 표 (필요하면 여러 페이지)
pub fn render_pdf(
    title: &str,
    date: SessionKey,
    frame: &CourtFrame,
    pages: &[PlayerPage],
    summary: &SessionSummary,
) -> Result<RenderedPdf> {
    let (doc, page1, layer1, fonts) = begin(title)?;
    let mut sink = Pages::new(&doc, page1, layer1);

    for page in pages {
        let layer = sink.next_page();
        draw_player_page(&layer, &fonts, date, frame, page);
    }
    draw_summary(&mut sink, &fonts, date, summary);

    let count = sink.count;
    finish(doc, count)
}

/// 다이어그램 한 장짜리 PDF. 라벨은 내장 Helvetica라 폰트 파일이 필요 없다.
pub fn render_diagram_pdf(
    title: &str,
    subtitle: &str,
    frame: &CourtFrame,
    diagram: &RgbImage,
    annotations: &[Annotation],
) -> Result<RenderedPdf> {
    let (doc, page1, layer1, fonts) = begin(title)?;
    let mut sink = Pages::new(&doc, page1, layer1);

    let layer = sink.next_page();
    let y = draw_heading(&layer, &fonts, title, subtitle);
    draw_diagram(&layer, &fonts, frame, diagram, annotations, y);

    let count = sink.count;
    finish(doc, count)
}

fn draw_heading(layer: &PdfLayerReference, fonts: &Fonts, title: &str, subtitle: &str) -> f32 {
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text(title, TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &fonts.bold);
    y -= 8.0;
    layer.use_text(subtitle, SUBTITLE_SIZE, Mm(MARGIN_MM), Mm(y), &fonts.regular);
    y - 6.0
}

/// 래스터 + 벡터 라벨. 다이어그램 아래쪽 y를 돌려준다.
fn draw_diagram(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    frame: &CourtFrame,
    diagram: &RgbImage,
    annotations: &[Annotation],
    top: f32,
) -> f32 {
    let (w_px, h_px) = diagram.dimensions();
    let diagram_h = DIAGRAM_WIDTH_MM * h_px as f32 / w_px.max(1) as f32;
    let x0 = (PAGE_WIDTH_MM - DIAGRAM_WIDTH_MM) / 2.0;
    let y0 = top - diagram_h;
    embed_image(layer, diagram, x0, y0, DIAGRAM_WIDTH_MM);

    for annotation in annotations.iter().filter(|a| a.kind == AnnotationKind::Text) {
        let (u, v) = frame.to_unit(annotation.at);
        set_fill(layer, annotation.color);
        let x = x0 + u * DIAGRAM_WIDTH_MM - text_width_mm(&annotation.text, ANNOTATION_SIZE) / 2.0;
        layer.use_text(annotation.text.clone(), ANNOTATION_SIZE, Mm(x), Mm(y0 + v * diagram_h), &fonts.bold);
    }
    set_fill(layer, [0, 0, 0]);
    y0
}

fn draw_player_page(layer: &PdfLayerReference, fonts: &Fonts, date: SessionKey, frame: &CourtFrame, page: &PlayerPage) {
    let top = draw_heading(
        layer,
        fonts,
        &format!("Giocatore: {}", page.player),
        &format!("Sessione del {}", date),
    );
    let y0 = draw_diagram(layer, fonts, frame, &page.diagram, &page.annotations, top);

    // 구역별 표 (최대 7행이라 한 페이지에 들어간다)
    let mut y = y0 - 10.0;
    let header = ["Zona", ShotKind::TwoPoint.label(), ShotKind::ThreePoint.label(), ShotKind::Pat.label(), "Tentativi"];
    draw_row(layer, &fonts.bold, &TABLE_COLUMNS, &header, y);
    draw_rule(layer, y - 2.0);
    for (zone, record) in &page.zones {
        y -= ROW_HEIGHT_MM;
        let cells = [
            zone.label().to_string(),
            record.two_pt.to_string(),
            record.three_pt.to_string(),
            record.pat.to_string(),
            record.attempts.to_string(),
        ];
        draw_row(layer, &fonts.regular, &TABLE_COLUMNS, &cells, y);
    }
    draw_rule(layer, y - 2.0);
    y -= ROW_HEIGHT_MM;
    draw_row(layer, &fonts.bold, &TABLE_COLUMNS, &totals_cells("Totale", &page.totals), y);
}

/// 합계 표. 하단 여백에 닿으면 새 페이지에 헤더를 다시 그리고 이어 쓴다.
fn draw_summary(sink: &mut Pages, fonts: &Fonts, date: SessionKey, summary: &SessionSummary) {
    let mut layer = sink.next_page();
    let mut y = draw_summary_header(&layer, fonts, date, false);

    for row in &summary.rows {
        if y - ROW_HEIGHT_MM < MARGIN_MM {
            layer = sink.next_page();
            y = draw_summary_header(&layer, fonts, date, true);
        }
        y -= ROW_HEIGHT_MM;
        draw_row(&layer, &fonts.regular, &TABLE_COLUMNS, &made_cells(&row.player, &row.totals), y);
    }

    if y - ROW_HEIGHT_MM < MARGIN_MM {
        layer = sink.next_page();
        y = draw_summary_header(&layer, fonts, date, true);
    }
    draw_rule(&layer, y - 2.0);
    y -= ROW_HEIGHT_MM;
    draw_row(&layer, &fonts.bold, &TABLE_COLUMNS, &made_cells("Totale", &summary.overall), y);
}

fn draw_summary_header(layer: &PdfLayerReference, fonts: &Fonts, date: SessionKey, continued: bool) -> f32 {
    let title = if continued { "Riepilogo della sessione (segue)" } else { "Riepilogo della sessione" };
    let y = draw_heading(layer, fonts, title, &format!("Sessione del {}", date)) - 8.0;

    let header = ["Giocatore", ShotKind::TwoPoint.label(), ShotKind::ThreePoint.label(), ShotKind::Pat.label(), "Totale"];
    draw_row(layer, &fonts.bold, &TABLE_COLUMNS, &header, y);
    draw_rule(layer, y - 2.0);
    y
}

/// PDF 바이트에서 `/Type /Page` 사전 개수 (`/Pages` 제외)
#[cfg(test)]
pub(crate) fn count_page_objects(bytes: &[u8]) -> usize {
    const TYPE: &[u8] = b"/Type";
    let mut count = 0;
    let mut i = 0;
    while let Some(pos) = bytes[i..].windows(TYPE.len()).position(|w| w == TYPE) {
        let mut j = i + pos + TYPE.len();
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        let rest = &bytes[j..];
        if rest.starts_with(b"/Page") && !rest[5..].first().is_some_and(|c| c.is_ascii_alphanumeric()) {
            count += 1;
        }
        i = j;
    }
    count
}

fn totals_cells(label: &str, t: &ShotTotals) -> [String; 5] {
    [label.to_string(), t.two_pt.to_string(), t.three_pt.to_string(), t.pat.to_string(), t.attempts.to_string()]
}

fn made_cells(label: &str, t: &ShotTotals) -> [String; 5] {
    [label.to_string(), t.two_pt.to_string(), t.three_pt.to_string(), t.pat.to_string(), t.total_made().to_string()]
}

fn draw_row<S: AsRef<str>>(layer: &PdfLayerReference, font: &IndirectFontRef, columns: &[f32; 5], cells: &[S; 5], y: f32) {
    for (x, cell) in columns.iter().zip(cells.iter()) {
        layer.use_text(cell.as_ref(), TABLE_SIZE, Mm(*x), Mm(y), font);
    }
}

fn draw_rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_thickness(0.5);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
        ],
        is_closed: false,
    });
}

fn set_fill(layer: &PdfLayerReference, [r, g, b]: [u8; 3]) {
    layer.set_fill_color(Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    )));
}

fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * HELVETICA_AVG_EM * PT_TO_MM
}

fn embed_image(layer: &PdfLayerReference, img: &RgbImage, x: f32, y: f32, width_mm: f32) {
    let (width, height) = img.dimensions();
    let image = Image::from(ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: img.as_raw().clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // DPI = pixels / (mm / 25.4)
    let dpi = width as f32 / (width_mm / 25.4);
    image.add_to_layer(
        layer.clone(),
        ImageTransform { translate_x: Some(Mm(x)), translate_y: Some(Mm(y)), dpi: Some(dpi), ..Default::default() },
    );
}
