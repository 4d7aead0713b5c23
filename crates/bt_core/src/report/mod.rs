//! # Session Report
//!
//! 세션 하나 → PDF 한 부: 선수마다 한 페이지(코트 다이어그램 + 구역 표),
//! 마지막 페이지는 전체 합계 표. 세션이 비어 있으면 리포트를 만들지 않는다.
//!
//! 다이어그램은 메모리에서만 렌더링된다. 선수별 다이어그램 파일은 요청할 때만 쓴다.

pub mod pdf;

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::court::{position_markers, save_png, zone_count_annotations, Annotation, AnnotationKind, CourtRenderer};
use crate::error::Result;
use crate::session::{Session, SessionKey, SessionSummary};
use crate::zones::ZoneMap;

pub use pdf::PlayerPage;

pub const REPORT_FILE_NAME: &str = "sessione_tiri_report.pdf";
pub const REPORT_MIME: &str = "application/pdf";
const REPORT_TITLE: &str = "Sessione di Tiri";

/// 생성된 리포트 (메모리)
#[derive(Debug, Clone)]
pub struct Report {
    pub id: Uuid,
    pub date: SessionKey,
    pub file_name: String,
    pub mime: &'static str,
    /// PDF에 실제로 들어간 페이지 수 (선수 페이지 + 합계 페이지들)
    pub pages: usize,
    pub summary: SessionSummary,
    pub bytes: Vec<u8>,
}

impl Report {
    /// `dir/file_name`에 저장
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        log::info!("Report {} written to {} ({} bytes)", self.id, path.display(), self.bytes.len());
        Ok(path)
    }
}

/// 선수 한 명의 다이어그램 페이지 구성
pub fn player_page(
    player: &str,
    session: &Session,
    map: &ZoneMap,
    renderer: &CourtRenderer,
) -> Result<Option<PlayerPage>> {
    let Some(shots) = session.player(player) else { return Ok(None) };
    let (markers, labels) = split_annotations(position_markers(map));

    Ok(Some(PlayerPage {
        player: player.to_string(),
        diagram: renderer.render(&markers)?,
        annotations: labels.into_iter().chain(zone_count_annotations(map, shots)).collect(),
        zones: shots.zones().map(|(z, r)| (*z, *r)).collect(),
        totals: shots.totals(),
    }))
}

/// 마커(래스터) / 텍스트(벡터) 분리
fn split_annotations(annotations: Vec<Annotation>) -> (Vec<Annotation>, Vec<Annotation>) {
    annotations.into_iter().partition(|a| a.kind == AnnotationKind::Marker)
}

pub fn build_report(
    date: SessionKey,
    session: &Session,
    map: &ZoneMap,
    renderer: &CourtRenderer,
) -> Result<Option<Report>> {
    if session.is_empty() {
        log::info!("Session {} has no data, no report generated", date);
        return Ok(None);
    }

    let mut pages = Vec::with_capacity(session.player_count());
    for (name, _) in session.players() {
        if let Some(page) = player_page(name, session, map, renderer)? {
            pages.push(page);
        }
    }
    let summary = SessionSummary::from_session(session);
    let title = format!("{} {}", REPORT_TITLE, date);
    let rendered = pdf::render_pdf(&title, date, &renderer.frame, &pages, &summary)?;

    let report = Report {
        id: Uuid::new_v4(),
        date,
        file_name: REPORT_FILE_NAME.to_string(),
        mime: REPORT_MIME,
        pages: rendered.pages,
        summary,
        bytes: rendered.bytes,
    };
    log::info!("Built report {} for {}: {} pages", report.id, date, report.pages);
    Ok(Some(report))
}

/// 코트 다이어그램 한 장을 PDF로. 래스터에는 마커만, 라벨은 내장 폰트 벡터 텍스트.
pub fn diagram_pdf(title: &str, subtitle: &str, annotations: Vec<Annotation>, renderer: &CourtRenderer) -> Result<Vec<u8>> {
    let (markers, labels) = split_annotations(annotations);
    let diagram = renderer.render(&markers)?;
    Ok(pdf::render_diagram_pdf(title, subtitle, &renderer.frame, &diagram, &labels)?.bytes)
}

/// 리포트 다이어그램 주석 (위치 마커 + 라벨 + 0이 아닌 성공 수)
pub fn player_annotations(player: &str, session: &Session, map: &ZoneMap) -> Option<Vec<Annotation>> {
    let shots = session.player(player)?;
    let mut annotations = position_markers(map);
    annotations.extend(zone_count_annotations(map, shots));
    Some(annotations)
}

/// 선수별 다이어그램 파일.
///
/// 라벨 폰트가 있으면 `<dir>/<date>_<player>.png`, 없으면 같은 이름의 `.pdf`
/// 한 장짜리 문서. 어느 쪽이든 라벨과 성공 수가 들어간다.
pub fn write_player_diagrams(
    dir: &Path,
    date: SessionKey,
    session: &Session,
    map: &ZoneMap,
    renderer: &CourtRenderer,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (player, _) in session.players() {
        let Some(annotations) = player_annotations(player, session, map) else { continue };
        let stem = format!("{}_{}", date, file_stem(player));
        let path = if renderer.has_font() {
            let path = dir.join(format!("{}.png", stem));
            save_png(&renderer.render(&annotations)?, &path)?;
            path
        } else {
            let bytes = diagram_pdf(
                &format!("Giocatore: {}", player),
                &format!("Sessione del {}", date),
                annotations,
                renderer,
            )?;
            std::fs::create_dir_all(dir)?;
            let path = dir.join(format!("{}.pdf", stem));
            std::fs::write(&path, bytes)?;
            path
        };
        log::debug!("Wrote diagram for {} to {}", player, path.display());
        written.push(path);
    }
    Ok(written)
}

fn file_stem(name: &str) -> String {
    name.chars().map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' }).collect()
}
