//! # Application Configuration
//!
//! YAML 설정 파일 (`--config`). 모든 필드는 기본값이 있어 파일 없이도 동작한다.
//!
//! ```yaml
//! roster: [A, B, C, D, E, F, G, H, I]
//! court_image: campo.jpg
//! render_scale: 2.0
//! report_file_name: sessione_tiri_report.pdf
//! ```
//!
//! 상대 경로는 설정 파일이 있는 디렉터리 기준으로 해석된다.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::court::{CourtFrame, CourtRenderer, LabelFont};
use crate::error::Result;
use crate::report::REPORT_FILE_NAME;
use crate::roster::{Roster, DEFAULT_ROSTER};
use crate::zones::ZoneMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// 선택 가능한 선수
    #[validate(length(min = 1), custom = "validate_unique_names")]
    pub roster: Vec<String>,
    /// 캔버스 변형의 배경 코트 사진
    pub court_image: Option<PathBuf>,
    /// 구역 맵 YAML (없으면 내장 맵)
    pub zones_file: Option<PathBuf>,
    /// PNG 라벨용 TTF
    pub font_path: Option<PathBuf>,
    #[validate(range(min = 6.0, max = 96.0))]
    pub font_size: f32,
    /// 코트 단위 → 픽셀 배율
    #[validate(range(min = 0.5, max = 8.0))]
    pub render_scale: f32,
    #[validate(length(min = 1), custom = "validate_file_name")]
    pub report_file_name: String,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            court_image: None,
            zones_file: None,
            font_path: None,
            font_size: 22.0,
            render_scale: 2.0,
            report_file_name: REPORT_FILE_NAME.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

fn validate_unique_names(roster: &[String]) -> std::result::Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for name in roster {
        if name.trim().is_empty() {
            return Err(ValidationError::new("empty_player_name"));
        }
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::new("duplicate_player"));
        }
    }
    Ok(())
}

fn validate_file_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.contains('/') || name.contains('\\') {
        return Err(ValidationError::new("report_file_name_has_separator"));
    }
    Ok(())
}

impl AppConfig {
    /// 경로가 없으면 기본 설정
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => {
                let yaml = std::fs::read_to_string(p)?;
                let base = p.parent().unwrap_or_else(|| Path::new("."));
                let config = Self::from_yaml_str(&yaml)?.resolved_against(base);
                log::info!("Loaded config from {}", p.display());
                config
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn resolved_against(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.court_image = self.court_image.map(resolve);
        self.zones_file = self.zones_file.map(resolve);
        self.font_path = self.font_path.map(resolve);
        self.output_dir = resolve(self.output_dir);
        self
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.roster.clone())
    }

    pub fn zone_map(&self) -> Result<ZoneMap> {
        match &self.zones_file {
            Some(path) => ZoneMap::load(path),
            None => Ok(ZoneMap::builtin().clone()),
        }
    }

    /// 설정된 배율/폰트로 렌더러 구성
    pub fn renderer(&self) -> Result<CourtRenderer> {
        let renderer = CourtRenderer::new(CourtFrame::new(self.render_scale));
        match &self.font_path {
            Some(path) => Ok(renderer.with_font(LabelFont::load(path, self.font_size)?)),
            None => Ok(renderer),
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file_name)
    }
}
