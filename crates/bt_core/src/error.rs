use thiserror::Error;

use crate::zones::Zone;

#[derive(Error, Debug)]
pub enum ShotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("Invalid zone map: {0}")]
    InvalidZoneMap(String),

    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Shot count overflow for {player} in {zone}")]
    CountOverflow { player: String, zone: Zone },

    #[error("Font error: {0}")]
    Font(String),

    #[error("No label font configured: set font_path for PNG diagrams or write a PDF")]
    MissingFont,

    #[error("PDF error: {0}")]
    Pdf(String),
}

impl ShotError {
    /// 사용자 입력 실수 여부 (I/O 장애와 구분)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ShotError::UnknownZone(_) | ShotError::InvalidDate(_) | ShotError::CountOverflow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ShotError>;
