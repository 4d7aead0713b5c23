//! # bt_core - Basketball Practice Shot Tracking
//!
//! 농구 연습 세션 동안 선수별/구역별 성공 슛을 기록하는 라이브러리.
//!
//! ## Features
//! - Seven fixed half-court zones with canvas hit-testing
//! - In-memory session store keyed by date → player → zone
//! - Pure form reducer (`update(state, event) -> Transition`)
//! - Court diagram rendering and a per-player PDF report
//! - JSON API for UI front-ends

pub mod api;
pub mod config;
pub mod court;
pub mod error;
pub mod form;
pub mod report;
pub mod roster;
pub mod session;
pub mod zones;

// Re-export main API functions
pub use api::{apply_event_json, session_summary_json, FormRequest, FormResponse};
pub use config::AppConfig;
pub use error::{Result, ShotError};

// Re-export form types
pub use form::{update, AppState, Form, FormContext, FormEvent, FormState, Notice, NoticeLevel, ShotEntry, Transition};

// Re-export session store
pub use session::{PlayerShots, Session, SessionKey, SessionStore, SessionSummary, ShotRecord, ShotTotals};

pub use court::{CourtFrame, CourtRenderer};
pub use report::{build_report, Report, REPORT_FILE_NAME, REPORT_MIME};
pub use roster::Roster;
pub use zones::{CanvasPoint, Zone, ZoneMap};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
