// 훈련 세션 데이터: 기록, 3단계 저장소, 집계

pub mod aggregate;
pub mod record;
pub mod store;

pub use aggregate::{PlayerTotalsRow, SessionSummary, ShotTotals};
pub use record::ShotRecord;
pub use store::{PlayerShots, Session, SessionKey, SessionStore, SESSION_KEY_FORMAT};
