pub mod form_json;

pub use form_json::{
    apply_event_json, session_summary_json, FormRequest, FormResponse, PlayerBreakdown,
    SessionSummaryResponse,
};
