// 폼 JSON API - 외부 UI에서 이벤트를 문자열로 주고받는다
use serde::{Deserialize, Serialize};

use crate::form::{Form, FormEvent, Notice, ZoneLine};
use crate::session::{SessionKey, SessionSummary};
use crate::SCHEMA_VERSION;

/// 폼 이벤트 요청
#[derive(Debug, Deserialize)]
pub struct FormRequest {
    pub schema_version: u8,
    pub event: FormEvent,
}

/// 폼 이벤트 응답
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FormResponse {
    pub schema_version: u8,
    pub success: bool,
    #[serde(default)]
    pub notices: Vec<Notice>,
    pub session_date: Option<String>,
    pub active_zone: Option<String>,
    #[serde(default)]
    pub selected_players: Vec<String>,
    pub error_message: Option<String>,
}

impl FormResponse {
    fn error(message: String) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            success: false,
            notices: Vec::new(),
            session_date: None,
            active_zone: None,
            selected_players: Vec::new(),
            error_message: Some(message),
        }
    }
}

/// 세션 요약 응답
#[derive(Debug, Serialize)]
pub struct SessionSummaryResponse {
    pub schema_version: u8,
    pub date: SessionKey,
    pub has_data: bool,
    pub players: Vec<PlayerBreakdown>,
    pub summary: Option<SessionSummary>,
}

#[derive(Debug, Serialize)]
pub struct PlayerBreakdown {
    pub player: String,
    pub zones: Vec<ZoneLine>,
}

fn parse_request(request_json: &str) -> Result<FormRequest, String> {
    let request: FormRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }
    Ok(request)
}

/// 요청 하나를 폼에 적용하고 응답 JSON 반환. 파싱 실패도 응답으로 돌려준다.
pub fn apply_event_json(form: &mut Form, request_json: &str) -> String {
    let response = match parse_request(request_json) {
        Ok(request) => {
            let notices = form.dispatch(request.event);
            let state = &form.state().form;
            FormResponse {
                schema_version: SCHEMA_VERSION,
                success: true,
                notices,
                session_date: Some(state.session_key().to_string()),
                active_zone: state.active_zone.map(|z| z.to_string()),
                selected_players: state.selected_players.clone(),
                error_message: None,
            }
        }
        Err(message) => {
            log::warn!("Rejected form request: {}", message);
            FormResponse::error(message)
        }
    };
    to_json(&response)
}

/// 날짜별 선수/구역 상세 + 합계
pub fn session_summary_json(form: &Form, date: SessionKey) -> String {
    let session = form.state().store.session(date).filter(|s| !s.is_empty());
    let players = session
        .map(|s| {
            s.players()
                .map(|(name, shots)| PlayerBreakdown {
                    player: name.clone(),
                    zones: shots.zones().map(|(zone, counts)| ZoneLine { zone: *zone, counts: *counts }).collect(),
                })
                .collect()
        })
        .unwrap_or_default();

    to_json(&SessionSummaryResponse {
        schema_version: SCHEMA_VERSION,
        date,
        has_data: session.is_some(),
        players,
        summary: session.map(SessionSummary::from_session),
    })
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(r#"{{"schema_version":{},"success":false,"error_message":"Serialization failed: {}"}}"#, SCHEMA_VERSION, e)
    })
}
