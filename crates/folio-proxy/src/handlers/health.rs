use std::sync::Arc;

use axum::{Json, extract::State};
use folio::log;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub upstream: String,
}

#[derive(Serialize, Debug)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

fn human_readable_uptime(uptime_duration: chrono::TimeDelta) -> String {
    let uptime_seconds = uptime_duration.num_seconds();
    let days = uptime_duration.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

pub async fn get(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let now = chrono::Utc::now();
    let uptime = now.signed_duration_since(state.started_at);

    let health_response = HealthResponse {
        status: "healthy",
        timestamp: now.to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: UptimeInfo {
            seconds: uptime.num_seconds(),
            human: human_readable_uptime(uptime),
        },
        upstream: state.config.bff_base_url.clone(),
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}
