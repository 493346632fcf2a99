use std::time::Duration;
use anyhow::Result;
use axum::http::{header, HeaderMap};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "translator_session";

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Read the session id from the `Cookie` headers. Only well-formed UUIDs count.
pub fn session_uid_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(|uid| uid.to_string())
}

pub fn session_cookie(session_uid: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, session_uid
    )
}

/// Convert the configured idle timeout, rejecting values chrono cannot represent.
pub fn idle_timeout(secs: u64) -> Result<chrono::Duration> {
    i64::try_from(secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .ok_or_else(|| anyhow::anyhow!("session_idle_timeout_secs is too large: {}", secs))
}

/// Periodically forget sessions idle longer than the configured timeout.
pub fn spawn_session_sweeper(state: AppState) -> Result<JoinHandle<()>> {
    let max_idle = idle_timeout(state.config.system_config.session_idle_timeout_secs)?;

    Ok(tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = state.sweep_idle_sessions(max_idle);
            if removed > 0 {
                debug!("Removed {} idle sessions", removed);
            }
        }
    }))
}
