use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::render::{render_page, PageView};
use crate::session::{session_cookie, session_uid_from_headers};
use crate::state::AppState;
use crate::translate::{SubmitOutcome, SubmitStatus, TranslateRequest, TranslateResponse};

fn attach_session_cookie(mut response: Response, created: bool, session_uid: &str) -> Response {
    if created {
        info!("New session: {}", session_uid);
        if let Ok(value) = HeaderValue::from_str(&session_cookie(session_uid)) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// `GET /`: the form plus whatever this session translated last. Reads never
/// create a session and do not count as activity.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let page = match state.existing_session(session_uid_from_headers(&headers).as_deref()) {
        Some(ctx) => {
            let session = ctx.lock().await;
            let page = render_page(&PageView {
                form: None,
                translation: session.store.get(),
                error: None,
            });
            page
        }
        None => render_page(&PageView::default()),
    };
    Html(page).into_response()
}

/// `POST /translate`: an explicit form submission
pub async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<TranslateRequest>,
) -> Response {
    let (ctx, created) = state.session(session_uid_from_headers(&headers).as_deref());
    let mut session = ctx.lock().await;
    session.touch();

    let (status, error) = match state.translator.submit(&mut session.store, &form).await {
        Ok(_) => (StatusCode::OK, None),
        Err(e) => {
            error!("Translation failed for session {}: {}", session.session_uid, e);
            (StatusCode::BAD_GATEWAY, Some(e.to_string()))
        }
    };

    let page = render_page(&PageView {
        form: Some(&form),
        translation: session.store.get(),
        error,
    });
    attach_session_cookie((status, Html(page)).into_response(), created, &session.session_uid)
}

/// `POST /api/translate`: the same submission as JSON
pub async fn submit_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TranslateRequest>,
) -> Response {
    let (ctx, created) = state.session(session_uid_from_headers(&headers).as_deref());
    let mut session = ctx.lock().await;
    session.touch();

    let response = match state.translator.submit(&mut session.store, &request).await {
        Ok(SubmitOutcome::Translated(text)) => Json(TranslateResponse {
            status: SubmitStatus::Translated,
            translated_text: Some(text),
        })
        .into_response(),
        Ok(SubmitOutcome::Ignored) => Json(TranslateResponse {
            status: SubmitStatus::Ignored,
            translated_text: None,
        })
        .into_response(),
        Err(e) => {
            error!("Translation failed for session {}: {}", session.session_uid, e);
            (StatusCode::BAD_GATEWAY, Json(json!({"error": e.to_string()}))).into_response()
        }
    };
    attach_session_cookie(response, created, &session.session_uid)
}

/// `GET /api/translation`: the session's stored result, without touching it
pub async fn last_translation(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    let Some(ctx) = state.existing_session(session_uid_from_headers(&headers).as_deref()) else {
        return Json(json!({
            "translated_text": null,
            "target_language": null,
            "translated_at": null,
        }));
    };

    let session = ctx.lock().await;
    let last = session.store.get();
    Json(json!({
        "translated_text": last.map(|t| t.text.clone()),
        "target_language": last.map(|t| t.target_language.clone()),
        "translated_at": last.map(|t| t.translated_at.to_rfc3339()),
    }))
}
