use crate::cookies;
use crate::state::AppState;
use crate::views;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use shared::Error;
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub state: String,
}

/// GET /login
///
/// OAuth callback. Exchanges the `code` for an access token, creates a
/// session and redirects to the dashboard. A rejected code re-renders the
/// login page with the origin's error message.
pub async fn oauth_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    if params.code.is_empty() || params.state.is_empty() {
        warn!("oauth callback missing code or state");
        return (StatusCode::BAD_REQUEST, "Missing callback parameters").into_response();
    }

    match state.github.exchange_code(&params.code).await {
        Ok(token) => {
            let session = state.sessions.create(token.access_token, token.scope).await;
            info!("created session for oauth login");
            (
                [(header::SET_COOKIE, cookies::session_cookie(&session.id))],
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(err @ (Error::Origin { .. } | Error::Fetch(_))) => {
            warn!("oauth code exchange failed: {}", err);
            Html(views::login_page(
                &state.github.login_url(),
                Some(&err.to_string()),
            ))
            .into_response()
        }
        Err(err) => {
            error!("oauth code exchange failed unexpectedly: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST /logout
///
/// Invalidate the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = cookies::session_id(&headers) {
        state.sessions.invalidate(&id).await;
    }

    (
        [(header::SET_COOKIE, cookies::clear_session_cookie())],
        Redirect::to("/"),
    )
        .into_response()
}
