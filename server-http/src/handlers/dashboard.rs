use crate::cookies;
use crate::state::AppState;
use crate::views;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use orgboard::auth::Session;
use shared::{Error, Result};
use tracing::{error, warn};

/// GET /
///
/// With a valid session: fetch the user and their organisations (through the
/// conditional cache) and render the dashboard. Without one: render the login
/// page with a fresh authorize URL.
pub async fn dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = match cookies::session_id(&headers) {
        Some(id) => state.sessions.get(&id).await,
        None => None,
    };

    let Some(session) = session else {
        return Html(views::login_page(&state.github.login_url(), None)).into_response();
    };

    match render_dashboard(&state, &session).await {
        Ok(page) => Html(page).into_response(),
        Err(err @ (Error::Origin { .. } | Error::Fetch(_))) => {
            // Stale or revoked token: drop the session and ask for a fresh login
            warn!("github request failed, clearing session: {}", err);
            state.sessions.invalidate(&session.id).await;
            (
                [(header::SET_COOKIE, cookies::clear_session_cookie())],
                Html(views::login_page(
                    &state.github.login_url(),
                    Some(&err.to_string()),
                )),
            )
                .into_response()
        }
        Err(err) => {
            error!("failed to render dashboard: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn render_dashboard(state: &AppState, session: &Session) -> Result<String> {
    let user = state.github.get_user(&session.access_token).await?;
    let orgs = state
        .github
        .get_organisations(&session.access_token, &user)
        .await?;

    Ok(views::dashboard_page(&user, &orgs))
}
