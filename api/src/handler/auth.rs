use axum::{extract::State, http::header, response::IntoResponse, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    model::auth::{AuthResponse, CreateTokenRequest},
    session,
};

/// クライアントの身元申告に対してセッショントークンを発行し、
/// HTTP-only Cookie で返す。
pub async fn create_token(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateTokenRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let token = registry.token_service().issue(&req.email)?;
    let cookie = session::session_cookie(&registry.app_config().auth, token);
    Ok((
        [(header::SET_COOKIE, cookie.to_string())],
        Json(AuthResponse { success: true }),
    ))
}

pub async fn logout(State(registry): State<AppRegistry>) -> AppResult<impl IntoResponse> {
    let cookie = session::expired_session_cookie(&registry.app_config().auth);
    Ok((
        [(header::SET_COOKIE, cookie.to_string())],
        Json(AuthResponse { success: true }),
    ))
}
