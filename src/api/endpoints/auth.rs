//! `POST /api/auth/login` — staff login, issues a session token.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::types::ApiContext;
use crate::auth::{self, LoginError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_level: Option<String>,
    pub message: String,
}

impl LoginResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            token: None,
            user_id: None,
            staff_level: None,
            message,
        }
    }
}

pub async fn login(
    State(ctx): State<ApiContext>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    // Blank input is rejected before any I/O — no directory connection yet.
    if request.id.trim().is_empty() || request.password.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure(
                LoginError::MissingCredentials.to_string(),
            )),
        );
    }

    let conn = match ctx.open_db() {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("opening the staff directory failed: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoginResponse::failure(LoginError::Processing.to_string())),
            );
        }
    };

    match auth::authenticate(&conn, &ctx.config.auth, &request.id, &request.password) {
        Ok(success) => (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                token: Some(success.token),
                user_id: Some(success.user_id),
                staff_level: Some(success.staff_level),
                message: "Login successful.".to_string(),
            }),
        ),
        Err(err) => (status_for(&err), Json(LoginResponse::failure(err.to_string()))),
    }
}

fn status_for(err: &LoginError) -> StatusCode {
    match err {
        LoginError::MissingCredentials => StatusCode::BAD_REQUEST,
        LoginError::InvalidCredentials | LoginError::NotAuthorized => StatusCode::UNAUTHORIZED,
        LoginError::Processing => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
