//! Bearer token authentication middleware.
//!
//! Extracts `Authorization: Bearer <token>`, validates signature, expiry,
//! issuer, audience, and the staff-level allow-list, then injects
//! `StaffContext` into request extensions for downstream handlers. When
//! the deployment runs with `require_auth` off, requests pass through
//! untouched.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, StaffContext};
use crate::auth::token;

pub async fn require_auth(req: Request<axum::body::Body>, next: Next) -> Response {
    match require_auth_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_auth_inner(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx: ApiContext = req
        .extensions()
        .get::<ApiContext>()
        .cloned()
        .ok_or(ApiError::Internal("missing API context".into()))?;

    if !ctx.config.require_auth {
        return Ok(next.run(req).await);
    }

    let bearer = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?
        .to_string();

    let claims =
        token::decode_token(&ctx.config.auth, &bearer).map_err(|_| ApiError::Unauthorized)?;

    // A level removed from the allow-list locks out still-valid tokens.
    if !ctx
        .config
        .auth
        .allowed_staff_levels
        .iter()
        .any(|level| level == &claims.staff_level)
    {
        return Err(ApiError::Unauthorized);
    }

    tracing::debug!(user = %claims.sub, "authenticated request");
    req.extensions_mut().insert(StaffContext {
        user_id: claims.sub,
        staff_level: claims.staff_level,
    });

    Ok(next.run(req).await)
}
