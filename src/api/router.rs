//! Router assembly.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`; the optional static front end is
//! served from the router fallback with an index.html rewrite.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::config::AppConfig;

/// Build the full application router from the loaded configuration.
pub fn app_router(config: AppConfig) -> Router {
    let static_dir = config.static_dir.clone();
    let ctx = ApiContext::new(config);

    // Offline same-network deployment: any origin/method/header.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .nest("/api", api_router(ctx))
        .layer(cors);

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).not_found_service(index));
    }

    app
}

fn api_router(ctx: ApiContext) -> Router {
    // Dashboard and master data sit behind the bearer middleware; the
    // middleware itself is a no-op when require_auth is off.
    let protected = Router::new()
        .route("/dashboard/data", get(endpoints::dashboard::snapshot))
        .route("/dashboard/outpatient", get(endpoints::dashboard::outpatient))
        .route("/masters/departments", get(endpoints::masters::departments))
        .route("/masters/wards", get(endpoints::masters::wards))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::auth::require_auth))
        // Extension must be outermost so the middleware can extract it.
        .layer(axum::Extension(ctx.clone()));

    let open = Router::new()
        .route("/auth/login", post(endpoints::auth::login))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx);

    open.merge(protected)
}
