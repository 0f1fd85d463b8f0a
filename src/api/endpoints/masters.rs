//! Master-data endpoints: displayed departments and wards.
//!
//! A failed master query is logged and answered with an empty list —
//! the front end treats empty as "nothing to display", not as an error.

use axum::extract::State;
use axum::Json;

use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{Department, Ward};

pub async fn departments(State(ctx): State<ApiContext>) -> Json<Vec<Department>> {
    let departments = ctx
        .open_db()
        .and_then(|conn| repository::list_displayed_departments(&conn))
        .unwrap_or_else(|e| {
            tracing::error!("department master query failed: {e}");
            Vec::new()
        });
    Json(departments)
}

pub async fn wards(State(ctx): State<ApiContext>) -> Json<Vec<Ward>> {
    let wards = ctx
        .open_db()
        .and_then(|conn| repository::list_displayed_wards(&conn))
        .unwrap_or_else(|e| {
            tracing::error!("ward master query failed: {e}");
            Vec::new()
        });
    Json(wards)
}
