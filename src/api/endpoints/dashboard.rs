//! Dashboard chart endpoints.
//!
//! `GET /api/dashboard/data` — latest-day inpatient snapshot.
//! `GET /api/dashboard/outpatient` — outpatient time series by selector,
//! granularity, and optional range.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::dashboard;
use crate::models::enums::{DepartmentSelector, PeriodGranularity};
use crate::models::{OutpatientChart, SnapshotChart};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientQuery {
    pub department: Option<String>,
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn snapshot(State(ctx): State<ApiContext>) -> Result<Json<SnapshotChart>, ApiError> {
    let conn = ctx.open_db()?;
    let chart = dashboard::inpatient_snapshot(&conn)?;
    Ok(Json(chart))
}

pub async fn outpatient(
    State(ctx): State<ApiContext>,
    Query(query): Query<OutpatientQuery>,
) -> Result<Json<OutpatientChart>, ApiError> {
    let selector = query
        .department
        .as_deref()
        .map(DepartmentSelector::parse)
        .unwrap_or_default();

    let period = match query.period.as_deref() {
        None => PeriodGranularity::default(),
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("unknown period: {raw}")))?,
    };

    let conn = ctx.open_db()?;
    let chart = dashboard::outpatient_chart(
        &conn,
        &selector,
        &period,
        query.start_date,
        query.end_date,
    )?;
    Ok(Json(chart))
}
