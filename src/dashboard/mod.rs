//! Chart aggregation over the fact tables.
//!
//! Builds grouped SQL aggregations according to a department selector and
//! a period granularity, then reshapes the rows into chart payloads. Query
//! failures propagate as `DatabaseError`; the API layer turns them into a
//! generic 500 after logging.

pub mod color;

use std::collections::HashMap;

use rusqlite::Connection;

use crate::db::{repository, DatabaseError};
use crate::models::enums::{DepartmentSelector, PeriodGranularity};
use crate::models::{Dataset, OutpatientChart, SnapshotChart};
use color::{resolve, rgb, rgba};

/// Fixed series color for the all-departments-summed view (teal).
const TOTAL_SERIES_RGB: (u8, u8, u8) = (75, 192, 192);

const SNAPSHOT_TITLE: &str = "Inpatient admissions by department";

/// Outpatient chart for the requested selector, granularity, and range.
///
/// Missing range bounds resolve to the MIN/MAX day present in the fact
/// table; an empty table yields an empty chart rather than an error.
pub fn outpatient_chart(
    conn: &Connection,
    selector: &DepartmentSelector,
    period: &PeriodGranularity,
    start: Option<String>,
    end: Option<String>,
) -> Result<OutpatientChart, DatabaseError> {
    let Some((start, end)) = resolve_range(conn, start, end)? else {
        return Ok(OutpatientChart {
            title: title_for(selector),
            ..OutpatientChart::default()
        });
    };

    match selector {
        DepartmentSelector::Total => total_chart(conn, period, &start, &end),
        DepartmentSelector::PerDepartment => per_department_chart(conn, period, &start, &end),
        DepartmentSelector::Named(name) => {
            single_department_chart(conn, name, period, &start, &end)
        }
    }
}

/// Inpatient snapshot: admissions on the most recent recorded day, one bar
/// per displayed department in seq order.
pub fn inpatient_snapshot(conn: &Connection) -> Result<SnapshotChart, DatabaseError> {
    let totals = repository::latest_admissions_by_department(conn)?;

    let mut chart = SnapshotChart {
        title: SNAPSHOT_TITLE.to_string(),
        ..SnapshotChart::default()
    };
    for (name, total) in totals {
        chart.labels.push(name);
        chart.values.push(total);
    }
    Ok(chart)
}

fn title_for(selector: &DepartmentSelector) -> String {
    match selector {
        DepartmentSelector::Total => "Outpatient visits (all departments)".to_string(),
        DepartmentSelector::PerDepartment => "Outpatient visits (by department)".to_string(),
        DepartmentSelector::Named(name) => format!("Outpatient visits ({name})"),
    }
}

/// Fill missing bounds from the fact table. None means the table is empty
/// and at least one bound was left open — nothing to chart.
fn resolve_range(
    conn: &Connection,
    start: Option<String>,
    end: Option<String>,
) -> Result<Option<(String, String)>, DatabaseError> {
    if let (Some(start), Some(end)) = (&start, &end) {
        return Ok(Some((start.clone(), end.clone())));
    }
    let Some((min, max)) = repository::outpatient_day_bounds(conn)? else {
        return Ok(None);
    };
    Ok(Some((start.unwrap_or(min), end.unwrap_or(max))))
}

fn total_chart(
    conn: &Connection,
    period: &PeriodGranularity,
    start: &str,
    end: &str,
) -> Result<OutpatientChart, DatabaseError> {
    let totals = repository::totals_by_period(conn, period, start, end)?;

    let mut labels = Vec::with_capacity(totals.len());
    let mut data = Vec::with_capacity(totals.len());
    for bucket in totals {
        labels.push(bucket.label);
        data.push(bucket.total);
    }

    Ok(OutpatientChart {
        title: title_for(&DepartmentSelector::Total),
        labels,
        datasets: vec![Dataset {
            label: "All departments".to_string(),
            data,
            border_color: rgb(TOTAL_SERIES_RGB),
            background_color: rgba(TOTAL_SERIES_RGB, 0.2),
            fill: false,
        }],
    })
}

fn per_department_chart(
    conn: &Connection,
    period: &PeriodGranularity,
    start: &str,
    end: &str,
) -> Result<OutpatientChart, DatabaseError> {
    let rows = repository::totals_by_period_and_department(conn, period, start, end)?;

    // Rows arrive ordered by (period, seq, name). Collect the distinct
    // labels and departments in encounter order, then pivot to a dense
    // label x department grid with zero fill.
    let mut labels: Vec<String> = Vec::new();
    let mut departments: Vec<(String, i64, Option<String>)> = Vec::new();
    let mut cells: HashMap<(String, String), i64> = HashMap::new();

    for row in rows {
        if !labels.contains(&row.label) {
            labels.push(row.label.clone());
        }
        if !departments.iter().any(|(name, _, _)| name == &row.department) {
            departments.push((row.department.clone(), row.seq, row.color.clone()));
        }
        cells.insert((row.label, row.department), row.total);
    }

    // A department first seen in a later period still sorts by seq; the
    // stable sort keeps name order for equal seq values.
    departments.sort_by_key(|(_, seq, _)| *seq);

    let datasets = departments
        .into_iter()
        .map(|(name, _, dept_color)| {
            let triple = resolve(dept_color.as_deref());
            let data = labels
                .iter()
                .map(|label| {
                    cells
                        .get(&(label.clone(), name.clone()))
                        .copied()
                        .unwrap_or(0)
                })
                .collect();
            Dataset {
                label: name,
                data,
                border_color: rgb(triple),
                background_color: rgba(triple, 0.5),
                fill: true,
            }
        })
        .collect();

    Ok(OutpatientChart {
        title: title_for(&DepartmentSelector::PerDepartment),
        labels,
        datasets,
    })
}

fn single_department_chart(
    conn: &Connection,
    name: &str,
    period: &PeriodGranularity,
    start: &str,
    end: &str,
) -> Result<OutpatientChart, DatabaseError> {
    let dept_color = repository::department_color(conn, name)?;
    let triple = resolve(dept_color.as_deref());

    let totals = repository::totals_by_period_for_department(conn, period, name, start, end)?;

    let mut labels = Vec::with_capacity(totals.len());
    let mut data = Vec::with_capacity(totals.len());
    for bucket in totals {
        labels.push(bucket.label);
        data.push(bucket.total);
    }

    Ok(OutpatientChart {
        title: title_for(&DepartmentSelector::Named(name.to_string())),
        labels,
        datasets: vec![Dataset {
            label: name.to_string(),
            data,
            border_color: rgb(triple),
            background_color: rgba(triple, 0.2),
            fill: false,
        }],
    })
}
