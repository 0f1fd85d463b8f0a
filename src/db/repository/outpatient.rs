use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::enums::PeriodGranularity;
use crate::models::OutpatientRecord;

/// One aggregated bucket from a grouped outpatient query.
#[derive(Debug, Clone)]
pub struct PeriodTotal {
    pub label: String,
    pub total: i64,
}

/// One (period, department) bucket, carrying the master display metadata
/// needed to order and color the pivoted series.
#[derive(Debug, Clone)]
pub struct DepartmentPeriodTotal {
    pub label: String,
    pub department: String,
    pub seq: i64,
    pub color: Option<String>,
    pub total: i64,
}

pub fn insert_outpatient_day(
    conn: &Connection,
    record: &OutpatientRecord,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO outpatient_daily (day, department_id, visit_type, patient_count)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            record.day.to_string(),
            record.department_id,
            record.visit_type.as_flag(),
            record.patient_count,
        ],
    )?;
    Ok(())
}

pub fn clear_outpatient(conn: &Connection) -> Result<usize, DatabaseError> {
    let deleted = conn.execute("DELETE FROM outpatient_daily", [])?;
    Ok(deleted)
}

pub fn count_outpatient_rows(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM outpatient_daily", [], |row| row.get(0))?;
    Ok(count)
}

/// MIN/MAX day present in the outpatient table, None when empty.
pub fn outpatient_day_bounds(
    conn: &Connection,
) -> Result<Option<(String, String)>, DatabaseError> {
    let bounds: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(day), MAX(day) FROM outpatient_daily",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    match bounds {
        (Some(min), Some(max)) => Ok(Some((min, max))),
        _ => Ok(None),
    }
}

/// Visit totals per period bucket across every department.
///
/// The grouping expression comes from the closed PeriodGranularity enum,
/// never from request input; the date bounds are bound parameters.
pub fn totals_by_period(
    conn: &Connection,
    period: &PeriodGranularity,
    start: &str,
    end: &str,
) -> Result<Vec<PeriodTotal>, DatabaseError> {
    let expr = period.group_expr();
    let mut stmt = conn.prepare(&format!(
        "SELECT {expr} AS period, SUM(patient_count) AS total
         FROM outpatient_daily
         WHERE day BETWEEN ?1 AND ?2
         GROUP BY {expr}
         ORDER BY {expr}"
    ))?;

    let rows = stmt.query_map(params![start, end], |row| {
        Ok(PeriodTotal {
            label: row.get(0)?,
            total: row.get(1)?,
        })
    })?;

    let mut totals = Vec::new();
    for row in rows {
        totals.push(row?);
    }
    Ok(totals)
}

/// Visit totals per (period, displayed department) bucket, ordered by
/// period then department seq then name. The chart layer pivots this
/// sparse list into a dense label x department grid.
pub fn totals_by_period_and_department(
    conn: &Connection,
    period: &PeriodGranularity,
    start: &str,
    end: &str,
) -> Result<Vec<DepartmentPeriodTotal>, DatabaseError> {
    let expr = period.group_expr();
    let mut stmt = conn.prepare(&format!(
        "SELECT {expr} AS period, d.name, d.seq, d.color, SUM(o.patient_count) AS total
         FROM outpatient_daily o
         JOIN departments d ON d.id = o.department_id
         WHERE o.day BETWEEN ?1 AND ?2
           AND d.is_display = 1
         GROUP BY {expr}, d.name, d.seq, d.color
         ORDER BY {expr}, d.seq, d.name"
    ))?;

    let rows = stmt.query_map(params![start, end], |row| {
        Ok(DepartmentPeriodTotal {
            label: row.get(0)?,
            department: row.get(1)?,
            seq: row.get(2)?,
            color: row.get(3)?,
            total: row.get(4)?,
        })
    })?;

    let mut totals = Vec::new();
    for row in rows {
        totals.push(row?);
    }
    Ok(totals)
}

/// Visit totals per period bucket for one department by exact name.
/// An unknown name simply matches no rows.
pub fn totals_by_period_for_department(
    conn: &Connection,
    period: &PeriodGranularity,
    department: &str,
    start: &str,
    end: &str,
) -> Result<Vec<PeriodTotal>, DatabaseError> {
    let expr = period.group_expr();
    let mut stmt = conn.prepare(&format!(
        "SELECT {expr} AS period, SUM(o.patient_count) AS total
         FROM outpatient_daily o
         JOIN departments d ON d.id = o.department_id
         WHERE d.name = ?1
           AND o.day BETWEEN ?2 AND ?3
         GROUP BY {expr}
         ORDER BY {expr}"
    ))?;

    let rows = stmt.query_map(params![department, start, end], |row| {
        Ok(PeriodTotal {
            label: row.get(0)?,
            total: row.get(1)?,
        })
    })?;

    let mut totals = Vec::new();
    for row in rows {
        totals.push(row?);
    }
    Ok(totals)
}
