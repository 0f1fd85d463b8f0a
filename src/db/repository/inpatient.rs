use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::InpatientRecord;

pub fn insert_inpatient_day(
    conn: &Connection,
    record: &InpatientRecord,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO inpatient_daily
         (day, department_id, ward_name, admissions, discharges, transfers_in, transfers_out)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            record.day.to_string(),
            record.department_id,
            record.ward_name,
            record.admissions,
            record.discharges,
            record.transfers_in,
            record.transfers_out,
        ],
    )?;
    Ok(())
}

pub fn clear_inpatient(conn: &Connection) -> Result<usize, DatabaseError> {
    let deleted = conn.execute("DELETE FROM inpatient_daily", [])?;
    Ok(deleted)
}

pub fn count_inpatient_rows(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM inpatient_daily", [], |row| row.get(0))?;
    Ok(count)
}

/// Admissions on the most recent recorded day, summed per displayed
/// department in seq order. Empty table yields no rows.
pub fn latest_admissions_by_department(
    conn: &Connection,
) -> Result<Vec<(String, i64)>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT d.name, SUM(i.admissions) AS total
         FROM inpatient_daily i
         JOIN departments d ON d.id = i.department_id
         WHERE i.day = (SELECT MAX(day) FROM inpatient_daily)
           AND d.is_display = 1
         GROUP BY d.name, d.seq, d.id
         ORDER BY d.seq, d.id",
    )?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut totals = Vec::new();
    for row in rows {
        totals.push(row?);
    }
    Ok(totals)
}
