use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Department, Ward};

pub fn insert_department(conn: &Connection, dept: &Department) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO departments (id, name, seq, is_display, color)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![dept.id, dept.name, dept.seq, dept.is_display, dept.color],
    )?;
    Ok(())
}

pub fn insert_ward(conn: &Connection, ward: &Ward) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO wards (id, name, seq, is_display, color)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![ward.id, ward.name, ward.seq, ward.is_display, ward.color],
    )?;
    Ok(())
}

/// Displayed departments in chart order: seq first, id breaks ties.
pub fn list_displayed_departments(conn: &Connection) -> Result<Vec<Department>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, seq, is_display, color
         FROM departments WHERE is_display = 1 ORDER BY seq, id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Department {
            id: row.get(0)?,
            name: row.get(1)?,
            seq: row.get(2)?,
            is_display: row.get(3)?,
            color: row.get(4)?,
        })
    })?;

    let mut departments = Vec::new();
    for row in rows {
        departments.push(row?);
    }
    Ok(departments)
}

/// Displayed wards in chart order: seq first, id breaks ties.
pub fn list_displayed_wards(conn: &Connection) -> Result<Vec<Ward>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, seq, is_display, color
         FROM wards WHERE is_display = 1 ORDER BY seq, id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Ward {
            id: row.get(0)?,
            name: row.get(1)?,
            seq: row.get(2)?,
            is_display: row.get(3)?,
            color: row.get(4)?,
        })
    })?;

    let mut wards = Vec::new();
    for row in rows {
        wards.push(row?);
    }
    Ok(wards)
}

/// Master color for a department by exact name. None covers both a missing
/// row and a NULL color column; the chart layer applies the fallback.
pub fn department_color(
    conn: &Connection,
    name: &str,
) -> Result<Option<String>, DatabaseError> {
    let color: Option<Option<String>> = conn
        .query_row(
            "SELECT color FROM departments WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(color.flatten())
}

pub fn count_departments(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))?;
    Ok(count)
}

pub fn count_wards(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM wards", [], |row| row.get(0))?;
    Ok(count)
}
