use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::StaffUser;

pub fn find_staff_user(
    conn: &Connection,
    id: &str,
) -> Result<Option<StaffUser>, DatabaseError> {
    let user = conn
        .query_row(
            "SELECT id, password_hash, staff_level FROM staff_directory WHERE id = ?1",
            params![id],
            |row| {
                Ok(StaffUser {
                    id: row.get(0)?,
                    password_hash: row.get(1)?,
                    staff_level: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(user)
}

pub fn upsert_staff_user(conn: &Connection, user: &StaffUser) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO staff_directory (id, password_hash, staff_level)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (id) DO UPDATE SET
             password_hash = excluded.password_hash,
             staff_level = excluded.staff_level",
        params![user.id, user.password_hash, user.staff_level],
    )?;
    Ok(())
}

pub fn count_staff_users(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM staff_directory", [], |row| row.get(0))?;
    Ok(count)
}
