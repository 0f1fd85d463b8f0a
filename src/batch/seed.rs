//! Deterministic dummy-data seeding for development databases.
//!
//! Fixed-seed generation: repeated runs against a fresh database produce
//! identical fact tables. Masters are seeded only when empty; each table
//! load runs in its own all-or-nothing transaction.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;

use super::log::StepLog;
use super::BatchError;
use crate::auth::password;
use crate::db::repository;
use crate::models::enums::VisitType;
use crate::models::{Department, InpatientRecord, OutpatientRecord, StaffUser, Ward};

pub const SEED: u64 = 123;

/// Demo login seeded into an empty staff directory. The salt is fixed so
/// repeated runs stay byte-identical.
pub const DEMO_USER_ID: &str = "demo";
pub const DEMO_PASSWORD: &str = "wardview-demo";
const DEMO_SALT_B64: &str = "d2FyZHZpZXdzYWx0";

const WARD_NAMES: [&str; 4] = ["Ward 3F", "Ward 4F", "Ward 5F", "Ward 6F"];

fn seed_date_range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("static date"),
        NaiveDate::from_ymd_opt(2025, 10, 31).expect("static date"),
    )
}

fn default_departments() -> Vec<Department> {
    [
        ("01", "Internal Medicine", 1, Some("#2563eb")),
        ("02", "Pediatrics", 2, Some("#16a34a")),
        ("03", "Orthopedics", 3, Some("#f97316")),
    ]
    .into_iter()
    .map(|(id, name, seq, color)| Department {
        id: id.into(),
        name: name.into(),
        seq,
        is_display: true,
        color: color.map(Into::into),
    })
    .collect()
}

fn default_wards() -> Vec<Ward> {
    WARD_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Ward {
            id: format!("{}1", i + 3),
            name: (*name).into(),
            seq: i as i64 + 1,
            is_display: true,
            color: None,
        })
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub wards: usize,
    pub inpatient_rows: usize,
    pub outpatient_rows: usize,
    pub staff_users: usize,
}

/// Populate a development database: clear the fact tables, seed the
/// masters when empty, then generate one inpatient row per
/// (day, department, ward) and two outpatient rows per (day, department)
/// across the fixed date range.
pub fn run_seed(conn: &mut Connection, log: &StepLog) -> Result<SeedSummary, BatchError> {
    let (start, end) = seed_date_range();
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut summary = SeedSummary::default();

    log.step("Clearing fact tables");
    {
        let tx = conn.transaction()?;
        repository::clear_outpatient(&tx)?;
        repository::clear_inpatient(&tx)?;
        tx.commit()?;
    }

    log.step("Seeding master tables");
    {
        let tx = conn.transaction()?;
        if repository::count_departments(&tx)? == 0 {
            for dept in default_departments() {
                repository::insert_department(&tx, &dept)?;
                summary.departments += 1;
            }
        }
        if repository::count_wards(&tx)? == 0 {
            for ward in default_wards() {
                repository::insert_ward(&tx, &ward)?;
                summary.wards += 1;
            }
        }
        tx.commit()?;
    }
    log.step(&format!(
        "Masters seeded: {} departments, {} wards",
        summary.departments, summary.wards
    ));

    let department_ids: Vec<String> =
        default_departments().into_iter().map(|d| d.id).collect();

    log.step("Generating inpatient rows");
    {
        let tx = conn.transaction()?;
        let mut day = start;
        while day <= end {
            for dept_id in &department_ids {
                for ward in WARD_NAMES {
                    repository::insert_inpatient_day(
                        &tx,
                        &InpatientRecord {
                            day,
                            department_id: dept_id.clone(),
                            ward_name: ward.into(),
                            admissions: rng.gen_range(5..25),
                            discharges: rng.gen_range(0..8),
                            transfers_in: rng.gen_range(0..5),
                            transfers_out: rng.gen_range(0..5),
                        },
                    )?;
                    summary.inpatient_rows += 1;
                }
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        tx.commit()?;
    }
    log.step(&format!("Inserted {} inpatient rows", summary.inpatient_rows));

    log.step("Generating outpatient rows");
    {
        let tx = conn.transaction()?;
        let mut day = start;
        while day <= end {
            for dept_id in &department_ids {
                repository::insert_outpatient_day(
                    &tx,
                    &OutpatientRecord {
                        day,
                        department_id: dept_id.clone(),
                        visit_type: VisitType::First,
                        patient_count: rng.gen_range(10..40),
                    },
                )?;
                repository::insert_outpatient_day(
                    &tx,
                    &OutpatientRecord {
                        day,
                        department_id: dept_id.clone(),
                        visit_type: VisitType::Repeat,
                        patient_count: rng.gen_range(30..80),
                    },
                )?;
                summary.outpatient_rows += 2;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        tx.commit()?;
    }
    log.step(&format!(
        "Inserted {} outpatient rows",
        summary.outpatient_rows
    ));

    if repository::count_staff_users(conn)? == 0 {
        log.step("Seeding demo staff user");
        let hash = password::hash_password_with_salt(DEMO_PASSWORD, DEMO_SALT_B64)?;
        repository::upsert_staff_user(
            conn,
            &StaffUser {
                id: DEMO_USER_ID.into(),
                password_hash: hash,
                staff_level: "1".into(),
            },
        )?;
        summary.staff_users = 1;
    }

    Ok(summary)
}
