//! Dummy-data seeding for development databases.
//!
//! Usage: wardview-seed [DATABASE_PATH]
//! Deterministic: repeated runs produce identical fact tables.

use std::path::PathBuf;
use std::process::ExitCode;

use wardview::batch::log::StepLog;
use wardview::batch::seed::{run_seed, DEMO_USER_ID};
use wardview::db::sqlite::open_database;

fn main() -> ExitCode {
    let log = match StepLog::new("logs") {
        Ok(log) => log,
        Err(e) => {
            eprintln!("cannot create log directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    log.step("=== Dummy data seeding started ===");

    match run(&log) {
        Ok(()) => {
            log.step("=== Dummy data seeding complete ===");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.step(&format!("Error: {e}"));
            log.step("=== Dummy data seeding aborted ===");
            ExitCode::FAILURE
        }
    }
}

fn run(log: &StepLog) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| wardview::config::app_data_dir().join("wardview.db"));
    log.step(&format!("Database: {}", db_path.display()));

    let mut conn = open_database(&db_path)?;
    let summary = run_seed(&mut conn, log)?;

    log.step(&format!(
        "Seeded {} departments, {} wards, {} inpatient rows, {} outpatient rows",
        summary.departments, summary.wards, summary.inpatient_rows, summary.outpatient_rows
    ));
    if summary.staff_users > 0 {
        log.step(&format!("Demo staff user '{DEMO_USER_ID}' created"));
    }
    Ok(())
}
