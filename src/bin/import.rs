//! One-shot bulk import of the outpatient reporting table.
//!
//! Usage: wardview-import [DATABASE_PATH]
//! Reads import.json from the working directory when present; the
//! positional argument overrides the configured database path.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use wardview::batch::loader::{run_import, ImportConfig, SyntheticSource};
use wardview::batch::log::StepLog;
use wardview::db::sqlite::open_database;

fn main() -> ExitCode {
    let config = match ImportConfig::load(Path::new("import.json")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let log = match StepLog::new(&config.log_dir) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("cannot create log directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    log.step("=== Import started ===");
    let started = Instant::now();

    match run(&config, &log) {
        Ok(count) => {
            log.step(&format!(
                "Import finished: {count} rows in {:.2}s",
                started.elapsed().as_secs_f64()
            ));
            log.step("=== Import complete ===");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.step(&format!("Error: {e}"));
            log.step("=== Import aborted ===");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ImportConfig, log: &StepLog) -> Result<usize, Box<dyn std::error::Error>> {
    let db_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.database_path.clone());
    log.step(&format!("Database: {}", db_path.display()));

    if config.legacy.is_some() {
        log.step("Legacy connection configured; this build has no legacy connector, using the synthetic source");
    }

    let mut conn = open_database(&db_path)?;
    let source = SyntheticSource::default();
    let count = run_import(&mut conn, &source, config.clear_before_insert, log)?;
    Ok(count)
}
