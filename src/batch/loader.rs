//! Bulk import: repopulates the outpatient reporting table from a source
//! system inside a single all-or-nothing transaction.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::{Connection, TransactionBehavior};
use serde::Deserialize;

use super::log::StepLog;
use super::BatchError;
use crate::config::ConfigError;
use crate::db::repository;
use crate::models::enums::VisitType;
use crate::models::OutpatientRecord;

/// Import job settings, read from a JSON file in the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    /// Delete all existing reporting rows before inserting.
    pub clear_before_insert: bool,
    pub legacy: Option<LegacyConnection>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            database_path: crate::config::app_data_dir().join("wardview.db"),
            log_dir: PathBuf::from("logs"),
            clear_before_insert: true,
            legacy: None,
        }
    }
}

/// Connection parameters for the legacy source system, handed to a
/// legacy-backed `ImportSource` implementation when one is wired in.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyConnection {
    pub data_source: String,
    pub user: String,
    pub password: String,
}

impl ImportConfig {
    /// Read the config file at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Source seam for the import job: the legacy system's tabular export, or
/// the synthetic generator below.
pub trait ImportSource {
    fn fetch(&self) -> Result<Vec<OutpatientRecord>, BatchError>;
    fn describe(&self) -> String;
}

/// Synthetic rows in the shape of the legacy export, for environments
/// without a reachable source system.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub department_ids: Vec<String>,
    /// Fixed seed for reproducible imports; None draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).expect("static date"),
            end: NaiveDate::from_ymd_opt(2025, 10, 31).expect("static date"),
            department_ids: vec!["01".into(), "02".into(), "03".into()],
            seed: None,
        }
    }
}

impl ImportSource for SyntheticSource {
    fn fetch(&self) -> Result<Vec<OutpatientRecord>, BatchError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut rows = Vec::new();
        let mut day = self.start;
        while day <= self.end {
            for dept_id in &self.department_ids {
                rows.push(OutpatientRecord {
                    day,
                    department_id: dept_id.clone(),
                    visit_type: VisitType::First,
                    patient_count: rng.gen_range(10..40),
                });
                rows.push(OutpatientRecord {
                    day,
                    department_id: dept_id.clone(),
                    visit_type: VisitType::Repeat,
                    patient_count: rng.gen_range(30..80),
                });
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("synthetic source ({}..{})", self.start, self.end)
    }
}

/// Run the import. Delete and inserts happen inside one IMMEDIATE
/// transaction: the write lock is taken up front, so a second loader
/// instance blocks instead of interleaving, and readers keep the old rows
/// until the commit. Any failure rolls the whole batch back.
pub fn run_import(
    conn: &mut Connection,
    source: &dyn ImportSource,
    clear_existing: bool,
    log: &StepLog,
) -> Result<usize, BatchError> {
    log.step(&format!("Fetching rows from {}", source.describe()));
    let rows = source.fetch()?;
    log.step(&format!("Fetched {} rows", rows.len()));

    if rows.is_empty() {
        log.step("Nothing to import");
        return Ok(0);
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if clear_existing {
        let deleted = repository::clear_outpatient(&tx)?;
        log.step(&format!("Deleted {deleted} existing rows"));
    }

    let mut inserted = 0usize;
    for row in &rows {
        repository::insert_outpatient_day(&tx, row)?;
        inserted += 1;
    }

    tx.commit()?;
    log.step(&format!("Inserted {inserted} rows"));
    Ok(inserted)
}
