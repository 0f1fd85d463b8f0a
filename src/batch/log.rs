//! Step logging for the batch binaries: one timestamped line per step to
//! the console and to a daily log file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

pub struct StepLog {
    log_dir: PathBuf,
}

impl StepLog {
    pub fn new(log_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let log_dir = log_dir.into();
        fs::create_dir_all(&log_dir)?;
        Ok(Self { log_dir })
    }

    /// Record one step. A failed file write is reported on stderr and the
    /// run continues; the console line always goes out.
    pub fn step(&self, message: &str) {
        let now = Local::now();
        let line = format!("[{}] {}", now.format("%Y-%m-%d %H:%M:%S"), message);
        println!("{line}");

        let file_path = self
            .log_dir
            .join(format!("import_{}.log", now.format("%Y%m%d")));
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(e) = written {
            eprintln!("log file write failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_append_to_a_daily_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = StepLog::new(dir.path()).unwrap();
        log.step("first");
        log.step("second");

        let file_name = format!("import_{}.log", Local::now().format("%Y%m%d"));
        let content = fs::read_to_string(dir.path().join(file_name)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
        // [YYYY-MM-DD HH:MM:SS] prefix
        assert!(lines[0].starts_with('['));
        assert_eq!(lines[0].find(']'), Some(20));
    }

    #[test]
    fn creates_missing_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs").join("batch");
        let log = StepLog::new(&nested).unwrap();
        log.step("hello");
        assert!(nested.exists());
    }
}
