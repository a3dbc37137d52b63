// src/history.rs

//! Scan history persistence.
//!
//! The report generator never depends on a save succeeding; the service logs
//! failures and hands the report back regardless.

use crate::core::models::{RiskLevel, ScanReport, VulnerabilitiesSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scan not found: {0}")]
    NotFound(String),
    #[error("history store lock poisoned")]
    Poisoned,
}

/// One persisted scan, in the shape the history table stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanRecord {
    pub id: String,
    pub user_id: String,
    pub url: String,
    pub security_score: u8,
    pub risk_level: RiskLevel,
    /// Per-severity counts, copied from the report summary.
    pub vulnerabilities_count: VulnerabilitiesSummary,
    pub scan_date: String,
    pub created_at: DateTime<Utc>,
    pub full_report: ScanReport,
}

impl ScanRecord {
    pub fn from_report(user_id: &str, report: &ScanReport) -> Self {
        let created_at = Utc::now();
        Self {
            id: format!(
                "scan-{}-{:04x}",
                created_at.timestamp_millis(),
                rand::random::<u16>()
            ),
            user_id: user_id.to_string(),
            url: report.url.clone(),
            security_score: report.security_score,
            risk_level: report.risk_level,
            vulnerabilities_count: report.vulnerabilities_summary,
            scan_date: report.scan_date.clone(),
            created_at,
            full_report: report.clone(),
        }
    }
}

/// Where scan records go.
pub trait HistoryStore: Send + Sync {
    fn save(&self, record: ScanRecord) -> Result<(), HistoryError>;
    /// Records belonging to `user_id`, newest first.
    fn list(&self, user_id: &str) -> Result<Vec<ScanRecord>, HistoryError>;
    fn delete(&self, user_id: &str, scan_id: &str) -> Result<(), HistoryError>;
}

fn newest_first(records: &[ScanRecord], user_id: &str) -> Vec<ScanRecord> {
    let mut owned: Vec<ScanRecord> = records.iter().filter(|r| r.user_id == user_id).cloned().collect();
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    owned
}

fn remove_record(records: &mut Vec<ScanRecord>, user_id: &str, scan_id: &str) -> Result<(), HistoryError> {
    let position = records
        .iter()
        .position(|r| r.id == scan_id && r.user_id == user_id)
        .ok_or_else(|| HistoryError::NotFound(scan_id.to_string()))?;
    records.remove(position);
    Ok(())
}

/// Keeps records in memory for the lifetime of the process.
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: Mutex<Vec<ScanRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn save(&self, record: ScanRecord) -> Result<(), HistoryError> {
        self.records.lock().map_err(|_| HistoryError::Poisoned)?.push(record);
        Ok(())
    }

    fn list(&self, user_id: &str) -> Result<Vec<ScanRecord>, HistoryError> {
        let records = self.records.lock().map_err(|_| HistoryError::Poisoned)?;
        Ok(newest_first(&records, user_id))
    }

    fn delete(&self, user_id: &str, scan_id: &str) -> Result<(), HistoryError> {
        let mut records = self.records.lock().map_err(|_| HistoryError::Poisoned)?;
        remove_record(&mut records, user_id, scan_id)
    }
}

/// Persists all records as one JSON array on disk.
pub struct JsonHistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonHistoryStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<Vec<ScanRecord>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, records: &[ScanRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        // Replace the file in one step so an interrupted write leaves the old history intact.
        let staging = self.staging_path();
        std::fs::write(&staging, json)?;
        std::fs::rename(&staging, &self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "History file written.");
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    fn save(&self, record: ScanRecord) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().map_err(|_| HistoryError::Poisoned)?;
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)
    }

    fn list(&self, user_id: &str) -> Result<Vec<ScanRecord>, HistoryError> {
        let _guard = self.lock.lock().map_err(|_| HistoryError::Poisoned)?;
        Ok(newest_first(&self.read_all()?, user_id))
    }

    fn delete(&self, user_id: &str, scan_id: &str) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().map_err(|_| HistoryError::Poisoned)?;
        let mut records = self.read_all()?;
        remove_record(&mut records, user_id, scan_id)?;
        self.write_all(&records)
    }
}
