// src/service.rs

//! The scan workflow around the generator: validate, wait, generate, persist.
//!
//! The signed-in user and the history store live in a [`ScanService`] owned by
//! the front-end, cloned into each spawned scan task.

use crate::config::Settings;
use crate::core::error::ScanError;
use crate::core::models::ScanReport;
use crate::core::scanner::{generate_report_with, normalize_input, parse_target, GeneratorOptions};
use crate::history::{HistoryError, HistoryStore, JsonHistoryStore, ScanRecord};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// The result of a successful scan request.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub report: ScanReport,
    /// Id of the stored history record, when the scan was persisted.
    pub saved_as: Option<String>,
    /// Set when persisting failed. The report is still valid.
    pub save_error: Option<String>,
}

#[derive(Clone)]
pub struct ScanService {
    options: GeneratorOptions,
    latency: Duration,
    user_id: Option<String>,
    store: Arc<dyn HistoryStore>,
}

impl ScanService {
    pub fn new(settings: &Settings, store: Arc<dyn HistoryStore>) -> Self {
        Self {
            options: settings.generator_options(),
            latency: Duration::from_millis(settings.latency_ms),
            user_id: settings.user_id.clone(),
            store,
        }
    }

    /// Builds a service backed by the JSON history file named in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let store = JsonHistoryStore::open(settings.history_path());
        Self::new(settings, Arc::new(store))
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Validates `raw`, waits out the cosmetic latency and generates the report.
    ///
    /// Bare hosts are accepted and get `https://` prepended. Signed-in scans are
    /// saved to history; a failed save is reported in the outcome, not as an error.
    pub async fn scan_url(&self, raw: &str) -> Result<ScanOutcome, ScanError> {
        let url = normalize_input(raw);
        // Reject before waiting so bad input fails fast.
        parse_target(&url)?;

        info!(%url, latency_ms = self.latency.as_millis() as u64, "Starting simulated scan.");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let report = generate_report_with(&url, &self.options)?;
        let mut outcome = ScanOutcome { report, saved_as: None, save_error: None };

        if let Some(user_id) = &self.user_id {
            let record = ScanRecord::from_report(user_id, &outcome.report);
            let id = record.id.clone();
            match self.store.save(record) {
                Ok(()) => {
                    info!(scan_id = %id, "Scan saved to history.");
                    outcome.saved_as = Some(id);
                }
                Err(e) => {
                    warn!(error = %e, "Failed to save scan to history.");
                    outcome.save_error = Some(e.to_string());
                }
            }
        }

        info!(score = outcome.report.security_score, risk = %outcome.report.risk_level, "Simulated scan finished.");
        Ok(outcome)
    }

    /// History of the signed-in user. Anonymous sessions have none.
    pub fn fetch_history(&self) -> Result<Vec<ScanRecord>, HistoryError> {
        match &self.user_id {
            Some(user_id) => self.store.list(user_id),
            None => Ok(Vec::new()),
        }
    }

    pub fn delete_scan(&self, scan_id: &str) -> Result<(), HistoryError> {
        let Some(user_id) = &self.user_id else {
            return Err(HistoryError::NotFound(scan_id.to_string()));
        };
        self.store.delete(user_id, scan_id).inspect_err(|e| {
            error!(scan_id, error = %e, "Failed to delete scan.");
        })
    }
}
