// src/lib.rs

//! A simulated web vulnerability scanner for teaching.
//!
//! Nothing is probed. [`generate_report`] derives a fabricated but fully
//! reproducible report from the target's hostname: the same host always gets
//! the same findings, stack, ports and score.

pub mod config;
pub mod core;
pub mod history;
pub mod logging;
pub mod service;

pub use crate::core::error::ScanError;
pub use crate::core::models::ScanReport;
pub use crate::core::scanner::{generate_report, generate_report_with, GeneratorOptions};
