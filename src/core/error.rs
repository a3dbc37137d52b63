// src/core/error.rs

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("'{input}' is not a valid URL. Please enter a valid URL including http:// or https://")]
    InvalidUrl { input: String },
}
