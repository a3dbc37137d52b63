// src/core/mod.rs

/// Error taxonomy of the generator.
pub mod error;

/// Static catalogs and the remediation knowledge base.
pub mod knowledge_base;

/// Strongly typed report records.
pub mod models;

/// The deterministic report generator, split by the part of the report each
/// submodule synthesizes.
pub mod scanner;
