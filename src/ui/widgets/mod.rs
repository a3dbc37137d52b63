// src/ui/widgets/mod.rs

pub mod analysis_view; // Findings list with details and remediation.
pub mod disclaimer_popup;
pub mod footer;
pub mod input;
pub mod summary;
pub mod technical_view; // Headers, ports and DNS.
