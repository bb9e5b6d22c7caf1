// Public fallible APIs in this crate share one concrete error contract (`VocabError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod languages;
pub mod license;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scan;

pub use config::ResolverConfig;
pub use error::{Result, VocabError};
pub use license::{LicenseService, LicensiusClient};
pub use models::{ErrorKind, RdfSerialization, ReportCategory, Vocabulary, WarningKind};
pub use pipeline::{RunOutcome, process_repository, run};
pub use report::{Report, ReportEntry, ReportSnapshot};
