use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VocabError};
use crate::models::{ErrorKind, ReportCategory, WarningKind};

/// Append-only run log of per-vocabulary outcomes.
///
/// One instance lives for the whole run and is handed by reference to
/// whoever processes files; all mutation goes through one mutex so a
/// bounded worker pool can share it. Nothing recorded is ever removed or
/// rewritten.
#[derive(Debug, Clone)]
pub struct Report {
    inner: Arc<Mutex<ReportState>>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct ReportState {
    created_at: DateTime<Utc>,
    ok: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    problems: HashMap<String, Vec<String>>,
}

impl ReportState {
    fn note_problem(&mut self, subject: &str, label: &str) {
        self.problems
            .entry(subject.to_string())
            .or_default()
            .push(label.to_string());
    }
}

fn add_member(set: &mut Vec<String>, subject: &str) {
    if !set.iter().any(|member| member == subject) {
        set.push(subject.to_string());
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub subject: String,
    pub category: ReportCategory,
    pub problems: Vec<String>,
}

/// Deduplicated export of a run: a subject shows up under its worst
/// category only, with every problem description it accumulated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSnapshot {
    pub created_at: DateTime<Utc>,
    pub ok_count: usize,
    pub warning_count: usize,
    pub error_count: usize,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// A new report dated at construction, spanning one run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ReportState {
                created_at: Utc::now(),
                ok: Vec::new(),
                warnings: Vec::new(),
                errors: Vec::new(),
                problems: HashMap::new(),
            })),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ReportState>> {
        self.inner
            .lock()
            .map_err(|_| VocabError::Internal("report mutex poisoned".to_string()))
    }

    pub fn record_success(&self, subject: &str) -> Result<()> {
        let mut state = self.lock()?;
        add_member(&mut state.ok, subject);
        Ok(())
    }

    pub fn record_warning(&self, subject: &str, kind: WarningKind) -> Result<()> {
        tracing::warn!(subject, kind = kind.as_str(), "vocabulary warning");
        let mut state = self.lock()?;
        add_member(&mut state.warnings, subject);
        state.note_problem(subject, kind.label());
        Ok(())
    }

    pub fn record_error(&self, subject: &str, kind: ErrorKind) -> Result<()> {
        tracing::error!(subject, kind = kind.as_str(), "vocabulary error");
        let mut state = self.lock()?;
        add_member(&mut state.errors, subject);
        state.note_problem(subject, kind.label());
        Ok(())
    }

    /// Cardinalities of the three subject sets, in (ok, warning, error)
    /// order.
    pub fn summary_counts(&self) -> Result<(usize, usize, usize)> {
        let state = self.lock()?;
        Ok((state.ok.len(), state.warnings.len(), state.errors.len()))
    }

    /// Content-idempotent export: calling it twice without new recordings
    /// yields identical counts and entries. The creation time is fixed at
    /// construction.
    pub fn snapshot(&self) -> Result<ReportSnapshot> {
        let state = self.lock()?;
        let mut entries = Vec::new();

        for subject in &state.errors {
            entries.push(ReportEntry {
                subject: subject.clone(),
                category: ReportCategory::Error,
                problems: state.problems.get(subject).cloned().unwrap_or_default(),
            });
        }
        for subject in &state.warnings {
            if state.errors.contains(subject) {
                continue;
            }
            entries.push(ReportEntry {
                subject: subject.clone(),
                category: ReportCategory::Warning,
                problems: state.problems.get(subject).cloned().unwrap_or_default(),
            });
        }
        for subject in &state.ok {
            if state.errors.contains(subject) || state.warnings.contains(subject) {
                continue;
            }
            entries.push(ReportEntry {
                subject: subject.clone(),
                category: ReportCategory::Success,
                problems: Vec::new(),
            });
        }

        Ok(ReportSnapshot {
            created_at: state.created_at,
            ok_count: state.ok.len(),
            warning_count: state.warnings.len(),
            error_count: state.errors.len(),
            entries,
        })
    }
}
