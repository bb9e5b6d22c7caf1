use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Result, VocabError};

/// Extensions admitted into the pipeline. Matching is a case-sensitive
/// suffix check; `foo.OWL` is not a vocabulary file.
pub const RECOGNIZED_EXTENSIONS: [&str; 5] = ["owl", "rdf", "ttl", "xml", "rdfs"];

fn extension_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in RECOGNIZED_EXTENSIONS {
        let glob = Glob::new(&format!("*.{ext}"))
            .map_err(|e| VocabError::Internal(format!("invalid extension glob: {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| VocabError::Internal(format!("extension matcher: {e}")))
}

/// Walks `root` depth-first and returns every file whose name carries a
/// recognized extension. Directories are descended into, never yielded;
/// no file is opened.
pub fn scan_repository(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(VocabError::NotADirectory(root.display().to_string()));
    }

    let matcher = extension_matcher()?;
    let mut candidates = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry during scan");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            candidates.push(entry.into_path());
        }
    }
    Ok(candidates)
}
