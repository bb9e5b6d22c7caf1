use std::path::Path;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::extract::extract;
use crate::languages::language_reference;
use crate::license::{LicenseService, LicensiusClient};
use crate::models::{Vocabulary, WarningKind};
use crate::report::{Report, ReportSnapshot};
use crate::scan::scan_repository;

/// What a run hands to the external renderer: the extracted records, in
/// processing order, and the finalized report.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub vocabularies: Vec<Vocabulary>,
    pub report: ReportSnapshot,
}

/// Scans `root` and processes every candidate file through the extractor
/// and the language directory check.
///
/// The only failure that aborts a run is an unreadable root, before any
/// file is touched; per-file faults end up in the report instead.
pub fn process_repository(
    root: &Path,
    service: &dyn LicenseService,
    report: &Report,
) -> Result<Vec<Vocabulary>> {
    let candidates = scan_repository(root)
        .inspect_err(|e| tracing::error!(root = %root.display(), error = %e, "scan failed"))?;
    tracing::debug!(root = %root.display(), files = candidates.len(), "repository scanned");

    let mut vocabularies = Vec::with_capacity(candidates.len());
    for path in candidates {
        let vocab = extract(&path, service, report);
        check_languages(&vocab, report)?;
        vocabularies.push(vocab);
    }
    Ok(vocabularies)
}

/// One `LANG_NOT_FOUND` problem line per language tag the directory does
/// not know; membership dedup is the aggregator's job.
fn check_languages(vocab: &Vocabulary, report: &Report) -> Result<()> {
    for tag in &vocab.languages_used {
        if language_reference(tag).is_none() {
            tracing::warn!(subject = vocab.subject(), tag, "unrecognized language tag");
            report.record_warning(vocab.subject(), WarningKind::LangNotFound)?;
        }
    }
    Ok(())
}

/// Full run against the real Licensius service.
pub fn run(root: &Path, config: ResolverConfig) -> Result<RunOutcome> {
    let service = LicensiusClient::new(config)?;
    let report = Report::new();
    let vocabularies = process_repository(root, &service, &report)?;
    Ok(RunOutcome {
        vocabularies,
        report: report.snapshot()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabError;
    use crate::models::ReportCategory;
    use std::fs;
    use tempfile::tempdir;

    struct NoRemote;

    impl LicenseService for NoRemote {
        fn find_license_in_document(&self, _uri: &str) -> Option<String> {
            None
        }

        fn license_label(&self, _license_uri: &str) -> Option<String> {
            None
        }
    }

    const GOOD_DOC: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix dcterms: <http://purl.org/dc/terms/> .
        @prefix vann: <http://purl.org/vocab/vann/> .
        <http://example.org/good> a owl:Ontology ;
            dcterms:title "Good"@en ;
            dcterms:description "A well-described vocabulary"@en ;
            dcterms:license "CC-BY 4.0" ;
            vann:preferredNamespaceUri "http://example.org/good#" .
    "#;

    const BARE_DOC: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix vann: <http://purl.org/vocab/vann/> .
        <http://example.org/bare> a owl:Ontology ;
            vann:preferredNamespaceUri "http://example.org/bare#" .
    "#;

    #[test]
    fn mixed_repository_classifies_each_file() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("good.ttl"), GOOD_DOC).expect("write");
        fs::write(temp.path().join("bare.ttl"), BARE_DOC).expect("write");
        fs::write(temp.path().join("broken.rdf"), "{{ nonsense").expect("write");
        fs::write(temp.path().join("ignored.txt"), "not scanned").expect("write");

        let report = Report::new();
        let vocabularies =
            process_repository(temp.path(), &NoRemote, &report).expect("process");
        assert_eq!(vocabularies.len(), 3);

        let (ok, warning, error) = report.summary_counts().expect("counts");
        assert_eq!((ok, warning, error), (1, 1, 1));

        let good = vocabularies
            .iter()
            .find(|v| v.uri == "http://example.org/good#")
            .expect("good record");
        assert_eq!(good.license, "CC-BY 4.0");
    }

    #[test]
    fn unknown_language_tag_downgrades_to_warning() {
        let doc = r#"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix dcterms: <http://purl.org/dc/terms/> .
            @prefix vann: <http://purl.org/vocab/vann/> .
            <http://example.org/odd> a owl:Ontology ;
                dcterms:title "Odd"@en ;
                dcterms:description "Strangely tagged"@xx ;
                dcterms:license "reserved" ;
                vann:preferredNamespaceUri "http://example.org/odd#" .
        "#;
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("odd.ttl"), doc).expect("write");

        let report = Report::new();
        let vocabularies =
            process_repository(temp.path(), &NoRemote, &report).expect("process");
        let mut languages = vocabularies[0].languages_used.clone();
        languages.sort();
        assert_eq!(languages, vec!["en".to_string(), "xx".to_string()]);

        let snapshot = report.snapshot().expect("snapshot");
        let entry = snapshot
            .entries
            .iter()
            .find(|e| e.subject == "http://example.org/odd#")
            .expect("entry");
        assert_eq!(entry.category, ReportCategory::Warning);
        assert!(
            entry
                .problems
                .contains(&WarningKind::LangNotFound.label().to_string())
        );
    }

    #[test]
    fn bad_root_fails_fast_with_zero_files() {
        let temp = tempdir().expect("tempdir");
        let report = Report::new();
        let err = process_repository(&temp.path().join("missing"), &NoRemote, &report)
            .expect_err("must fail");
        assert!(matches!(err, VocabError::NotADirectory(_)));
        assert_eq!(report.summary_counts().expect("counts"), (0, 0, 0));
    }
}
