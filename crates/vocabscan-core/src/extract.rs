use std::fs;
use std::path::Path;

use oxigraph::model::Term;

use crate::error::{Result, VocabError};
use crate::graph::{languages_in_graph, load_graph, local_name, ontology_subject, outbound_properties};
use crate::license::{LicenseService, resolve_license};
use crate::models::{ErrorKind, UNKNOWN_LICENSE, Vocabulary, WarningKind};
use crate::report::Report;

/// Extracts one vocabulary file into a record, recording its outcome.
///
/// Faults never cross this boundary: anything that goes wrong past the
/// parse step becomes an `EXCEPTION_ERROR` entry keyed by the file name,
/// and the partial record is returned as-is.
pub fn extract(path: &Path, service: &dyn LicenseService, report: &Report) -> Vocabulary {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
    let mut vocab = Vocabulary::new(path.display().to_string(), name);
    tracing::debug!(file = %vocab.name, "processing vocabulary");

    if let Err(e) = extract_into(&mut vocab, path, service, report) {
        tracing::error!(file = %vocab.name, error = %e, "vocabulary processing failed");
        if let Err(report_err) = report.record_error(&vocab.name, ErrorKind::ExceptionError) {
            tracing::error!(error = %report_err, "could not record processing failure");
        }
    }

    if vocab.uri.is_empty() {
        vocab.uri = vocab.path.clone();
    }
    vocab
}

fn extract_into(
    vocab: &mut Vocabulary,
    path: &Path,
    service: &dyn LicenseService,
    report: &Report,
) -> Result<()> {
    let bytes = fs::read(path)?;

    let Some((store, serialization)) = load_graph(&bytes)? else {
        report.record_error(vocab.subject(), ErrorKind::ParsingErr)?;
        return Ok(());
    };
    vocab.supported_serialization = Some(serialization);

    let onto = ontology_subject(&store)?.ok_or(VocabError::NoOntologyFound)?;
    for (predicate, object) in outbound_properties(&store, &onto)? {
        let (value, language) = match object {
            Term::Literal(literal) => (
                literal.value().to_string(),
                literal.language().unwrap_or_default().to_string(),
            ),
            Term::NamedNode(node) => (node.into_string(), String::new()),
            _ => continue,
        };
        apply_property(vocab, local_name(&predicate), value, &language);
    }

    // Classification depends on the structural fields only and is settled
    // before the license chain runs.
    if vocab.has_title_or_description() {
        report.record_success(vocab.subject())?;
    } else {
        report.record_warning(vocab.subject(), WarningKind::MissingTitleOrDescForVocab)?;
    }

    if !vocab.uri.is_empty() {
        let local = (vocab.license != UNKNOWN_LICENSE).then(|| vocab.license.clone());
        let (license, title) = resolve_license(service, &vocab.uri, local.as_deref(), report)?;
        vocab.license = license;
        vocab.license_title = title;
    }

    vocab.languages_used = languages_in_graph(&store)?;
    Ok(())
}

/// Static dispatch table over predicate local names (spec'd precedence:
/// English wins for title/description, last-seen wins elsewhere).
fn apply_property(vocab: &mut Vocabulary, local: &str, value: String, language: &str) {
    match local {
        "description" | "abstract" => prefer_english(&mut vocab.description, value, language),
        "title" => prefer_english(&mut vocab.title, value, language),
        "preferredNamespacePrefix" => vocab.prefix = Some(value),
        "preferredNamespaceUri" => vocab.uri = value,
        "license" | "rights" => {
            vocab.license = value.clone();
            vocab.license_title = value;
        }
        "created" => vocab.creation_date = Some(value),
        "modified" => vocab.last_modified_date = Some(value),
        _ => {}
    }
}

fn prefer_english(field: &mut Option<String>, value: String, language: &str) {
    if language == "en" || field.as_deref().is_none_or(str::is_empty) {
        *field = Some(value);
    }
}
