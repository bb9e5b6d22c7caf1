use serde::{Deserialize, Serialize};

/// Sentinel used for license fields until (and unless) resolution succeeds.
pub const UNKNOWN_LICENSE: &str = "unknown";

/// Concrete RDF text formats the loader tries, in fallback order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RdfSerialization {
    RdfXml,
    Turtle,
    N3,
}

impl RdfSerialization {
    /// Fixed parse attempt order; the first format that parses wins.
    pub const FALLBACK_ORDER: [Self; 3] = [Self::RdfXml, Self::Turtle, Self::N3];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RdfXml => "RDF/XML",
            Self::Turtle => "TURTLE",
            Self::N3 => "N3",
        }
    }
}

impl std::fmt::Display for RdfSerialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the site renderer needs to know about one vocabulary file.
///
/// Created empty when processing of a path starts, filled in during
/// extraction, and never written to again once handed to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vocabulary {
    /// Source file location in the scanned repository.
    pub path: String,
    /// File name, used as report subject while no namespace URI is known.
    pub name: String,
    /// Ontology namespace URI; falls back to `path` when never discovered.
    pub uri: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub prefix: Option<String>,
    pub creation_date: Option<String>,
    pub last_modified_date: Option<String>,
    pub license: String,
    pub license_title: String,
    /// The single serialization that parsed the file, if any did.
    pub supported_serialization: Option<RdfSerialization>,
    /// Distinct language tags seen on literals anywhere in the graph.
    pub languages_used: Vec<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            uri: String::new(),
            title: None,
            description: None,
            prefix: None,
            creation_date: None,
            last_modified_date: None,
            license: UNKNOWN_LICENSE.to_string(),
            license_title: UNKNOWN_LICENSE.to_string(),
            supported_serialization: None,
            languages_used: Vec::new(),
        }
    }

    /// The identifier problems are reported under: the namespace URI once
    /// known, the source path otherwise.
    #[must_use]
    pub fn subject(&self) -> &str {
        if self.uri.is_empty() { &self.path } else { &self.uri }
    }

    #[must_use]
    pub fn has_title_or_description(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.title) || present(&self.description)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Success,
    Warning,
    Error,
}

/// Closed warning taxonomy. `NoDomainsFoundForVocab` and
/// `NoSerializationsForVocab` are reserved: declared with labels but not
/// emitted by the current pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    LicenceNotFound,
    LangNotFound,
    NoDomainsFoundForVocab,
    NoSerializationsForVocab,
    MissingTitleOrDescForVocab,
}

impl WarningKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LicenceNotFound => "LicenseNotFound",
            Self::LangNotFound => "LanguageNotFound",
            Self::NoDomainsFoundForVocab => "NoDomainsFoundForVocab",
            Self::NoSerializationsForVocab => "NoSerializationsAvailable",
            Self::MissingTitleOrDescForVocab => "MissingTitleOrDesc",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LicenceNotFound => "Warning: A license was not found for vocabulary",
            Self::LangNotFound => "Warning: A language was not recognized in vocabulary",
            Self::NoDomainsFoundForVocab => "Warning: No domains have been defined for this vocab",
            Self::NoSerializationsForVocab => "Warning: no serializations available for vocab",
            Self::MissingTitleOrDescForVocab => {
                "Warning: title or description missing from vocabulary"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ParsingErr,
    ExceptionError,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParsingErr => "ParsingError",
            Self::ExceptionError => "GenericError",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ParsingErr => "Error while parsing the vocabulary",
            Self::ExceptionError => "Error: the vocabulary could not be loaded or processed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_prefers_uri_over_path() {
        let mut vocab = Vocabulary::new("/repo/foo.ttl", "foo.ttl");
        assert_eq!(vocab.subject(), "/repo/foo.ttl");

        vocab.uri = "http://example.org/ns#".to_string();
        assert_eq!(vocab.subject(), "http://example.org/ns#");
    }

    #[test]
    fn empty_strings_do_not_count_as_metadata() {
        let mut vocab = Vocabulary::new("/repo/foo.ttl", "foo.ttl");
        assert!(!vocab.has_title_or_description());

        vocab.title = Some(String::new());
        assert!(!vocab.has_title_or_description());

        vocab.description = Some("A vocabulary".to_string());
        assert!(vocab.has_title_or_description());
    }

    #[test]
    fn error_dominates_warning_dominates_success() {
        assert!(ReportCategory::Error > ReportCategory::Warning);
        assert!(ReportCategory::Warning > ReportCategory::Success);
    }

    #[test]
    fn serialization_labels_are_stable() {
        assert_eq!(RdfSerialization::RdfXml.as_str(), "RDF/XML");
        assert_eq!(RdfSerialization::Turtle.to_string(), "TURTLE");
        assert_eq!(
            RdfSerialization::FALLBACK_ORDER[0],
            RdfSerialization::RdfXml
        );
    }
}
