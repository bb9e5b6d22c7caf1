use thiserror::Error;

pub type Result<T> = std::result::Result<T, VocabError>;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("no ontology resource found in graph")]
    NoOntologyFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("graph store error: {0}")]
    Graph(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<oxigraph::store::StorageError> for VocabError {
    fn from(err: oxigraph::store::StorageError) -> Self {
        Self::Graph(err.to_string())
    }
}

impl From<oxigraph::sparql::EvaluationError> for VocabError {
    fn from(err: oxigraph::sparql::EvaluationError) -> Self {
        Self::Graph(err.to_string())
    }
}
