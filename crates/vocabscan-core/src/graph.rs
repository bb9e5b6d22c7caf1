use oxigraph::io::RdfFormat;
use oxigraph::model::vocab::rdf;
use oxigraph::model::{NamedNode, NamedNodeRef, Subject, Term};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use crate::error::Result;
use crate::models::RdfSerialization;

const OWL_ONTOLOGY: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");

/// Distinct language tags attached to any literal in the graph, as the
/// original site generator queried them.
const LANGUAGES_QUERY: &str =
    "SELECT DISTINCT (LANG(?value) AS ?tag) WHERE { ?subject ?property ?value }";

const fn rdf_format(serialization: RdfSerialization) -> RdfFormat {
    match serialization {
        RdfSerialization::RdfXml => RdfFormat::RdfXml,
        RdfSerialization::Turtle => RdfFormat::Turtle,
        RdfSerialization::N3 => RdfFormat::N3,
    }
}

/// Tries each serialization in the fixed fallback order against a fresh
/// in-memory store. The first format that parses wins; later formats are
/// never attempted. `None` when nothing parses.
pub fn load_graph(bytes: &[u8]) -> Result<Option<(Store, RdfSerialization)>> {
    for serialization in RdfSerialization::FALLBACK_ORDER {
        let store = Store::new()?;
        match store.load_from_reader(rdf_format(serialization), bytes) {
            Ok(()) => {
                tracing::debug!(serialization = serialization.as_str(), "vocabulary loaded");
                return Ok(Some((store, serialization)));
            }
            Err(e) => {
                tracing::debug!(
                    serialization = serialization.as_str(),
                    error = %e,
                    "serialization attempt failed"
                );
            }
        }
    }
    Ok(None)
}

/// The ontology header resource of the graph. Files are assumed to hold
/// one ontology; when several are typed `owl:Ontology` the lexically
/// smallest URI is chosen so repeated runs agree.
pub fn ontology_subject(store: &Store) -> Result<Option<NamedNode>> {
    let mut subjects = Vec::new();
    for quad in store.quads_for_pattern(None, Some(rdf::TYPE), Some(OWL_ONTOLOGY.into()), None) {
        let quad = quad?;
        if let Subject::NamedNode(node) = quad.subject {
            subjects.push(node);
        }
    }
    subjects.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
    Ok(subjects.into_iter().next())
}

/// Outbound statements of one resource as (predicate, object) pairs.
pub fn outbound_properties(store: &Store, subject: &NamedNode) -> Result<Vec<(NamedNode, Term)>> {
    let mut properties = Vec::new();
    for quad in store.quads_for_pattern(Some(subject.as_ref().into()), None, None, None) {
        let quad = quad?;
        properties.push((quad.predicate, quad.object));
    }
    Ok(properties)
}

/// Non-empty distinct language tags over the whole graph, deduplicated in
/// the order the query first produced them.
pub fn languages_in_graph(store: &Store) -> Result<Vec<String>> {
    let mut languages: Vec<String> = Vec::new();
    if let QueryResults::Solutions(solutions) = store.query(LANGUAGES_QUERY)? {
        for solution in solutions {
            let solution = solution?;
            let Some(Term::Literal(tag)) = solution.get("tag") else {
                continue;
            };
            let value = tag.value();
            if !value.is_empty() && !languages.iter().any(|seen| seen == value) {
                languages.push(value.to_string());
            }
        }
    }
    Ok(languages)
}

/// Fragment after the last `#` or `/`, the key the property table
/// dispatches on.
#[must_use]
pub fn local_name(node: &NamedNode) -> &str {
    let iri = node.as_str();
    let cut = iri.rfind(['#', '/']).map_or(0, |i| i + 1);
    &iri[cut..]
}
