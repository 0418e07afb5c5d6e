use thiserror::Error;

/// Failures surfaced by graphs and property maps. Traversal engines never
/// recover from these; they abort and propagate, leaving caller-owned maps
/// in whatever partially updated state the run reached.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A property map was queried for a key with no bound value and no
    /// default policy.
    #[error("no value bound for key {key} and the map declares no default")]
    KeyNotFound { key: String },

    /// An edge id resolved to a vertex outside the graph.
    #[error("edge {edge} references a vertex outside the graph")]
    MalformedEdgeReference { edge: String },

    /// An operation named a vertex the graph does not contain.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex { vertex: String },
}

impl Error {
    pub(crate) fn key_not_found(key: impl std::fmt::Debug) -> Self {
        Error::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn malformed_edge(edge: impl std::fmt::Debug) -> Self {
        Error::MalformedEdgeReference {
            edge: format!("{edge:?}"),
        }
    }

    pub(crate) fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        Error::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
