//! `Graph` is the capability set a graph type must expose to be traversable:
//! vertex and edge identity, the endpoints of an edge, and iteration over a
//! vertex's outgoing and incoming edges. Nothing here prescribes storage;
//! concrete representations implement the trait and the engines consume it.
//!
//! All semantic data lives outside the graph, in caller-owned
//! [property maps](crate::property_map) keyed by vertex or edge id.

use std::{fmt::Debug, hash::Hash};

use crate::error::Result;

/// A trait representing a finite directed or undirected graph.
///
/// Identifiers are opaque handles; they must stay valid for the duration of
/// a traversal call. No iteration order is imposed beyond "whatever the
/// implementation yields", but that order is what makes a traversal
/// deterministic, so implementations should document it.
pub trait Graph {
    type VertexId: Copy + Eq + Hash + Debug;
    type EdgeId: Copy + Eq + Hash + Debug;

    /// Gets an iterator over all vertex identifiers in the graph.
    fn vertex_ids(&self) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize {
        self.vertex_ids().count()
    }

    fn contains_vertex(&self, v: Self::VertexId) -> bool;

    /// Gets an iterator over all edge identifiers in the graph.
    fn edge_ids(&self) -> impl Iterator<Item = Self::EdgeId> + '_;

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edge_ids().count()
    }

    /// Resolves an edge to its `(source, target)` endpoints. Fails with
    /// [`Error::MalformedEdgeReference`](crate::Error::MalformedEdgeReference)
    /// when the edge names a vertex the graph does not contain.
    fn edge_ends(&self, e: Self::EdgeId) -> Result<(Self::VertexId, Self::VertexId)>;

    /// Gets the source vertex of an edge.
    fn source(&self, e: Self::EdgeId) -> Result<Self::VertexId> {
        Ok(self.edge_ends(e)?.0)
    }

    /// Gets the target vertex of an edge.
    fn target(&self, e: Self::EdgeId) -> Result<Self::VertexId> {
        Ok(self.edge_ends(e)?.1)
    }

    /// Gets the endpoint of `e` other than `v`; `v` itself for a self-loop.
    ///
    /// Traversal engines reach every far endpoint through this method, which
    /// is what lets directed forward, directed reverse, and undirected
    /// adjacency share one code path.
    fn opposite(&self, e: Self::EdgeId, v: Self::VertexId) -> Result<Self::VertexId> {
        let (source, target) = self.edge_ends(e)?;
        Ok(if source == v { target } else { source })
    }

    /// Gets an iterator over the edges leaving a vertex. For undirected
    /// graphs this is every edge incident to the vertex.
    fn out_edges(&self, v: Self::VertexId) -> impl Iterator<Item = Self::EdgeId> + '_;

    /// Gets an iterator over the edges entering a vertex. For undirected
    /// graphs this is every edge incident to the vertex.
    fn in_edges(&self, v: Self::VertexId) -> impl Iterator<Item = Self::EdgeId> + '_;
}
