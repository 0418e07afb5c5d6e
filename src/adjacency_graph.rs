//! A reference [`Graph`] provider backed by insertion-ordered incidence
//! lists. Vertices carry no payload; per-vertex and per-edge values belong
//! in property maps keyed by the handles returned here.
//!
//! Parallel edges are allowed and each receives its own id, so two edges
//! between the same vertices stay independently addressable. Adjacency
//! iteration follows edge insertion order, which makes traversals over this
//! graph fully deterministic.

use std::marker::PhantomData;

use crate::{
    directedness::{Directed, Directedness, Undirected},
    error::{Error, Result},
    graph::Graph,
};

/// Opaque handle to a vertex of an [`AdjacencyGraph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Opaque handle to an edge of an [`AdjacencyGraph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An adjacency-list multigraph, directed or undirected by marker type.
pub struct AdjacencyGraph<D: Directedness = Directed> {
    ends: Vec<(VertexId, VertexId)>,
    // Per-vertex incidence, split by which endpoint the vertex is. For a
    // directed graph these are the out- and in-lists; for an undirected
    // graph a vertex's incident edges are the union of both.
    out: Vec<Vec<EdgeId>>,
    inc: Vec<Vec<EdgeId>>,
    directedness: PhantomData<D>,
}

pub type DirectedGraph = AdjacencyGraph<Directed>;
pub type UndirectedGraph = AdjacencyGraph<Undirected>;

impl<D: Directedness> AdjacencyGraph<D> {
    pub fn new() -> Self {
        Self {
            ends: Vec::new(),
            out: Vec::new(),
            inc: Vec::new(),
            directedness: PhantomData,
        }
    }

    /// Creates a graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..n {
            graph.add_vertex();
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        D::is_directed()
    }

    pub fn add_vertex(&mut self) -> VertexId {
        let vid = VertexId(self.out.len());
        self.out.push(Vec::new());
        self.inc.push(Vec::new());
        vid
    }

    /// Adds an edge from `source` to `target` and returns its id. Parallel
    /// edges and self-loops are accepted; unknown endpoints are not.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId> {
        for v in [source, target] {
            if !self.contains_vertex(v) {
                return Err(Error::unknown_vertex(v));
            }
        }
        let eid = EdgeId(self.ends.len());
        self.ends.push((source, target));
        self.out[source.0].push(eid);
        // An undirected self-loop is listed once, not from both ends.
        if D::is_directed() || source != target {
            self.inc[target.0].push(eid);
        }
        Ok(eid)
    }

    fn incidence(list: &[Vec<EdgeId>], v: VertexId) -> &[EdgeId] {
        list.get(v.0).map_or(&[], Vec::as_slice)
    }
}

impl<D: Directedness> Default for AdjacencyGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Directedness> Graph for AdjacencyGraph<D> {
    type VertexId = VertexId;
    type EdgeId = EdgeId;

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.out.len()).map(VertexId)
    }

    fn num_vertices(&self) -> usize {
        self.out.len()
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        v.0 < self.out.len()
    }

    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.ends.len()).map(EdgeId)
    }

    fn num_edges(&self) -> usize {
        self.ends.len()
    }

    fn edge_ends(&self, e: EdgeId) -> Result<(VertexId, VertexId)> {
        self.ends
            .get(e.0)
            .copied()
            .ok_or_else(|| Error::malformed_edge(e))
    }

    /// Outgoing edges in insertion order; for undirected graphs, edges where
    /// `v` is the stored source first, then the remaining incident edges.
    fn out_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let rest: &[EdgeId] = if D::is_directed() {
            &[]
        } else {
            Self::incidence(&self.inc, v)
        };
        Self::incidence(&self.out, v).iter().chain(rest).copied()
    }

    fn in_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let rest: &[EdgeId] = if D::is_directed() {
            &[]
        } else {
            Self::incidence(&self.out, v)
        };
        Self::incidence(&self.inc, v).iter().chain(rest).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_incidence() {
        let mut g = DirectedGraph::new();
        let u = g.add_vertex();
        let v = g.add_vertex();
        let w = g.add_vertex();
        let uv = g.add_edge(u, v).unwrap();
        let uw = g.add_edge(u, w).unwrap();
        let wv = g.add_edge(w, v).unwrap();

        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.out_edges(u).collect::<Vec<_>>(), vec![uv, uw]);
        assert_eq!(g.out_edges(v).count(), 0);
        assert_eq!(g.in_edges(v).collect::<Vec<_>>(), vec![uv, wv]);
        assert_eq!(g.edge_ends(uw).unwrap(), (u, w));
        assert_eq!(g.opposite(wv, v).unwrap(), w);
    }

    #[test]
    fn parallel_edges_have_distinct_ids() {
        let mut g = DirectedGraph::new();
        let u = g.add_vertex();
        let v = g.add_vertex();
        let e1 = g.add_edge(u, v).unwrap();
        let e2 = g.add_edge(u, v).unwrap();

        assert_ne!(e1, e2);
        assert_eq!(g.edge_ends(e1).unwrap(), g.edge_ends(e2).unwrap());
        assert_eq!(g.out_edges(u).collect::<Vec<_>>(), vec![e1, e2]);
    }

    #[test]
    fn undirected_edge_is_visible_from_both_endpoints() {
        let mut g = UndirectedGraph::new();
        let u = g.add_vertex();
        let v = g.add_vertex();
        let e = g.add_edge(u, v).unwrap();

        assert_eq!(g.out_edges(u).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.out_edges(v).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.in_edges(u).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.opposite(e, u).unwrap(), v);
        assert_eq!(g.opposite(e, v).unwrap(), u);
    }

    #[test]
    fn undirected_self_loop_listed_once() {
        let mut g = UndirectedGraph::new();
        let u = g.add_vertex();
        let e = g.add_edge(u, u).unwrap();

        assert_eq!(g.out_edges(u).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.in_edges(u).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.opposite(e, u).unwrap(), u);
    }

    #[test]
    fn add_edge_rejects_unknown_endpoint() {
        let mut g = DirectedGraph::with_vertices(1);
        let u = g.vertex_ids().next().unwrap();
        let err = g.add_edge(u, VertexId(5)).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex { .. }));
    }

    #[test]
    fn edge_ends_rejects_unknown_edge() {
        let g = DirectedGraph::with_vertices(2);
        let err = g.edge_ends(EdgeId(0)).unwrap_err();
        assert!(matches!(err, Error::MalformedEdgeReference { .. }));
    }
}
