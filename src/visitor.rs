//! The visitor protocol for [breadth-first search](crate::bfs). Every hook
//! has a default no-op body, so a visitor overrides only the events it cares
//! about and ignores the rest. Visitors observe the traversal; they never
//! alter its control flow.

use derivative::Derivative;

use crate::graph::Graph;

/// Observer of the structurally significant events of a breadth-first
/// search.
///
/// The engine reports, in order: `discover_vertex` when a vertex first turns
/// gray, `examine_vertex` when it is taken off the work list, `examine_edge`
/// for each of its adjacent edges, then exactly one of `tree_edge`,
/// `gray_target` or `black_target` depending on the far endpoint's color,
/// and finally `finish_vertex` when the vertex turns black.
///
/// `non_tree_edge` is never reported directly: the default bodies of
/// `gray_target` and `black_target` forward to it, so a visitor that does
/// not care which kind of already-discovered vertex an edge hits can
/// override that single hook instead of two.
#[allow(unused_variables)]
pub trait BfsVisitor<G: Graph> {
    /// A vertex turned gray: it was first encountered, either as a source
    /// or through a tree edge.
    fn discover_vertex(&mut self, u: G::VertexId, graph: &G) {}

    /// A vertex was popped off the work list and its edges are about to be
    /// examined.
    fn examine_vertex(&mut self, u: G::VertexId, graph: &G) {}

    /// An adjacent edge of the examined vertex, before classification.
    fn examine_edge(&mut self, e: G::EdgeId, graph: &G) {}

    /// The edge leads to a white vertex and joins the traversal forest.
    fn tree_edge(&mut self, e: G::EdgeId, graph: &G) {}

    /// The edge leads to an already-discovered vertex, gray or black.
    fn non_tree_edge(&mut self, e: G::EdgeId, graph: &G) {}

    /// The edge leads to a gray vertex: one discovered but not yet
    /// finished, i.e. still on the active frontier.
    fn gray_target(&mut self, e: G::EdgeId, graph: &G) {
        self.non_tree_edge(e, graph);
    }

    /// The edge leads to a black vertex: one whose examination already
    /// finished.
    fn black_target(&mut self, e: G::EdgeId, graph: &G) {
        self.non_tree_edge(e, graph);
    }

    /// A vertex turned black: all its adjacent edges have been examined.
    fn finish_vertex(&mut self, u: G::VertexId, graph: &G) {}
}

/// A visitor that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBfsVisitor;

impl<G: Graph> BfsVisitor<G> for DefaultBfsVisitor {}

/// Records the tree edges of a search, i.e. the traversal forest.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct TreeEdgeRecorder<G: Graph> {
    edges: Vec<G::EdgeId>,
}

impl<G: Graph> TreeEdgeRecorder<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded tree edges, in the order the search reported them.
    pub fn edges(&self) -> &[G::EdgeId] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<G::EdgeId> {
        self.edges
    }
}

impl<G: Graph> BfsVisitor<G> for TreeEdgeRecorder<G> {
    fn tree_edge(&mut self, e: G::EdgeId, _graph: &G) {
        self.edges.push(e);
    }
}

/// Records vertices in discovery order.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct DiscoveryRecorder<G: Graph> {
    vertices: Vec<G::VertexId>,
}

impl<G: Graph> DiscoveryRecorder<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The discovered vertices, in the order the search reported them.
    pub fn vertices(&self) -> &[G::VertexId] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<G::VertexId> {
        self.vertices
    }
}

impl<G: Graph> BfsVisitor<G> for DiscoveryRecorder<G> {
    fn discover_vertex(&mut self, u: G::VertexId, _graph: &G) {
        self.vertices.push(u);
    }
}
