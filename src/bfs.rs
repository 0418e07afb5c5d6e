//! The breadth-first search engine: a color-coded, visitor-driven sweep over
//! every vertex reachable from a set of sources.
//!
//! The work-list discipline is part of the contract: a deque seeded at the
//! back, popped from the back, with newly discovered vertices pushed to the
//! front. For a single source this plays out as level order; with several
//! sources they are taken up in reverse of the order given. Callers
//! depending on the exact vertex order should rely on this discipline
//! together with their graph's adjacency order, both of which are kept
//! stable across versions.

use std::collections::VecDeque;

use tracing::{debug_span, trace};

use crate::{
    color::Color,
    error::Result,
    graph::Graph,
    property_map::ReadWritePropertyMap,
    visitor::BfsVisitor,
};

/// Which adjacency a search expands.
///
/// `Reverse` walks `in_edges` instead of `out_edges`, traversing the graph
/// against its edge orientation without materializing a reversed graph.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Runs a breadth-first search from one or more source vertices.
///
/// The color map tracks traversal state and should default to
/// [`Color::White`] for untouched vertices; every vertex reachable from a
/// source moves White → Gray → Black exactly once. `enqueue` decides
/// whether a tree edge's target joins the work list for further expansion;
/// a filtered target is still colored, discovered and classified, it just
/// will not be examined. Pass `|_, _| true` to expand everything.
///
/// Fails only with what the graph or the color map raise; a failure aborts
/// the search and leaves the color map partially updated.
pub fn breadth_first_search_graph<G, C, V, F>(
    graph: &G,
    sources: impl IntoIterator<Item = G::VertexId>,
    color: &mut C,
    visitor: &mut V,
    mut enqueue: F,
    direction: Direction,
) -> Result<()>
where
    G: Graph,
    C: ReadWritePropertyMap<G::VertexId, Color>,
    V: BfsVisitor<G>,
    F: FnMut(G::EdgeId, &G) -> bool,
{
    let _span = debug_span!("breadth_first_search", ?direction).entered();

    let mut worklist: VecDeque<G::VertexId> = VecDeque::new();
    for s in sources {
        color.put(s, Color::Gray);
        visitor.discover_vertex(s, graph);
        worklist.push_back(s);
    }

    while let Some(u) = worklist.pop_back() {
        trace!(vertex = ?u, "examine");
        visitor.examine_vertex(u, graph);
        let edges: Vec<G::EdgeId> = match direction {
            Direction::Forward => graph.out_edges(u).collect(),
            Direction::Reverse => graph.in_edges(u).collect(),
        };
        for e in edges {
            visitor.examine_edge(e, graph);
            let v = graph.opposite(e, u)?;
            match color.get(&v)? {
                Color::White => {
                    visitor.tree_edge(e, graph);
                    color.put(v, Color::Gray);
                    visitor.discover_vertex(v, graph);
                    if enqueue(e, graph) {
                        worklist.push_front(v);
                    }
                }
                Color::Gray => visitor.gray_target(e, graph),
                Color::Black => visitor.black_target(e, graph),
            }
        }
        color.put(u, Color::Black);
        visitor.finish_vertex(u, graph);
    }
    Ok(())
}

/// Single-source convenience: forward traversal, every tree edge expanded.
pub fn breadth_first_search<G, C, V>(
    graph: &G,
    source: G::VertexId,
    color: &mut C,
    visitor: &mut V,
) -> Result<()>
where
    G: Graph,
    C: ReadWritePropertyMap<G::VertexId, Color>,
    V: BfsVisitor<G>,
{
    breadth_first_search_graph(graph, [source], color, visitor, |_, _| true, Direction::Forward)
}
