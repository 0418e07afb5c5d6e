//! Visitor-driven graph traversal over abstract graphs and property maps.
//!
//! The crate separates three concerns so each can vary independently:
//!
//! - [`Graph`]: the minimal capability set a graph type exposes — vertex and
//!   edge identity, edge endpoints, and adjacency iteration. Any type
//!   implementing it can be traversed; [`AdjacencyGraph`] is the bundled
//!   reference implementation.
//! - [`property_map`]: caller-owned associative state (colors, weights,
//!   distances, predecessors) read and written through a get/put interface
//!   with a per-map absent-key policy.
//! - The engines: [`bfs`] runs a color-coded search reporting structural
//!   events to a [`BfsVisitor`]; [`dijkstra`] computes shortest-path
//!   distances together with the full set of tied shortest-path predecessor
//!   edges per vertex.
//!
//! The engines hold no state between calls; everything they touch lives in
//! the maps the caller hands in.
//!
//! ```
//! use graph_visit::{
//!     AssocPropertyMap, Color, DirectedGraph, DiscoveryRecorder, breadth_first_search,
//! };
//!
//! let mut graph = DirectedGraph::new();
//! let a = graph.add_vertex();
//! let b = graph.add_vertex();
//! graph.add_edge(a, b).unwrap();
//!
//! let mut colors = AssocPropertyMap::with_default(Color::White);
//! let mut order = DiscoveryRecorder::new();
//! breadth_first_search(&graph, a, &mut colors, &mut order).unwrap();
//! assert_eq!(order.vertices(), &[a, b]);
//! ```

pub mod adjacency_graph;
pub mod bfs;
pub mod color;
pub mod dijkstra;
pub mod directedness;
pub mod error;
pub mod graph;
pub mod property_map;
pub mod visitor;

pub use adjacency_graph::{AdjacencyGraph, DirectedGraph, UndirectedGraph};
pub use bfs::{Direction, breadth_first_search, breadth_first_search_graph};
pub use color::Color;
pub use dijkstra::{dijkstra_shortest_paths, shortest_path};
pub use directedness::{Directed, Directedness, Undirected};
pub use error::{Error, Result};
pub use graph::Graph;
pub use property_map::{
    AssocPropertyMap, ConstPropertyMap, FnPropertyMap, ReadPropertyMap, ReadWritePropertyMap,
};
pub use visitor::{BfsVisitor, DefaultBfsVisitor, DiscoveryRecorder, TreeEdgeRecorder};
