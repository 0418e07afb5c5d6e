//! Single-source shortest paths over the same graph and property-map
//! abstractions the search engine uses. Unlike the textbook formulation,
//! the predecessor map keeps *every* incoming edge lying on some shortest
//! path, so tied paths and parallel edges all survive; a caller wanting one
//! path picks from the sets, e.g. through [`shortest_path`].

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use num_traits::Zero;
use tracing::{debug_span, trace};

use crate::{
    error::Result,
    graph::Graph,
    property_map::{ReadPropertyMap, ReadWritePropertyMap},
};

/// Computes shortest-path distances and the full shortest-path DAG from
/// `source`.
///
/// `weight` must bind a non-negative weight to every edge reachable from
/// `source`; a missing binding aborts the run. The distance map needs a
/// default policy standing in for "infinite" (for integer weights,
/// typically the type's `MAX`): vertices unreachable from `source` are
/// never written, so reading them yields that sentinel, and they gain no
/// predecessor entry. The predecessor map should default to an empty set;
/// `source` itself never gains an entry, even through zero-weight cycles.
///
/// Negative weights are out of contract and the result is unspecified;
/// they are not detected.
pub fn dijkstra_shortest_paths<G, W, WM, PM, DM>(
    graph: &G,
    source: G::VertexId,
    weight: &WM,
    predecessors: &mut PM,
    distance: &mut DM,
) -> Result<()>
where
    G: Graph,
    G::VertexId: Ord,
    W: Copy + Ord + Zero,
    WM: ReadPropertyMap<G::EdgeId, W>,
    PM: ReadWritePropertyMap<G::VertexId, HashSet<G::EdgeId>>,
    DM: ReadWritePropertyMap<G::VertexId, W>,
{
    let _span = debug_span!("dijkstra_shortest_paths", source = ?source).entered();

    distance.put(source, W::zero());
    let mut heap: BinaryHeap<Reverse<(W, G::VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((W::zero(), source)));

    while let Some(Reverse((dist_u, u))) = heap.pop() {
        if dist_u > distance.get(&u)? {
            // Stale heap entry; u was re-queued with a shorter distance.
            continue;
        }
        let edges: Vec<G::EdgeId> = graph.out_edges(u).collect();
        for e in edges {
            let v = graph.opposite(e, u)?;
            let candidate = dist_u + weight.get(&e)?;
            let best = distance.get(&v)?;
            if candidate < best {
                trace!(edge = ?e, vertex = ?v, "relaxed");
                distance.put(v, candidate);
                predecessors.put(v, HashSet::from([e]));
                heap.push(Reverse((candidate, v)));
            } else if candidate == best && v != source {
                // A tied shortest path: accumulate, do not replace.
                let mut tied = predecessors.get(&v)?;
                tied.insert(e);
                predecessors.put(v, tied);
            }
        }
    }
    Ok(())
}

/// Extracts one shortest path from `source` to `target` out of a
/// predecessor map filled by [`dijkstra_shortest_paths`], as the edge ids
/// walked in order. Ties are broken toward the smallest edge id. Returns
/// `None` when `target` was not reached.
pub fn shortest_path<G, PM>(
    graph: &G,
    source: G::VertexId,
    target: G::VertexId,
    predecessors: &PM,
) -> Result<Option<Vec<G::EdgeId>>>
where
    G: Graph,
    G::EdgeId: Ord,
    PM: ReadPropertyMap<G::VertexId, HashSet<G::EdgeId>>,
{
    let mut edges = Vec::new();
    let mut v = target;
    while v != source {
        let Some(e) = predecessors.get(&v)?.into_iter().min() else {
            return Ok(None);
        };
        edges.push(e);
        v = graph.opposite(e, v)?;
    }
    edges.reverse();
    Ok(Some(edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adjacency_graph::{DirectedGraph, EdgeId, VertexId},
        property_map::AssocPropertyMap,
    };

    type WeightMap = AssocPropertyMap<EdgeId, u32>;
    type PredMap = AssocPropertyMap<VertexId, HashSet<EdgeId>>;
    type DistMap = AssocPropertyMap<VertexId, u32>;

    fn run(
        graph: &DirectedGraph,
        source: VertexId,
        weights: &WeightMap,
    ) -> (PredMap, DistMap) {
        let mut preds = PredMap::with_default(HashSet::new());
        let mut dist = DistMap::with_default(u32::MAX);
        dijkstra_shortest_paths(graph, source, weights, &mut preds, &mut dist).unwrap();
        (preds, dist)
    }

    #[test]
    fn single_edge() {
        let mut g = DirectedGraph::with_vertices(2);
        let v: Vec<_> = g.vertex_ids().collect();
        let e = g.add_edge(v[0], v[1]).unwrap();
        let mut weights = WeightMap::new();
        weights.put(e, 1);

        let (preds, dist) = run(&g, v[0], &weights);
        assert_eq!(dist.get(&v[0]), Ok(0));
        assert_eq!(dist.get(&v[1]), Ok(1));
        assert_eq!(preds.get(&v[1]), Ok(HashSet::from([e])));
        assert_eq!(preds.len(), 1);
    }

    #[test]
    fn parallel_edges_both_kept() {
        let mut g = DirectedGraph::with_vertices(2);
        let v: Vec<_> = g.vertex_ids().collect();
        let e1 = g.add_edge(v[0], v[1]).unwrap();
        let e2 = g.add_edge(v[0], v[1]).unwrap();
        let mut weights = WeightMap::new();
        weights.put(e1, 1);
        weights.put(e2, 1);

        let (preds, dist) = run(&g, v[0], &weights);
        assert_eq!(dist.get(&v[1]), Ok(1));
        assert_eq!(preds.get(&v[1]), Ok(HashSet::from([e1, e2])));
    }

    #[test]
    fn shorter_path_replaces_accumulated_predecessors() {
        // 0 -> 1 directly costs 5 (twice, tied); via 2 it costs 2, so the
        // tied set is discarded once the strictly better path is found.
        let mut g = DirectedGraph::with_vertices(3);
        let v: Vec<_> = g.vertex_ids().collect();
        let direct1 = g.add_edge(v[0], v[1]).unwrap();
        let direct2 = g.add_edge(v[0], v[1]).unwrap();
        let via_a = g.add_edge(v[0], v[2]).unwrap();
        let via_b = g.add_edge(v[2], v[1]).unwrap();
        let weights: WeightMap =
            [(direct1, 5), (direct2, 5), (via_a, 1), (via_b, 1)].into_iter().collect();

        let (preds, dist) = run(&g, v[0], &weights);
        assert_eq!(dist.get(&v[1]), Ok(2));
        assert_eq!(preds.get(&v[1]), Ok(HashSet::from([via_b])));
    }

    #[test]
    fn unreachable_vertices_keep_the_sentinel() {
        let mut g = DirectedGraph::with_vertices(3);
        let v: Vec<_> = g.vertex_ids().collect();
        let e = g.add_edge(v[0], v[1]).unwrap();
        let mut weights = WeightMap::new();
        weights.put(e, 3);

        let (preds, dist) = run(&g, v[0], &weights);
        assert_eq!(dist.get(&v[2]), Ok(u32::MAX));
        assert_eq!(preds.get(&v[2]), Ok(HashSet::new()));
        assert_eq!(preds.len(), 1);
    }

    #[test]
    fn source_never_gains_a_predecessor() {
        // Zero-weight cycle back into the source.
        let mut g = DirectedGraph::with_vertices(2);
        let v: Vec<_> = g.vertex_ids().collect();
        let out = g.add_edge(v[0], v[1]).unwrap();
        let back = g.add_edge(v[1], v[0]).unwrap();
        let weights: WeightMap = [(out, 0), (back, 0)].into_iter().collect();

        let (preds, dist) = run(&g, v[0], &weights);
        assert_eq!(dist.get(&v[0]), Ok(0));
        assert_eq!(dist.get(&v[1]), Ok(0));
        assert_eq!(preds.get(&v[0]), Ok(HashSet::new()));
        assert_eq!(preds.get(&v[1]), Ok(HashSet::from([out])));
    }

    #[test]
    fn missing_weight_aborts() {
        let mut g = DirectedGraph::with_vertices(2);
        let v: Vec<_> = g.vertex_ids().collect();
        g.add_edge(v[0], v[1]).unwrap();
        let weights = WeightMap::new();

        let mut preds = PredMap::with_default(HashSet::new());
        let mut dist = DistMap::with_default(u32::MAX);
        let err = dijkstra_shortest_paths(&g, v[0], &weights, &mut preds, &mut dist).unwrap_err();
        assert!(matches!(err, crate::Error::KeyNotFound { .. }));
    }

    #[test]
    fn shortest_path_walks_the_predecessor_dag() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3, the right branch cheaper.
        let mut g = DirectedGraph::with_vertices(4);
        let v: Vec<_> = g.vertex_ids().collect();
        let e01 = g.add_edge(v[0], v[1]).unwrap();
        let e13 = g.add_edge(v[1], v[3]).unwrap();
        let e02 = g.add_edge(v[0], v[2]).unwrap();
        let e23 = g.add_edge(v[2], v[3]).unwrap();
        let weights: WeightMap =
            [(e01, 2), (e13, 2), (e02, 1), (e23, 1)].into_iter().collect();

        let (preds, _dist) = run(&g, v[0], &weights);
        let path = shortest_path(&g, v[0], v[3], &preds).unwrap();
        assert_eq!(path, Some(vec![e02, e23]));

        let unreached = g.add_vertex();
        let path = shortest_path(&g, v[0], unreached, &preds).unwrap();
        assert_eq!(path, None);
    }
}
