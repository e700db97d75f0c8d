//! Fundamental cycle basis.
//!
//! Build a breadth-first spanning forest; every edge outside the forest
//! closes exactly one cycle with the tree path between its endpoints. Those
//! cycles are independent and generate every cycle of the graph under
//! symmetric difference, so the basis has `|E| - |V| + components` members.
//!
//! A cycle is reported as a node sequence starting at the first endpoint of
//! its closing edge, climbing to the lowest common ancestor and descending to
//! the second endpoint. The closing edge (last node back to first) is implicit.

use crate::connectivity::SpanningForest;
use crate::graph::Graph;
use petgraph::stable_graph::NodeIndex;
use tracing::debug;

/// Cycle basis as node-id sequences, one per non-tree edge in edge order.
pub fn cycle_basis(graph: &Graph) -> Vec<Vec<&str>> {
    cycle_basis_indices(graph)
        .into_iter()
        .map(|cycle| {
            cycle
                .into_iter()
                .filter_map(|i| graph.node_id(NodeIndex::new(i)))
                .collect()
        })
        .collect()
}

/// Cycle basis over dense node indices.
pub(crate) fn cycle_basis_indices(graph: &Graph) -> Vec<Vec<usize>> {
    let forest = SpanningForest::build(&graph.adjacency());
    let mut cycles = Vec::new();

    for e in graph.edge_order() {
        if forest.tree_edge.get(e.index()).copied().unwrap_or(false) {
            continue;
        }
        let Some((a, b)) = graph.endpoints(e) else {
            continue;
        };
        cycles.push(fundamental_cycle(&forest, a.index(), b.index()));
    }

    debug!(cycles = cycles.len(), "cycle basis");
    cycles
}

/// Tree path `u → lca → v`.
fn fundamental_cycle(forest: &SpanningForest, u: usize, v: usize) -> Vec<usize> {
    let (mut a, mut b) = (u, v);
    let mut up = vec![a];
    let mut down = vec![b];

    // Both climbs end on the common ancestor.
    while a != b {
        if forest.depth[a] >= forest.depth[b] {
            a = forest.parent[a];
            up.push(a);
        } else {
            b = forest.parent[b];
            down.push(b);
        }
    }
    let _ = down.pop();
    up.extend(down.into_iter().rev());
    up
}
