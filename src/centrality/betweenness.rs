//! Brandes edge betweenness for undirected, unweighted graphs.

use crate::graph::Graph;
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use std::collections::VecDeque;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Edge betweenness configuration.
#[derive(Debug, Clone)]
pub struct EdgeBetweenness {
    /// Divide pair sums by the number of node pairs.
    normalized: bool,
    /// Scores within this fraction of the maximum count as tied.
    tie_tolerance: f64,
}

impl EdgeBetweenness {
    /// Create a normalized edge betweenness calculator.
    pub fn new() -> Self {
        Self {
            normalized: true,
            tie_tolerance: 1e-12,
        }
    }

    /// Toggle normalization by `n(n-1)/2`.
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Set the relative tolerance used when picking the top edge.
    pub fn with_tie_tolerance(mut self, tie_tolerance: f64) -> Self {
        self.tie_tolerance = tie_tolerance.max(0.0);
        self
    }

    /// Tie tolerance.
    pub fn tie_tolerance(&self) -> f64 {
        self.tie_tolerance
    }

    /// Score every edge currently in `graph`.
    pub fn compute(&self, graph: &Graph) -> CentralityTable {
        let adj = graph.adjacency();
        let n = adj.len();
        let order = graph.edge_order();
        let slots = order.iter().map(|e| e.index() + 1).max().unwrap_or(0);
        let mut raw = vec![0.0f64; slots];

        // Contributions are folded in source order on both paths, so the
        // floating-point sums are identical.
        #[cfg(feature = "parallel")]
        {
            let per_source: Vec<Vec<(usize, f64)>> = (0..n)
                .into_par_iter()
                .map(|s| single_source_dependencies(&adj, s))
                .collect();
            for contributions in per_source {
                for (e, c) in contributions {
                    raw[e] += c;
                }
            }
        }

        #[cfg(not(feature = "parallel"))]
        for s in 0..n {
            for (e, c) in single_source_dependencies(&adj, s) {
                raw[e] += c;
            }
        }

        let scale = rescale(n, self.normalized);
        let scores = order
            .into_iter()
            .filter_map(|e| {
                let (u, v) = graph.endpoints(e)?;
                Some(EdgeScore {
                    edge: e,
                    u,
                    v,
                    score: raw[e.index()] * scale,
                })
            })
            .collect();

        CentralityTable { scores }
    }
}

impl Default for EdgeBetweenness {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalized edge betweenness of every edge.
pub fn edge_betweenness(graph: &Graph) -> CentralityTable {
    EdgeBetweenness::new().compute(graph)
}

/// Every source visits each unordered pair once from each end, so raw sums
/// count pairs twice.
fn rescale(n: usize, normalized: bool) -> f64 {
    if n <= 1 {
        1.0
    } else if normalized {
        1.0 / (n * (n - 1)) as f64
    } else {
        0.5
    }
}

/// Dependency of source `s` on each edge, as `(edge slot, amount)` pairs in
/// accumulation order.
fn single_source_dependencies(adj: &[Vec<(usize, EdgeIndex)>], s: usize) -> Vec<(usize, f64)> {
    let n = adj.len();
    let mut stack = Vec::with_capacity(n);
    let mut pred: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![-1i64; n];

    sigma[s] = 1.0;
    dist[s] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        for &(w, e) in &adj[v] {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                pred[w].push((v, e.index()));
            }
        }
    }

    // Anything on the stack was reached, so sigma[w] >= 1.
    let mut delta = vec![0.0f64; n];
    let mut out = Vec::new();
    while let Some(w) = stack.pop() {
        let coeff = (1.0 + delta[w]) / sigma[w];
        for &(v, e) in &pred[w] {
            let c = sigma[v] * coeff;
            out.push((e, c));
            delta[v] += c;
        }
    }
    out
}

/// Score of a single edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeScore {
    /// Edge index in the graph's petgraph storage.
    pub edge: EdgeIndex,
    /// First stored endpoint.
    pub u: NodeIndex,
    /// Second stored endpoint.
    pub v: NodeIndex,
    /// Betweenness.
    pub score: f64,
}

/// Betweenness of every edge, in the graph's edge order.
///
/// Recomputed from scratch after every mutation; it is never patched.
#[derive(Debug, Clone, Default)]
pub struct CentralityTable {
    scores: Vec<EdgeScore>,
}

impl CentralityTable {
    /// Number of scored edges.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores in edge order.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeScore> {
        self.scores.iter()
    }

    /// Sum of all scores.
    pub fn total(&self) -> f64 {
        self.scores.iter().map(|s| s.score).sum()
    }

    /// Score of the edge joining `u` and `v` in `graph`.
    pub fn score(&self, graph: &Graph, u: &str, v: &str) -> Option<f64> {
        let a = graph.node_index(u)?;
        let b = graph.node_index(v)?;
        self.scores
            .iter()
            .find(|s| (s.u == a && s.v == b) || (s.u == b && s.v == a))
            .map(|s| s.score)
    }

    /// First edge, in edge order, whose score is within `tolerance` of the
    /// maximum, relative to the maximum's magnitude.
    ///
    /// Relative rather than absolute, since normalized scores shrink with `n(n-1)`.
    pub fn max_edge(&self, tolerance: f64) -> Option<&EdgeScore> {
        let best = self
            .scores
            .iter()
            .map(|s| s.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let threshold = best - tolerance * best.abs();
        self.scores.iter().find(|s| s.score >= threshold)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unused_results)]
mod tests {
    use super::*;
    use crate::graph::Attributes;
    use proptest::prelude::*;

    fn graph_from(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::new();
        for id in nodes {
            g.add_node(*id, Attributes::new());
        }
        for (u, v) in edges {
            g.add_edge(u, v, Attributes::new()).unwrap();
        }
        g
    }

    fn path5() -> Graph {
        graph_from(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")],
        )
    }

    #[test]
    fn test_path_raw_pair_counts() {
        let g = path5();
        let table = EdgeBetweenness::new().with_normalized(false).compute(&g);

        // Pairs separated by each edge: 1*4, 2*3, 3*2, 4*1
        assert_eq!(table.score(&g, "A", "B"), Some(4.0));
        assert_eq!(table.score(&g, "B", "C"), Some(6.0));
        assert_eq!(table.score(&g, "D", "C"), Some(6.0));
        assert_eq!(table.score(&g, "D", "E"), Some(4.0));
    }

    #[test]
    fn test_path_normalized() {
        let g = path5();
        let table = edge_betweenness(&g);

        // 10 pairs
        assert!((table.score(&g, "A", "B").unwrap() - 0.4).abs() < 1e-12);
        assert!((table.score(&g, "B", "C").unwrap() - 0.6).abs() < 1e-12);
        // Sum of pair distances over pair count: 20 / 10
        assert!((table.total() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_edge_prefers_first_in_order() {
        let g = path5();
        let table = edge_betweenness(&g);
        let top = table.max_edge(0.0).unwrap();

        assert_eq!(g.node_id(top.u), Some("B"));
        assert_eq!(g.node_id(top.v), Some("C"));
    }

    #[test]
    fn test_square_splits_paths() {
        // 4-cycle: opposite corners have two shortest paths
        let g = graph_from(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
        );
        let table = EdgeBetweenness::new().with_normalized(false).compute(&g);

        // Each edge: its own pair (1) + two diagonals at 1/2 each
        for s in table.iter() {
            assert!((s.score - 2.0).abs() < 1e-12, "score={}", s.score);
        }
    }

    #[test]
    fn test_bridge_between_triangles_is_maximal() {
        let g = graph_from(
            &["a0", "a1", "a2", "b0", "b1", "b2"],
            &[
                ("a0", "a1"),
                ("a1", "a2"),
                ("a0", "a2"),
                ("b0", "b1"),
                ("b1", "b2"),
                ("b0", "b2"),
                ("a2", "b0"),
            ],
        );
        let table = EdgeBetweenness::new().with_normalized(false).compute(&g);
        let top = table.max_edge(1e-12).unwrap();

        assert_eq!(g.node_id(top.u), Some("a2"));
        assert_eq!(g.node_id(top.v), Some("b0"));
        // Every cross pair uses the bridge
        assert!((top.score - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_disconnected_pairs_contribute_zero() {
        let g = graph_from(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d")]);
        let table = EdgeBetweenness::new().with_normalized(false).compute(&g);

        assert_eq!(table.score(&g, "a", "b"), Some(1.0));
        assert_eq!(table.score(&g, "c", "d"), Some(1.0));
    }

    #[test]
    fn test_empty_and_edgeless() {
        let table = edge_betweenness(&Graph::new());
        assert!(table.is_empty());
        assert!(table.max_edge(0.0).is_none());

        let g = graph_from(&["a", "b"], &[]);
        assert_eq!(edge_betweenness(&g).len(), 0);
    }

    #[test]
    fn test_scores_follow_edge_order() {
        let g = graph_from(&["x", "y", "z"], &[("y", "z"), ("x", "y")]);
        let table = edge_betweenness(&g);
        let names: Vec<(&str, &str)> = table
            .iter()
            .map(|s| (g.node_id(s.u).unwrap(), g.node_id(s.v).unwrap()))
            .collect();
        assert_eq!(names, vec![("y", "z"), ("x", "y")]);
    }

    fn table_of(scores: &[f64]) -> CentralityTable {
        let scores = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| EdgeScore {
                edge: EdgeIndex::new(i),
                u: NodeIndex::new(i),
                v: NodeIndex::new(i + 1),
                score,
            })
            .collect();
        CentralityTable { scores }
    }

    #[test]
    fn test_tie_tolerance_is_relative() {
        // Tiny normalized scores must still be told apart
        let table = table_of(&[1e-14, 2e-14, 1.5e-14]);
        assert_eq!(table.max_edge(1e-12).unwrap().edge.index(), 1);

        // Summation noise on a large score still counts as a tie
        let table = table_of(&[1000.0 - 1e-10, 1000.0]);
        assert_eq!(table.max_edge(1e-12).unwrap().edge.index(), 0);
        assert_eq!(table.max_edge(0.0).unwrap().edge.index(), 1);

        // All-zero scores: first edge wins
        let table = table_of(&[0.0, 0.0]);
        assert_eq!(table.max_edge(1e-12).unwrap().edge.index(), 0);
    }

    fn arbitrary_graph() -> impl Strategy<Value = Graph> {
        (2usize..12)
            .prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..30)))
            .prop_map(|(n, pairs)| {
                let ids: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
                let mut g = Graph::new();
                for id in &ids {
                    g.add_node(id.as_str(), Attributes::new());
                }
                for (a, b) in pairs {
                    if a != b {
                        g.add_edge(&ids[a], &ids[b], Attributes::new()).unwrap();
                    }
                }
                g
            })
    }

    proptest! {
        #[test]
        fn betweenness_is_nonnegative_and_bounded(g in arbitrary_graph()) {
            let n = g.node_count() as f64;
            let table = edge_betweenness(&g);

            prop_assert_eq!(table.len(), g.edge_count());
            for s in table.iter() {
                prop_assert!(s.score >= 0.0);
            }
            prop_assert!(table.total() <= n * (n - 1.0) / 2.0 + 1e-9);
        }

        #[test]
        fn raw_scores_cover_each_adjacent_pair(g in arbitrary_graph()) {
            // Every edge at least carries the shortest path between its own endpoints
            let table = EdgeBetweenness::new().with_normalized(false).compute(&g);
            for s in table.iter() {
                prop_assert!(s.score >= 1.0 - 1e-9);
            }
        }
    }
}
