//! Attribute and structural metrics.
//!
//! # Metrics Overview
//!
//! | Metric | Range | Per | Properties |
//! |--------|-------|-----|------------|
//! | [`homophily_index`] | [0, 1] | graph | Share of edges joining same-group nodes |
//! | [`neighborhood_overlap`] | [0, 1] | edge | Jaccard overlap of endpoint neighborhoods |
//! | [`clustering_coefficients`] | [0, 1] | node | Closed share of neighbor pairs |
//! | [`degrees`] | [0, n-1] | node | Incident edge count |
//!
//! # Homophily
//!
//! ```text
//! H = |{(u, v) ∈ E : group(u) = group(v)}| / |E|
//! ```
//!
//! Groups come from the node attribute `club` when any node has one, else
//! from `color`. `H > 0.5` reads as strong homophily, `H = 0.5` as neutral,
//! anything lower as weak.
//!
//! # Example
//!
//! ```rust
//! use schism::{homophily_index, Attributes, Graph, Homophily};
//!
//! let mut g = Graph::new();
//! g.add_node("a", Attributes::new().with("club", "x"));
//! g.add_node("b", Attributes::new().with("club", "x"));
//! g.add_node("c", Attributes::new().with("club", "y"));
//! g.add_edge("a", "b", Attributes::new()).unwrap();
//! g.add_edge("b", "c", Attributes::new()).unwrap();
//!
//! let (index, class) = homophily_index(&g).unwrap();
//! assert_eq!(index, 0.5);
//! assert_eq!(class, Homophily::Neutral);
//! ```
//!
//! # References
//!
//! - McPherson, Smith-Lovin & Cook (2001). "Birds of a feather: homophily in
//!   social networks."
//! - Easley & Kleinberg (2010). "Networks, Crowds, and Markets", ch. 3
//!   (neighborhood overlap).
//! - Watts & Strogatz (1998). "Collective dynamics of small-world networks"
//!   (local clustering).

use crate::error::{Error, Result};
use crate::graph::{keys, Graph};
use std::collections::HashSet;
use std::fmt;

/// Node attributes tried for homophily, in preference order.
pub const HOMOPHILY_KEYS: [&str; 2] = [keys::CLUB, keys::COLOR];

/// Homophily classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Homophily {
    /// Index above 0.5.
    Strong,
    /// Index exactly 0.5.
    Neutral,
    /// Index below 0.5.
    Weak,
}

impl Homophily {
    /// Classify an index.
    pub fn classify(index: f64) -> Self {
        if index > 0.5 {
            Homophily::Strong
        } else if index == 0.5 {
            Homophily::Neutral
        } else {
            Homophily::Weak
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Homophily::Strong => "strong homophily",
            Homophily::Neutral => "neutral",
            Homophily::Weak => "weak/none",
        }
    }
}

impl fmt::Display for Homophily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detailed homophily result.
#[derive(Debug, Clone, PartialEq)]
pub struct HomophilyReport {
    /// Same-group share of edges; 0 for an edgeless graph.
    pub index: f64,
    /// Attribute the groups were read from.
    pub attribute: &'static str,
    /// Edges whose endpoints share a group.
    pub same_group: usize,
    /// All edges.
    pub total_edges: usize,
    /// Classification of `index`.
    pub classification: Homophily,
}

/// Homophily index and its classification.
pub fn homophily_index(graph: &Graph) -> Result<(f64, Homophily)> {
    let report = homophily_report(graph)?;
    Ok((report.index, report.classification))
}

/// Homophily with the counts behind it.
///
/// An edge with an endpoint lacking the chosen attribute is never same-group.
pub fn homophily_report(graph: &Graph) -> Result<HomophilyReport> {
    let attribute = HOMOPHILY_KEYS
        .iter()
        .copied()
        .find(|key| graph.nodes().any(|n| n.attrs().contains_key(key)))
        .ok_or_else(|| Error::MissingAttribute {
            keys: HOMOPHILY_KEYS.to_vec(),
        })?;

    let mut same_group = 0;
    let mut total_edges = 0;
    for edge in graph.edges() {
        total_edges += 1;
        let group_u = graph.node_attrs(edge.u).and_then(|a| a.get(attribute));
        let group_v = graph.node_attrs(edge.v).and_then(|a| a.get(attribute));
        if let (Some(gu), Some(gv)) = (group_u, group_v) {
            if gu == gv {
                same_group += 1;
            }
        }
    }

    let index = if total_edges > 0 {
        same_group as f64 / total_edges as f64
    } else {
        0.0
    };

    Ok(HomophilyReport {
        index,
        attribute,
        same_group,
        total_edges,
        classification: Homophily::classify(index),
    })
}

/// Neighborhood overlap of every edge, in edge order.
///
/// ```text
/// overlap(u, v) = |N(u) ∩ N(v)| / |N(u) ∪ N(v)|
/// ```
///
/// Neighborhoods are plain adjacency, so `v ∈ N(u)` and `u ∈ N(v)` both
/// land in the union. Empty unions give 0.
pub fn neighborhood_overlap(graph: &Graph) -> Vec<((&str, &str), f64)> {
    graph
        .edges()
        .map(|edge| {
            let nu: HashSet<&str> = graph.neighbors(edge.u).unwrap_or_default().into_iter().collect();
            let nv: HashSet<&str> = graph.neighbors(edge.v).unwrap_or_default().into_iter().collect();
            let union = nu.union(&nv).count();
            let overlap = if union > 0 {
                nu.intersection(&nv).count() as f64 / union as f64
            } else {
                0.0
            };
            ((edge.u, edge.v), overlap)
        })
        .collect()
}

/// Local clustering coefficient of every node, in insertion order.
///
/// `2·links / (k(k-1))` where `links` counts edges among the node's `k`
/// neighbors; 0 when `k < 2`.
pub fn clustering_coefficients(graph: &Graph) -> Vec<(&str, f64)> {
    graph
        .nodes()
        .map(|node| {
            let neighbors = graph.neighbors(node.id()).unwrap_or_default();
            let k = neighbors.len();
            if k < 2 {
                return (node.id(), 0.0);
            }
            let mut links = 0;
            for i in 0..k {
                for j in (i + 1)..k {
                    if graph.has_edge(neighbors[i], neighbors[j]) {
                        links += 1;
                    }
                }
            }
            (node.id(), (2.0 * links as f64) / (k * (k - 1)) as f64)
        })
        .collect()
}

/// Degree of every node, in insertion order.
pub fn degrees(graph: &Graph) -> Vec<(&str, usize)> {
    graph
        .nodes()
        .map(|node| (node.id(), graph.degree(node.id()).unwrap_or(0)))
        .collect()
}
