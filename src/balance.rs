//! Structural balance of signed graphs.
//!
//! A signed graph is **balanced** when every cycle has a positive product of
//! edge signs (Cartwright & Harary 1956). Checking the cycles of a basis is
//! enough: the sign product is multiplicative under symmetric difference, so
//! if every basis cycle is positive, every cycle is.
//!
//! ```text
//!   + + +  → balanced         "the friend of my friend is my friend"
//!   + - -  → balanced         "the enemy of my enemy is my friend"
//!   + + -  → imbalanced
//! ```
//!
//! Signs come from the edge attribute `sign`: `"+"` (also the default when
//! absent) or `"-"`. Any other value is reported and left out of that cycle's
//! product; verification carries on.
//!
//! # Example
//!
//! ```rust
//! use schism::{is_balanced, Attributes, BalanceResult, Graph};
//!
//! let mut g = Graph::new();
//! for id in ["a", "b", "c"] {
//!     g.add_node(id, Attributes::new());
//! }
//! g.add_edge("a", "b", Attributes::new()).unwrap();
//! g.add_edge("b", "c", Attributes::new()).unwrap();
//! assert_eq!(is_balanced(&g), BalanceResult::NoCycles);
//!
//! g.add_edge("c", "a", Attributes::new().with("sign", "-")).unwrap();
//! assert_eq!(is_balanced(&g), BalanceResult::Imbalanced);
//! ```

use crate::cycles::cycle_basis_indices;
use crate::error::Error;
use crate::graph::{keys, Graph};
use petgraph::stable_graph::NodeIndex;
use std::fmt;
use tracing::{debug, warn};

/// Graph-level balance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceResult {
    /// The graph is acyclic; there is nothing to verify.
    NoCycles,
    /// Every basis cycle has a positive sign product.
    Balanced,
    /// At least one basis cycle has a negative sign product.
    Imbalanced,
}

impl BalanceResult {
    /// `Some(true)` / `Some(false)` for a verdict, `None` when there were no cycles.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            BalanceResult::NoCycles => None,
            BalanceResult::Balanced => Some(true),
            BalanceResult::Imbalanced => Some(false),
        }
    }
}

impl fmt::Display for BalanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceResult::NoCycles => write!(f, "no cycles found in the graph"),
            BalanceResult::Balanced => write!(f, "balanced graph"),
            BalanceResult::Imbalanced => write!(f, "imbalanced graph"),
        }
    }
}

/// Sign evaluation of one basis cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSign {
    /// Cycle nodes; the closing edge runs from the last back to the first.
    pub nodes: Vec<String>,
    /// Product of the recognized signs, `1` or `-1`.
    pub product: i8,
    /// Edges left out because their sign was unrecognized.
    pub skipped: usize,
}

impl CycleSign {
    /// Whether the sign product is positive.
    pub fn is_balanced(&self) -> bool {
        self.product > 0
    }
}

/// Full result of [`verify_balance`].
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    /// Graph-level verdict.
    pub verdict: BalanceResult,
    /// Per-cycle evaluation, in basis order.
    pub cycles: Vec<CycleSign>,
    /// One [`Error::MalformedEdgeAttribute`] per skipped edge occurrence.
    pub issues: Vec<Error>,
}

impl BalanceReport {
    /// Cycles whose sign product is negative.
    pub fn negative_cycles(&self) -> impl Iterator<Item = &CycleSign> {
        self.cycles.iter().filter(|c| !c.is_balanced())
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} basis cycles", self.verdict, self.cycles.len())?;
        if !self.issues.is_empty() {
            write!(f, ", {} malformed signs", self.issues.len())?;
        }
        write!(f, ")")
    }
}

/// Balance verdict for `graph`.
pub fn is_balanced(graph: &Graph) -> BalanceResult {
    verify_balance(graph).verdict
}

/// Evaluate every basis cycle of `graph` and report the verdict with details.
pub fn verify_balance(graph: &Graph) -> BalanceReport {
    let basis = cycle_basis_indices(graph);
    if basis.is_empty() {
        debug!("no cycles; balance is vacuous");
        return BalanceReport {
            verdict: BalanceResult::NoCycles,
            cycles: Vec::new(),
            issues: Vec::new(),
        };
    }

    let mut cycles = Vec::with_capacity(basis.len());
    let mut issues = Vec::new();

    for cycle in &basis {
        let ids: Vec<&str> = cycle
            .iter()
            .filter_map(|&i| graph.node_id(NodeIndex::new(i)))
            .collect();
        let mut product: i8 = 1;
        let mut skipped = 0;

        for i in 0..ids.len() {
            let (u, v) = (ids[i], ids[(i + 1) % ids.len()]);
            let Some(attrs) = graph.edge_attrs(u, v) else {
                continue;
            };
            match attrs.sign() {
                Ok(sign) => product *= sign.value(),
                Err(value) => {
                    warn!(%u, %v, %value, "unexpected sign value");
                    skipped += 1;
                    issues.push(Error::MalformedEdgeAttribute {
                        u: u.to_string(),
                        v: v.to_string(),
                        key: keys::SIGN,
                        value: value.to_string(),
                    });
                }
            }
        }

        cycles.push(CycleSign {
            nodes: ids.iter().map(|s| s.to_string()).collect(),
            product,
            skipped,
        });
    }

    let verdict = if cycles.iter().all(CycleSign::is_balanced) {
        BalanceResult::Balanced
    } else {
        BalanceResult::Imbalanced
    };
    debug!(cycles = cycles.len(), %verdict, "balance verified");

    BalanceReport {
        verdict,
        cycles,
        issues,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unused_results)]
mod tests {
    use super::*;
    use crate::graph::Attributes;

    fn signed(nodes: &[&str], edges: &[(&str, &str, &str)]) -> Graph {
        let mut g = Graph::new();
        for id in nodes {
            g.add_node(*id, Attributes::new());
        }
        for (u, v, sign) in edges {
            g.add_edge(u, v, Attributes::new().with("sign", *sign)).unwrap();
        }
        g
    }

    #[test]
    fn test_tree_has_no_cycles() {
        let g = signed(&["a", "b", "c"], &[("a", "b", "-"), ("b", "c", "+")]);
        let report = verify_balance(&g);

        assert_eq!(report.verdict, BalanceResult::NoCycles);
        assert_eq!(report.verdict.as_bool(), None);
        assert!(report.cycles.is_empty());
    }

    #[test]
    fn test_triangle_all_positive_is_balanced() {
        let g = signed(
            &["a", "b", "c"],
            &[("a", "b", "+"), ("b", "c", "+"), ("c", "a", "+")],
        );
        assert_eq!(is_balanced(&g), BalanceResult::Balanced);
    }

    #[test]
    fn test_triangle_one_negative_is_imbalanced() {
        let mut g = signed(
            &["a", "b", "c"],
            &[("a", "b", "+"), ("b", "c", "+"), ("c", "a", "+")],
        );
        g.edge_attrs_mut("b", "c").unwrap().insert("sign", "-");

        let report = verify_balance(&g);
        assert_eq!(report.verdict, BalanceResult::Imbalanced);
        assert_eq!(report.cycles[0].product, -1);
        assert_eq!(report.negative_cycles().count(), 1);
    }

    #[test]
    fn test_enemy_of_enemy_is_balanced() {
        let g = signed(
            &["a", "b", "c"],
            &[("a", "b", "+"), ("b", "c", "-"), ("c", "a", "-")],
        );
        assert_eq!(is_balanced(&g), BalanceResult::Balanced);
    }

    #[test]
    fn test_square_flip_closing_edge() {
        let mut g = signed(
            &["A", "B", "C", "D"],
            &[("A", "B", "+"), ("B", "C", "+"), ("C", "D", "+"), ("D", "A", "+")],
        );
        assert_eq!(is_balanced(&g), BalanceResult::Balanced);

        g.edge_attrs_mut("D", "A").unwrap().insert("sign", "-");
        assert_eq!(is_balanced(&g), BalanceResult::Imbalanced);
        assert_eq!(is_balanced(&g).as_bool(), Some(false));
    }

    #[test]
    fn test_missing_sign_defaults_positive() {
        let mut g = Graph::new();
        for id in ["a", "b", "c"] {
            g.add_node(id, Attributes::new());
        }
        g.add_edge("a", "b", Attributes::new()).unwrap();
        g.add_edge("b", "c", Attributes::new()).unwrap();
        g.add_edge("c", "a", Attributes::new()).unwrap();

        assert_eq!(is_balanced(&g), BalanceResult::Balanced);
    }

    #[test]
    fn test_malformed_sign_skipped_and_reported() {
        let g = signed(
            &["a", "b", "c"],
            &[("a", "b", "-"), ("b", "c", "?"), ("c", "a", "+")],
        );
        let report = verify_balance(&g);

        // "?" drops out, leaving - * + = -1
        assert_eq!(report.verdict, BalanceResult::Imbalanced);
        assert_eq!(report.cycles[0].skipped, 1);
        assert_eq!(report.issues.len(), 1);
        assert!(matches!(
            &report.issues[0],
            Error::MalformedEdgeAttribute { key: "sign", value, .. } if value == "?"
        ));
        assert!(report.to_string().contains("1 malformed signs"));
    }

    #[test]
    fn test_one_negative_cycle_taints_graph() {
        // Balanced triangle sharing node c with an imbalanced one
        let g = signed(
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "b", "+"),
                ("b", "c", "+"),
                ("c", "a", "+"),
                ("c", "d", "+"),
                ("d", "e", "+"),
                ("e", "c", "-"),
            ],
        );
        let report = verify_balance(&g);

        assert_eq!(report.cycles.len(), 2);
        assert_eq!(report.negative_cycles().count(), 1);
        assert_eq!(report.verdict, BalanceResult::Imbalanced);
    }
}
