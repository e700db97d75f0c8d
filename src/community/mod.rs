//! Community detection by divisive edge removal.
//!
//! Given a graph, split it into a requested number of connected components by
//! cutting the edges that carry the most shortest paths.
//!
//! ## Why Betweenness
//!
//! Edges inside a dense group have many alternatives: a shortest path between
//! two members rarely depends on any single one of them. Edges *between*
//! groups are few, so every path from one group to the other crowds through
//! them. Edge betweenness measures exactly that crowding, and removing the
//! top edge first separates groups before it breaks them apart.
//!
//! ```text
//!   a0 ─ a1            b1 ─ b2
//!    \   /              \   /
//!     a2 ───────────── b0
//!          bridge: 9 of 15 pairs
//! ```
//!
//! ## Determinism
//!
//! When several edges tie for the top score, the first one in the graph's
//! edge insertion order is removed. Repeated runs on the same input always
//! remove the same edges in the same order.
//!
//! ## Usage
//!
//! ```rust
//! use schism::{partition, Attributes, Graph};
//!
//! let mut graph = Graph::new();
//! for id in ["A", "B", "C", "D", "E"] {
//!     graph.add_node(id, Attributes::new());
//! }
//! for (u, v) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")] {
//!     graph.add_edge(u, v, Attributes::new()).unwrap();
//! }
//!
//! let outcome = partition(&mut graph, 2).unwrap();
//! assert_eq!(outcome.components, 2);
//! assert_eq!(outcome.removed.len(), 1);
//! ```
//!
//! ## References
//!
//! - Girvan & Newman (2002). "Community structure in social and biological
//!   networks." PNAS 99(12), 7821–7826.
//! - Newman & Girvan (2004). "Finding and evaluating community structure in networks."

mod girvan_newman;
mod traits;

pub use girvan_newman::{partition, GirvanNewman, PartitionOutcome, RemovedEdge};
pub use traits::CommunityDetection;
