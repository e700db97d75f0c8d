//! # schism
//!
//! Structural analysis of attributed, signed, undirected graphs.
//!
//! - **Partitioning**: split a graph into `n` connected components by
//!   repeatedly cutting the edge with the highest betweenness (Girvan–Newman).
//! - **Structural balance**: check every cycle of a cycle basis for a positive
//!   product of edge signs.
//! - **Homophily**: measure how often edges join nodes of the same group.
//!
//! Every pass takes the graph explicitly. Only partitioning mutates it, and
//! only by removing edges.
//!
//! ```rust
//! use schism::{homophily_index, is_balanced, partition, Attributes, BalanceResult, Graph};
//!
//! let mut g = Graph::new();
//! for (id, club) in [("a", "x"), ("b", "x"), ("c", "x"), ("d", "y"), ("e", "y"), ("f", "y")] {
//!     g.add_node(id, Attributes::new().with("club", club));
//! }
//! for (u, v) in [("a", "b"), ("b", "c"), ("c", "a"), ("d", "e"), ("e", "f"), ("f", "d"), ("c", "d")] {
//!     g.add_edge(u, v, Attributes::new()).unwrap();
//! }
//!
//! let (index, _) = homophily_index(&g).unwrap();
//! assert!(index > 0.8);
//! assert_eq!(is_balanced(&g), BalanceResult::Balanced);
//!
//! let outcome = partition(&mut g, 2).unwrap();
//! assert_eq!(outcome.removed[0].u, "c");
//! assert_eq!(outcome.removed[0].v, "d");
//! ```
//!
//! Iteration order is insertion order throughout, so ties in betweenness are
//! broken the same way on every run. Enable the `parallel` feature to spread
//! the per-source shortest-path work over the rayon pool; results are
//! identical to the sequential path.

pub mod balance;
pub mod centrality;
pub mod community;
pub mod connectivity;
pub mod cycles;
/// Error types used across `schism`.
pub mod error;
pub mod graph;
pub mod metrics;

pub use balance::{is_balanced, verify_balance, BalanceReport, BalanceResult, CycleSign};
pub use centrality::{edge_betweenness, CentralityTable, EdgeBetweenness, EdgeScore};
pub use community::{partition, CommunityDetection, GirvanNewman, PartitionOutcome, RemovedEdge};
pub use connectivity::{bfs_tree, component_count, component_labels, connected_components, is_connected};
pub use cycles::cycle_basis;
pub use error::{Error, Result};
pub use graph::{AttrValue, Attributes, EdgeEntry, Graph, NodeData, Sign};
pub use metrics::{
    clustering_coefficients, degrees, homophily_index, homophily_report, neighborhood_overlap,
    Homophily, HomophilyReport,
};
