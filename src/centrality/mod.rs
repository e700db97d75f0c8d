//! Edge centrality.
//!
//! ## Edge Betweenness
//!
//! The betweenness of an edge `e` sums, over every unordered node pair
//! `{s, t}`, the fraction of shortest `s`–`t` paths that use `e`:
//!
//! ```text
//! c_B(e) = Σ_{s<t} σ(s, t | e) / σ(s, t)
//! ```
//!
//! where σ(s, t) counts shortest paths and σ(s, t | e) those through `e`.
//! Pairs in different components contribute nothing.
//!
//! Brandes' algorithm computes all of it in O(V·E) for unweighted graphs:
//! one BFS per source counts shortest paths, then a reverse sweep pushes
//! dependencies back onto the predecessor edges.
//!
//! **Intuition**: edges that bridge dense regions carry every path between
//! them. Removing the top edge repeatedly (Girvan–Newman) peels those
//! bridges off first.
//!
//! ## Normalization
//!
//! | `normalized` | Scale | Total over edges |
//! |--------------|-------|------------------|
//! | `true` (default) | `1 / (n(n-1)/2)` | Σ d(s, t) over connected pairs, divided by the pair count |
//! | `false` | `1` | Σ d(s, t) over connected pairs |
//!
//! ## References
//!
//! - Brandes (2001). "A faster algorithm for betweenness centrality."
//! - Brandes (2008). "On variants of shortest-path betweenness centrality
//!   and their generic computation." (edge variant)

mod betweenness;

pub use betweenness::{edge_betweenness, CentralityTable, EdgeBetweenness, EdgeScore};
