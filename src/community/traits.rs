//! Community detection traits.

use crate::error::Result;
use crate::graph::Graph;

/// Trait for community detection algorithms.
pub trait CommunityDetection {
    /// Detect communities in a graph without modifying it.
    ///
    /// Returns a mapping from node position (insertion order) to community ID.
    fn detect(&self, graph: &Graph) -> Result<Vec<usize>>;
}
