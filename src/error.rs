use thiserror::Error;

/// Result alias for `schism`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the graph store and the analysis passes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid argument value.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Error message.
        message: String,
    },

    /// None of the requested node attributes exist on any node.
    #[error("none of the node attributes {keys:?} found in graph nodes")]
    MissingAttribute {
        /// Keys that were searched, in preference order.
        keys: Vec<&'static str>,
    },

    /// Edge attribute with an unrecognized value.
    ///
    /// Reported, not raised: balance verification skips the edge and continues.
    #[error("unexpected {key} value {value:?} between nodes {u} and {v}")]
    MalformedEdgeAttribute {
        /// First endpoint.
        u: String,
        /// Second endpoint.
        v: String,
        /// Attribute key.
        key: &'static str,
        /// Offending value, rendered.
        value: String,
    },

    /// No edge between the two nodes.
    #[error("edge ({u}, {v}) not found")]
    EdgeNotFound {
        /// First endpoint.
        u: String,
        /// Second endpoint.
        v: String,
    },

    /// Node id not present in the graph.
    #[error("node {0:?} not found")]
    NodeNotFound(String),

    /// Edge removal ran dry before the component target was reached.
    #[error("no edges left to remove at {components} components (target {target})")]
    NoEdgesRemaining {
        /// Components when the graph ran out of edges.
        components: usize,
        /// Requested component count.
        target: usize,
    },
}
