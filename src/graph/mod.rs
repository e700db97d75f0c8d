//! In-memory undirected attributed graph.
//!
//! [`Graph`] wraps a [`StableUnGraph`] and adds string node identifiers,
//! attribute maps and a fixed iteration order:
//!
//! - nodes iterate in insertion order
//! - edges iterate in insertion order
//! - `neighbors(u)` follows the insertion order of `u`'s incident edges
//!
//! Tie-breaking in the betweenness and partitioning passes depends on this
//! order, so it is part of the contract rather than an accident of storage.
//!
//! Nodes are never removed, so `NodeIndex::index()` is dense in `0..node_count()`.
//! Edge slots can be recycled by petgraph after a removal; edge order is
//! tracked separately by a per-edge sequence number.
//!
//! ```rust
//! use schism::{Attributes, Graph};
//!
//! let mut g = Graph::new();
//! g.add_node("a", Attributes::new().with("club", "x"));
//! g.add_node("b", Attributes::new());
//! g.add_edge("a", "b", Attributes::new().with("sign", "-")).unwrap();
//!
//! assert_eq!(g.degree("a").unwrap(), 1);
//! assert!(g.has_edge("b", "a"));
//! ```

mod attrs;

pub use attrs::{keys, AttrValue, Attributes, Sign};

use crate::error::{Error, Result};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, NodeIndexable};
use std::collections::HashMap;

/// Node payload.
#[derive(Debug, Clone)]
pub struct NodeData {
    id: String,
    attrs: Attributes,
}

impl NodeData {
    /// Node identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Node attributes.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

/// Edge payload.
#[derive(Debug, Clone)]
pub struct EdgeData {
    attrs: Attributes,
    seq: u64,
}

impl EdgeData {
    /// Edge attributes.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

/// Borrowed view of one edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeEntry<'a> {
    /// Endpoint as stored (first argument of `add_edge`).
    pub u: &'a str,
    /// Other endpoint.
    pub v: &'a str,
    /// Edge attributes.
    pub attrs: &'a Attributes,
}

/// Undirected attributed graph with deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: StableUnGraph<NodeData, EdgeData>,
    ids: HashMap<String, NodeIndex>,
    next_seq: u64,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with preallocated storage.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            inner: StableUnGraph::with_capacity(nodes, edges),
            ids: HashMap::with_capacity(nodes),
            next_seq: 0,
        }
    }

    /// Add a node.
    ///
    /// Re-adding an existing id merges `attrs` into the existing node.
    pub fn add_node(&mut self, id: impl Into<String>, attrs: Attributes) -> NodeIndex {
        let id = id.into();
        if let Some(&idx) = self.ids.get(&id) {
            self.inner[idx].attrs.merge(attrs);
            return idx;
        }
        let idx = self.inner.add_node(NodeData {
            id: id.clone(),
            attrs,
        });
        let _ = self.ids.insert(id, idx);
        idx
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// Re-adding an existing edge (in either orientation) merges `attrs`
    /// into it; parallel edges are never created.
    pub fn add_edge(&mut self, u: &str, v: &str, attrs: Attributes) -> Result<EdgeIndex> {
        let a = self.require(u)?;
        let b = self.require(v)?;
        if a == b {
            return Err(Error::InvalidArgument {
                name: "edge",
                message: format!("self-loop on node {u:?}"),
            });
        }
        if let Some(e) = self.inner.find_edge(a, b) {
            self.inner[e].attrs.merge(attrs);
            return Ok(e);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        Ok(self.inner.add_edge(a, b, EdgeData { attrs, seq }))
    }

    /// Remove the edge between `u` and `v`, returning its attributes.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Result<Attributes> {
        let e = self.find_edge(u, v)?;
        self.inner
            .remove_edge(e)
            .map(|data| data.attrs)
            .ok_or_else(|| edge_not_found(u, v))
    }

    /// Whether a node with this id exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    /// Whether an edge joins `u` and `v` (either orientation).
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.find_edge(u, v).is_ok()
    }

    /// Adjacent node ids, in the insertion order of the connecting edges.
    pub fn neighbors(&self, id: &str) -> Result<Vec<&str>> {
        let a = self.require(id)?;
        Ok(self
            .incident(a)
            .into_iter()
            .map(|(n, _)| self.inner[n].id.as_str())
            .collect())
    }

    /// Number of incident edges.
    pub fn degree(&self, id: &str) -> Result<usize> {
        let a = self.require(id)?;
        Ok(self.inner.edges(a).count())
    }

    /// Attributes of a node.
    pub fn node_attrs(&self, id: &str) -> Option<&Attributes> {
        self.ids.get(id).map(|&idx| &self.inner[idx].attrs)
    }

    /// Mutable attributes of a node.
    pub fn node_attrs_mut(&mut self, id: &str) -> Option<&mut Attributes> {
        let idx = *self.ids.get(id)?;
        Some(&mut self.inner[idx].attrs)
    }

    /// Attributes of an edge.
    pub fn edge_attrs(&self, u: &str, v: &str) -> Option<&Attributes> {
        let e = self.find_edge(u, v).ok()?;
        Some(&self.inner[e].attrs)
    }

    /// Mutable attributes of an edge.
    pub fn edge_attrs_mut(&mut self, u: &str, v: &str) -> Option<&mut Attributes> {
        let e = self.find_edge(u, v).ok()?;
        Some(&mut self.inner[e].attrs)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> + '_ {
        self.inner.node_indices().map(move |idx| &self.inner[idx])
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeEntry<'_>> + '_ {
        self.edge_order().into_iter().filter_map(move |e| {
            let (a, b) = self.inner.edge_endpoints(e)?;
            Some(EdgeEntry {
                u: &self.inner[a].id,
                v: &self.inner[b].id,
                attrs: &self.inner[e].attrs,
            })
        })
    }

    /// Index of a node id.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.ids.get(id).copied()
    }

    /// Id of a node index.
    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.inner.node_weight(idx).map(|n| n.id.as_str())
    }

    /// Read-only access to the underlying petgraph storage.
    pub fn as_petgraph(&self) -> &StableUnGraph<NodeData, EdgeData> {
        &self.inner
    }

    /// Live edge indices in insertion order.
    pub(crate) fn edge_order(&self) -> Vec<EdgeIndex> {
        let mut order: Vec<EdgeIndex> = self.inner.edge_indices().collect();
        order.sort_by_key(|&e| self.inner[e].seq);
        order
    }

    /// Dense adjacency: for each node index, `(neighbor, edge)` pairs in
    /// edge insertion order.
    pub(crate) fn adjacency(&self) -> Vec<Vec<(usize, EdgeIndex)>> {
        let mut adj = vec![Vec::new(); self.inner.node_bound()];
        for e in self.edge_order() {
            if let Some((a, b)) = self.inner.edge_endpoints(e) {
                adj[a.index()].push((b.index(), e));
                adj[b.index()].push((a.index(), e));
            }
        }
        adj
    }

    pub(crate) fn endpoints(&self, e: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.inner.edge_endpoints(e)
    }

    pub(crate) fn edge_data(&self, e: EdgeIndex) -> Option<&EdgeData> {
        self.inner.edge_weight(e)
    }

    pub(crate) fn node_data(&self, idx: NodeIndex) -> Option<&NodeData> {
        self.inner.node_weight(idx)
    }

    fn incident(&self, a: NodeIndex) -> Vec<(NodeIndex, u64)> {
        let mut out: Vec<(NodeIndex, u64)> = self
            .inner
            .edges(a)
            .map(|edge| {
                let other = if edge.source() == a {
                    edge.target()
                } else {
                    edge.source()
                };
                (other, edge.weight().seq)
            })
            .collect();
        out.sort_by_key(|&(_, seq)| seq);
        out
    }

    fn find_edge(&self, u: &str, v: &str) -> Result<EdgeIndex> {
        let a = self.require(u)?;
        let b = self.require(v)?;
        self.inner.find_edge(a, b).ok_or_else(|| edge_not_found(u, v))
    }

    fn require(&self, id: &str) -> Result<NodeIndex> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }
}

fn edge_not_found(u: &str, v: &str) -> Error {
    Error::EdgeNotFound {
        u: u.to_string(),
        v: v.to_string(),
    }
}
