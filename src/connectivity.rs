//! Connected components and breadth-first spanning trees.
//!
//! All traversals start from nodes in insertion order and expand neighbors in
//! edge insertion order, so labels, trees and forests are reproducible.

use crate::error::{Error, Result};
use crate::graph::Graph;
use petgraph::stable_graph::NodeIndex;
use std::collections::VecDeque;

/// Number of connected components.
///
/// An empty graph has zero components.
pub fn component_count(graph: &Graph) -> usize {
    let labels = component_labels(graph);
    labels.iter().max().map_or(0, |&m| m + 1)
}

/// Component id for every node, indexed by insertion position.
///
/// Ids are consecutive and numbered by first appearance.
pub fn component_labels(graph: &Graph) -> Vec<usize> {
    let adj = graph.adjacency();
    let n = adj.len();
    let mut labels = vec![usize::MAX; n];
    let mut next = 0;
    let mut queue = VecDeque::new();

    for start in 0..n {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = next;
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            for &(nbr, _) in &adj[node] {
                if labels[nbr] == usize::MAX {
                    labels[nbr] = next;
                    queue.push_back(nbr);
                }
            }
        }
        next += 1;
    }
    labels
}

/// Components as lists of node ids, each in insertion order.
pub fn connected_components(graph: &Graph) -> Vec<Vec<&str>> {
    let labels = component_labels(graph);
    let mut out: Vec<Vec<&str>> = Vec::new();
    for (node, &label) in graph.nodes().zip(labels.iter()) {
        if label == out.len() {
            out.push(Vec::new());
        }
        out[label].push(node.id());
    }
    out
}

/// Whether every node is reachable from every other node.
///
/// The empty graph counts as connected.
pub fn is_connected(graph: &Graph) -> bool {
    component_count(graph) <= 1
}

/// Breadth-first spanning tree of the component containing `root`.
///
/// The returned graph holds the component's nodes, with their attributes,
/// and exactly the tree edges, with theirs. Nodes appear in visit order.
pub fn bfs_tree(graph: &Graph, root: &str) -> Result<Graph> {
    let root_idx = graph
        .node_index(root)
        .ok_or_else(|| Error::NodeNotFound(root.to_string()))?;
    let adj = graph.adjacency();
    let mut visited = vec![false; adj.len()];
    let mut order = Vec::new();
    let mut tree_edges = Vec::new();
    let mut queue = VecDeque::new();

    visited[root_idx.index()] = true;
    queue.push_back(root_idx.index());
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &(nbr, e) in &adj[node] {
            if !visited[nbr] {
                visited[nbr] = true;
                tree_edges.push((node, nbr, e));
                queue.push_back(nbr);
            }
        }
    }

    let mut tree = Graph::with_capacity(order.len(), tree_edges.len());
    for &node in &order {
        if let Some(data) = graph.node_data(NodeIndex::new(node)) {
            let _ = tree.add_node(data.id(), data.attrs().clone());
        }
    }
    for (parent, child, e) in tree_edges {
        let (Some(p), Some(c), Some(data)) = (
            graph.node_id(NodeIndex::new(parent)),
            graph.node_id(NodeIndex::new(child)),
            graph.edge_data(e),
        ) else {
            continue;
        };
        let _ = tree.add_edge(p, c, data.attrs().clone())?;
    }
    Ok(tree)
}

/// Breadth-first spanning forest over dense node indices.
pub(crate) struct SpanningForest {
    /// Parent of each node; roots are their own parent.
    pub(crate) parent: Vec<usize>,
    /// Distance from the node's root.
    pub(crate) depth: Vec<usize>,
    /// Tree membership per edge slot (`EdgeIndex::index()`).
    pub(crate) tree_edge: Vec<bool>,
}

impl SpanningForest {
    pub(crate) fn build(adj: &[Vec<(usize, petgraph::stable_graph::EdgeIndex)>]) -> Self {
        let n = adj.len();
        let edge_slots = adj
            .iter()
            .flatten()
            .map(|&(_, e)| e.index() + 1)
            .max()
            .unwrap_or(0);
        let mut parent: Vec<usize> = (0..n).collect();
        let mut depth = vec![0; n];
        let mut visited = vec![false; n];
        let mut tree_edge = vec![false; edge_slots];
        let mut queue = VecDeque::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            queue.push_back(root);
            while let Some(node) = queue.pop_front() {
                for &(nbr, e) in &adj[node] {
                    if !visited[nbr] {
                        visited[nbr] = true;
                        parent[nbr] = node;
                        depth[nbr] = depth[node] + 1;
                        tree_edge[e.index()] = true;
                        queue.push_back(nbr);
                    }
                }
            }
        }

        Self {
            parent,
            depth,
            tree_edge,
        }
    }
}
