use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::Record;

/// Dense node handle: a node's position in its store.
pub type NodeIndex = usize;

/// Ceiling on nodes in a store, and on records in a flat collection.
pub const MAX_NODES: usize = 100;

/// Node slots reserved by [`GraphStore::new`].
pub const INITIAL_NODE_CAPACITY: usize = 10;

/// Neighbor slots reserved per node on insertion.
pub const INITIAL_NEIGHBOR_CAPACITY: usize = 5;

/// A record plus its outgoing adjacency list.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub data: Record,
    neighbors: Vec<NodeIndex>,
}

impl GraphNode {
    fn new(data: Record) -> Self {
        Self {
            data,
            neighbors: Vec::with_capacity(INITIAL_NEIGHBOR_CAPACITY),
        }
    }

    /// Outgoing neighbors in edge insertion order, duplicates included.
    pub fn neighbors(&self) -> &[NodeIndex] {
        &self.neighbors
    }
}

/// In-memory directed graph of records.
///
/// Nodes live in an arena indexed by [`NodeIndex`]; edges are stored as
/// indices on the source node. Nodes are never removed, so every stored
/// index stays valid for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<GraphNode>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_NODE_CAPACITY)
    }

    /// Pre-allocate for a known node count (capped at [`MAX_NODES`]).
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count.min(MAX_NODES)),
        }
    }

    /// Append a node and return the index it now occupies.
    pub fn add_node(&mut self, record: Record) -> Result<NodeIndex> {
        if self.is_full() {
            warn!(max = MAX_NODES, "add_node rejected: graph is full");
            return Err(Error::Full { max: MAX_NODES });
        }
        let index = self.nodes.len();
        self.nodes.push(GraphNode::new(record));
        debug!(index, node_count = self.nodes.len(), "node added");
        Ok(index)
    }

    /// Add a directed edge `from → to`. Self-loops and duplicates are kept.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<()> {
        let node_count = self.nodes.len();
        for index in [from, to] {
            if index >= node_count {
                warn!(index, node_count, "add_edge rejected: index out of range");
                return Err(Error::InvalidIndex { index, node_count });
            }
        }
        self.nodes[from].neighbors.push(to);
        debug!(from, to, "edge added");
        Ok(())
    }

    /// Get a node's record.
    pub fn node(&self, index: NodeIndex) -> Option<&Record> {
        self.nodes.get(index).map(|n| &n.data)
    }

    /// Get a node's outgoing neighbors as store indices.
    pub fn neighbor_indices_of(&self, index: NodeIndex) -> Option<&[NodeIndex]> {
        self.nodes.get(index).map(GraphNode::neighbors)
    }

    /// Iterate nodes in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> {
        self.nodes.iter().enumerate()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.nodes.len() >= MAX_NODES
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let nodes_mem = self.nodes.capacity() * size_of::<GraphNode>();
        let edges_mem: usize = self
            .nodes
            .iter()
            .map(|n| n.neighbors.capacity() * size_of::<NodeIndex>())
            .sum();

        nodes_mem + edges_mem
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
