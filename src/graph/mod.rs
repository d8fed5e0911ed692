//! Transport graph interface.
//!
//! The rules engine only ever asks one question of the board: which typed
//! edges leave a node. Hosts plug in their own board by implementing
//! [`Graph`]; [`TransportGraph`] is an adjacency-list implementation good
//! enough for tests, demos and small custom maps.
//!
//! The engine queries the graph fresh on every move generation and never
//! caches edges across turns.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::NodeId;

/// Transport type of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

/// A directed, typed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub destination: NodeId,
    pub transport: Transport,
}

impl Edge {
    #[must_use]
    pub const fn new(destination: NodeId, transport: Transport) -> Self {
        Self {
            destination,
            transport,
        }
    }
}

/// Edges leaving one node. Most stations have fewer than eight.
pub type Edges = SmallVec<[Edge; 8]>;

/// Read-only board access.
pub trait Graph {
    /// Edges leaving `node`. Unknown nodes have none.
    fn edges_from(&self, node: NodeId) -> Edges;

    /// Whether the board has no nodes at all.
    fn is_empty(&self) -> bool;
}

impl<G: Graph + ?Sized> Graph for &G {
    fn edges_from(&self, node: NodeId) -> Edges {
        (**self).edges_from(node)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// Adjacency-list graph.
///
/// ```
/// use rust_pursuit::core::NodeId;
/// use rust_pursuit::graph::{Graph, Transport, TransportGraph};
///
/// let mut graph = TransportGraph::new();
/// graph.add_route(1, 2, Transport::Taxi);
///
/// assert_eq!(graph.edges_from(NodeId::new(1)).len(), 1);
/// assert_eq!(graph.edges_from(NodeId::new(2)).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransportGraph {
    adjacency: FxHashMap<NodeId, Edges>,
}

impl TransportGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no edges. Existing nodes are left alone.
    pub fn add_node(&mut self, node: impl Into<NodeId>) {
        self.adjacency.entry(node.into()).or_default();
    }

    /// Add a one-way edge, creating both endpoints.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        transport: Transport,
    ) {
        let (from, to) = (from.into(), to.into());
        self.add_node(to);
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge::new(to, transport));
    }

    /// Add an edge in both directions.
    pub fn add_route(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, transport: Transport) {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a, b, transport);
        self.add_edge(b, a, transport);
    }

    /// Build from `(a, b, transport)` routes, each added in both directions.
    pub fn from_routes(routes: impl IntoIterator<Item = (u32, u32, Transport)>) -> Self {
        let mut graph = Self::new();
        for (a, b, transport) in routes {
            graph.add_route(a, b, transport);
        }
        graph
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// All nodes, sorted.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<_> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }
}

impl Graph for TransportGraph {
    fn edges_from(&self, node: NodeId) -> Edges {
        self.adjacency.get(&node).cloned().unwrap_or_default()
    }

    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
