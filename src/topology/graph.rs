//! `TopologyGraph`: the immutable output of a generator run.
//!
//! A graph owns its node and edge vectors and retains nothing across
//! calls. All query helpers return freshly computed values; neighbour
//! lists are sorted for deterministic behaviour.

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::node::{Node, NodeId};

/// Nodes plus undirected edges, as emitted by a generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopologyGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TopologyGraph {
    pub(crate) fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        debug_assert!(
            edges
                .iter()
                .all(|e| e.b().index() < nodes.len()),
            "edge endpoint out of node range"
        );
        #[cfg(debug_assertions)]
        {
            let mut seen = hashbrown::HashSet::with_capacity(edges.len());
            for edge in &edges {
                assert!(seen.insert(edge.endpoints()), "duplicate edge {edge:?}");
            }
        }
        TopologyGraph { nodes, edges }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in emission order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in emission order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Embedding position of `id`, if it exists.
    pub fn position_of(&self, id: NodeId) -> Option<[f64; 3]> {
        self.nodes.get(id.index()).map(|n| n.position)
    }

    /// Incident edge count per node, indexed by emission order.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.nodes.len()];
        for edge in &self.edges {
            degrees[edge.a().index()] += 1;
            degrees[edge.b().index()] += 1;
        }
        degrees
    }

    /// Incident edge count of a single node.
    pub fn degree_of(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    /// Sorted neighbour lists, indexed by emission order.
    pub fn adjacency(&self) -> Vec<Vec<NodeId>> {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            adjacency[edge.a().index()].push(edge.b());
            adjacency[edge.b().index()].push(edge.a());
        }
        for neighbours in &mut adjacency {
            neighbours.sort_unstable();
        }
        adjacency
    }
}
