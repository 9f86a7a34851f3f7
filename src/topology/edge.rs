//! Undirected edges and their rendering classes.

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Rendering class of a link.
///
/// Classes mirror the visual distinctions a renderer draws (wrap links
/// curved and tinted, host uplinks heavier than stage links). They never
/// affect connectivity or metrics.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkClass {
    /// Nearest-neighbour lattice link.
    Lattice,
    /// Wrap-around link closing a torus ring.
    Wraparound,
    /// Host to stage-0 switch attachment.
    HostUplink,
    /// Switch-to-switch butterfly link between adjacent stages.
    Butterfly,
    /// Intra-block complete-graph link.
    BlockLocal,
    /// Inter-sub-block completion link.
    LevelBridge,
}

/// An undirected edge between two distinct nodes.
///
/// Endpoints are stored in canonical order (`a < b`) so edge lists compare
/// as sets regardless of emission order.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
    class: LinkClass,
}

impl Edge {
    /// Creates a canonical edge between two distinct nodes.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`; self-loops are forbidden in every family.
    pub fn new(a: NodeId, b: NodeId, class: LinkClass) -> Self {
        assert!(a != b, "self-loop on node {a}");
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        Edge { a, b, class }
    }

    /// Lower endpoint.
    #[inline]
    pub fn a(self) -> NodeId {
        self.a
    }

    /// Upper endpoint.
    #[inline]
    pub fn b(self) -> NodeId {
        self.b
    }

    /// Both endpoints in canonical order.
    #[inline]
    pub fn endpoints(self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// Rendering class of this link.
    #[inline]
    pub fn class(self) -> LinkClass {
        self.class
    }

    /// True if `id` is one of the endpoints.
    #[inline]
    pub fn touches(self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }
}
