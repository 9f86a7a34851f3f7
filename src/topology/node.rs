//! `NodeId`: a dense, zero-cost handle for topology nodes.
//!
//! Node identity is the node's position in its family's emission order:
//! ids are assigned 0, 1, 2, … as nodes are produced and are never reused
//! or renumbered within a generation call. Keeping the handle
//! `repr(transparent)` over `u32` lets renderers pass id buffers to GPU
//! APIs without conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node identity, equal to the node's lexicographic index in its
/// family's generation order.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Wraps a raw emission index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// The raw index as a `usize`, for slice lookups.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The raw index value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendering role of a node.
///
/// Roles exist so a renderer can style hosts, switches, and core switches
/// differently; they carry no graph semantics and never affect metrics.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Compute/router node of a direct network (mesh, torus, WK).
    Router,
    /// Leaf host of an indirect network.
    Host,
    /// Switch at the given stage of a multistage network. The core stage
    /// is the highest one.
    Switch { stage: u32 },
}

/// A generated node: identity, embedding position, and rendering role.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: [f64; 3],
    pub role: NodeRole,
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `NodeId` has the same layout as `u32`.
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(NodeId, u32);
    assert_eq_align!(NodeId, u32);
}
