//! Core topology types: node handles, edges, and the generated graph.
//!
//! Everything here is produced fresh by a generation call and is immutable
//! afterwards; longer-lived copies belong to the rendering collaborator.

pub mod edge;
pub mod graph;
pub mod node;

pub use edge::{Edge, LinkClass};
pub use graph::TopologyGraph;
pub use node::{Node, NodeId, NodeRole};
