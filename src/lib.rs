//! # net-weave
//!
//! net-weave is a pure, deterministic engine for generating and analyzing
//! interconnection-network topologies. Given a family tag and a small
//! parameter record it produces a geometric embedding (one 3-D position
//! per node), the complete undirected edge list, and a closed-form
//! structural metrics record. Rendering, cameras, and parameter forms are
//! external collaborators that consume these outputs.
//!
//! ## Features
//! - Four families: mesh (k-ary n-cube), torus (wraparound cube), fat-tree
//!   (k-ary n-tree with butterfly wiring), and WK-recursive
//! - Violation-collecting parameter validation with per-family bounds and a
//!   global node safety cap
//! - Closed-form metrics (degree, diameter, bisection width, connectivity,
//!   totals) computed from parameters alone
//! - Serde support on all public data types for downstream UI consumption
//!
//! ## Determinism
//!
//! Generation holds no state and uses no randomness: two calls with
//! identical parameters emit identical node orderings and edge lists. Node
//! identity is the node's index in its family's emission order.
//!
//! ## Usage
//! Add `net-weave` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! net-weave = "0.1"
//! ```
//!
//! Then drive the engine through the facade:
//!
//! ```rust
//! use net_weave::prelude::*;
//!
//! let raw = RawTopologyParams::mesh(3, 2);
//! let topology = net_weave::engine::build(Family::Mesh, &raw)?;
//! assert_eq!(topology.graph.node_count(), 9);
//! assert_eq!(topology.metrics.diameter, 4);
//! # Ok::<(), net_weave::net_error::NetWeaveError>(())
//! ```

pub mod engine;
pub mod generators;
pub mod metrics;
pub mod net_error;
pub mod params;
pub mod topology;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::engine::{build, Topology};
    pub use crate::metrics::{DegreeProfile, Homogeneity, MetricsRecord, Symmetry};
    pub use crate::net_error::{NetWeaveError, ParamViolation};
    pub use crate::params::validate::{validate, NODE_SAFETY_CAP};
    pub use crate::params::{Family, RawTopologyParams, TopologyParams};
    pub use crate::topology::{Edge, LinkClass, Node, NodeId, NodeRole, TopologyGraph};
}
