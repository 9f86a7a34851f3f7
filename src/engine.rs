//! Engine facade: dispatch by family to the validator, generators, and
//! metrics.
//!
//! Every call is an independent, synchronous, side-effect-free function of
//! its inputs, so callers may invoke the engine repeatedly and concurrently
//! without coordination. Nothing is cached between calls; a caller that
//! wants memoization adds it explicitly.

use crate::generators::{fat_tree, mesh, torus, wk};
use crate::metrics::{metrics as metrics_for, MetricsRecord};
use crate::net_error::NetWeaveError;
use crate::params::validate::validate as validate_raw;
use crate::params::{Family, RawTopologyParams, TopologyParams};
use crate::topology::TopologyGraph;

use serde::{Deserialize, Serialize};

/// A fully generated topology: parameters, graph, and metrics together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub params: TopologyParams,
    pub graph: TopologyGraph,
    pub metrics: MetricsRecord,
}

/// Normalize and bounds-check raw parameters for `family`.
pub fn validate(
    family: Family,
    raw: &RawTopologyParams,
) -> Result<TopologyParams, NetWeaveError> {
    validate_raw(family, raw)
}

/// Materialize the node embedding and edge list for validated parameters.
pub fn generate(params: &TopologyParams) -> TopologyGraph {
    let graph = match *params {
        TopologyParams::Mesh { size, dims } => mesh::generate(size, dims),
        TopologyParams::Torus { size, dims } => torus::generate(size, dims),
        TopologyParams::FatTree { k, n } => fat_tree::generate(k, n),
        TopologyParams::WkRecursive { k, l } => wk::generate(k, l),
    };
    log::debug!(
        "generated {} topology: {} nodes, {} edges",
        params.family(),
        graph.node_count(),
        graph.edge_count(),
    );
    graph
}

/// Compute the closed-form metrics record for validated parameters.
pub fn metrics(params: &TopologyParams) -> MetricsRecord {
    metrics_for(params)
}

/// Validate, generate, and analyze in one step.
pub fn build(family: Family, raw: &RawTopologyParams) -> Result<Topology, NetWeaveError> {
    let params = validate(family, raw)?;
    Ok(Topology {
        params,
        graph: generate(&params),
        metrics: metrics(&params),
    })
}
