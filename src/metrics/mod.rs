//! Closed-form structural metrics for each topology family.
//!
//! Metrics are a pure function of the parameter record and never inspect a
//! materialized graph. Link counts follow the physical-undirected
//! convention throughout: one entry per physical cable, not one per
//! directed channel. Fat-tree bisection is half the host count under the
//! same convention.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::{Family, TopologyParams};

/// Whether every node sees the same topology around itself.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symmetry {
    /// All nodes are structurally equivalent.
    VertexTransitive,
    /// Boundary or corner nodes differ from interior ones.
    Asymmetric,
    /// Stages differ by construction; the root is not a leaf.
    Hierarchical,
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Symmetry::VertexTransitive => "vertex-transitive",
            Symmetry::Asymmetric => "asymmetric",
            Symmetry::Hierarchical => "hierarchical",
        })
    }
}

/// Whether all nodes share a single degree.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Homogeneity {
    Uniform,
    Mixed,
}

impl fmt::Display for Homogeneity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Homogeneity::Uniform => "uniform",
            Homogeneity::Mixed => "mixed",
        })
    }
}

/// Node degree, a single value or a min/max pair for mixed families.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeProfile {
    Uniform(u32),
    Range { min: u32, max: u32 },
}

impl DegreeProfile {
    /// Smallest degree in the profile.
    pub fn min(self) -> u32 {
        match self {
            DegreeProfile::Uniform(d) => d,
            DegreeProfile::Range { min, .. } => min,
        }
    }

    /// Largest degree in the profile.
    pub fn max(self) -> u32 {
        match self {
            DegreeProfile::Uniform(d) => d,
            DegreeProfile::Range { max, .. } => max,
        }
    }
}

impl fmt::Display for DegreeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeProfile::Uniform(d) => write!(f, "{d}"),
            DegreeProfile::Range { min, max } => write!(f, "min {min}, max {max}"),
        }
    }
}

/// Closed-form structural figures for a parameterized family.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub family: Family,
    pub symmetry: Symmetry,
    pub homogeneity: Homogeneity,
    /// Switch degree for fat-trees, node degree otherwise.
    pub degree: DegreeProfile,
    /// Maximum shortest-path hop count between any two nodes.
    pub diameter: u32,
    /// Physical links crossing a balanced mid-cut.
    pub bisection_width: u64,
    /// Structural lower bound on edges whose removal disconnects the graph.
    pub connectivity: u32,
    /// Switch count for fat-trees, node count otherwise.
    pub node_count: u64,
    /// Leaf host count; only indirect networks distinguish hosts.
    pub host_count: Option<u64>,
    /// Physical undirected link count.
    pub link_count: u64,
}

/// Compute the metrics record for a validated parameter set.
pub fn metrics(params: &TopologyParams) -> MetricsRecord {
    match *params {
        TopologyParams::Mesh { size, dims } => mesh(size, dims),
        TopologyParams::Torus { size, dims } => torus(size, dims),
        TopologyParams::FatTree { k, n } => fat_tree(k, n),
        TopologyParams::WkRecursive { k, l } => wk(k, l),
    }
}

fn mesh(size: u32, dims: u32) -> MetricsRecord {
    let s = size as u64;
    MetricsRecord {
        family: Family::Mesh,
        symmetry: Symmetry::Asymmetric,
        homogeneity: Homogeneity::Mixed,
        degree: DegreeProfile::Range {
            min: dims,
            max: 2 * dims,
        },
        diameter: dims * (size - 1),
        bisection_width: s.pow(dims - 1),
        connectivity: dims,
        node_count: s.pow(dims),
        host_count: None,
        link_count: dims as u64 * s.pow(dims - 1) * (s - 1),
    }
}

fn torus(size: u32, dims: u32) -> MetricsRecord {
    let s = size as u64;
    MetricsRecord {
        family: Family::Torus,
        symmetry: Symmetry::VertexTransitive,
        homogeneity: Homogeneity::Uniform,
        degree: DegreeProfile::Uniform(2 * dims),
        diameter: dims * (size / 2),
        bisection_width: 2 * s.pow(dims - 1),
        connectivity: 2 * dims,
        node_count: s.pow(dims),
        host_count: None,
        link_count: dims as u64 * s.pow(dims),
    }
}

fn fat_tree(k: u32, n: u32) -> MetricsRecord {
    let hosts = (k as u64).pow(n);
    MetricsRecord {
        family: Family::FatTree,
        symmetry: Symmetry::Hierarchical,
        homogeneity: Homogeneity::Uniform,
        degree: DegreeProfile::Uniform(2 * k),
        diameter: 2 * n,
        bisection_width: hosts / 2,
        connectivity: k,
        node_count: n as u64 * (k as u64).pow(n - 1),
        host_count: Some(hosts),
        link_count: n as u64 * hosts,
    }
}

fn wk(k: u32, l: u32) -> MetricsRecord {
    let nodes = (k as u64).pow(l);
    MetricsRecord {
        family: Family::WkRecursive,
        symmetry: Symmetry::Asymmetric,
        homogeneity: Homogeneity::Mixed,
        degree: DegreeProfile::Range { min: k - 1, max: k },
        diameter: 2u32.pow(l) - 1,
        bisection_width: k as u64,
        connectivity: k - 1,
        node_count: nodes,
        host_count: None,
        link_count: (nodes * k as u64 - k as u64) / 2,
    }
}
