//! Topology families and their parameter records.
//!
//! A caller supplies a [`Family`] tag plus a [`RawTopologyParams`] record
//! (all fields optional, as they arrive from a parameter form). Validation
//! turns the pair into a normalized [`TopologyParams`] value that the
//! generators and metrics accept without further checking.

pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::net_error::NetWeaveError;

/// Topology family tag.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// k-ary n-cube without wraparound.
    Mesh,
    /// k-ary n-cube with wraparound on every axis.
    Torus,
    /// k-ary n-tree with butterfly stage wiring.
    FatTree,
    /// WK-recursive hierarchical topology.
    #[serde(rename = "wk")]
    WkRecursive,
}

impl Family {
    /// All families, in selector order.
    pub const ALL: [Family; 4] = [
        Family::Mesh,
        Family::Torus,
        Family::WkRecursive,
        Family::FatTree,
    ];

    /// Canonical tag used by parameter-input surfaces.
    pub fn tag(self) -> &'static str {
        match self {
            Family::Mesh => "mesh",
            Family::Torus => "torus",
            Family::FatTree => "fat_tree",
            Family::WkRecursive => "wk",
        }
    }

    /// Default parameter record shown when a family is first selected.
    pub fn default_params(self) -> RawTopologyParams {
        match self {
            Family::Mesh => RawTopologyParams::mesh(3, 2),
            Family::Torus => RawTopologyParams::torus(4, 2),
            Family::FatTree => RawTopologyParams::fat_tree(2, 3),
            Family::WkRecursive => RawTopologyParams::wk(3, 2),
        }
    }
}

impl FromStr for Family {
    type Err = NetWeaveError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "mesh" => Ok(Family::Mesh),
            "torus" => Ok(Family::Torus),
            "fat_tree" => Ok(Family::FatTree),
            "wk" => Ok(Family::WkRecursive),
            other => Err(NetWeaveError::UnknownFamily(other.to_owned())),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Raw, unvalidated parameter values as supplied by a caller.
///
/// Every field is optional; the validator decides which fields a family
/// requires and reports the missing ones. Values are signed so that
/// out-of-range input (including negatives) is representable and reported
/// instead of rejected at the type level.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RawTopologyParams {
    pub size: Option<i64>,
    pub dims: Option<i64>,
    pub k: Option<i64>,
    pub n: Option<i64>,
    pub l: Option<i64>,
}

impl RawTopologyParams {
    /// Raw record for a mesh request.
    pub fn mesh(size: i64, dims: i64) -> Self {
        Self {
            size: Some(size),
            dims: Some(dims),
            ..Self::default()
        }
    }

    /// Raw record for a torus request.
    pub fn torus(size: i64, dims: i64) -> Self {
        Self::mesh(size, dims)
    }

    /// Raw record for a fat-tree request.
    pub fn fat_tree(k: i64, n: i64) -> Self {
        Self {
            k: Some(k),
            n: Some(n),
            ..Self::default()
        }
    }

    /// Raw record for a WK-recursive request.
    pub fn wk(k: i64, l: i64) -> Self {
        Self {
            k: Some(k),
            l: Some(l),
            ..Self::default()
        }
    }
}

/// Validated, normalized topology parameters.
///
/// Invariant: a value produced by [`validate::validate`] satisfies every
/// bound for its family, so generation and metrics are total over it.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum TopologyParams {
    Mesh { size: u32, dims: u32 },
    Torus { size: u32, dims: u32 },
    FatTree { k: u32, n: u32 },
    #[serde(rename = "wk")]
    WkRecursive { k: u32, l: u32 },
}

impl TopologyParams {
    /// The family this record parameterizes.
    pub fn family(&self) -> Family {
        match self {
            TopologyParams::Mesh { .. } => Family::Mesh,
            TopologyParams::Torus { .. } => Family::Torus,
            TopologyParams::FatTree { .. } => Family::FatTree,
            TopologyParams::WkRecursive { .. } => Family::WkRecursive,
        }
    }

    /// Total number of nodes the generator will emit for this record.
    ///
    /// For fat-trees this counts hosts and switches together, since both
    /// appear in the generated graph.
    pub fn node_count(&self) -> u64 {
        match *self {
            TopologyParams::Mesh { size, dims } | TopologyParams::Torus { size, dims } => {
                (size as u64).pow(dims)
            }
            TopologyParams::FatTree { k, n } => {
                (k as u64).pow(n) + n as u64 * (k as u64).pow(n - 1)
            }
            TopologyParams::WkRecursive { k, l } => (k as u64).pow(l),
        }
    }

    /// Raw record equivalent, for re-validation round-trips.
    pub fn to_raw(&self) -> RawTopologyParams {
        match *self {
            TopologyParams::Mesh { size, dims } => {
                RawTopologyParams::mesh(size as i64, dims as i64)
            }
            TopologyParams::Torus { size, dims } => {
                RawTopologyParams::torus(size as i64, dims as i64)
            }
            TopologyParams::FatTree { k, n } => RawTopologyParams::fat_tree(k as i64, n as i64),
            TopologyParams::WkRecursive { k, l } => RawTopologyParams::wk(k as i64, l as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_tags_round_trip() {
        for family in Family::ALL {
            assert_eq!(family.tag().parse::<Family>().unwrap(), family);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "dragonfly".parse::<Family>().unwrap_err();
        assert_eq!(err, NetWeaveError::UnknownFamily("dragonfly".into()));
    }

    #[test]
    fn node_counts_match_closed_forms() {
        assert_eq!(TopologyParams::Mesh { size: 3, dims: 2 }.node_count(), 9);
        assert_eq!(TopologyParams::Torus { size: 4, dims: 3 }.node_count(), 64);
        // 8 hosts + 12 switches
        assert_eq!(TopologyParams::FatTree { k: 2, n: 3 }.node_count(), 20);
        assert_eq!(TopologyParams::WkRecursive { k: 4, l: 2 }.node_count(), 16);
    }

    #[test]
    fn defaults_cover_every_family() {
        for family in Family::ALL {
            let raw = family.default_params();
            assert!(validate::validate(family, &raw).is_ok(), "{family}");
        }
    }

    #[test]
    fn serde_tags_match_selector_values() {
        let json = serde_json::to_string(&Family::FatTree).unwrap();
        assert_eq!(json, "\"fat_tree\"");
        let json = serde_json::to_string(&Family::WkRecursive).unwrap();
        assert_eq!(json, "\"wk\"");
    }
}
