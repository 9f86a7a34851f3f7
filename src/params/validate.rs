//! Parameter validation: bounds tables and violation collection.
//!
//! Validation is pure and total. Well-typed input never panics; every
//! violated constraint is collected into the returned error so callers can
//! surface all of them at once.

use super::{Family, RawTopologyParams, TopologyParams};
use crate::net_error::{NetWeaveError, ParamViolation};

/// Global safety cap on derived host counts for tree-shaped families.
///
/// Grid families are capped indirectly through their per-dimension size
/// maxima, which keep `size^dims` under the same ceiling.
pub const NODE_SAFETY_CAP: u64 = 1024;

/// Normalize and bounds-check a raw parameter record for `family`.
///
/// Returns the normalized [`TopologyParams`] on success, or an
/// [`NetWeaveError::InvalidParams`] listing every violated constraint.
/// Validating an already-normalized record returns it unchanged.
pub fn validate(
    family: Family,
    raw: &RawTopologyParams,
) -> Result<TopologyParams, NetWeaveError> {
    let mut violations = Vec::new();
    let params = match family {
        Family::Mesh => {
            let dims = check_field(raw.dims, "dims", 2, 4, &mut violations);
            let cap = dims.map(mesh_size_cap).unwrap_or(25);
            let size = check_field(raw.size, "size", 2, cap, &mut violations);
            size.zip(dims)
                .map(|(size, dims)| TopologyParams::Mesh { size, dims })
        }
        Family::Torus => {
            let dims = check_field(raw.dims, "dims", 2, 3, &mut violations);
            let cap = dims.map(torus_size_cap).unwrap_or(20);
            let size = check_field(raw.size, "size", 3, cap, &mut violations);
            size.zip(dims)
                .map(|(size, dims)| TopologyParams::Torus { size, dims })
        }
        Family::FatTree => {
            let k = check_field(raw.k, "k", 2, 4, &mut violations);
            let n = check_field(raw.n, "n", 2, 5, &mut violations);
            check_host_cap(raw.k, raw.n, &mut violations);
            k.zip(n).map(|(k, n)| TopologyParams::FatTree { k, n })
        }
        Family::WkRecursive => {
            let k = check_field(raw.k, "k", 3, 8, &mut violations);
            let l = check_field(raw.l, "l", 1, 5, &mut violations);
            k.zip(l).map(|(k, l)| TopologyParams::WkRecursive { k, l })
        }
    };
    match params {
        Some(params) if violations.is_empty() => Ok(params),
        _ => Err(NetWeaveError::InvalidParams(violations)),
    }
}

/// Check a single field against `[min, max]`, recording any violation.
fn check_field(
    raw: Option<i64>,
    field: &'static str,
    min: i64,
    max: i64,
    violations: &mut Vec<ParamViolation>,
) -> Option<u32> {
    match raw {
        None => {
            violations.push(ParamViolation::MissingField { field });
            None
        }
        Some(value) if value < min || value > max => {
            violations.push(ParamViolation::OutOfRange {
                field,
                value,
                min,
                max,
            });
            None
        }
        Some(value) => Some(value as u32),
    }
}

/// Derived-size check for fat-trees: `k^n` hosts against the global cap.
///
/// Applies whenever both fields are present and positive, independent of
/// the per-field range checks.
fn check_host_cap(k: Option<i64>, n: Option<i64>, violations: &mut Vec<ParamViolation>) {
    let (Some(k), Some(n)) = (k, n) else { return };
    if k < 1 || n < 1 {
        return;
    }
    let computed = (k as u64).saturating_pow(n.min(64) as u32);
    if computed > NODE_SAFETY_CAP {
        violations.push(ParamViolation::TooLarge {
            computed,
            cap: NODE_SAFETY_CAP,
        });
    }
}

fn mesh_size_cap(dims: u32) -> i64 {
    match dims {
        2 => 25,
        3 => 10,
        _ => 5,
    }
}

fn torus_size_cap(dims: u32) -> i64 {
    match dims {
        2 => 20,
        _ => 8,
    }
}
