//! Mesh generator: k-ary n-cube without wraparound.
//!
//! Nodes are addressed by a `dims`-digit base-`size` index in row-major
//! order. Edges connect lattice neighbours along each axis in the forward
//! direction only, so corner nodes have degree `dims` and interior nodes
//! degree `2 * dims`.

use crate::topology::{Edge, LinkClass, Node, NodeId, NodeRole, TopologyGraph};

use super::{centered, lattice_coordinates, lattice_strides};

/// Shear added per fourth-axis step so 4-D slices render as nested,
/// visually separated cubes. Embedding only; edge generation ignores it.
const FOURTH_AXIS_SHEAR: f64 = 0.3;

/// Generate a mesh with `size` nodes per axis over `dims` axes (2 to 4).
pub fn generate(size: u32, dims: u32) -> TopologyGraph {
    let node_total = (size as usize).pow(dims);
    let mut nodes = Vec::with_capacity(node_total);
    for (index, coords) in lattice_coordinates(size, dims).enumerate() {
        nodes.push(Node {
            id: NodeId::new(index as u32),
            position: embed(&coords, size),
            role: NodeRole::Router,
        });
    }

    let strides = lattice_strides(size, dims);
    let edge_total = dims as usize * (size as usize).pow(dims - 1) * (size as usize - 1);
    let mut edges = Vec::with_capacity(edge_total);
    for (index, coords) in lattice_coordinates(size, dims).enumerate() {
        for (axis, &coord) in coords.iter().enumerate() {
            if coord + 1 < size {
                edges.push(Edge::new(
                    NodeId::new(index as u32),
                    NodeId::new((index + strides[axis]) as u32),
                    LinkClass::Lattice,
                ));
            }
        }
    }

    TopologyGraph::new(nodes, edges)
}

/// Embed lattice coordinates in 3-space, centred on the origin.
///
/// Two-dimensional meshes sit in the ground (XZ) plane. The fourth axis is
/// not spatial; it shears the containing 3-D slice along the cube diagonal.
fn embed(coords: &[u32], size: u32) -> [f64; 3] {
    match *coords {
        [i, j] => [centered(i, size), 0.0, centered(j, size)],
        [i, j, k] => [
            centered(i, size),
            centered(j, size),
            centered(k, size),
        ],
        [i, j, k, w] => {
            let shear = centered(w, size) * FOURTH_AXIS_SHEAR;
            [
                centered(i, size) + shear,
                centered(j, size) + shear,
                centered(k, size) + shear,
            ]
        }
        _ => unreachable!("mesh supports 2 to 4 dimensions"),
    }
}
