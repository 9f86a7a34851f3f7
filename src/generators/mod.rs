//! Per-family topology generators.
//!
//! Generators assume validated parameters and are total: they map a
//! parameter record to a [`TopologyGraph`](crate::topology::TopologyGraph)
//! with no further error path. Node identity is the emission index, so two
//! calls with identical parameters emit identical node and edge sequences.

pub mod fat_tree;
pub mod mesh;
pub mod torus;
pub mod wk;

use itertools::Itertools;

/// Lattice coordinates of a `dims`-digit base-`size` index space, in
/// row-major (lexicographic) order: the last axis varies fastest.
pub(crate) fn lattice_coordinates(size: u32, dims: u32) -> impl Iterator<Item = Vec<u32>> {
    (0..dims).map(|_| 0..size).multi_cartesian_product()
}

/// Row-major strides per axis: axis `j` has stride `size^(dims - 1 - j)`.
pub(crate) fn lattice_strides(size: u32, dims: u32) -> Vec<usize> {
    (0..dims)
        .map(|axis| (size as usize).pow(dims - 1 - axis))
        .collect()
}

/// Shift a lattice coordinate so the lattice is centred on the origin.
pub(crate) fn centered(coord: u32, size: u32) -> f64 {
    coord as f64 - size as f64 / 2.0
}
