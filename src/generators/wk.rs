//! WK-recursive generator: hierarchical complete-graph blocks.
//!
//! `k^l` nodes form consecutive blocks of `k`, each wired as a complete
//! graph. Level completion then bridges sibling sub-blocks: at every level
//! the pair `(i, j)` is joined through the nodes whose index suffix is the
//! repeated digit of the opposite sibling. Interior nodes end up with
//! degree `k`; the `k` open nodes (all base-k digits equal) keep degree
//! `k - 1`.

use itertools::Itertools;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::topology::{Edge, LinkClass, Node, NodeId, NodeRole, TopologyGraph};

/// Circle radius per recursion level at the top of the hierarchy.
const BASE_RADIUS_PER_LEVEL: f64 = 10.0;

/// Sub-circle shrink factor per descent; tighter packing for wide blocks.
fn radius_scale(k: u32) -> f64 {
    if k > 3 { 0.35 } else { 0.45 }
}

/// Generate a WK-recursive topology with block arity `k` and `l` levels.
pub fn generate(k: u32, l: u32) -> TopologyGraph {
    let base = k as usize;
    let node_total = base.pow(l);

    let mut nodes = Vec::with_capacity(node_total);
    for index in 0..node_total {
        nodes.push(Node {
            id: NodeId::new(index as u32),
            position: embed(index, k, l),
            role: NodeRole::Router,
        });
    }

    // Every node has degree k except the k open ones.
    let edge_total = (node_total * base - base) / 2;
    let mut edges = Vec::with_capacity(edge_total);

    // Base blocks: each consecutive k-block is a complete graph.
    for block_start in (0..node_total).step_by(base) {
        for (u, v) in (0..base).tuple_combinations() {
            edges.push(Edge::new(
                NodeId::new((block_start + u) as u32),
                NodeId::new((block_start + v) as u32),
                LinkClass::BlockLocal,
            ));
        }
    }

    // Level completion, top level first: one bridge per sibling pair.
    for level in (2..=l).rev() {
        let block_size = base.pow(level);
        let sub_block = base.pow(level - 1);
        let num_blocks = node_total / block_size;
        for block in 0..num_blocks {
            let block_start = block * block_size;
            for (i, j) in (0..base).tuple_combinations() {
                let u = block_start + i * sub_block + repdigit(j, level - 1, base);
                let v = block_start + j * sub_block + repdigit(i, level - 1, base);
                edges.push(Edge::new(
                    NodeId::new(u as u32),
                    NodeId::new(v as u32),
                    LinkClass::LevelBridge,
                ));
            }
        }
    }

    TopologyGraph::new(nodes, edges)
}

/// True when every base-k digit of `index` is identical.
///
/// Open nodes sit at the outer corners of the recursive layout and lack
/// the level-completion link their sibling role would otherwise take, so
/// their degree is `k - 1`.
pub fn is_open_node(index: usize, k: u32, l: u32) -> bool {
    let base = k as usize;
    let last = index % base;
    let mut rest = index;
    for _ in 0..l {
        if rest % base != last {
            return false;
        }
        rest /= base;
    }
    true
}

/// Recursive polar placement, computed iteratively by digit decomposition.
///
/// Each digit of the index, most significant first, picks a direction on a
/// circle whose radius shrinks by a fixed factor per level. The sum of the
/// per-level displacements is the node position; z is always 0.
fn embed(index: usize, k: u32, l: u32) -> [f64; 3] {
    let base = k as usize;
    let step = TAU / k as f64;
    let mut radius = BASE_RADIUS_PER_LEVEL * l as f64;
    let (mut x, mut y) = (0.0, 0.0);
    for level in (0..l).rev() {
        let digit = (index / base.pow(level)) % base;
        let angle = FRAC_PI_2 + digit as f64 * step;
        x += radius * angle.cos();
        y += radius * angle.sin();
        radius *= radius_scale(k);
    }
    [x, y, 0.0]
}

/// Base-k numeral consisting of `count` repetitions of `digit`.
fn repdigit(digit: usize, count: u32, base: usize) -> usize {
    let mut out = 0;
    for _ in 0..count {
        out = out * base + digit;
    }
    out
}
