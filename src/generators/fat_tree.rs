//! Fat-tree generator: k-ary n-tree with butterfly stage wiring.
//!
//! `k^n` hosts hang below `n` stages of `k^(n-1)` switches; the highest
//! stage is the core. Host `h` attaches to stage-0 switch `h / k`. Between
//! adjacent stages the grouped butterfly permutation rotates which
//! sub-block feeds which upper port, so every host reaches the core stage
//! through exactly `n` up-links.

use crate::topology::{Edge, LinkClass, Node, NodeId, NodeRole, TopologyGraph};

/// Horizontal pitch between adjacent hosts.
const HOST_PITCH: f64 = 1.2;
/// Vertical gap between consecutive switch stages.
const STAGE_HEIGHT: f64 = 2.0;

/// Generate a fat-tree with arity `k` and `n` switch stages.
pub fn generate(k: u32, n: u32) -> TopologyGraph {
    let hosts = (k as usize).pow(n);
    let per_stage = (k as usize).pow(n - 1);

    // Hosts occupy ids 0..hosts, then switches stage by stage.
    let mut nodes = Vec::with_capacity(hosts + n as usize * per_stage);
    for host in 0..hosts {
        nodes.push(Node {
            id: NodeId::new(host as u32),
            position: [row_x(host, hosts, HOST_PITCH), 0.0, 0.0],
            role: NodeRole::Host,
        });
    }
    let switch_pitch = HOST_PITCH * k as f64;
    for stage in 0..n {
        let stage_y = (stage + 1) as f64 * STAGE_HEIGHT;
        for slot in 0..per_stage {
            nodes.push(Node {
                id: NodeId::new((hosts + stage as usize * per_stage + slot) as u32),
                position: [row_x(slot, per_stage, switch_pitch), stage_y, 0.0],
                role: NodeRole::Switch { stage },
            });
        }
    }

    let switch_id =
        |stage: u32, slot: usize| NodeId::new((hosts + stage as usize * per_stage + slot) as u32);

    let mut edges = Vec::with_capacity(n as usize * hosts);
    for host in 0..hosts {
        edges.push(Edge::new(
            NodeId::new(host as u32),
            switch_id(0, host / k as usize),
            LinkClass::HostUplink,
        ));
    }
    for stage in 0..n - 1 {
        let block = (k as usize).pow(stage);
        let group_span = block * k as usize;
        for slot in 0..per_stage {
            let group = slot / group_span;
            let offset = slot % block;
            for port in 0..k as usize {
                let target = group * group_span + port * block + offset;
                edges.push(Edge::new(
                    switch_id(stage, slot),
                    switch_id(stage + 1, target),
                    LinkClass::Butterfly,
                ));
            }
        }
    }

    TopologyGraph::new(nodes, edges)
}

/// Centre `count` items on the X axis with the given pitch.
fn row_x(index: usize, count: usize, pitch: f64) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * pitch
}
