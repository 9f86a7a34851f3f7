use net_weave::generators::wk;
use net_weave::prelude::*;
use std::collections::VecDeque;

fn bfs_diameter(graph: &TopologyGraph) -> usize {
    let adjacency = graph.adjacency();
    (0..graph.node_count())
        .map(|start| {
            let mut dist = vec![usize::MAX; graph.node_count()];
            dist[start] = 0;
            let mut queue = VecDeque::from([start]);
            while let Some(node) = queue.pop_front() {
                for next in &adjacency[node] {
                    if dist[next.index()] == usize::MAX {
                        dist[next.index()] = dist[node] + 1;
                        queue.push_back(next.index());
                    }
                }
            }
            dist.into_iter().max().unwrap()
        })
        .max()
        .unwrap()
}

#[test]
fn node_and_edge_counts_match_closed_forms() {
    for (k, l) in [(3u32, 1u32), (3, 2), (4, 2), (3, 3), (5, 2)] {
        let g = wk::generate(k, l);
        let nodes = (k as usize).pow(l);
        assert_eq!(g.node_count(), nodes);
        assert_eq!(g.edge_count(), (nodes * k as usize - k as usize) / 2);
    }
}

#[test]
fn exactly_k_open_nodes() {
    for (k, l) in [(3u32, 2u32), (4, 2), (4, 3), (6, 2)] {
        let g = wk::generate(k, l);
        let degrees = g.degrees();
        let open: Vec<_> = (0..g.node_count())
            .filter(|&i| wk::is_open_node(i, k, l))
            .collect();
        assert_eq!(open.len(), k as usize, "wk({k}, {l})");
        for (index, &degree) in degrees.iter().enumerate() {
            let expected = if wk::is_open_node(index, k, l) {
                k as usize - 1
            } else {
                k as usize
            };
            assert_eq!(degree, expected, "node {index} in wk({k}, {l})");
        }
    }
}

#[test]
fn reference_scenario_sixteen_nodes() {
    let topology = build(Family::WkRecursive, &RawTopologyParams::wk(4, 2)).unwrap();
    assert_eq!(topology.graph.node_count(), 16);
    let degrees = topology.graph.degrees();
    assert_eq!(degrees.iter().filter(|&&d| d == 4).count(), 12);
    assert_eq!(degrees.iter().filter(|&&d| d == 3).count(), 4);
    assert_eq!(topology.metrics.diameter, 3);
    assert_eq!(bfs_diameter(&topology.graph), 3);
}

#[test]
fn closed_form_diameter_matches_bfs() {
    for (k, l) in [(3u32, 1u32), (3, 2), (4, 2), (3, 3)] {
        let g = wk::generate(k, l);
        let metrics = net_weave::engine::metrics(&TopologyParams::WkRecursive { k, l });
        assert_eq!(
            bfs_diameter(&g) as u32,
            metrics.diameter,
            "wk({k}, {l})"
        );
    }
}

#[test]
fn leaf_positions_follow_the_recursive_layout() {
    let g = wk::generate(3, 2);
    // Blocks shrink towards their sub-centre: nodes of one block sit
    // closer to each other than to any node of a sibling block.
    let pos = |i: usize| g.nodes()[i].position;
    let dist = |a: [f64; 3], b: [f64; 3]| {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
    };
    let intra = dist(pos(0), pos(1));
    let inter = dist(pos(0), pos(3));
    assert!(intra < inter);
}

#[test]
fn generation_is_deterministic() {
    let params = TopologyParams::WkRecursive { k: 5, l: 3 };
    let a = net_weave::engine::generate(&params);
    let b = net_weave::engine::generate(&params);
    assert_eq!(a, b);
}
