use net_weave::generators::mesh;
use net_weave::prelude::*;

fn coords_of(index: usize, size: usize, dims: usize) -> Vec<usize> {
    let mut digits = vec![0; dims];
    let mut rest = index;
    for axis in (0..dims).rev() {
        digits[axis] = rest % size;
        rest /= size;
    }
    digits
}

#[test]
fn node_count_is_size_to_the_dims() {
    for (size, dims) in [(2u32, 2u32), (3, 2), (5, 2), (3, 3), (2, 4), (3, 4)] {
        let g = mesh::generate(size, dims);
        assert_eq!(g.node_count(), (size as usize).pow(dims));
    }
}

#[test]
fn edge_count_matches_closed_form() {
    for (size, dims) in [(2u32, 2u32), (4, 2), (3, 3), (2, 4)] {
        let g = mesh::generate(size, dims);
        let s = size as usize;
        let expected = dims as usize * s.pow(dims - 1) * (s - 1);
        assert_eq!(g.edge_count(), expected, "mesh({size}, {dims})");
    }
}

#[test]
fn every_edge_steps_one_coordinate() {
    for (size, dims) in [(4u32, 2u32), (3, 3), (2, 4)] {
        let g = mesh::generate(size, dims);
        let s = size as usize;
        let d = dims as usize;
        for edge in g.edges() {
            let (a, b) = edge.endpoints();
            let ca = coords_of(a.index(), s, d);
            let cb = coords_of(b.index(), s, d);
            let total: usize = ca
                .iter()
                .zip(&cb)
                .map(|(&x, &y)| x.abs_diff(y))
                .sum();
            assert_eq!(total, 1, "edge {a}-{b} in mesh({size}, {dims})");
            assert_eq!(edge.class(), LinkClass::Lattice);
        }
    }
}

#[test]
fn degree_range_spans_corner_to_interior() {
    let g = mesh::generate(3, 2);
    let degrees = g.degrees();
    assert_eq!(degrees.iter().copied().min(), Some(2));
    assert_eq!(degrees.iter().copied().max(), Some(4));
}

#[test]
fn reference_scenario_three_by_three() {
    let topology = build(Family::Mesh, &RawTopologyParams::mesh(3, 2)).unwrap();
    assert_eq!(topology.graph.node_count(), 9);
    assert_eq!(topology.graph.edge_count(), 12);
    assert_eq!(
        topology.metrics.degree,
        DegreeProfile::Range { min: 2, max: 4 }
    );
    assert_eq!(topology.metrics.diameter, 4);
}

#[test]
fn generation_is_deterministic() {
    let params = TopologyParams::Mesh { size: 4, dims: 3 };
    let a = net_weave::engine::generate(&params);
    let b = net_weave::engine::generate(&params);
    assert_eq!(a, b);
}
