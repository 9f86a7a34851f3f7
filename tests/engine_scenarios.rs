use net_weave::prelude::*;

#[test]
fn unknown_family_tag_is_reported() {
    let err = "hypercube".parse::<Family>().unwrap_err();
    assert_eq!(err, NetWeaveError::UnknownFamily("hypercube".into()));
}

#[test]
fn selector_tags_resolve_to_families() {
    for tag in ["mesh", "torus", "fat_tree", "wk"] {
        let family: Family = tag.parse().unwrap();
        assert_eq!(family.tag(), tag);
    }
}

#[test]
fn validation_collects_all_violations() {
    let raw = RawTopologyParams::mesh(1, 9);
    let err = validate(Family::Mesh, &raw).unwrap_err();
    let violations = err.violations();
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().any(|v| matches!(
        v,
        ParamViolation::OutOfRange { field: "size", .. }
    )));
    assert!(violations.iter().any(|v| matches!(
        v,
        ParamViolation::OutOfRange { field: "dims", .. }
    )));
}

#[test]
fn validation_is_idempotent_for_every_family() {
    for family in Family::ALL {
        let params = validate(family, &family.default_params()).unwrap();
        let again = validate(params.family(), &params.to_raw()).unwrap();
        assert_eq!(params, again);
    }
}

#[test]
fn generated_counts_agree_with_metrics() {
    // Direct networks materialize exactly the metrics totals; fat-trees
    // additionally materialize their hosts.
    for family in Family::ALL {
        let topology = build(family, &family.default_params()).unwrap();
        let hosts = topology.metrics.host_count.unwrap_or(0);
        assert_eq!(
            topology.graph.node_count() as u64,
            topology.metrics.node_count + hosts
        );
        assert_eq!(
            topology.graph.edge_count() as u64,
            topology.metrics.link_count
        );
    }
}

#[test]
fn degree_profile_bounds_observed_degrees() {
    for family in Family::ALL {
        let topology = build(family, &family.default_params()).unwrap();
        let degrees = topology.graph.degrees();
        let max = *degrees.iter().max().unwrap() as u32;
        assert!(
            max <= topology.metrics.degree.max(),
            "{family}: max degree {max} above profile {}",
            topology.metrics.degree
        );
    }
}

#[test]
fn repeated_builds_are_identical() {
    for family in Family::ALL {
        let raw = family.default_params();
        let a = build(family, &raw).unwrap();
        let b = build(family, &raw).unwrap();
        assert_eq!(a, b, "{family}");
    }
}

#[test]
fn params_survive_json_round_trip() {
    for family in Family::ALL {
        let params = validate(family, &family.default_params()).unwrap();
        let text = serde_json::to_string(&params).unwrap();
        let back: TopologyParams = serde_json::from_str(&text).unwrap();
        assert_eq!(back, params);
    }
}

#[test]
fn tagged_serialization_uses_selector_names() {
    let params = validate(Family::FatTree, &RawTopologyParams::fat_tree(2, 3)).unwrap();
    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(value["family"], "fat_tree");
    assert_eq!(value["k"], 2);
}

#[test]
fn safety_cap_is_exported() {
    assert_eq!(NODE_SAFETY_CAP, 1024);
}
