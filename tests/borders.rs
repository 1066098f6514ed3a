use dt_toolkit::algs::{
    GraphSize, NonManifoldHandling, ValidationOptions, extract_borders, extract_paths,
    try_extract_borders,
};
use dt_toolkit::graph_error::GraphError;
use dt_toolkit::graphs::{Edge, Triangle};

/// Triangle fan around vertex 0 over the rim 1..=n, closed when `closed`.
fn fan(n: u32, closed: bool) -> Vec<Triangle<u32>> {
    let last = if closed { n } else { n - 1 };
    (1..=last)
        .map(|i| Triangle::new(0, i, if i == n { 1 } else { i + 1 }))
        .collect()
}

#[test]
fn closed_fan_border_is_its_rim() {
    let tris = fan(6, true);
    let b = extract_borders(&tris);
    assert_eq!(b.nb_inner_edges, 6);
    assert_eq!(b.borders.len(), tris.as_slice().nb_edges() - b.nb_inner_edges);
    assert_eq!(
        b.borders,
        (1..=6)
            .map(|i| Edge::new(i, if i == 6 { 1 } else { i + 1 }))
            .collect::<Vec<Edge<u32>>>()
    );
    let loops = extract_paths(&b.borders);
    assert_eq!(loops.len(), 1);
    assert!(loops[0].closed);
    assert_eq!(loops[0].vertices.len(), 6);
}

#[test]
fn open_fan_border_is_one_loop_through_the_hub() {
    let tris = fan(5, false);
    let b = extract_borders(&tris);
    // spokes 0-2, 0-3, 0-4 are shared
    assert_eq!(b.nb_inner_edges, 3);
    assert_eq!(b.borders.len(), tris.as_slice().nb_edges() - b.nb_inner_edges);
    assert_eq!(b.borders.len(), 6);
    let loops = extract_paths(&b.borders);
    assert_eq!(loops.len(), 1);
    assert!(loops[0].closed);
}

#[test]
fn borders_follow_triangle_orientation() {
    let mut tris = fan(4, true);
    for t in &mut tris {
        t.flip_orientation();
    }
    let b = extract_borders(&tris);
    assert!(b.borders.contains(&Edge::new(2, 1)));
    assert!(!b.borders.contains(&Edge::new(1, 2)));
}

#[test]
fn non_manifold_handling_modes() {
    // three triangles on edge 0-1
    let tris: Vec<Triangle<u32>> = vec![
        Triangle::new(0, 1, 2),
        Triangle::new(1, 0, 3),
        Triangle::new(0, 1, 4),
    ];
    let strict = ValidationOptions::all();
    assert!(matches!(
        try_extract_borders(&tris, &strict),
        Err(GraphError::NonManifoldEdge { orig: 0, dest: 1, count: 3 })
    ));

    let lenient = ValidationOptions {
        non_manifold: NonManifoldHandling::Ignore,
        ..ValidationOptions::all()
    };
    let b = try_extract_borders(&tris, &lenient).unwrap();
    assert_eq!(b.borders.len(), 6);
    assert_eq!(b.nb_inner_edges, 1);
}
