use dt_toolkit::algs::Borders;
use dt_toolkit::dt::{ProximityGraph, TriangulationPolicy};
use dt_toolkit::geometry::{Edges, Point, Polyline};
use dt_toolkit::graphs::{Edge, Path, Triangle};
use serde_json::json;

#[test]
fn graph_types_serialize_flat() {
    assert_eq!(
        serde_json::to_value(Edge::new(2u32, 9)).unwrap(),
        json!({"orig": 2, "dest": 9})
    );
    assert_eq!(
        serde_json::to_value(Triangle::new(0u32, 1, 2)).unwrap(),
        json!({"vertices": [0, 1, 2]})
    );
    assert_eq!(
        serde_json::to_value(Path::new_closed(vec![4u32, 5, 6])).unwrap(),
        json!({"closed": true, "vertices": [4, 5, 6]})
    );
}

#[test]
fn geometry_round_trips() {
    let g: Edges<u16> = Edges {
        vertices: vec![Point::new(0.0, 0.0), Point::new(1.5, -2.0)],
        edges: vec![Edge::new(0, 1)],
    };
    let s = serde_json::to_string(&g).unwrap();
    assert_eq!(
        s,
        r#"{"vertices":[{"x":0.0,"y":0.0},{"x":1.5,"y":-2.0}],"edges":[{"orig":0,"dest":1}]}"#
    );
    let back: Edges<u16> = serde_json::from_str(&s).unwrap();
    assert_eq!(back, g);

    let line = Polyline::new_open(vec![Point::new(1.0, 2.0)]);
    let back: Polyline = serde_json::from_str(&serde_json::to_string(&line).unwrap()).unwrap();
    assert_eq!(back, line);
}

#[test]
fn enums_serialize_by_name() {
    assert_eq!(
        serde_json::to_value(ProximityGraph::RelativeNeighborhood).unwrap(),
        json!("RelativeNeighborhood")
    );
    assert_eq!(
        serde_json::to_value(TriangulationPolicy::PointCloud).unwrap(),
        json!("PointCloud")
    );
}

#[test]
fn borders_deserialize() {
    let b: Borders<u32> =
        serde_json::from_value(json!({"borders": [{"orig": 1, "dest": 0}], "nb_inner_edges": 3}))
            .unwrap();
    assert_eq!(b.borders, vec![Edge::new(1, 0)]);
    assert_eq!(b.nb_inner_edges, 3);
}
