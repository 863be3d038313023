use std::path::PathBuf;

use geojson::Value;
use segment_processor::collect::network_type::NetworkType;
use segment_processor::collect::{GraphSource, OverpassFileSource, StaticGraphSource};
use segment_processor::commons::geojson_io::{load_geojson, save_geojson};
use segment_processor::config::ProcessorConfig;
use segment_processor::geometric::road::Road;
use segment_processor::geometric::segment::build_segments;
use segment_processor::graph::{RoadEdge, RoadGraph, RoadNode};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/overpass_sample.json")
}

#[test]
fn test_overpass_sample_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output").join("brent_segments.geojson");
    let config = ProcessorConfig::default().with_output_path(&output);

    let road = Road::with_source(config, Box::new(OverpassFileSource::new(sample_path())))
        .run()
        .unwrap();
    road.to_geojson().unwrap();

    let collection = load_geojson(&output).unwrap();
    assert_eq!(collection.features.len(), 6);

    let ids: Vec<String> = collection
        .features
        .iter()
        .map(|f| f.properties.as_ref().unwrap()["id"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = (0..6).map(|i| format!("segment_{}", i)).collect();
    assert_eq!(ids, expected);

    // First piece of Harrow Road keeps its interior vertex
    let first = &collection.features[0];
    let props = first.properties.as_ref().unwrap();
    assert_eq!(props["name"], "Harrow Road");
    assert_eq!(props["highway"], "primary");
    assert_eq!(props["osm_id"], 1001);
    assert_eq!(
        first.geometry.as_ref().unwrap().value,
        Value::LineString(vec![
            vec![-0.2800, 51.5500],
            vec![-0.2790, 51.5505],
            vec![-0.2780, 51.5510],
        ])
    );

    // Oneway side street: straight two-point segments with default name
    let last = &collection.features[5];
    let props = last.properties.as_ref().unwrap();
    assert_eq!(props["name"], "Unnamed");
    assert_eq!(props["highway"], "residential");
    assert_eq!(
        last.geometry.as_ref().unwrap().value,
        Value::LineString(vec![vec![-0.2780, 51.5510], vec![-0.2780, 51.5520]])
    );

    assert!(collection
        .features
        .iter()
        .all(|f| f.properties.as_ref().unwrap()["color"] == "#FF0000"));
}

#[test]
fn test_drive_network_keeps_oneway_direction() {
    let graph = OverpassFileSource::new(sample_path())
        .fetch("Brent", NetworkType::Drive)
        .unwrap();
    let reversed = graph.edges().filter(|(_, _, e)| e.reversed).count();
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(reversed, 2);
}

#[test]
fn test_two_node_scenario() {
    let mut graph = RoadGraph::new();
    graph.add_node(RoadNode::new(1, 0.0, 0.0));
    graph.add_node(RoadNode::new(2, 1.0, 1.0));
    graph.add_edge(1, 2, RoadEdge::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.geojson");
    let road = Road::with_source(
        ProcessorConfig::default().with_output_path(&output),
        Box::new(StaticGraphSource::new(graph)),
    )
    .run()
    .unwrap();
    road.to_geojson().unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(raw["type"], "FeatureCollection");
    let feature = &raw["features"][0];
    assert_eq!(feature["properties"]["id"], "segment_0");
    assert_eq!(feature["properties"]["highway"], "unknown");
    assert_eq!(feature["properties"]["name"], "Unnamed");
    assert!(feature["properties"]["osm_id"].is_null());
    assert_eq!(feature["geometry"]["type"], "LineString");
    assert_eq!(
        feature["geometry"]["coordinates"],
        serde_json::json!([[0.0, 0.0], [1.0, 1.0]])
    );
}

#[test]
fn test_empty_graph_writes_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("dir").join("empty.geojson");
    let road = Road::with_source(
        ProcessorConfig::default().with_output_path(&output),
        Box::new(StaticGraphSource::default()),
    )
    .run()
    .unwrap();
    road.to_geojson().unwrap();

    assert!(load_geojson(&output).unwrap().features.is_empty());
}

#[test]
fn test_round_trip_matches_in_memory_segments() {
    let graph = OverpassFileSource::new(sample_path())
        .fetch("Brent", NetworkType::All)
        .unwrap();
    let segments = build_segments(&graph);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("segments.geojson");
    save_geojson(&segments, &output).unwrap();
    let collection = load_geojson(&output).unwrap();

    assert_eq!(collection.features.len(), segments.len());
    for (feature, segment) in collection.features.iter().zip(&segments) {
        assert_eq!(
            feature.properties.as_ref().unwrap()["id"],
            serde_json::Value::String(segment.id())
        );
        let coords: Vec<Vec<f64>> = segment.coordinates.iter().map(|c| c.to_vec()).collect();
        assert_eq!(
            feature.geometry.as_ref().unwrap().value,
            Value::LineString(coords)
        );
    }
}

#[test]
fn test_malformed_source_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(
        &input,
        r#"{"elements": [{"type": "way", "id": 1, "nodes": [10, 11]}]}"#,
    )
    .unwrap();
    let output = dir.path().join("never.geojson");

    let result = Road::with_source(
        ProcessorConfig::default().with_output_path(&output),
        Box::new(OverpassFileSource::new(&input)),
    )
    .run();
    assert!(result.is_err());
    assert!(!output.exists());
}
