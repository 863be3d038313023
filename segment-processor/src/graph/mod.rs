pub mod builder;
pub mod road_graph;

pub use road_graph::{OsmId, RoadEdge, RoadGraph, RoadNode};
