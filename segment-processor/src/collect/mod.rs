//! Road network sources

pub mod global_variables;
pub mod network_type;
pub mod osm;

use std::path::PathBuf;

use tracing::info;

use crate::collect::network_type::NetworkType;
use crate::collect::osm::elements::OverpassResponse;
use crate::error::Result;
use crate::graph::builder::RoadGraphBuilder;
use crate::graph::road_graph::RoadGraph;

/// Anything that can produce a segmented road graph for a named place
pub trait GraphSource {
    fn fetch(&self, place: &str, network_type: NetworkType) -> Result<RoadGraph>;
}

/// Returns a fixed graph whatever the place; used for fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticGraphSource {
    graph: RoadGraph,
}

impl StaticGraphSource {
    pub fn new(graph: RoadGraph) -> Self {
        StaticGraphSource { graph }
    }
}

impl GraphSource for StaticGraphSource {
    fn fetch(&self, _place: &str, _network_type: NetworkType) -> Result<RoadGraph> {
        Ok(self.graph.clone())
    }
}

/// Builds the graph from a saved Overpass JSON response
#[derive(Debug, Clone)]
pub struct OverpassFileSource {
    path: PathBuf,
}

impl OverpassFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        OverpassFileSource { path: path.into() }
    }
}

impl GraphSource for OverpassFileSource {
    fn fetch(&self, place: &str, network_type: NetworkType) -> Result<RoadGraph> {
        info!(
            "Loading {} network for {} from {}",
            network_type,
            place,
            self.path.display()
        );
        let content = std::fs::read(&self.path)?;
        let response: OverpassResponse = serde_json::from_slice(&content)?;
        RoadGraphBuilder::new(network_type).build(&response)
    }
}
