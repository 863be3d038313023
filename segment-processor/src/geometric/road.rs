use anyhow::{Context, Result};
use geojson::FeatureCollection;
use std::path::{Path, PathBuf};
use tracing::info;

#[cfg(feature = "reqwest")]
use crate::collect::osm::osm_collect::OsmCollect;
use crate::collect::GraphSource;
use crate::commons::geojson_io::{save_geojson, segments_to_feature_collection};
use crate::config::ProcessorConfig;
use crate::geometric::segment::{build_segments, Segment};

/// Road segment extraction for one place:
/// fetch the road graph, cut it into segments, write them as GeoJSON
pub struct Road {
    /// Provider of the segmented road graph
    source: Box<dyn GraphSource>,
    config: ProcessorConfig,
    /// Segments produced by `run()`
    segments: Option<Vec<Segment>>,
}

impl Road {
    /// Create a Road backed by OpenStreetMap
    #[cfg(feature = "reqwest")]
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        let source = OsmCollect::new(&config).context("Failed to create OSM client")?;
        Ok(Self::with_source(config, Box::new(source)))
    }

    /// Create a Road backed by any graph source
    pub fn with_source(config: ProcessorConfig, source: Box<dyn GraphSource>) -> Self {
        Road {
            source,
            config,
            segments: None,
        }
    }

    /// Fetch the network and build the segments
    pub fn run(mut self) -> Result<Self> {
        info!("Downloading road network for {}...", self.config.place);
        let graph = self
            .source
            .fetch(&self.config.place, self.config.network_type)
            .with_context(|| format!("Failed to fetch road network for {}", self.config.place))?;

        info!(
            "Downloaded graph with {} nodes and {} edges ({:.1} km of road)",
            graph.node_count(),
            graph.edge_count(),
            graph.total_length() / 1000.0
        );
        if let Some(bounds) = graph.bounds() {
            info!("Graph extent: {:?}", bounds);
        }

        info!("Converting graph to segments...");
        let segments = build_segments(&graph);
        info!("Created {} segments", segments.len());

        self.segments = Some(segments);
        Ok(self)
    }

    pub fn get_segments(&self) -> Option<&[Segment]> {
        self.segments.as_deref()
    }

    pub fn to_feature_collection(&self) -> Result<FeatureCollection> {
        let segments = self
            .get_segments()
            .context("No segments available. Call run() first.")?;
        Ok(segments_to_feature_collection(segments))
    }

    /// Write the segments to the configured output path and return it
    pub fn to_geojson(&self) -> Result<PathBuf> {
        let segments = self
            .get_segments()
            .context("No segments available. Call run() first.")?;

        let output_file = self.config.output_path.clone();
        save_geojson(segments, &output_file)
            .with_context(|| format!("Failed to write GeoJSON file: {:?}", output_file))?;

        Ok(output_file)
    }

    pub fn get_output_path(&self) -> &Path {
        &self.config.output_path
    }
}
