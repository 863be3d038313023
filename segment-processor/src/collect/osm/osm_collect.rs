use geo::MultiPolygon;
use reqwest::blocking::Client;
use tracing::info;

use crate::collect::network_type::NetworkType;
use crate::collect::osm::elements::OverpassResponse;
use crate::collect::osm::nominatim::NominatimClient;
use crate::collect::osm::overpass::{OverpassClient, OverpassQuery};
use crate::collect::GraphSource;
use crate::config::ProcessorConfig;
use crate::error::{Error, Result};
use crate::graph::builder::RoadGraphBuilder;
use crate::graph::road_graph::RoadGraph;

/// OpenStreetMap road network source: Nominatim for the boundary,
/// Overpass for the roads inside it
pub struct OsmCollect {
    nominatim: NominatimClient,
    overpass: OverpassClient,
}

impl OsmCollect {
    pub fn new(config: &ProcessorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(OsmCollect {
            nominatim: NominatimClient::new(client.clone(), &config.nominatim_url)?,
            overpass: OverpassClient::new(client, &config.overpass_url)?,
        })
    }
}

impl GraphSource for OsmCollect {
    fn fetch(&self, place: &str, network_type: NetworkType) -> Result<RoadGraph> {
        info!("Geocoding {}...", place);
        let area = self.nominatim.geocode(place)?;
        info!(
            "Resolved to {} (relation {}, bbox {:?})",
            area.display_name, area.relation_id, area.bbox
        );

        info!("Downloading {} road network...", network_type);
        let response = self
            .overpass
            .fetch(&OverpassQuery::new(&area, network_type))?;

        build_network(place, network_type, area.boundary, &response)
    }
}

/// Build the clipped graph, failing when the area holds no roads at all
fn build_network(
    place: &str,
    network_type: NetworkType,
    boundary: MultiPolygon<f64>,
    response: &OverpassResponse,
) -> Result<RoadGraph> {
    if response.ways().next().is_none() {
        return Err(Error::NoNetworkData(place.to_string()));
    }

    let graph = RoadGraphBuilder::new(network_type)
        .with_boundary(boundary)
        .build(response)?;
    if graph.is_empty() {
        return Err(Error::NoNetworkData(place.to_string()));
    }
    Ok(graph)
}
