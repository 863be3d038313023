use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

use crate::collect::global_variables::OVERPASS_TIMEOUT;
use crate::collect::network_type::NetworkType;
use crate::collect::osm::elements::OverpassResponse;
use crate::collect::osm::ensure_success;
use crate::collect::osm::nominatim::Place;
use crate::error::{Error, Result};

/// Overpass QL query for every way of a network type inside an area,
/// recursing down to the ways' nodes
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassQuery {
    area_id: i64,
    filter: String,
    timeout: u32,
}

impl OverpassQuery {
    pub fn new(place: &Place, network_type: NetworkType) -> Self {
        OverpassQuery {
            area_id: place.area_id(),
            filter: network_type.overpass_filter(),
            timeout: OVERPASS_TIMEOUT,
        }
    }
}

impl fmt::Display for OverpassQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[out:json][timeout:{}];(way{}(area:{});>;);out;",
            self.timeout, self.filter, self.area_id
        )
    }
}

/// Client for an Overpass API interpreter endpoint
pub struct OverpassClient {
    client: Client,
    url: Url,
}

impl OverpassClient {
    pub fn new(client: Client, url: &str) -> Result<Self> {
        Ok(OverpassClient {
            client,
            url: Url::parse(url)?,
        })
    }

    /// Run a query and decode its JSON elements
    pub fn fetch(&self, query: &OverpassQuery) -> Result<OverpassResponse> {
        let query = query.to_string();
        debug!("Overpass query: {}", query);

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!("data={}", urlencoding::encode(&query)))
            .send()?;
        let body = ensure_success(response)?.bytes()?;

        decode_response(&body)
    }
}

fn decode_response(body: &[u8]) -> Result<OverpassResponse> {
    let response: OverpassResponse = serde_json::from_slice(body)
        .map_err(|e| Error::InvalidResponse(format!("Overpass: {}", e)))?;

    if let Some(remark) = &response.remark {
        if response.elements.is_empty() {
            return Err(Error::InvalidResponse(format!("Overpass: {}", remark)));
        }
        warn!("Overpass remark: {}", remark);
    }

    Ok(response)
}
