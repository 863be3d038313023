use geo::MultiPolygon;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::collect::global_variables::AREA_ID_OFFSET;
use crate::collect::osm::ensure_success;
use crate::error::{Error, Result};
use crate::geo_core::BoundingBox;
use crate::graph::road_graph::OsmId;

/// Geocoded administrative boundary
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// OSM relation id of the boundary
    pub relation_id: OsmId,
    pub display_name: String,
    pub bbox: BoundingBox,
    /// Boundary outline used to clip the road network
    pub boundary: MultiPolygon<f64>,
}

impl Place {
    /// Overpass area id derived from the boundary relation
    pub fn area_id(&self) -> i64 {
        AREA_ID_OFFSET + self.relation_id
    }
}

/// One entry of a Nominatim `/search?format=json` response
#[derive(Debug, Clone, Deserialize)]
struct NominatimResult {
    osm_type: String,
    osm_id: OsmId,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    boundingbox: Vec<String>,
    /// Present when requested with `polygon_geojson=1`
    #[serde(default)]
    geojson: Option<geojson::Geometry>,
}

/// Client for the Nominatim geocoding service
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // `join` replaces the last segment unless the path ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(NominatimClient { client, base_url })
    }

    /// Search URL for a free-form place query
    pub fn search_url(&self, place: &str) -> Result<Url> {
        let mut url = self.base_url.join("search")?;
        url.query_pairs_mut()
            .append_pair("q", place)
            .append_pair("format", "json")
            .append_pair("polygon_geojson", "1")
            .append_pair("limit", "50");
        Ok(url)
    }

    /// Resolve a place name to its boundary relation
    pub fn geocode(&self, place: &str) -> Result<Place> {
        let url = self.search_url(place)?;
        debug!("Nominatim request URL: {}", url);

        let response = ensure_success(self.client.get(url).send()?)?;
        let body = response.bytes()?;
        let results: Vec<NominatimResult> = serde_json::from_slice(&body)
            .map_err(|e| Error::InvalidResponse(format!("Nominatim: {}", e)))?;

        select_place(place, results)
    }
}

/// Pick the first boundary relation with a polygon outline among the geocoder results
fn select_place(query: &str, results: Vec<NominatimResult>) -> Result<Place> {
    let (result, boundary) = results
        .into_iter()
        .filter(|r| r.osm_type == "relation")
        .find_map(|mut r| {
            let boundary = r.geojson.take().and_then(boundary_polygon)?;
            Some((r, boundary))
        })
        .ok_or_else(|| Error::PlaceNotFound(query.to_string()))?;

    Ok(Place {
        relation_id: result.osm_id,
        bbox: BoundingBox::from_nominatim(&result.boundingbox)?,
        display_name: result.display_name,
        boundary,
    })
}

fn boundary_polygon(geometry: geojson::Geometry) -> Option<MultiPolygon<f64>> {
    match geo::Geometry::<f64>::try_from(geometry).ok()? {
        geo::Geometry::Polygon(polygon) => Some(MultiPolygon::new(vec![polygon])),
        geo::Geometry::MultiPolygon(multi) => Some(multi),
        _ => None,
    }
}
