use serde::Deserialize;
use std::collections::HashMap;

use crate::graph::road_graph::OsmId;

/// Overpass API JSON response (`[out:json]`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OsmElement>,
    /// Set by Overpass when the query hit a runtime error
    #[serde(default)]
    pub remark: Option<String>,
}

/// One element of an Overpass response; relations and areas are not needed
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OsmElement {
    Node(OsmNode),
    Way(OsmWay),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsmNode {
    pub id: OsmId,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsmWay {
    pub id: OsmId,
    #[serde(default)]
    pub nodes: Vec<OsmId>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassResponse {
    pub fn nodes(&self) -> impl Iterator<Item = &OsmNode> {
        self.elements.iter().filter_map(|e| match e {
            OsmElement::Node(node) => Some(node),
            _ => None,
        })
    }

    pub fn ways(&self) -> impl Iterator<Item = &OsmWay> {
        self.elements.iter().filter_map(|e| match e {
            OsmElement::Way(way) => Some(way),
            _ => None,
        })
    }
}

impl OsmWay {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|s| s.as_str())
    }
}
