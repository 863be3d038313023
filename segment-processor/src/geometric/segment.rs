use geojson::{Feature, Geometry, Value};
use serde_json::Map;

use crate::collect::global_variables::{DEFAULT_COLOR, DEFAULT_HIGHWAY, DEFAULT_NAME};
use crate::graph::road_graph::{OsmId, RoadGraph};

/// One road segment between two intersections, ready for export
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Position in the output, starting at zero
    pub index: usize,
    pub color: String,
    /// Id of the OSM way, if the edge carried one
    pub osm_id: Option<OsmId>,
    pub name: String,
    pub highway: String,
    /// `[x, y]` pairs; at least two
    pub coordinates: Vec<[f64; 2]>,
}

impl Segment {
    /// Public identifier, e.g. `segment_0`
    pub fn id(&self) -> String {
        format!("segment_{}", self.index)
    }

    /// Convert to a GeoJSON LineString feature
    pub fn to_feature(&self) -> Feature {
        let geometry = Geometry::new(Value::LineString(
            self.coordinates.iter().map(|c| c.to_vec()).collect(),
        ));

        let mut properties = Map::new();
        properties.insert("id".to_string(), serde_json::Value::String(self.id()));
        properties.insert(
            "color".to_string(),
            serde_json::Value::String(self.color.clone()),
        );
        properties.insert(
            "osm_id".to_string(),
            self.osm_id
                .map(serde_json::Value::from)
                .unwrap_or(serde_json::Value::Null),
        );
        properties.insert(
            "name".to_string(),
            serde_json::Value::String(self.name.clone()),
        );
        properties.insert(
            "highway".to_string(),
            serde_json::Value::String(self.highway.clone()),
        );

        let mut feature = Feature::from(geometry);
        feature.properties = Some(properties);
        feature
    }
}

/// Turn every graph edge into a [`Segment`], in edge order.
///
/// Edges with an explicit geometry keep it as-is; the others become a straight
/// line from the source node to the target node. Zero-length segments are kept.
pub fn build_segments(graph: &RoadGraph) -> Vec<Segment> {
    graph
        .edges()
        .enumerate()
        .map(|(index, (source, target, edge))| {
            let coordinates = match &edge.geometry {
                Some(line) => line.coords().map(|c| [c.x, c.y]).collect(),
                None => vec![[source.x, source.y], [target.x, target.y]],
            };

            Segment {
                index,
                color: DEFAULT_COLOR.to_string(),
                osm_id: edge.osm_id,
                name: edge.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string()),
                highway: edge
                    .highway
                    .clone()
                    .unwrap_or_else(|| DEFAULT_HIGHWAY.to_string()),
                coordinates,
            }
        })
        .collect()
}
