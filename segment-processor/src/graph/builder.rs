//! Builds a [`RoadGraph`] from raw OSM nodes and ways, cutting every way at
//! intersections so that each edge runs between two split points.

use std::collections::HashMap;

use geo::{Contains, HaversineLength, LineString, MultiPolygon, Point};
use tracing::{debug, warn};

use crate::collect::network_type::NetworkType;
use crate::collect::osm::elements::{OsmNode, OsmWay, OverpassResponse};
use crate::error::{Error, Result};
use crate::graph::road_graph::{OsmId, RoadEdge, RoadGraph, RoadNode};

/// Direction(s) in which a way may be traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Both,
    Forward,
    Backward,
}

pub struct RoadGraphBuilder {
    network_type: NetworkType,
    /// Nodes outside this area are dropped before ways are split
    boundary: Option<MultiPolygon<f64>>,
    /// Keep disconnected fragments instead of only the largest component
    retain_all: bool,
}

impl RoadGraphBuilder {
    pub fn new(network_type: NetworkType) -> Self {
        RoadGraphBuilder {
            network_type,
            boundary: None,
            retain_all: false,
        }
    }

    pub fn with_boundary(mut self, boundary: MultiPolygon<f64>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn retain_all(mut self, retain_all: bool) -> Self {
        self.retain_all = retain_all;
        self
    }

    /// Build the segmented graph from an Overpass response
    pub fn build(&self, response: &OverpassResponse) -> Result<RoadGraph> {
        let nodes: HashMap<OsmId, &OsmNode> = response.nodes().map(|n| (n.id, n)).collect();

        let mut ways: Vec<(&OsmWay, Vec<OsmId>)> = Vec::new();
        for way in response.ways() {
            let refs = dedup_consecutive(&way.nodes);
            if refs.len() < 2 {
                warn!("Skipping way {} with fewer than two distinct nodes", way.id);
                continue;
            }
            for run in self.clip(way, refs, &nodes)? {
                if run.len() >= 2 {
                    ways.push((way, run));
                }
            }
        }

        // Occurrences of each node over all ways; >1 marks an intersection
        let mut occurrences: HashMap<OsmId, usize> = HashMap::new();
        for (_, refs) in &ways {
            for id in refs {
                *occurrences.entry(*id).or_insert(0) += 1;
            }
        }

        let mut graph = RoadGraph::new();
        for (way, refs) in &ways {
            let last = refs.len() - 1;
            let mut start = 0;
            for i in 1..=last {
                let is_split = i == last || occurrences.get(&refs[i]).copied().unwrap_or(0) > 1;
                if is_split {
                    self.add_piece(&mut graph, &nodes, way, &refs[start..=i])?;
                    start = i;
                }
            }
        }

        if !self.retain_all {
            graph.retain_largest_component();
        }

        debug!(
            "Built graph from {} way runs: {} nodes, {} edges",
            ways.len(),
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Split a way's node list into runs of consecutive nodes inside the boundary
    fn clip(
        &self,
        way: &OsmWay,
        refs: Vec<OsmId>,
        nodes: &HashMap<OsmId, &OsmNode>,
    ) -> Result<Vec<Vec<OsmId>>> {
        let Some(boundary) = &self.boundary else {
            return Ok(vec![refs]);
        };

        let mut runs = Vec::new();
        let mut current = Vec::new();
        for id in refs {
            let node = nodes.get(&id).ok_or_else(|| {
                Error::MalformedGraph(format!("way {} references missing node {}", way.id, id))
            })?;
            if boundary.contains(&Point::new(node.lon, node.lat)) {
                current.push(id);
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        Ok(runs)
    }

    fn add_piece(
        &self,
        graph: &mut RoadGraph,
        nodes: &HashMap<OsmId, &OsmNode>,
        way: &OsmWay,
        piece: &[OsmId],
    ) -> Result<()> {
        let coords = piece
            .iter()
            .map(|id| {
                nodes.get(id).map(|n| (n.lon, n.lat)).ok_or_else(|| {
                    Error::MalformedGraph(format!("way {} references missing node {}", way.id, id))
                })
            })
            .collect::<Result<Vec<(f64, f64)>>>()?;

        let (first, last) = (piece[0], piece[piece.len() - 1]);
        let (first_x, first_y) = coords[0];
        let (last_x, last_y) = coords[coords.len() - 1];
        graph.add_node(RoadNode::new(first, first_x, first_y));
        graph.add_node(RoadNode::new(last, last_x, last_y));

        let line = LineString::from(coords);
        let direction = self.direction(way);

        let forward = RoadEdge {
            osm_id: Some(way.id),
            name: way.tag("name").map(str::to_string),
            highway: way.tag("highway").map(str::to_string),
            oneway: direction != Direction::Both,
            reversed: false,
            length: line.haversine_length(),
            // Two-point pieces are straight; their shape is implied by the endpoints
            geometry: (piece.len() > 2).then(|| line.clone()),
        };

        if direction != Direction::Backward {
            graph.add_edge(first, last, forward.clone())?;
        }
        if direction != Direction::Forward {
            let backward = RoadEdge {
                reversed: true,
                geometry: forward.geometry.as_ref().map(reversed),
                ..forward
            };
            graph.add_edge(last, first, backward)?;
        }

        Ok(())
    }

    fn direction(&self, way: &OsmWay) -> Direction {
        if self.network_type.is_bidirectional() {
            return Direction::Both;
        }
        match way.tag("oneway") {
            Some("yes" | "true" | "1") => Direction::Forward,
            Some("-1" | "reverse") => Direction::Backward,
            _ if way.tag("junction") == Some("roundabout") => Direction::Forward,
            _ => Direction::Both,
        }
    }
}

fn dedup_consecutive(refs: &[OsmId]) -> Vec<OsmId> {
    let mut out = refs.to_vec();
    out.dedup();
    out
}

fn reversed(line: &LineString<f64>) -> LineString<f64> {
    LineString::new(line.0.iter().rev().copied().collect())
}
