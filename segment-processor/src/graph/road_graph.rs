//! Directed road multigraph whose edges are intersection-to-intersection segments

use std::collections::HashMap;

use geo::LineString;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use crate::error::{Error, Result};
use crate::geo_core::BoundingBox;

/// OpenStreetMap element identifier
pub type OsmId = i64;

/// Road graph node: an intersection or a dead end
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    pub osm_id: OsmId,
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
}

impl RoadNode {
    pub fn new(osm_id: OsmId, x: f64, y: f64) -> Self {
        RoadNode { osm_id, x, y }
    }
}

/// Road graph edge: one uninterrupted stretch of road
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadEdge {
    /// Id of the OSM way the segment was cut from
    pub osm_id: Option<OsmId>,
    pub name: Option<String>,
    pub highway: Option<String>,
    pub oneway: bool,
    /// Edge runs against the way's node order
    pub reversed: bool,
    /// Haversine length in metres
    pub length: f64,
    /// Full shape when the segment has interior vertices
    pub geometry: Option<LineString<f64>>,
}

#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    graph: DiGraph<RoadNode, RoadEdge>,
    index: HashMap<OsmId, NodeIndex>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, returning the existing index if the OSM id is already present
    pub fn add_node(&mut self, node: RoadNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.osm_id) {
            return idx;
        }
        let osm_id = node.osm_id;
        let idx = self.graph.add_node(node);
        self.index.insert(osm_id, idx);
        idx
    }

    /// Insert an edge between two existing nodes; parallel edges are kept
    pub fn add_edge(&mut self, from: OsmId, to: OsmId, edge: RoadEdge) -> Result<EdgeIndex> {
        let source = self.node_index(from)?;
        let target = self.node_index(to)?;
        Ok(self.graph.add_edge(source, target, edge))
    }

    fn node_index(&self, osm_id: OsmId) -> Result<NodeIndex> {
        self.index.get(&osm_id).copied().ok_or_else(|| {
            Error::MalformedGraph(format!("edge references missing node {}", osm_id))
        })
    }

    pub fn node(&self, osm_id: OsmId) -> Option<&RoadNode> {
        self.index.get(&osm_id).map(|&idx| &self.graph[idx])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Edges in insertion order with their source and target nodes
    pub fn edges(&self) -> impl Iterator<Item = (&RoadNode, &RoadNode, &RoadEdge)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], e.weight()))
    }

    /// Sum of edge lengths in metres
    pub fn total_length(&self) -> f64 {
        self.graph.edge_weights().map(|e| e.length).sum()
    }

    /// Drop every node and edge outside the largest weakly connected component.
    ///
    /// Ties go to the component holding the earliest inserted node. Surviving
    /// nodes and edges keep their relative order.
    pub fn retain_largest_component(&mut self) {
        let node_count = self.graph.node_count();
        if node_count == 0 {
            return;
        }

        let mut sets = UnionFind::<usize>::new(node_count);
        for e in self.graph.edge_references() {
            sets.union(e.source().index(), e.target().index());
        }
        let labels = sets.into_labeling();

        let mut sizes: HashMap<usize, usize> = HashMap::new();
        for &label in &labels {
            *sizes.entry(label).or_insert(0) += 1;
        }
        let mut largest = labels[0];
        for &label in &labels {
            if sizes[&label] > sizes[&largest] {
                largest = label;
            }
        }
        if sizes[&largest] == node_count {
            return;
        }

        let mut kept = RoadGraph::new();
        for idx in self.graph.node_indices() {
            if labels[idx.index()] == largest {
                kept.add_node(self.graph[idx].clone());
            }
        }
        for e in self.graph.edge_references() {
            if labels[e.source().index()] != largest {
                continue;
            }
            let source = kept.index.get(&self.graph[e.source()].osm_id);
            let target = kept.index.get(&self.graph[e.target()].osm_id);
            if let (Some(&source), Some(&target)) = (source, target) {
                kept.graph.add_edge(source, target, e.weight().clone());
            }
        }

        *self = kept;
    }

    /// Extent of all nodes, `None` for an empty graph
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.graph.node_weights().map(|n| (n.x, n.y)))
    }
}
