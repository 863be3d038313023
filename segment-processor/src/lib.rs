//! Extract the road segments of an administrative area from OpenStreetMap
//! and export them as a GeoJSON FeatureCollection.
//!
//! The pipeline has three steps, each usable on its own:
//! a [`collect::GraphSource`] yields a [`graph::RoadGraph`] already split at
//! intersections, [`geometric::segment::build_segments`] turns its edges into
//! [`geometric::segment::Segment`] records, and
//! [`commons::geojson_io::save_geojson`] writes them out.
//! [`geometric::road::Road`] runs all three.

pub mod collect;
pub mod commons;
pub mod config;
pub mod error;
pub mod geo_core;
pub mod geometric;
pub mod graph;

pub use error::{Error, Result};
