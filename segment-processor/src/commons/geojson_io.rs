use geojson::FeatureCollection;
use std::fs::{create_dir_all, read_to_string, write};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::geometric::segment::Segment;

/// Wrap segments in a FeatureCollection, keeping their order
pub fn segments_to_feature_collection(segments: &[Segment]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        foreign_members: None,
        features: segments.iter().map(Segment::to_feature).collect(),
    }
}

/// Write segments to `output_path` as a pretty-printed GeoJSON document.
///
/// Missing parent directories are created and an existing file is replaced.
pub fn save_geojson(segments: &[Segment], output_path: &Path) -> Result<()> {
    info!("Saving to {}...", output_path.display());

    let collection = segments_to_feature_collection(segments);
    let document = serde_json::to_vec_pretty(&collection)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    write(output_path, document)?;

    info!(
        "Successfully saved {} segments to {}",
        segments.len(),
        output_path.display()
    );
    Ok(())
}

/// Read a FeatureCollection back from disk
pub fn load_geojson(path: &Path) -> Result<FeatureCollection> {
    let content = read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::Value;

    fn segment(index: usize, coordinates: Vec<[f64; 2]>) -> Segment {
        Segment {
            index,
            color: "#FF0000".to_string(),
            osm_id: Some(1000 + index as i64),
            name: format!("Road {}", index),
            highway: "residential".to_string(),
            coordinates,
        }
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.geojson");

        save_geojson(&[segment(0, vec![[0.0, 0.0], [1.0, 1.0]])], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("segments.geojson");
        let segments = vec![
            segment(0, vec![[-0.25, 51.55], [-0.24, 51.56]]),
            segment(1, vec![[-0.24, 51.56], [-0.23, 51.555], [-0.22, 51.57]]),
        ];

        save_geojson(&segments, &path).unwrap();
        let collection = load_geojson(&path).unwrap();

        assert_eq!(collection.features.len(), segments.len());
        for (feature, segment) in collection.features.iter().zip(&segments) {
            let props = feature.properties.as_ref().unwrap();
            assert_eq!(props["id"], serde_json::Value::String(segment.id()));
            let expected: Vec<Vec<f64>> = segment.coordinates.iter().map(|c| c.to_vec()).collect();
            assert_eq!(
                feature.geometry.as_ref().unwrap().value,
                Value::LineString(expected)
            );
        }
    }

    #[test]
    fn test_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.geojson");

        save_geojson(&[], &path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["type"], "FeatureCollection");
        assert_eq!(raw["features"], serde_json::json!([]));
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.geojson");
        std::fs::write(&path, "stale content that is not json").unwrap();

        save_geojson(&[segment(0, vec![[0.0, 0.0], [0.0, 0.0]])], &path).unwrap();
        assert_eq!(load_geojson(&path).unwrap().features.len(), 1);
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        // A regular file cannot act as a parent directory
        let result = save_geojson(&[], &blocker.join("out.geojson"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
