use crate::error::{Error, Result};

/// Bounding box structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64, // min longitude
    pub min_y: f64, // min latitude
    pub max_x: f64, // max longitude
    pub max_y: f64, // max latitude
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Parse a Nominatim `boundingbox` value: `[south, north, west, east]` as strings
    pub fn from_nominatim(values: &[String]) -> Result<Self> {
        if values.len() != 4 {
            return Err(Error::InvalidResponse(format!(
                "Expected 4 bounding box values, got {}",
                values.len()
            )));
        }

        let mut parsed = [0.0f64; 4];
        for (slot, raw) in parsed.iter_mut().zip(values) {
            *slot = raw.trim().parse().map_err(|_| {
                Error::InvalidResponse(format!("Invalid bounding box coordinate: {}", raw))
            })?;
        }
        let [south, north, west, east] = parsed;

        Ok(BoundingBox::new(west, south, east, north))
    }

    /// Smallest box enclosing every `(x, y)` point, `None` when there are none
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        points.into_iter().fold(None, |acc, (x, y)| {
            Some(match acc {
                None => BoundingBox::new(x, y, x, y),
                Some(b) => BoundingBox::new(
                    b.min_x.min(x),
                    b.min_y.min(y),
                    b.max_x.max(x),
                    b.max_y.max(y),
                ),
            })
        })
    }
}
