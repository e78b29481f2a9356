//! Geographic extent of the sampling points.

use serde::{Deserialize, Serialize};

/// A lon/lat bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every (lon, lat) pair, or None for no points.
    ///
    /// Non-finite coordinates are skipped.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<BoundingBox>, (x, y)| {
                Some(match acc {
                    None => BoundingBox::new(x, y, x, y),
                    Some(b) => b.expand_to(x, y),
                })
            })
    }

    /// Grow the box to include a point.
    pub fn expand_to(self, x: f64, y: f64) -> Self {
        Self {
            min_x: self.min_x.min(x),
            min_y: self.min_y.min(y),
            max_x: self.max_x.max(x),
            max_y: self.max_y.max(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points(vec![
            (-74.36, 41.98),
            (-74.29, 41.12),
            (-75.01, 42.50),
        ])
        .unwrap();

        assert_eq!(bbox.min_x, -75.01);
        assert_eq!(bbox.max_x, -74.29);
        assert_eq!(bbox.min_y, 41.12);
        assert_eq!(bbox.max_y, 42.50);
    }

    #[test]
    fn test_from_points_empty() {
        assert!(BoundingBox::from_points(Vec::new()).is_none());
        assert!(BoundingBox::from_points(vec![(f64::NAN, 1.0)]).is_none());
    }

    #[test]
    fn test_single_point_is_degenerate_box() {
        let bbox = BoundingBox::from_points(vec![(-74.0, 41.0)]).unwrap();
        assert_eq!(bbox, BoundingBox::new(-74.0, 41.0, -74.0, 41.0));
    }
}
