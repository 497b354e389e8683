//! CPU-side point cloud storage.

use glam::Vec3;

/// An ordered set of 3D sample positions.
///
/// Every cloud produced by [`crate::sample`] holds exactly the count it was
/// asked for. Index order carries no meaning across shapes: point `i` of a
/// heart sample has no relationship to point `i` of a sphere sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    /// Wrap a list of positions as a cloud.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Number of points in the cloud.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions as a slice.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Mean position of the cloud, `Vec3::ZERO` when empty.
    pub fn centroid(&self) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points.iter().sum::<Vec3>() / self.points.len() as f32
    }

    /// Distance from the origin to the farthest point.
    pub fn max_radius(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.length())
            .fold(0.0, f32::max)
    }

    /// True when every coordinate of every point is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}

impl From<Vec<Vec3>> for PointCloud {
    fn from(points: Vec<Vec3>) -> Self {
        Self::new(points)
    }
}
