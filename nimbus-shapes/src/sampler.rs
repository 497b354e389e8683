//! Stochastic shape samplers.
//!
//! Each shape is a closed-form or mixture distribution; [`sample`] draws
//! every point independently, so repeated calls produce statistically
//! identical clouds without any shared state. Randomness is not seeded:
//! the clouds only need to be visually stable, not reproducible.

use crate::cloud::PointCloud;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_6, PI, TAU};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Shapes the particle system can morph between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Heart,
    Flower,
    Saturn,
    Meditate,
    Fireworks,
    Sphere,
}

impl ShapeKind {
    /// All shapes, in the order the demo cycles through them.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Sphere,
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Meditate,
        ShapeKind::Fireworks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Heart => "heart",
            ShapeKind::Flower => "flower",
            ShapeKind::Saturn => "saturn",
            ShapeKind::Meditate => "meditate",
            ShapeKind::Fireworks => "fireworks",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from shape selection at the API boundary.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("unknown shape: {0}")]
    UnknownShape(String),
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Parse a shape name as used by the CLI and scene presets.
    ///
    /// Unknown names are rejected here so the sampling loop itself never
    /// has to deal with an invalid kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heart" => Ok(ShapeKind::Heart),
            "flower" => Ok(ShapeKind::Flower),
            "saturn" => Ok(ShapeKind::Saturn),
            "meditate" | "buddha" => Ok(ShapeKind::Meditate),
            "fireworks" => Ok(ShapeKind::Fireworks),
            "sphere" => Ok(ShapeKind::Sphere),
            other => Err(ShapeError::UnknownShape(other.to_string())),
        }
    }
}

/// Draw `count` independent points from the distribution for `shape`.
pub fn sample(shape: ShapeKind, count: usize) -> PointCloud {
    let points = (0..count).map(|_| sample_one(shape)).collect();
    debug!("Sampled {} points for shape {}", count, shape);
    PointCloud::new(points)
}

fn sample_one(shape: ShapeKind) -> Vec3 {
    match shape {
        ShapeKind::Heart => sample_heart(),
        ShapeKind::Flower => sample_flower(),
        ShapeKind::Saturn => sample_saturn(),
        ShapeKind::Meditate => sample_meditate(),
        ShapeKind::Fireworks => random_point_in_ball(4.0),
        ShapeKind::Sphere => random_point_in_ball(2.0),
    }
}

/// Uniform-volume sample inside a ball of the given radius.
///
/// Cube-root radial scaling with a uniform solid-angle direction; without
/// the cube root the samples would pile up at the center.
fn random_point_in_ball(radius: f32) -> Vec3 {
    let theta = TAU * fastrand::f32();
    let phi = (2.0 * fastrand::f32() - 1.0).acos();
    let r = fastrand::f32().cbrt() * radius;
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Parametric heart outline extruded along z into a volumetric silhouette.
fn sample_heart() -> Vec3 {
    let t = TAU * fastrand::f32();
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    let z = (fastrand::f32() - 0.5) * 10.0;
    Vec3::new(x, y, z) * 0.15
}

/// 70/30 mixture: planet ball, or a thin tilted ring.
fn sample_saturn() -> Vec3 {
    if fastrand::f32() > 0.3 {
        return random_point_in_ball(1.5);
    }
    let angle = TAU * fastrand::f32();
    let dist = 2.2 + fastrand::f32() * 1.5;
    let ring = Vec3::new(
        angle.cos() * dist,
        (fastrand::f32() - 0.5) * 0.1,
        angle.sin() * dist,
    );
    // Tilt only the ring; the planet stays upright.
    Quat::from_rotation_z(FRAC_PI_6) * ring
}

/// Rose-curve petals with a small pistil ball at the center.
fn sample_flower() -> Vec3 {
    if fastrand::f32() < 0.1 {
        return random_point_in_ball(0.3);
    }
    let u = TAU * fastrand::f32();
    let v = PI * fastrand::f32();
    // Three-petaled rose radius; negative lobes fold onto opposite petals.
    let r = 2.0 * (3.0 * u).cos();
    Vec3::new(
        r * v.sin() * u.cos(),
        r * v.cos() + 0.5,
        r * v.sin() * u.sin(),
    )
}

/// Meditating figure as a three-part mixture: head, tapered body, base.
fn sample_meditate() -> Vec3 {
    let part = fastrand::f32();
    if part < 0.2 {
        // Head
        random_point_in_ball(0.6) + Vec3::new(0.0, 1.8, 0.0)
    } else if part < 0.6 {
        // Body: cylinder cross-section tapering toward the shoulders
        let angle = TAU * fastrand::f32();
        let rad = 0.9 * fastrand::f32().sqrt();
        let h = (fastrand::f32() - 0.5) * 2.0;
        let taper = 1.2 - h.abs() * 0.3;
        Vec3::new(
            angle.cos() * rad * taper,
            h + 0.5,
            angle.sin() * rad * taper,
        )
    } else {
        // Crossed legs / base: a wide annular disc
        let angle = TAU * fastrand::f32();
        let rad = 1.0 + fastrand::f32() * 0.8;
        let h = (fastrand::f32() - 0.5) * 0.5;
        Vec3::new(angle.cos() * rad, h - 0.8, angle.sin() * rad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 4000;
    const EPS: f32 = 1e-4;

    #[test]
    fn test_sample_count_and_finiteness() {
        for shape in ShapeKind::ALL {
            let cloud = sample(shape, N);
            assert_eq!(cloud.len(), N, "{shape} returned wrong count");
            assert!(cloud.is_finite(), "{shape} produced non-finite points");
        }
    }

    #[test]
    fn test_sphere_bounds_and_centroid() {
        let cloud = sample(ShapeKind::Sphere, N);
        assert!(cloud.max_radius() <= 2.0 + EPS);
        // Uniform ball is centered; sample mean should sit near the origin.
        let c = cloud.centroid();
        assert!(c.length() < 0.15, "centroid drifted: {c}");
    }

    #[test]
    fn test_sphere_is_volumetric_not_shell() {
        // Cube-root radial scaling puts half the points inside r = 2 * 0.5^(1/3).
        let cloud = sample(ShapeKind::Sphere, N);
        let half_volume_radius = 2.0 * 0.5f32.cbrt();
        let inner = cloud
            .points()
            .iter()
            .filter(|p| p.length() <= half_volume_radius)
            .count();
        let fraction = inner as f32 / N as f32;
        assert!((0.42..=0.58).contains(&fraction), "inner fraction {fraction}");
    }

    #[test]
    fn test_fireworks_bounds() {
        let cloud = sample(ShapeKind::Fireworks, N);
        assert!(cloud.max_radius() <= 4.0 + EPS);
    }

    #[test]
    fn test_saturn_planet_ring_split() {
        let cloud = sample(ShapeKind::Saturn, N);
        // Rotation preserves lengths, so ring points keep their horizontal
        // radius of at least 2.2 while planet points stay within 1.5.
        let planet = cloud.points().iter().filter(|p| p.length() <= 1.5 + EPS).count();
        let ring = cloud
            .points()
            .iter()
            .filter(|p| {
                let len = p.length();
                len >= 2.2 - EPS && len <= (3.7f32.powi(2) + 0.05f32.powi(2)).sqrt() + EPS
            })
            .count();
        assert_eq!(planet + ring, N, "points outside both mixture components");
        let planet_fraction = planet as f32 / N as f32;
        assert!(
            (0.64..=0.76).contains(&planet_fraction),
            "planet fraction {planet_fraction}"
        );
    }

    #[test]
    fn test_heart_extents() {
        let cloud = sample(ShapeKind::Heart, N);
        for p in cloud.points() {
            assert!(p.x.abs() <= 16.0 * 0.15 + EPS);
            assert!(p.y <= 12.0 * 0.15 + EPS && p.y >= -17.0 * 0.15 - EPS);
            assert!(p.z.abs() <= 5.0 * 0.15 + EPS);
        }
    }

    #[test]
    fn test_flower_bounds() {
        // Rose radius tops out at 2, plus the 0.5 vertical lift.
        let cloud = sample(ShapeKind::Flower, N);
        assert!(cloud.max_radius() <= 2.5 + EPS);
    }

    #[test]
    fn test_meditate_mixture_bands() {
        let cloud = sample(ShapeKind::Meditate, N);
        // Head points sit above the body taper; base points below it.
        let head = cloud.points().iter().filter(|p| p.y > 1.5).count();
        let base = cloud.points().iter().filter(|p| p.y < -0.5).count();
        let head_fraction = head as f32 / N as f32;
        let base_fraction = base as f32 / N as f32;
        assert!((0.14..=0.26).contains(&head_fraction), "head fraction {head_fraction}");
        assert!((0.33..=0.47).contains(&base_fraction), "base fraction {base_fraction}");
    }

    #[test]
    fn test_repeated_calls_are_unbiased() {
        // Two independent draws should agree on coarse statistics.
        let a = sample(ShapeKind::Sphere, N);
        let b = sample(ShapeKind::Sphere, N);
        assert!((a.centroid() - b.centroid()).length() < 0.2);
        assert!((a.max_radius() - b.max_radius()).abs() < 0.5);
    }

    #[test]
    fn test_shape_kind_parsing() {
        assert_eq!("heart".parse::<ShapeKind>().unwrap(), ShapeKind::Heart);
        assert_eq!("Saturn".parse::<ShapeKind>().unwrap(), ShapeKind::Saturn);
        assert_eq!("buddha".parse::<ShapeKind>().unwrap(), ShapeKind::Meditate);
        assert!("octahedron".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_zero_count_is_fine() {
        let cloud = sample(ShapeKind::Heart, 0);
        assert!(cloud.is_empty());
    }
}
