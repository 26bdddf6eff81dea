//! Surface trait for ray-object intersection.

use crate::{Color, Ray};

/// Distance returned by [`Surface::intersects`] when the ray misses.
pub const MISS: f64 = 0.0;

/// Trait for geometry that can be hit by rays.
///
/// Intersection is a total function: every ray gets an answer, and any
/// non-positive distance (including [`MISS`]) means "no intersection".
pub trait Surface: Send + Sync {
    /// Distance along the ray to the nearest valid hit, or a non-positive
    /// value if there is none.
    fn intersects(&self, ray: &Ray) -> f64;

    /// Flat color of the surface.
    fn color(&self) -> Color;

    /// The hit distance as an option (`None` for misses).
    fn hit(&self, ray: &Ray) -> Option<f64> {
        let t = self.intersects(ray);
        if t > MISS {
            Some(t)
        } else {
            None
        }
    }
}
