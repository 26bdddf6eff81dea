//! Sphere primitive for ray casting.

use crate::{surface::MISS, Color, Ray, Surface, Vector3};

/// Minimum accepted hit distance.
///
/// Roots at or below this bias are treated as misses so that a ray leaving
/// a surface does not immediately hit that same surface again through
/// rounding error. The value is the single-precision `0.01` widened to
/// `f64` (0.009999999776482582), and reference renders depend on it.
pub const EPSILON: f64 = 0.01_f32 as f64;

/// A sphere with a flat color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vector3, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Sphere {
    /// Solve `|o + t*d - c|^2 = r^2` for the smallest root above [`EPSILON`].
    ///
    /// The roots are not divided by `2a`, so for a unit-length direction the
    /// returned value is twice the geometric distance. Only the relative
    /// order of distances is used downstream.
    fn intersects(&self, ray: &Ray) -> f64 {
        let offset = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * offset.dot(ray.direction);
        let c = offset.dot(offset) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return MISS;
        }

        let sqrt_disc = discriminant.sqrt();

        let near = -b - sqrt_disc;
        if near > EPSILON {
            return near;
        }

        let far = -b + sqrt_disc;
        if far > EPSILON {
            return far;
        }

        MISS
    }

    fn color(&self) -> Color {
        self.color
    }
}
