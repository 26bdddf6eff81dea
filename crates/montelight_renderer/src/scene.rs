//! Ordered surface list and nearest-hit resolution.

use montelight_core::{SceneDescription, SurfaceDesc};

use crate::{Color, Interval, Ray, Sphere, Surface};

/// Upper bound on accepted hit distances: single-precision `1e20` widened
/// to `f64`.
pub const MAX_DISTANCE: f64 = 1e20_f32 as f64;

/// The nearest surface a ray hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance returned by the surface's intersection test
    pub distance: f64,
    /// Color of the surface that was hit
    pub color: Color,
    /// Position of the surface in the scene's evaluation order
    pub index: usize,
}

/// An ordered list of surfaces.
///
/// Surfaces are tested in insertion order. The scene is read-only while
/// rendering and is shared between render threads.
pub struct Scene {
    surfaces: Vec<Box<dyn Surface>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    /// Build the intersectable scene from its description.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new();

        for surface in &description.surfaces {
            match surface {
                SurfaceDesc::Sphere {
                    name,
                    center,
                    radius,
                    color,
                } => {
                    log::debug!("Adding sphere '{}' at {} (r = {})", name, center, radius);
                    scene.add(Box::new(Sphere::new(*center, *radius, *color)));
                }
            }
        }

        scene
    }

    /// Append a surface after all existing ones.
    pub fn add(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    /// Surfaces in evaluation order.
    pub fn surfaces(&self) -> &[Box<dyn Surface>] {
        &self.surfaces
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Find the surface with the smallest positive hit distance.
    ///
    /// A hit replaces the current best only when it is strictly closer, so
    /// on an exact tie the surface that comes first in the list wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest = None;
        let mut closest = MAX_DISTANCE;

        for (index, surface) in self.surfaces.iter().enumerate() {
            let distance = surface.intersects(ray);
            if Interval::new(0.0, closest).surrounds(distance) {
                closest = distance;
                nearest = Some(Hit {
                    distance,
                    color: surface.color(),
                    index,
                });
            }
        }

        nearest
    }

    /// Color seen along a ray: the nearest surface's color, or black.
    pub fn trace(&self, ray: &Ray) -> Color {
        self.nearest_hit(ray).map_or(Color::ZERO, |hit| hit.color)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;

    const RED: Color = Color::new(1.0, 0.0, 0.0);
    const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    fn row_of_spheres() -> Scene {
        // Three spheres along -Z at increasing distance, added far to near
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(Vector3::new(0.0, 0.0, -30.0), 1.0, BLUE)));
        scene.add(Box::new(Sphere::new(Vector3::new(0.0, 0.0, -20.0), 1.0, GREEN)));
        scene.add(Box::new(Sphere::new(Vector3::new(0.0, 0.0, -10.0), 1.0, RED)));
        scene
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let scene = row_of_spheres();
        let ray = Ray::new(Vector3::ZERO, Vector3::NEG_Z);

        let hit = scene.nearest_hit(&ray).unwrap();
        assert_eq!(hit.index, 2);
        assert_eq!(hit.color, RED);
        assert!((hit.distance - 18.0).abs() < 1e-9);
        assert_eq!(scene.trace(&ray), RED);
    }

    #[test]
    fn test_miss_is_black() {
        let scene = row_of_spheres();
        let away = Ray::new(Vector3::ZERO, Vector3::Z);

        for surface in scene.surfaces() {
            assert_eq!(surface.intersects(&away), 0.0);
        }
        assert_eq!(scene.nearest_hit(&away), None);
        assert_eq!(scene.trace(&away), Color::ZERO);
    }

    #[test]
    fn test_empty_scene_is_black() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        assert_eq!(scene.trace(&Ray::new(Vector3::ZERO, Vector3::X)), Color::ZERO);
    }

    #[test]
    fn test_exact_tie_first_surface_wins() {
        let center = Vector3::new(0.0, 0.0, -5.0);
        let ray = Ray::new(Vector3::ZERO, Vector3::NEG_Z);

        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(center, 1.0, GREEN)));
        scene.add(Box::new(Sphere::new(center, 1.0, BLUE)));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.trace(&ray), GREEN);

        let mut swapped = Scene::new();
        swapped.add(Box::new(Sphere::new(center, 1.0, BLUE)));
        swapped.add(Box::new(Sphere::new(center, 1.0, GREEN)));
        let hit = swapped.nearest_hit(&ray).unwrap();
        assert_eq!(hit.color, BLUE);
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_hits_beyond_max_distance_are_ignored() {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(Vector3::new(0.0, 0.0, -1e21), 1.0, RED)));
        assert_eq!(scene.trace(&Ray::new(Vector3::ZERO, Vector3::NEG_Z)), Color::ZERO);
    }

    #[test]
    fn test_from_description_preserves_order() {
        let description = SceneDescription::cornell_box();
        let scene = Scene::from_description(&description);

        assert_eq!(scene.len(), description.surface_count());
        for (surface, desc) in scene.surfaces().iter().zip(&description.surfaces) {
            assert_eq!(surface.color(), desc.color());
        }
    }
}
