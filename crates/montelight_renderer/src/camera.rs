//! Pinhole camera for primary ray generation.

use montelight_core::{CameraDesc, RenderSettings};
use montelight_math::{MathError, Normalize};
use thiserror::Error;

use crate::{Ray, Vector3};

/// Scale of the image plane relative to the gaze direction (vertical
/// field of view of roughly 54 degrees).
pub const FOV_SCALE: f64 = 0.5135;

/// Distance primary rays are pushed along their direction before tracing,
/// which starts them clear of the region near the eye.
pub const PUSH_DISTANCE: f64 = 140.0;

/// Errors that can occur while setting up a camera.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    #[error("Image resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("Degenerate camera basis: {0}")]
    Degenerate(#[from] MathError),
}

/// Result type for camera setup.
pub type CameraResult<T> = Result<T, CameraError>;

/// Upright pinhole camera.
///
/// The image plane is spanned by a horizontal basis `cx` along +X, sized by
/// the aspect ratio, and a vertical basis `cy` perpendicular to `cx` and
/// the gaze direction. There is no lens, no jitter and no depth of field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vector3,
    forward: Vector3,
    cx: Vector3,
    cy: Vector3,
    image_width: u32,
    image_height: u32,
}

impl Camera {
    /// Create a camera at `origin` looking along `direction`.
    ///
    /// Fails if the resolution is zero, if `direction` is zero or
    /// non-finite, or if it is parallel to the X axis (no vertical basis).
    pub fn new(origin: Vector3, direction: Vector3, width: u32, height: u32) -> CameraResult<Self> {
        if width == 0 || height == 0 {
            return Err(CameraError::ZeroResolution { width, height });
        }

        let forward = direction.normalized_checked()?;
        let cx = Vector3::new((width as f64 * FOV_SCALE) / height as f64, 0.0, 0.0);
        let cy = cx.cross(forward).normalized_checked()? * FOV_SCALE;

        Ok(Self {
            origin,
            forward,
            cx,
            cy,
            image_width: width,
            image_height: height,
        })
    }

    /// Create a camera from a scene's camera descriptor and settings.
    pub fn from_description(camera: &CameraDesc, settings: &RenderSettings) -> CameraResult<Self> {
        Self::new(camera.origin, camera.direction, settings.width, settings.height)
    }

    /// Generate the primary ray for pixel (x, y).
    ///
    /// The pixel's fractional position `x / width` is computed in single
    /// precision, matching reference renders.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let u = (x as f32 / self.image_width as f32) as f64 - 0.5;
        let v = (y as f32 / self.image_height as f32) as f64 - 0.5;

        let d = self.cx * u + self.cy * v + self.forward;
        let direction = d.normalized();

        Ray::new(self.origin + direction * PUSH_DISTANCE, direction)
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Eye position.
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Normalized gaze direction.
    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    /// Horizontal and vertical image-plane basis vectors `(cx, cy)`.
    pub fn basis(&self) -> (Vector3, Vector3) {
        (self.cx, self.cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montelight_core::SceneDescription;

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -3.0), 200, 100).unwrap();
        let (cx, cy) = camera.basis();

        assert_eq!(camera.forward(), Vector3::NEG_Z);
        assert!(cx.abs_diff_eq(Vector3::new(2.0 * FOV_SCALE, 0.0, 0.0), 1e-12));
        // cross(+X, -Z) = +Y
        assert!(cy.abs_diff_eq(Vector3::new(0.0, FOV_SCALE, 0.0), 1e-12));
        assert!(cy.dot(cx).abs() < 1e-12);
        assert!(cy.dot(camera.forward()).abs() < 1e-12);
    }

    #[test]
    fn test_center_ray_follows_gaze() {
        let origin = Vector3::new(1.0, 2.0, 3.0);
        let camera = Camera::new(origin, Vector3::NEG_Z, 64, 64).unwrap();

        let ray = camera.primary_ray(32, 32);
        assert_eq!(ray.direction, Vector3::NEG_Z);
        assert_eq!(ray.origin, origin + Vector3::NEG_Z * PUSH_DISTANCE);
    }

    #[test]
    fn test_ray_directions_are_unit_and_span_image() {
        let camera = Camera::new(Vector3::ZERO, Vector3::NEG_Z, 40, 30).unwrap();

        for (x, y) in [(0, 0), (39, 0), (0, 29), (39, 29), (17, 11)] {
            let ray = camera.primary_ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-9);
            assert!(((ray.origin - camera.origin()).length() - PUSH_DISTANCE).abs() < 1e-9);
        }

        // Left/right and bottom/top of the image
        assert!(camera.primary_ray(0, 15).direction.x < 0.0);
        assert!(camera.primary_ray(39, 15).direction.x > 0.0);
        assert!(camera.primary_ray(20, 0).direction.y < 0.0);
        assert!(camera.primary_ray(20, 29).direction.y > 0.0);
    }

    #[test]
    fn test_reference_camera() {
        let scene = SceneDescription::cornell_box();
        let camera = Camera::from_description(&scene.camera, &scene.settings).unwrap();
        let (cx, cy) = camera.basis();

        assert_eq!(cx, Vector3::new(FOV_SCALE, 0.0, 0.0));
        assert!((cy.length() - FOV_SCALE).abs() < 1e-12);
        assert!(cy.y > 0.0);
        assert!((camera.forward().y - -0.04257336554299295).abs() < 1e-15);
    }

    #[test]
    fn test_zero_resolution() {
        let err = Camera::new(Vector3::ZERO, Vector3::NEG_Z, 0, 10).unwrap_err();
        assert_eq!(err, CameraError::ZeroResolution { width: 0, height: 10 });
    }

    #[test]
    fn test_degenerate_direction() {
        let zero = Camera::new(Vector3::ZERO, Vector3::ZERO, 10, 10).unwrap_err();
        assert_eq!(zero, CameraError::Degenerate(MathError::ZeroLength));

        // Gaze along X leaves no vertical basis
        let along_x = Camera::new(Vector3::ZERO, Vector3::X, 10, 10).unwrap_err();
        assert_eq!(along_x, CameraError::Degenerate(MathError::ZeroLength));
    }
}
