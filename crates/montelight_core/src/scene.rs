//! Scene description types for Montelight.
//!
//! A scene is plain data: an ordered list of surface descriptors, a camera
//! and the render settings. The renderer turns it into intersectable
//! surfaces. Surface order is significant, as the first surface wins when
//! two hits are at exactly the same distance.

use montelight_math::{Color, Vector3};
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};
use crate::settings::RenderSettings;

/// Descriptor for a single surface in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceDesc {
    /// A sphere with a flat color.
    Sphere {
        /// Optional label used in logs
        #[serde(default)]
        name: String,
        center: Vector3,
        radius: f64,
        color: Color,
    },
}

impl SurfaceDesc {
    /// Create a sphere descriptor.
    pub fn sphere(name: impl Into<String>, center: Vector3, radius: f64, color: Color) -> Self {
        SurfaceDesc::Sphere {
            name: name.into(),
            center,
            radius,
            color,
        }
    }

    /// The descriptor's label (may be empty).
    pub fn name(&self) -> &str {
        match self {
            SurfaceDesc::Sphere { name, .. } => name,
        }
    }

    /// The flat color of the surface.
    pub fn color(&self) -> Color {
        match self {
            SurfaceDesc::Sphere { color, .. } => *color,
        }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        match self {
            SurfaceDesc::Sphere {
                center,
                radius,
                color,
                ..
            } => {
                if !center.is_finite() || !color.is_finite() {
                    return Err(SceneError::Invalid(format!(
                        "surface {index} has non-finite center or color"
                    )));
                }
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(SceneError::Invalid(format!(
                        "surface {index} has invalid radius {radius}"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Pinhole camera placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    /// Eye position
    pub origin: Vector3,

    /// Gaze direction (normalized by the renderer)
    pub direction: Vector3,
}

impl CameraDesc {
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }
}

/// A complete, renderable scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    pub camera: CameraDesc,

    #[serde(default)]
    pub settings: RenderSettings,

    /// Surfaces in evaluation order
    pub surfaces: Vec<SurfaceDesc>,
}

impl SceneDescription {
    /// Create an empty scene with default settings.
    pub fn new(name: impl Into<String>, camera: CameraDesc) -> Self {
        Self {
            name: name.into(),
            camera,
            settings: RenderSettings::default(),
            surfaces: Vec::new(),
        }
    }

    /// Append a surface; it is evaluated after every surface already present.
    pub fn add_surface(&mut self, surface: SurfaceDesc) {
        self.surfaces.push(surface);
    }

    /// Replace the render settings.
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get surface count.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Check the scene for values that cannot produce a meaningful render.
    pub fn validate(&self) -> SceneResult<()> {
        let RenderSettings {
            width,
            height,
            samples_per_pixel,
        } = self.settings;

        if width == 0 || height == 0 {
            return Err(SceneError::Invalid(format!(
                "resolution must be non-zero, got {width}x{height}"
            )));
        }
        if samples_per_pixel == 0 {
            return Err(SceneError::Invalid(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if !self.camera.origin.is_finite() || !self.camera.direction.is_finite() {
            return Err(SceneError::Invalid("camera has non-finite values".to_string()));
        }
        if self.camera.direction == Vector3::ZERO {
            return Err(SceneError::Invalid("camera direction is zero".to_string()));
        }

        for (index, surface) in self.surfaces.iter().enumerate() {
            surface.validate(index)?;
        }

        Ok(())
    }

    /// The reference scene: a Cornell box built from nine spheres.
    ///
    /// Walls are huge spheres (radius 1e5) whose surfaces approximate
    /// planes; two small spheres sit on the floor and a large sphere pokes
    /// through the ceiling as the light.
    pub fn cornell_box() -> Self {
        let camera = CameraDesc::new(
            Vector3::new(50.0, 52.0, 295.6),
            Vector3::new(0.0, -0.042612, -1.0),
        );
        let mut scene = Self::new("cornell_box", camera);

        let grey = Color::new(0.75, 0.75, 0.75);
        let white = Color::ONE * 0.9;

        scene.add_surface(SurfaceDesc::sphere(
            "left",
            Vector3::new(1e5 + 1.0, 40.8, 81.6),
            1e5,
            Color::new(0.75, 0.25, 0.25),
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "right",
            Vector3::new(-1e5 + 99.0, 40.8, 81.6),
            1e5,
            Color::new(0.25, 0.25, 0.75),
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "back",
            Vector3::new(50.0, 40.8, 1e5),
            1e5,
            grey,
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "front",
            Vector3::new(50.0, 40.8, -1e5 + 170.0),
            1e5,
            Color::ZERO,
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "bottom",
            Vector3::new(50.0, 1e5, 81.6),
            1e5,
            grey,
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "top",
            Vector3::new(50.0, -1e5 + 81.6, 81.6),
            1e5,
            grey,
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "mirror",
            Vector3::new(27.0, 16.5, 47.0),
            16.5,
            white,
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "glass",
            Vector3::new(73.0, 16.5, 78.0),
            16.5,
            white,
        ));
        scene.add_surface(SurfaceDesc::sphere(
            "light",
            Vector3::new(50.0, 681.6 - 0.27, 81.6),
            600.0,
            Color::ONE,
        ));

        scene
    }
}
