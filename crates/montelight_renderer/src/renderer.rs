//! Core render loop.
//!
//! One primary ray per pixel sample, nearest-hit color, no bounces.

use std::time::Instant;

use montelight_core::{RenderSettings, SceneDescription};

use crate::{
    render_parallel, Camera, CameraResult, Color, ImageBuffer, Scene, DEFAULT_BUCKET_SIZE,
};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Primary-ray samples averaged per pixel
    pub samples_per_pixel: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
        }
    }
}

impl RenderConfig {
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self {
            samples_per_pixel: settings.samples_per_pixel,
        }
    }
}

/// Render a single pixel.
///
/// Samples are not jittered, so every sample traces the same ray and the
/// average equals the single-sample color.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let ray = camera.primary_ray(x, y);
        pixel_color += scene.trace(&ray);
    }

    pixel_color / samples as f64
}

/// Render the entire scene to an image buffer.
///
/// This is the single-threaded reference path; see
/// [`crate::render_parallel`] for the bucketed version.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let width = camera.image_width();
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} @ {} spp ({} surfaces, serial)",
        width,
        height,
        config.samples_per_pixel,
        scene.len()
    );
    let start = Instant::now();

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

/// Build camera and scene from a description and render it.
///
/// With `parallel` set, pixels are rendered in buckets across the rayon
/// thread pool; the result is identical either way.
pub fn render_description(
    description: &SceneDescription,
    parallel: bool,
) -> CameraResult<ImageBuffer> {
    let camera = Camera::from_description(&description.camera, &description.settings)?;
    let scene = Scene::from_description(description);
    let config = RenderConfig::from_settings(&description.settings);

    let image = if parallel {
        render_parallel(&camera, &scene, &config, DEFAULT_BUCKET_SIZE)
    } else {
        render(&camera, &scene, &config)
    };

    Ok(image)
}
