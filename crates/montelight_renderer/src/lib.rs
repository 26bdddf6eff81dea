//! Montelight renderer - CPU primary-ray casting.
//!
//! Casts one primary ray per pixel through a pinhole camera, resolves the
//! nearest surface hit against a linear list of surfaces and stores the
//! surface color in an [`ImageBuffer`]. There is no shading or bouncing:
//! the color of a pixel is the flat color of whatever it sees first, and
//! black when it sees nothing.

mod bucket;
mod camera;
mod export;
mod image_buffer;
mod renderer;
mod scene;
mod sphere;
mod surface;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, CameraError, CameraResult, FOV_SCALE, PUSH_DISTANCE};
pub use export::{save, save_png, save_ppm, write_ppm, ExportError, ExportResult};
pub use image_buffer::{quantize, ImageBuffer};
pub use renderer::{render, render_description, render_pixel, RenderConfig};
pub use scene::{Hit, Scene, MAX_DISTANCE};
pub use sphere::{Sphere, EPSILON};
pub use surface::{Surface, MISS};

/// Re-export common math types from montelight_math
pub use montelight_math::{Color, Interval, Ray, Vector3};
