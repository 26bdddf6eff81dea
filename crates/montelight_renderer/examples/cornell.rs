//! Reference render example.
//!
//! Renders the built-in Cornell box and saves it to PPM format.

use montelight_core::SceneDescription;
use montelight_renderer::{
    render_parallel, save_ppm, Camera, RenderConfig, Scene, DEFAULT_BUCKET_SIZE,
};

fn main() {
    env_logger::init();

    println!("Montelight - Cornell Box Example");
    println!("================================");

    let description = SceneDescription::cornell_box();

    let start = std::time::Instant::now();
    let scene = Scene::from_description(&description);
    println!("Scene built in {:?} ({} surfaces)", start.elapsed(), scene.len());

    let camera = Camera::from_description(&description.camera, &description.settings)
        .expect("reference camera is valid");
    let config = RenderConfig::from_settings(&description.settings);

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width(),
        camera.image_height(),
        config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &scene, &config, DEFAULT_BUCKET_SIZE);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "render.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
