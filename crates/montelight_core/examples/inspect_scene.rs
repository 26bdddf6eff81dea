//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/cornell.json

use std::env;

use montelight_core::{load_scene, SceneDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let scene = if args.len() < 2 {
        println!("No scene given, inspecting the built-in Cornell box");
        println!("Usage: inspect_scene <path-to-scene.json>\n");
        SceneDescription::cornell_box()
    } else {
        match load_scene(&args[1]) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("Failed to load scene: {}", e);
                std::process::exit(1);
            }
        }
    };

    println!("=== Scene: {} ===", scene.name);
    println!(
        "Resolution: {}x{} @ {} spp",
        scene.settings.width, scene.settings.height, scene.settings.samples_per_pixel
    );
    println!(
        "Camera: origin {} direction {}",
        scene.camera.origin, scene.camera.direction
    );

    println!("\n--- Surfaces ({}) ---", scene.surface_count());
    for (i, surface) in scene.surfaces.iter().enumerate() {
        println!("  [{}] {:?}", i, surface);
    }
}
