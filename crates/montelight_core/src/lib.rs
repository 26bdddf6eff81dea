//! Montelight Core - scene description for the Montelight ray caster.
//!
//! This crate provides:
//!
//! - **Scene descriptors**: `SceneDescription`, `SurfaceDesc`, `CameraDesc`
//! - **Render settings**: resolution and sample count
//! - **Scene files**: JSON loading and saving, plus the built-in Cornell box
//!
//! # Example
//!
//! ```ignore
//! use montelight_core::{load_scene, SceneDescription};
//!
//! let scene = load_scene("cornell.json")?;
//! println!("Loaded {} surfaces", scene.surface_count());
//!
//! let reference = SceneDescription::cornell_box();
//! assert_eq!(reference.surface_count(), 9);
//! ```

pub mod loader;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, save_scene, SceneError, SceneResult};
pub use scene::{CameraDesc, SceneDescription, SurfaceDesc};
pub use settings::RenderSettings;
