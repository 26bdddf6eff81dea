//! Scene file loading and saving.
//!
//! Scenes are stored as JSON. Vectors are written as `[x, y, z]` arrays:
//!
//! ```json
//! {
//!   "name": "one_ball",
//!   "camera": { "origin": [0, 0, 10], "direction": [0, 0, -1] },
//!   "settings": { "width": 64, "height": 64 },
//!   "surfaces": [
//!     { "type": "sphere", "center": [0, 0, 0], "radius": 1, "color": [1, 0, 0] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading or saving a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene from a JSON file.
///
/// If the file does not name the scene, the file stem is used.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&contents)?;

    if scene.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            scene.name = stem.to_string_lossy().into_owned();
        }
    }

    log::info!(
        "Loaded scene '{}' from {}: {} surfaces, {}x{} @ {} spp",
        scene.name,
        path.display(),
        scene.surface_count(),
        scene.settings.width,
        scene.settings.height,
        scene.settings.samples_per_pixel
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    scene.validate()?;
    Ok(scene)
}

/// Write a scene to a JSON file.
pub fn save_scene(scene: &SceneDescription, path: impl AsRef<Path>) -> SceneResult<()> {
    let json = serde_json::to_string_pretty(scene)?;
    fs::write(path.as_ref(), json)?;
    log::debug!("Saved scene '{}' to {}", scene.name, path.as_ref().display());
    Ok(())
}
