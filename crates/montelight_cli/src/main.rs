//! Montelight command-line renderer.
//!
//! Run with: cargo run --release -- [SCENE.json] [-o OUTPUT] [--serial] [--bucket N]
//!
//! Without a scene file the built-in Cornell box is rendered to `render.ppm`.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use montelight_core::{load_scene, save_scene, SceneDescription};
use montelight_renderer::{
    render, render_parallel, save, Camera, RenderConfig, Scene, DEFAULT_BUCKET_SIZE,
};

const USAGE: &str =
    "Usage: montelight [SCENE.json] [-o OUTPUT] [--serial] [--bucket N] [--dump-scene PATH]";

/// Parsed command-line options.
#[derive(Debug, PartialEq)]
struct Options {
    scene: Option<PathBuf>,
    output: PathBuf,
    serial: bool,
    bucket_size: u32,
    dump_scene: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scene: None,
            output: PathBuf::from("render.ppm"),
            serial: false,
            bucket_size: DEFAULT_BUCKET_SIZE,
            dump_scene: None,
        }
    }
}

/// Parse arguments (without the program name). `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-o" | "--output" => {
                let value = iter.next().context("--output needs a path")?;
                options.output = PathBuf::from(value);
            }
            "--serial" => options.serial = true,
            "--bucket" => {
                let value = iter.next().context("--bucket needs a size")?;
                options.bucket_size = value
                    .parse()
                    .with_context(|| format!("invalid bucket size '{value}'"))?;
            }
            "--dump-scene" => {
                let value = iter.next().context("--dump-scene needs a path")?;
                options.dump_scene = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
            path => {
                if options.scene.is_some() {
                    bail!("more than one scene file given\n{USAGE}");
                }
                options.scene = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Some(options))
}

fn run(options: &Options) -> Result<()> {
    let description = match &options.scene {
        Some(path) => load_scene(path).with_context(|| format!("loading {}", path.display()))?,
        None => {
            log::info!("No scene file given, using the built-in Cornell box");
            SceneDescription::cornell_box()
        }
    };

    if let Some(path) = &options.dump_scene {
        save_scene(&description, path).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote scene to {}", path.display());
    }

    let camera = Camera::from_description(&description.camera, &description.settings)
        .context("setting up camera")?;
    let scene = Scene::from_description(&description);
    let config = RenderConfig::from_settings(&description.settings);

    let image = if options.serial {
        render(&camera, &scene, &config)
    } else {
        render_parallel(&camera, &scene, &config, options.bucket_size)
    };

    save(&image, &options.output).with_context(|| format!("saving {}", options.output.display()))?;
    println!("Saved {}x{} image to {}", image.width, image.height, options.output.display());

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    run(&options)
}
