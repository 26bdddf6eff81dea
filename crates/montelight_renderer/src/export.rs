//! Image export: plain-text PPM (P3) and PNG.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Write an image as plain-text PPM.
///
/// Header `P3 <width> <height> 255`, then one `r g b` line per pixel in
/// export order, with channels quantized by [`crate::quantize`].
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    writeln!(writer, "P3 {} {} {}", image.width, image.height, 255)?;
    for [r, g, b] in image.levels() {
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    writer.flush()
}

/// Save an image as plain-text PPM.
pub fn save_ppm(image: &ImageBuffer, path: impl AsRef<Path>) -> ExportResult<()> {
    let file = File::create(path.as_ref())?;
    write_ppm(image, BufWriter::new(file))?;
    log::info!("Saved {}x{} PPM to {}", image.width, image.height, path.as_ref().display());
    Ok(())
}

/// Save an image as 8-bit PNG (channels clamped to 255).
pub fn save_png(image: &ImageBuffer, path: impl AsRef<Path>) -> ExportResult<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
        ExportError::BufferSize {
            width: image.width,
            height: image.height,
        },
    )?;
    rgb.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    log::info!("Saved {}x{} PNG to {}", image.width, image.height, path.as_ref().display());
    Ok(())
}

/// Save an image, choosing the format from the file extension.
///
/// `.png` writes PNG; anything else writes PPM.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        save_png(image, path)
    } else {
        save_ppm(image, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn checker() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));
        image.set(1, 1, Color::new(0.75, 0.25, 0.5));
        image
    }

    #[test]
    fn test_write_ppm() {
        let mut out = Vec::new();
        write_ppm(&checker(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Top row (y = 1) first
        assert_eq!(
            text,
            "P3 2 2 255\n0 0 255\n191 63 127\n255 0 0\n0 255 0\n"
        );
    }

    #[test]
    fn test_set_row_zero_is_last_scanline() {
        let mut image = ImageBuffer::new(3, 4);
        image.set(2, 0, Color::ONE);

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 12);
        assert_eq!(lines[0], "P3 3 4 255");
        assert_eq!(*lines.last().unwrap(), "255 255 255");
        assert!(lines[1..12].iter().all(|l| *l == "0 0 0"));
    }

    #[test]
    fn test_save_by_extension() {
        let dir = std::env::temp_dir().join(format!("montelight_export_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let image = checker();

        let ppm = dir.join("out.ppm");
        save(&image, &ppm).unwrap();
        let text = std::fs::read_to_string(&ppm).unwrap();
        assert!(text.starts_with("P3 2 2 255\n"));

        let png = dir.join("out.PNG");
        save(&image, &png).unwrap();
        let bytes = std::fs::read(&png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let result = save_ppm(&checker(), "/nonexistent/montelight/out.ppm");
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
