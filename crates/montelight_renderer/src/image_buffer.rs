//! Framebuffer for render output.

use crate::Color;

/// Convert a color channel to an integer level with `floor(channel * 255)`.
///
/// No clamping is applied. Values outside [0, 1] follow Rust's saturating
/// float-to-int cast (negatives and NaN become 0).
#[inline]
pub fn quantize(channel: f64) -> u32 {
    (channel * 255.0).floor() as u32
}

/// A width x height grid of colors.
///
/// Pixel coordinates are flipped vertically on write: `set(x, 0, ..)`
/// stores into the last row of the buffer, and rows are exported from
/// first to last. With the camera's upward `y`, the exported image is the
/// right way up.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let row = (self.height - 1 - y) as usize;
        row * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y), using the same flipped convention as `set`.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// All pixels in export order (row-major, top row first).
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Quantized RGB levels for every pixel in export order.
    pub fn levels(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.pixels
            .iter()
            .map(|c| [quantize(c.x), quantize(c.y), quantize(c.z)])
    }

    /// Convert to 8-bit RGB bytes (for display or saving), clamping to 255.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for level in self.levels() {
            bytes.extend(level.map(|l| l.min(255) as u8));
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.75), 191);
        assert_eq!(quantize(0.25), 63);
        assert_eq!(quantize(0.9), 229);
        // Just under a level boundary floors down
        assert_eq!(quantize(0.999), 254);
        // No clamping above 1
        assert_eq!(quantize(2.0), 510);
        assert_eq!(quantize(-0.5), 0);
    }

    #[test]
    fn test_new_is_black() {
        let image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels().len(), 12);
        assert!(image.pixels().iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_vertical_flip() {
        let mut image = ImageBuffer::new(4, 3);
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);

        image.set(1, 0, red);
        image.set(2, 2, blue);

        // y = 0 lands on the last stored row
        assert_eq!(image.pixels()[2 * 4 + 1], red);
        // y = height - 1 lands on the first stored row
        assert_eq!(image.pixels()[2], blue);

        assert_eq!(image.get(1, 0), red);
        assert_eq!(image.get(2, 2), blue);
    }

    #[test]
    fn test_to_rgb8() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.5, 0.0));
        image.set(1, 0, Color::new(3.0, 0.75, -1.0));

        assert_eq!(image.to_rgb8(), vec![255, 127, 0, 255, 191, 0]);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 image")]
    fn test_out_of_bounds_panics() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 2, Color::ONE);
    }
}
