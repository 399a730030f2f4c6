//! Assertion helpers for tests.

use std::path::Path;

use image::RgbImage;
use pretty_assertions::assert_eq;

use duotone_dither::ColorPair;

/// Assert the file is a PNG and decode it to RGB.
pub fn assert_png_file(path: &Path) -> RgbImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .expect("decodable PNG")
        .to_rgb8()
}

/// Assert every pixel is one of the two colors of `colors`.
pub fn assert_two_colors(image: &RgbImage, colors: &ColorPair) {
    let bg = colors.background.to_bytes();
    let fg = colors.foreground.to_bytes();
    for (x, y, pixel) in image.enumerate_pixels() {
        assert!(
            pixel.0 == bg || pixel.0 == fg,
            "Pixel ({x}, {y}) is {:?}, expected {:?} or {:?}",
            pixel.0,
            bg,
            fg
        );
    }
}

/// Assert the image is made of uniform `block` x `block` squares.
pub fn assert_blocky(image: &RgbImage, block: u32) {
    for (x, y, pixel) in image.enumerate_pixels() {
        let origin = image.get_pixel(x - x % block, y - y % block);
        assert_eq!(
            pixel, origin,
            "Pixel ({x}, {y}) differs from its {block}x{block} block origin"
        );
    }
}

/// Count pixels equal to `color`.
pub fn count_color(image: &RgbImage, color: [u8; 3]) -> usize {
    image.pixels().filter(|p| p.0 == color).count()
}
