//! Grayscale conversion and tone adjustment on 8-bit luma.
//!
//! Contrast and brightness both blend the image with a flat "degenerate"
//! image: mid gray at the image mean for contrast, black for brightness.
//! Results are clipped to `[0, 255]` and truncated, so every step stays on
//! the 8-bit grid before normalization.

/// ITU-R 601-2 luma of an sRGB pixel, in fixed point.
///
/// `L = (19595 R + 38470 G + 7471 B + 2^15) >> 16`
#[inline]
pub fn luma601(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((19595 * r + 38470 * g + 7471 * b + 0x8000) >> 16) as u8
}

/// Average gray level, rounded half up. Empty input yields 0.
pub fn mean_gray(pixels: &[u8]) -> u8 {
    if pixels.is_empty() {
        return 0;
    }
    let sum: u64 = pixels.iter().map(|&p| p as u64).sum();
    let mean = sum as f64 / pixels.len() as f64;
    (mean + 0.5) as u8
}

/// Interpolate (or extrapolate) from `base` towards `pixel` by `alpha`.
#[inline]
pub fn blend(base: u8, pixel: u8, alpha: f32) -> u8 {
    let value = base as f32 + alpha * (pixel as f32 - base as f32);
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

/// Scale contrast around the image's mean gray.
pub fn adjust_contrast(pixels: &mut [u8], factor: f32) {
    let mean = mean_gray(pixels);
    for p in pixels.iter_mut() {
        *p = blend(mean, *p, factor);
    }
}

/// Multiply every level by `factor`.
pub fn adjust_brightness(pixels: &mut [u8], factor: f32) {
    for p in pixels.iter_mut() {
        *p = blend(0, *p, factor);
    }
}
