use std::io::Cursor;

use duotone_dither::DuotoneImage;

use crate::error::RenderError;

/// Encode a duotone image as a 1-bit indexed PNG.
///
/// The PLTE holds `[background, foreground]`. The fast initial encode is
/// re-compressed with oxipng; if that fails the unoptimized PNG is kept.
pub fn encode_png(image: &DuotoneImage) -> Result<Vec<u8>, RenderError> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let colors = image.colors();

    let plte: Vec<u8> = [colors.background, colors.foreground]
        .iter()
        .flat_map(|c| c.to_bytes())
        .collect();
    let packed = pack_bits(&image.indices(), image.width());

    // Encode PNG (fast settings, oxipng re-compresses)
    let png_bytes = encode_indexed(width, height, &plte, &packed)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::debug!(%e, "oxipng failed, keeping fast PNG");
        png_bytes
    });
    tracing::debug!(width, height, bytes = optimized.len(), "Encoded PNG");
    Ok(optimized)
}

fn encode_indexed(
    width: u32,
    height: u32,
    plte: &[u8],
    packed: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::One);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack 0/1 indices into 1-bit PNG rows, most significant bit first.
///
/// Each row starts on a fresh byte; unused trailing bits are zero.
fn pack_bits(indices: &[u8], width: usize) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let bytes_per_row = width.div_ceil(8);
    let mut packed = Vec::with_capacity(bytes_per_row * (indices.len() / width));

    for row in indices.chunks(width) {
        for chunk in row.chunks(8) {
            let byte = chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &idx)| acc | ((idx & 1) << (7 - i)));
            packed.push(byte);
        }
    }

    packed
}
