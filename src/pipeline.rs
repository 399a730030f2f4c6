use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};

use crate::error::{AppError, RenderError};
use crate::params::PipelineParams;
use crate::png_output::encode_png;

/// Run one conversion: decode, render, encode, write.
///
/// Nothing is written unless every earlier step succeeded. Returns the
/// path of the written file.
pub fn run(params: &PipelineParams) -> Result<PathBuf, AppError> {
    let source = load_image(&params.input)?;
    let (width, height) = source.dimensions();
    tracing::info!(
        input = %params.input.display(),
        width,
        height,
        "Loaded image"
    );

    tracing::info!(
        algorithm = %params.algorithm,
        theme = params.theme.map(|t| t.name()).unwrap_or("custom"),
        background = %params.colors.background,
        foreground = %params.colors.foreground,
        scale = params.scale,
        resize = ?params.resize.map(|r| r.to_string()),
        "Rendering"
    );
    let rendered = params
        .duotoner()
        .render(&source)
        .map_err(RenderError::from)?;
    tracing::debug!(
        width = rendered.width(),
        height = rendered.height(),
        lit = rendered.grid().count_set(),
        "Dithered"
    );

    let png_bytes = encode_png(&rendered)?;
    write_output(&params.output, &png_bytes)?;
    tracing::info!(
        output = %params.output.display(),
        bytes = png_bytes.len(),
        "Wrote PNG"
    );

    Ok(params.output.clone())
}

/// Open and decode an image, detecting the format from its content.
pub fn load_image(path: &Path) -> Result<DynamicImage, AppError> {
    let reader = ImageReader::open(path)
        .map_err(|e| AppError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| AppError::io(path, e))?;
    reader.decode().map_err(|e| AppError::from_image(path, e))
}

/// Write `bytes` to `path`, creating missing parent directories first.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| AppError::io(path, e))
}
