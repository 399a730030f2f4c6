//! Test fixtures: scratch directories, source images, parameter builders.

use std::path::{Path, PathBuf};

use clap::Parser;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use tempfile::TempDir;

use duotone::cli::Cli;
use duotone::config::Settings;
use duotone::params::PipelineParams;

/// A temporary directory that lives as long as the test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Save `image` under `name`; the extension picks the format.
    pub fn write_image(&self, name: &str, image: &DynamicImage) -> PathBuf {
        let path = self.path(name);
        image.save(&path).expect("save fixture image");
        path
    }

    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }
}

/// Horizontal RGB gradient with a little color in it.
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v.saturating_sub((y % 16) as u8), 255 - v])
    }))
}

/// Single gray level everywhere.
pub fn solid(width: u32, height: u32, level: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([level])))
}

/// Parse a command line (positionals first) into resolved parameters.
pub fn params(input: &Path, output: &Path, flags: &[&str]) -> PipelineParams {
    let input = input.to_string_lossy().into_owned();
    let output = output.to_string_lossy().into_owned();
    let mut args = vec!["duotone", input.as_str(), output.as_str()];
    args.extend_from_slice(flags);
    let cli = Cli::try_parse_from(args).expect("valid command line");
    PipelineParams::resolve(&cli, &Settings::default()).expect("resolvable parameters")
}
