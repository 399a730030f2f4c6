//! Duotone - two-color dithered renditions of any image
//!
//! Command-line front end for the `duotone-dither` engine.
//! This library exposes modules for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod png_output;
