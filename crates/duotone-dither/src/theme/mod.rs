//! Named two-color themes and color-pair resolution.
//!
//! A [`Theme`] is a fixed entry in the theme table; a [`ColorPair`] is the
//! background/foreground pair actually used for recoloring. Explicit colors
//! take precedence over themes through [`ColorPair::resolve`].

mod color_pair;
mod error;
mod table;

pub use color_pair::ColorPair;
pub use error::ParseThemeError;
pub use table::Theme;
