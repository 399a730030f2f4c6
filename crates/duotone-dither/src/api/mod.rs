//! Public API for the duotone-dither crate.
//!
//! This module provides the high-level API: [`Duotoner`] builder and
//! [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::Duotoner;
pub use error::DitherError;
