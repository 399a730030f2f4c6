//! Output types for the duotone pipeline.
//!
//! [`DuotoneImage`] stores the dithered grid together with its
//! [`ColorPair`](crate::theme::ColorPair) and offers these views:
//!
//! - **Indexed** ([`DuotoneImage::indices`]): 0 = background, 1 = foreground
//! - **Flat RGB** ([`DuotoneImage::to_rgb`]): three bytes per pixel
//! - **Image buffer** ([`DuotoneImage::to_rgb_image`]): an `image::RgbImage`

mod duotone_image;

pub use duotone_image::DuotoneImage;
