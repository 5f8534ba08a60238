#![deny(missing_docs)]
//! Image types and traits for generating and manipulating images

/// image representation for computer vision purposes.
pub mod image;

/// image whose element type is only known at runtime.
pub mod dyn_image;

/// Error types for the image module.
pub mod error;

pub use crate::dyn_image::DynImage;
pub use crate::error::ImageError;
pub use crate::image::{DType, Image, ImageDtype, ImageSize};
