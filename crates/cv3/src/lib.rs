#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use cv3_image as image;

#[doc(inline)]
pub use cv3_imgproc as imgproc;

/// named color space conversions module.
pub mod color_spaces;

/// Error types for the named conversions.
pub mod error;

pub use crate::error::ColorError;
