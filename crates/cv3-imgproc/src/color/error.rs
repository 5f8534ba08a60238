use cv3_image::{DType, ImageError};

use super::ColorConversionCode;
use crate::parallel::ParallelError;

/// An error type for the color conversion module.
#[derive(thiserror::Error, Debug)]
pub enum ColorConversionError {
    /// Error raised by the image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error raised while distributing the pixel work.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// Error when the source image does not have the channels the code expects.
    #[error("{code} expects an image with {expected} channels, got {got} (shape: {shape:?})")]
    InvalidChannelCount {
        /// The requested conversion.
        code: ColorConversionCode,
        /// The number of channels the conversion reads.
        expected: usize,
        /// The number of channels of the image.
        got: usize,
        /// The shape of the image.
        shape: Vec<usize>,
    },

    /// Error when the conversion is not defined for the image element type.
    #[error("{code} does not support images of dtype {dtype}")]
    UnsupportedDtype {
        /// The requested conversion.
        code: ColorConversionCode,
        /// The element type of the image.
        dtype: DType,
    },

    /// Error when a raw code is not part of the supported vocabulary.
    #[error("Unsupported color conversion code: {0}")]
    UnsupportedConversionCode(i32),
}
