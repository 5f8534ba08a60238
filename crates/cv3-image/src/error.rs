use crate::image::DType;

/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the image data is not contiguous.
    #[error("Image data is not contiguous")]
    ImageDataNotContiguous,

    /// Error when shape is not valid.
    #[error("Invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the number of elements of a shape does not fit in usize.
    #[error("Image shape {0:?} is too large")]
    SizeOverflow(Vec<usize>),

    /// Error when the array is neither 2 (gray) nor 3 (channeled) dimensional.
    #[error("Image must have 2 or 3 dimensions, got {0}")]
    InvalidNdim(usize),

    /// Error when the channel dimension of a 3 dims image is zero.
    #[error("Image channel dimension must be greater than zero")]
    EmptyChannelDim,

    /// Error when a dynamic image does not hold the requested element type.
    #[error("Expected an image of dtype {expected}, got {got}")]
    DtypeMismatch {
        /// The requested element type.
        expected: DType,
        /// The element type held by the image.
        got: DType,
    },
}
