use cv3_imgproc::color::ColorConversionError;

/// An error type for the named color conversions.
#[derive(thiserror::Error, Debug)]
pub enum ColorError {
    /// A grayscale to color conversion received a multi channel image.
    #[error("Image must be grayscale (2 dims)")]
    InvalidShape {
        /// The shape of the rejected image.
        shape: Vec<usize>,
    },

    /// Error raised by the conversion itself, passed through unchanged.
    #[error(transparent)]
    Conversion(#[from] ColorConversionError),
}
