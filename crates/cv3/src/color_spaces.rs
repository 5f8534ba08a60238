//! Named color space conversions.
//!
//! Every function forwards to [`cvt_color`] with a fixed
//! [`ColorConversionCode`], so callers do not need to remember the codes:
//!
//! * [`rgb`], [`bgr`], [`rgb2bgr`], [`bgr2rgb`]: swap the red and blue channels.
//! * [`rgba`], [`bgra`], [`rgba2bgra`], [`bgra2rgba`]: the same with an alpha channel.
//! * [`rgb2gray`], [`bgr2gray`]: color to grayscale.
//! * [`gray2rgb`], [`gray2bgr`], [`gray2rgba`], [`gray2bgra`]: grayscale to color.
//! * [`bgr2hsv`], [`rgb2hsv`], [`hsv2bgr`], [`hsv2rgb`]: to and from HSV.
//!
//! # Example
//!
//! ```
//! use cv3::color_spaces;
//! use cv3::image::{Image, ImageSize};
//!
//! let gray = Image::from_gray(ImageSize { width: 2, height: 2 }, vec![0u8, 128, 255, 64]).unwrap();
//!
//! let rgb = color_spaces::gray2rgb(&gray).unwrap();
//! assert_eq!(rgb.shape(), &[2, 2, 3]);
//!
//! let back = color_spaces::rgb2gray(&rgb).unwrap();
//! assert_eq!(back, gray);
//! ```

use cv3_image::{DType, DynImage, Image};
use cv3_imgproc::{
    color::{self, ColorConversionCode, ColorDepth},
    parallel::ExecutionStrategy,
};

use crate::error::ColorError;

/// Images the named conversions accept.
///
/// A conversion always returns the same image type it receives, so the
/// element type of the input is preserved in the output.
pub trait ColorImage: Sized {
    /// The shape of the image, either (H, W) or (H, W, C).
    fn shape(&self) -> &[usize];

    /// The element type of the image.
    fn dtype(&self) -> DType;

    /// Run the conversion primitive on the image.
    fn cvt_color_with(
        &self,
        code: ColorConversionCode,
        strategy: ExecutionStrategy,
    ) -> Result<Self, ColorError>;
}

impl<T: ColorDepth> ColorImage for Image<T> {
    fn shape(&self) -> &[usize] {
        self.as_array().shape()
    }

    fn dtype(&self) -> DType {
        T::DTYPE
    }

    fn cvt_color_with(
        &self,
        code: ColorConversionCode,
        strategy: ExecutionStrategy,
    ) -> Result<Self, ColorError> {
        Ok(color::cvt_color_with(self, code, strategy)?)
    }
}

impl ColorImage for DynImage {
    fn shape(&self) -> &[usize] {
        DynImage::shape(self)
    }

    fn dtype(&self) -> DType {
        DynImage::dtype(self)
    }

    fn cvt_color_with(
        &self,
        code: ColorConversionCode,
        strategy: ExecutionStrategy,
    ) -> Result<Self, ColorError> {
        Ok(match self {
            DynImage::U8(img) => DynImage::U8(img.cvt_color_with(code, strategy)?),
            DynImage::U16(img) => DynImage::U16(img.cvt_color_with(code, strategy)?),
            DynImage::F32(img) => DynImage::F32(img.cvt_color_with(code, strategy)?),
        })
    }
}

/// Convert an image between color spaces.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `code` - The color space conversion code, e.g. [`ColorConversionCode::RGB2BGR`].
///
/// # Returns
///
/// A new image in the target color space with the element type of `image`.
///
/// # Errors
///
/// * [`ColorError::InvalidShape`] when converting a non grayscale image with
///   one of the gray to color codes.
/// * [`ColorError::Conversion`] for any error of the conversion itself.
pub fn cvt_color<I: ColorImage>(image: &I, code: ColorConversionCode) -> Result<I, ColorError> {
    cvt_color_with(image, code, ExecutionStrategy::default())
}

/// Convert an image between color spaces.
///
/// Same as [`cvt_color`], named after the OpenCV function.
#[allow(non_snake_case)]
pub fn cvtColor<I: ColorImage>(image: &I, code: ColorConversionCode) -> Result<I, ColorError> {
    cvt_color(image, code)
}

/// Convert an image between color spaces with an explicit execution strategy.
///
/// See [`cvt_color`].
pub fn cvt_color_with<I: ColorImage>(
    image: &I,
    code: ColorConversionCode,
    strategy: ExecutionStrategy,
) -> Result<I, ColorError> {
    let shape = image.shape();
    log::debug!("{code} on {} image of shape {shape:?}", image.dtype());

    if code.is_gray_to_color() && shape.len() == 3 && shape[2] != 1 {
        log::debug!("{code} rejected, expected a single channel image");
        return Err(ColorError::InvalidShape {
            shape: shape.to_vec(),
        });
    }

    image.cvt_color_with(code, strategy)
}

macro_rules! named_conversions {
    ($($(#[$doc:meta])* $name:ident => $code:ident,)*) => {
        $(
            $(#[$doc])*
            pub fn $name<I: ColorImage>(image: &I) -> Result<I, ColorError> {
                cvt_color(image, ColorConversionCode::$code)
            }
        )*

        /// Every named conversion with the code it forwards to.
        pub const NAMED_CONVERSIONS: &[(&str, ColorConversionCode)] = &[
            $((stringify!($name), ColorConversionCode::$code),)*
        ];
    };
}

named_conversions! {
    /// Convert image from BGR to RGB color space.
    ///
    /// The channel swap is its own inverse, this is the same conversion as [`bgr`].
    rgb => RGB2BGR,
    /// Convert image from RGB to BGR color space.
    bgr => RGB2BGR,
    /// Convert image from RGB to BGR color space.
    rgb2bgr => RGB2BGR,
    /// Convert image from BGR to RGB color space.
    bgr2rgb => BGR2RGB,
    /// Convert image from BGRA to RGBA color space.
    rgba => BGRA2RGBA,
    /// Convert image from RGBA to BGRA color space.
    bgra => RGBA2BGRA,
    /// Convert image from RGBA to BGRA color space.
    rgba2bgra => RGBA2BGRA,
    /// Convert image from BGRA to RGBA color space.
    bgra2rgba => BGRA2RGBA,
    /// Convert image from RGB to grayscale.
    ///
    /// The result has 2 dims (H, W).
    rgb2gray => RGB2GRAY,
    /// Convert image from BGR to grayscale.
    ///
    /// The result has 2 dims (H, W).
    bgr2gray => BGR2GRAY,
    /// Convert grayscale image to RGB.
    ///
    /// Fails with [`ColorError::InvalidShape`] if the image is not grayscale.
    gray2rgb => GRAY2RGB,
    /// Convert grayscale image to BGR.
    ///
    /// Fails with [`ColorError::InvalidShape`] if the image is not grayscale.
    gray2bgr => GRAY2BGR,
    /// Convert grayscale image to RGBA with an opaque alpha channel.
    ///
    /// Fails with [`ColorError::InvalidShape`] if the image is not grayscale.
    gray2rgba => GRAY2RGBA,
    /// Convert grayscale image to BGRA with an opaque alpha channel.
    ///
    /// Fails with [`ColorError::InvalidShape`] if the image is not grayscale.
    gray2bgra => GRAY2BGRA,
    /// Convert image from BGR to HSV color space.
    bgr2hsv => BGR2HSV,
    /// Convert image from RGB to HSV color space.
    rgb2hsv => RGB2HSV,
    /// Convert image from HSV to BGR color space.
    hsv2bgr => HSV2BGR,
    /// Convert image from HSV to RGB color space.
    hsv2rgb => HSV2RGB,
}

/// Look up the code behind a named conversion, e.g. `"bgr2gray"`.
pub fn named_code(name: &str) -> Option<ColorConversionCode> {
    NAMED_CONVERSIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv3_image::{ImageError, ImageSize};

    const SIZE: ImageSize = ImageSize {
        width: 2,
        height: 2,
    };

    #[test]
    fn gray2rgb_replicates_values() -> Result<(), ColorError> {
        let gray = Image::from_gray(SIZE, vec![0u8, 128, 255, 64]).map_err(into_color_error)?;
        let rgb = gray2rgb(&gray)?;

        assert_eq!(rgb.shape(), &[2, 2, 3]);
        for (y, x, v) in [(0, 0, 0u8), (0, 1, 128), (1, 0, 255), (1, 1, 64)] {
            for c in 0..3 {
                assert_eq!(rgb.get(&[y, x, c]), Some(&v));
            }
        }

        Ok(())
    }

    #[test]
    fn gray2bgra_rejects_color_image() -> Result<(), ColorError> {
        let bgr = Image::<u8>::new(SIZE, 3, vec![0; 12]).map_err(into_color_error)?;
        let res = gray2bgra(&bgr);

        match res {
            Err(err @ ColorError::InvalidShape { .. }) => {
                assert_eq!(err.to_string(), "Image must be grayscale (2 dims)");
            }
            other => panic!("expected InvalidShape, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn gray_precondition_accepts_single_channel() -> Result<(), ColorError> {
        let gray = Image::<f32>::new(SIZE, 1, vec![0.5; 4]).map_err(into_color_error)?;
        let conversions: [fn(&Image<f32>) -> Result<Image<f32>, ColorError>; 4] =
            [gray2rgb, gray2bgr, gray2rgba, gray2bgra];
        for f in conversions {
            let out = f(&gray)?;
            assert_eq!(&out.shape()[..2], &[2, 2]);
        }

        Ok(())
    }

    #[test]
    fn other_codes_skip_the_precondition() -> Result<(), ColorError> {
        // only the conversion primitive complains about the channel count here
        let gray = Image::from_gray(SIZE, vec![0u8; 4]).map_err(into_color_error)?;
        let res = bgr2rgb(&gray);
        assert!(matches!(res, Err(ColorError::Conversion(_))));

        Ok(())
    }

    #[test]
    fn named_code_lookup() {
        assert_eq!(named_code("bgr2gray"), Some(ColorConversionCode::BGR2GRAY));
        assert_eq!(named_code("bgra"), Some(ColorConversionCode::RGBA2BGRA));
        assert_eq!(named_code("cvt_color"), None);
        assert_eq!(NAMED_CONVERSIONS.len(), 18);
    }

    fn into_color_error(err: ImageError) -> ColorError {
        ColorError::Conversion(err.into())
    }
}
