use cv3_image::Image;

use super::{
    code::ConversionKind, gray, hsv, rgb, ColorConversionCode, ColorConversionError, ColorDepth,
};
use crate::parallel::{self, ExecutionStrategy};

/// Convert an image between color spaces.
///
/// Allocates and returns a new image. Single channel results have 2 dims
/// (H, W), every other result has 3 dims (H, W, C). The element type is
/// preserved.
///
/// # Arguments
///
/// * `src` - The input image. A 2 dims image, or a 3 dims image with one
///   channel, is a single channel image.
/// * `code` - The conversion to apply.
///
/// # Errors
///
/// * [`ColorConversionError::InvalidChannelCount`] when the number of
///   channels of `src` does not match the source of `code`.
/// * [`ColorConversionError::UnsupportedDtype`] for HSV conversions of 16-bit images.
///
/// # Example
///
/// ```
/// use cv3_image::{Image, ImageSize};
/// use cv3_imgproc::color::{cvt_color, ColorConversionCode};
///
/// let rgb = Image::<u8>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     3,
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let gray = cvt_color(&rgb, ColorConversionCode::RGB2GRAY).unwrap();
///
/// assert_eq!(gray.shape(), &[5, 4]);
/// ```
pub fn cvt_color<T: ColorDepth>(
    src: &Image<T>,
    code: ColorConversionCode,
) -> Result<Image<T>, ColorConversionError> {
    cvt_color_with(src, code, ExecutionStrategy::default())
}

/// Convert an image between color spaces with an explicit execution strategy.
///
/// See [`cvt_color`] for the conversion semantics.
pub fn cvt_color_with<T: ColorDepth>(
    src: &Image<T>,
    code: ColorConversionCode,
    strategy: ExecutionStrategy,
) -> Result<Image<T>, ColorConversionError> {
    let src_channels = code.src_channels();
    if src.num_channels() != src_channels {
        return Err(ColorConversionError::InvalidChannelCount {
            code,
            expected: src_channels,
            got: src.num_channels(),
            shape: src.shape().to_vec(),
        });
    }

    let size = src.size();
    let dst_channels = code.dst_channels();
    let src_data = src.as_slice()?;
    let mut dst = Image::from_size_val(size, dst_channels, T::default())?;
    let dst_data = dst.as_slice_mut()?;

    log::trace!(
        "{code}: {:?} {} -> {dst_channels} channels",
        src.shape(),
        T::DTYPE
    );

    macro_rules! for_each_pixel {
        ($f:expr) => {
            parallel::par_iter_pixels(
                strategy,
                src_data,
                src_channels,
                dst_data,
                dst_channels,
                size.width,
                $f,
            )?
        };
    }

    match code.kind() {
        ConversionKind::Swizzle(order) => {
            for_each_pixel!(|s, d| rgb::swizzle_pixel(order, s, d));
        }
        ConversionKind::Gray { blue_first } => {
            for_each_pixel!(|s, d| gray::gray_pixel(s, d, blue_first));
        }
        ConversionKind::ToHsv { blue_first, full } => {
            let hue_range = hue_range::<T>(code, full)?;
            for_each_pixel!(|s, d| hsv::hsv_pixel(s, d, blue_first, hue_range));
        }
        ConversionKind::FromHsv { blue_first, full } => {
            let hue_range = hue_range::<T>(code, full)?;
            for_each_pixel!(|s, d| hsv::color_from_hsv_pixel(s, d, blue_first, hue_range));
        }
    }

    Ok(dst)
}

fn hue_range<T: ColorDepth>(
    code: ColorConversionCode,
    full: bool,
) -> Result<f32, ColorConversionError> {
    T::hue_range(full).ok_or(ColorConversionError::UnsupportedDtype {
        code,
        dtype: T::DTYPE,
    })
}
