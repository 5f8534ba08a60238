mod code;
mod convert;
mod error;
mod gray;
mod hsv;
mod rgb;

pub use code::ColorConversionCode;
pub use convert::{cvt_color, cvt_color_with};
pub use error::ColorConversionError;

use cv3_image::ImageDtype;

/// Element types the color conversions are defined for.
///
/// The per depth conventions follow OpenCV: integer depths compute the luma
/// in 14-bit fixed point and 8-bit images store the hue halved.
pub trait ColorDepth: ImageDtype {
    /// Compute `Y = 0.299 * R + 0.587 * G + 0.114 * B`.
    fn luma(r: Self, g: Self, b: Self) -> Self;

    /// The exclusive upper bound of the stored hue, or `None` when HSV is not
    /// supported for this depth.
    ///
    /// `full` selects the variant of the conversion using the whole 8-bit range.
    fn hue_range(full: bool) -> Option<f32>;
}

/// Fixed point luma weights, they sum up to `1 << LUMA_SHIFT`.
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

#[inline]
fn luma_fixed(r: u32, g: u32, b: u32) -> u32 {
    (r * LUMA_R + g * LUMA_G + b * LUMA_B + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT
}

impl ColorDepth for u8 {
    fn luma(r: Self, g: Self, b: Self) -> Self {
        luma_fixed(r as u32, g as u32, b as u32) as u8
    }

    fn hue_range(full: bool) -> Option<f32> {
        Some(if full { 256.0 } else { 180.0 })
    }
}

impl ColorDepth for u16 {
    fn luma(r: Self, g: Self, b: Self) -> Self {
        luma_fixed(r as u32, g as u32, b as u32) as u16
    }

    fn hue_range(_full: bool) -> Option<f32> {
        None
    }
}

impl ColorDepth for f32 {
    fn luma(r: Self, g: Self, b: Self) -> Self {
        0.299 * r + 0.587 * g + 0.114 * b
    }

    fn hue_range(_full: bool) -> Option<f32> {
        Some(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ColorDepth;

    #[test]
    fn luma_weights_sum_to_one() {
        assert_eq!(u8::luma(255, 255, 255), 255);
        assert_eq!(u16::luma(65535, 65535, 65535), 65535);
        assert_eq!(u8::luma(0, 0, 0), 0);
        approx::assert_relative_eq!(f32::luma(1.0, 1.0, 1.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn luma_primaries_u8() {
        // 255 * weight / 2^14, rounded
        assert_eq!(u8::luma(255, 0, 0), 76);
        assert_eq!(u8::luma(0, 255, 0), 150);
        assert_eq!(u8::luma(0, 0, 255), 29);
    }

    #[test]
    fn hue_ranges() {
        assert_eq!(u8::hue_range(false), Some(180.0));
        assert_eq!(u8::hue_range(true), Some(256.0));
        assert_eq!(f32::hue_range(true), Some(360.0));
        assert_eq!(u16::hue_range(false), None);
    }
}
