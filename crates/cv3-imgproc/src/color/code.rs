use std::fmt;

use super::error::ColorConversionError;

/// Color space conversion codes.
///
/// The discriminants follow the OpenCV `cv::ColorConversionCodes` numbering so
/// that raw codes can be exchanged with other tools through [`TryFrom<i32>`].
/// OpenCV gives several names to the same numeric code; those names are
/// provided as associated constants, e.g. [`ColorConversionCode::RGB2BGR`] is
/// the same code as [`ColorConversionCode::BGR2RGB`] since swapping the first
/// and third channel is its own inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ColorConversionCode {
    /// Append an opaque alpha channel to a 3 channel image.
    Bgr2Bgra = 0,
    /// Drop the alpha channel of a 4 channel image.
    Bgra2Bgr = 1,
    /// Swap the first and third channel and append an opaque alpha channel.
    Bgr2Rgba = 2,
    /// Swap the first and third channel and drop the alpha channel.
    Rgba2Bgr = 3,
    /// Swap the first and third channel of a 3 channel image.
    Bgr2Rgb = 4,
    /// Swap the first and third channel of a 4 channel image, keeping alpha.
    Bgra2Rgba = 5,
    /// BGR to grayscale.
    Bgr2Gray = 6,
    /// RGB to grayscale.
    Rgb2Gray = 7,
    /// Grayscale to a 3 channel image.
    Gray2Bgr = 8,
    /// Grayscale to a 4 channel image with opaque alpha.
    Gray2Bgra = 9,
    /// BGRA to grayscale.
    Bgra2Gray = 10,
    /// RGBA to grayscale.
    Rgba2Gray = 11,
    /// BGR to HSV, hue in `[0, 180)` for 8-bit images.
    Bgr2Hsv = 40,
    /// RGB to HSV, hue in `[0, 180)` for 8-bit images.
    Rgb2Hsv = 41,
    /// HSV to BGR, hue in `[0, 180)` for 8-bit images.
    Hsv2Bgr = 54,
    /// HSV to RGB, hue in `[0, 180)` for 8-bit images.
    Hsv2Rgb = 55,
    /// BGR to HSV, hue in `[0, 256)` for 8-bit images.
    Bgr2HsvFull = 66,
    /// RGB to HSV, hue in `[0, 256)` for 8-bit images.
    Rgb2HsvFull = 67,
    /// HSV to BGR, hue in `[0, 256)` for 8-bit images.
    Hsv2BgrFull = 70,
    /// HSV to RGB, hue in `[0, 256)` for 8-bit images.
    Hsv2RgbFull = 71,
}

/// How the pixels of a conversion are computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConversionKind {
    /// `dst[i] = src[order[i]]`, remaining destination channels are opaque alpha.
    Swizzle(&'static [usize]),
    /// Luma of a color pixel.
    Gray { blue_first: bool },
    /// Color pixel to HSV.
    ToHsv { blue_first: bool, full: bool },
    /// HSV pixel to color.
    FromHsv { blue_first: bool, full: bool },
}

#[allow(missing_docs)]
impl ColorConversionCode {
    pub const BGR2BGRA: Self = Self::Bgr2Bgra;
    pub const RGB2RGBA: Self = Self::Bgr2Bgra;
    pub const BGRA2BGR: Self = Self::Bgra2Bgr;
    pub const RGBA2RGB: Self = Self::Bgra2Bgr;
    pub const BGR2RGBA: Self = Self::Bgr2Rgba;
    pub const RGB2BGRA: Self = Self::Bgr2Rgba;
    pub const RGBA2BGR: Self = Self::Rgba2Bgr;
    pub const BGRA2RGB: Self = Self::Rgba2Bgr;
    pub const BGR2RGB: Self = Self::Bgr2Rgb;
    pub const RGB2BGR: Self = Self::Bgr2Rgb;
    pub const BGRA2RGBA: Self = Self::Bgra2Rgba;
    pub const RGBA2BGRA: Self = Self::Bgra2Rgba;
    pub const BGR2GRAY: Self = Self::Bgr2Gray;
    pub const RGB2GRAY: Self = Self::Rgb2Gray;
    pub const GRAY2BGR: Self = Self::Gray2Bgr;
    pub const GRAY2RGB: Self = Self::Gray2Bgr;
    pub const GRAY2BGRA: Self = Self::Gray2Bgra;
    pub const GRAY2RGBA: Self = Self::Gray2Bgra;
    pub const BGRA2GRAY: Self = Self::Bgra2Gray;
    pub const RGBA2GRAY: Self = Self::Rgba2Gray;
    pub const BGR2HSV: Self = Self::Bgr2Hsv;
    pub const RGB2HSV: Self = Self::Rgb2Hsv;
    pub const HSV2BGR: Self = Self::Hsv2Bgr;
    pub const HSV2RGB: Self = Self::Hsv2Rgb;
    pub const BGR2HSV_FULL: Self = Self::Bgr2HsvFull;
    pub const RGB2HSV_FULL: Self = Self::Rgb2HsvFull;
    pub const HSV2BGR_FULL: Self = Self::Hsv2BgrFull;
    pub const HSV2RGB_FULL: Self = Self::Hsv2RgbFull;
}

impl ColorConversionCode {
    /// Every supported code, in numeric order.
    pub const ALL: [Self; 20] = [
        Self::Bgr2Bgra,
        Self::Bgra2Bgr,
        Self::Bgr2Rgba,
        Self::Rgba2Bgr,
        Self::Bgr2Rgb,
        Self::Bgra2Rgba,
        Self::Bgr2Gray,
        Self::Rgb2Gray,
        Self::Gray2Bgr,
        Self::Gray2Bgra,
        Self::Bgra2Gray,
        Self::Rgba2Gray,
        Self::Bgr2Hsv,
        Self::Rgb2Hsv,
        Self::Hsv2Bgr,
        Self::Hsv2Rgb,
        Self::Bgr2HsvFull,
        Self::Rgb2HsvFull,
        Self::Hsv2BgrFull,
        Self::Hsv2RgbFull,
    ];

    /// The numeric OpenCV code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// The canonical OpenCV name of the code.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bgr2Bgra => "COLOR_BGR2BGRA",
            Self::Bgra2Bgr => "COLOR_BGRA2BGR",
            Self::Bgr2Rgba => "COLOR_BGR2RGBA",
            Self::Rgba2Bgr => "COLOR_RGBA2BGR",
            Self::Bgr2Rgb => "COLOR_BGR2RGB",
            Self::Bgra2Rgba => "COLOR_BGRA2RGBA",
            Self::Bgr2Gray => "COLOR_BGR2GRAY",
            Self::Rgb2Gray => "COLOR_RGB2GRAY",
            Self::Gray2Bgr => "COLOR_GRAY2BGR",
            Self::Gray2Bgra => "COLOR_GRAY2BGRA",
            Self::Bgra2Gray => "COLOR_BGRA2GRAY",
            Self::Rgba2Gray => "COLOR_RGBA2GRAY",
            Self::Bgr2Hsv => "COLOR_BGR2HSV",
            Self::Rgb2Hsv => "COLOR_RGB2HSV",
            Self::Hsv2Bgr => "COLOR_HSV2BGR",
            Self::Hsv2Rgb => "COLOR_HSV2RGB",
            Self::Bgr2HsvFull => "COLOR_BGR2HSV_FULL",
            Self::Rgb2HsvFull => "COLOR_RGB2HSV_FULL",
            Self::Hsv2BgrFull => "COLOR_HSV2BGR_FULL",
            Self::Hsv2RgbFull => "COLOR_HSV2RGB_FULL",
        }
    }

    /// The number of channels the source image must have.
    pub fn src_channels(self) -> usize {
        match self {
            Self::Gray2Bgr | Self::Gray2Bgra => 1,
            Self::Bgra2Bgr
            | Self::Rgba2Bgr
            | Self::Bgra2Rgba
            | Self::Bgra2Gray
            | Self::Rgba2Gray => 4,
            _ => 3,
        }
    }

    /// The number of channels of the produced image.
    pub fn dst_channels(self) -> usize {
        match self {
            Self::Bgr2Gray | Self::Rgb2Gray | Self::Bgra2Gray | Self::Rgba2Gray => 1,
            Self::Bgr2Bgra | Self::Bgr2Rgba | Self::Bgra2Rgba | Self::Gray2Bgra => 4,
            _ => 3,
        }
    }

    /// Whether the code expands a single channel image into a color image.
    pub fn is_gray_to_color(self) -> bool {
        matches!(self, Self::Gray2Bgr | Self::Gray2Bgra)
    }

    pub(crate) fn kind(self) -> ConversionKind {
        match self {
            Self::Bgr2Bgra | Self::Bgra2Bgr => ConversionKind::Swizzle(&[0, 1, 2]),
            Self::Bgr2Rgba | Self::Rgba2Bgr | Self::Bgr2Rgb => ConversionKind::Swizzle(&[2, 1, 0]),
            Self::Bgra2Rgba => ConversionKind::Swizzle(&[2, 1, 0, 3]),
            Self::Gray2Bgr | Self::Gray2Bgra => ConversionKind::Swizzle(&[0, 0, 0]),
            Self::Bgr2Gray | Self::Bgra2Gray => ConversionKind::Gray { blue_first: true },
            Self::Rgb2Gray | Self::Rgba2Gray => ConversionKind::Gray { blue_first: false },
            Self::Bgr2Hsv => ConversionKind::ToHsv {
                blue_first: true,
                full: false,
            },
            Self::Rgb2Hsv => ConversionKind::ToHsv {
                blue_first: false,
                full: false,
            },
            Self::Bgr2HsvFull => ConversionKind::ToHsv {
                blue_first: true,
                full: true,
            },
            Self::Rgb2HsvFull => ConversionKind::ToHsv {
                blue_first: false,
                full: true,
            },
            Self::Hsv2Bgr => ConversionKind::FromHsv {
                blue_first: true,
                full: false,
            },
            Self::Hsv2Rgb => ConversionKind::FromHsv {
                blue_first: false,
                full: false,
            },
            Self::Hsv2BgrFull => ConversionKind::FromHsv {
                blue_first: true,
                full: true,
            },
            Self::Hsv2RgbFull => ConversionKind::FromHsv {
                blue_first: false,
                full: true,
            },
        }
    }
}

impl fmt::Display for ColorConversionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for ColorConversionCode {
    type Error = ColorConversionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(ColorConversionError::UnsupportedConversionCode(code))
    }
}

impl From<ColorConversionCode> for i32 {
    fn from(code: ColorConversionCode) -> Self {
        code.code()
    }
}
