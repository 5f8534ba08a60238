use std::{fmt, ops};

use ndarray::{Array2, Array3, ArrayD, IxDyn};

use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use cv3_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// The element types an image can be converted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 8-bit unsigned integer, full intensity is 255.
    U8,
    /// 16-bit unsigned integer, full intensity is 65535.
    U16,
    /// 32-bit float, full intensity is 1.0.
    F32,
}

impl DType {
    /// The conventional array name of the element type.
    pub fn name(&self) -> &'static str {
        match self {
            DType::U8 => "uint8",
            DType::U16 => "uint16",
            DType::F32 => "float32",
        }
    }

    /// Whether the element type is a floating point type.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F32)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for image data types.
///
/// Send and Sync is required to process the rows in parallel.
pub trait ImageDtype:
    Copy + Default + Into<f32> + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    /// The runtime tag of the element type.
    const DTYPE: DType;

    /// The full intensity value, used e.g. as opaque alpha.
    const MAX: Self;

    /// Convert a f32 value to the image data type.
    ///
    /// Integer types round to the nearest value and saturate at their bounds.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for u8 {
    const DTYPE: DType = DType::U8;
    const MAX: Self = u8::MAX;

    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

impl ImageDtype for u16 {
    const DTYPE: DType = DType::U16;
    const MAX: Self = u16::MAX;

    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 65535.0) as u16
    }
}

impl ImageDtype for f32 {
    const DTYPE: DType = DType::F32;
    const MAX: Self = 1.0;

    fn from_f32(x: f32) -> Self {
        x
    }
}

/// Represents an image with pixel data.
///
/// The image is an n-dimensional array with either shape (H, W) for single
/// channel images or (H, W, C) for channeled images, where H is the height,
/// W the width and C the number of channels. The data is always stored in
/// row major contiguous order.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T>(ArrayD<T>);

/// helper to deference the inner array
impl<T> ops::Deref for Image<T> {
    type Target = ArrayD<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Image<T> {
    /// Create a new channeled image from pixel data.
    ///
    /// The resulting image has 3 dimensions (H, W, C), even when `channels` is 1.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of channels per pixel.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv3_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     3,
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// assert_eq!(image.ndim(), 3);
    /// ```
    pub fn new(size: ImageSize, channels: usize, data: Vec<T>) -> Result<Self, ImageError> {
        Self::from_shape_vec(&[size.height, size.width, channels], data)
    }

    /// Create a new single channel image with 2 dimensions (H, W).
    ///
    /// # Examples
    ///
    /// ```
    /// use cv3_image::{Image, ImageSize};
    ///
    /// let gray = Image::from_gray(ImageSize { width: 2, height: 2 }, vec![0u8, 128, 255, 64]).unwrap();
    ///
    /// assert_eq!(gray.ndim(), 2);
    /// assert_eq!(gray.num_channels(), 1);
    /// ```
    pub fn from_gray(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        Self::from_shape_vec(&[size.height, size.width], data)
    }

    /// Create a new image from an explicit shape.
    ///
    /// # Arguments
    ///
    /// * `shape` - Either `[height, width]` or `[height, width, channels]`.
    /// * `data` - The pixel data in row major order.
    ///
    /// # Errors
    ///
    /// Fails when the shape has a dimensionality other than 2 or 3, when the
    /// channel dimension is zero, or when the data length does not match.
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self, ImageError> {
        validate_shape(shape)?;

        let numel = numel(shape)?;
        if data.len() != numel {
            return Err(ImageError::InvalidChannelShape(data.len(), numel));
        }

        Ok(Self(ArrayD::from_shape_vec(IxDyn(shape), data)?))
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// A single channel request produces a 2 dims image.
    ///
    /// # Examples
    ///
    /// ```
    /// use cv3_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     4,
    ///     0u8,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.shape(), &[20, 10, 4]);
    /// ```
    pub fn from_size_val(size: ImageSize, channels: usize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; numel(&[size.height, size.width, channels])?];
        match channels {
            1 => Self::from_gray(size, data),
            _ => Self::new(size, channels, data),
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.0.shape()[1]
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.0.shape()[0]
    }

    /// Get the number of channels in the image.
    ///
    /// A 2 dims image has a single channel.
    pub fn num_channels(&self) -> usize {
        match self.0.shape() {
            [_, _, c] => *c,
            _ => 1,
        }
    }

    /// Get the element type tag of the image.
    pub fn dtype(&self) -> DType
    where
        T: ImageDtype,
    {
        T::DTYPE
    }

    /// Get the pixel data as a contiguous slice in row major order.
    pub fn as_slice(&self) -> Result<&[T], ImageError> {
        self.0.as_slice().ok_or(ImageError::ImageDataNotContiguous)
    }

    /// Get the pixel data as a mutable contiguous slice in row major order.
    pub fn as_slice_mut(&mut self) -> Result<&mut [T], ImageError> {
        self.0
            .as_slice_mut()
            .ok_or(ImageError::ImageDataNotContiguous)
    }

    /// Get a reference to the element at `index`, or `None` when out of bounds.
    ///
    /// The index length must match the image dimensionality.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.0.get(index)
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &ArrayD<T> {
        &self.0
    }

    /// Unwrap into the underlying array.
    pub fn into_array(self) -> ArrayD<T> {
        self.0
    }

    /// Copy the pixel data into a vector in row major order.
    ///
    /// Only the elements of the image are returned, even when the backing
    /// buffer of the array is larger.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().cloned().collect()
    }
}

fn numel(shape: &[usize]) -> Result<usize, ImageError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| ImageError::SizeOverflow(shape.to_vec()))
}

fn validate_shape(shape: &[usize]) -> Result<(), ImageError> {
    match shape {
        [_, _] => Ok(()),
        [_, _, 0] => Err(ImageError::EmptyChannelDim),
        [_, _, _] => Ok(()),
        _ => Err(ImageError::InvalidNdim(shape.len())),
    }
}

fn into_standard_layout<T: Clone>(array: ArrayD<T>) -> ArrayD<T> {
    if array.is_standard_layout() {
        array
    } else {
        array.as_standard_layout().into_owned()
    }
}

impl<T: Clone> TryFrom<ArrayD<T>> for Image<T> {
    type Error = ImageError;

    fn try_from(array: ArrayD<T>) -> Result<Self, Self::Error> {
        validate_shape(array.shape())?;
        Ok(Self(into_standard_layout(array)))
    }
}

impl<T: Clone> TryFrom<Array3<T>> for Image<T> {
    type Error = ImageError;

    fn try_from(array: Array3<T>) -> Result<Self, Self::Error> {
        Self::try_from(array.into_dyn())
    }
}

impl<T: Clone> From<Array2<T>> for Image<T> {
    fn from(array: Array2<T>) -> Self {
        Self(into_standard_layout(array.into_dyn()))
    }
}

impl<T> From<Image<T>> for ArrayD<T> {
    fn from(image: Image<T>) -> Self {
        image.into_array()
    }
}
