use crate::{
    error::ImageError,
    image::{DType, Image, ImageSize},
};

/// An image whose element type is decided at runtime.
///
/// Every variant wraps an [`Image`] of one of the supported element types.
#[derive(Clone, Debug, PartialEq)]
pub enum DynImage {
    /// 8-bit unsigned integer image.
    U8(Image<u8>),
    /// 16-bit unsigned integer image.
    U16(Image<u16>),
    /// 32-bit float image.
    F32(Image<f32>),
}

/// forward a method call to the wrapped image of any variant.
macro_rules! with_image {
    ($self:expr, $img:ident => $body:expr) => {
        match $self {
            DynImage::U8($img) => $body,
            DynImage::U16($img) => $body,
            DynImage::F32($img) => $body,
        }
    };
}

impl DynImage {
    /// Get the element type tag of the image.
    pub fn dtype(&self) -> DType {
        match self {
            DynImage::U8(_) => DType::U8,
            DynImage::U16(_) => DType::U16,
            DynImage::F32(_) => DType::F32,
        }
    }

    /// Get the number of dimensions, either 2 or 3.
    pub fn ndim(&self) -> usize {
        with_image!(self, img => img.ndim())
    }

    /// Get the shape of the image.
    pub fn shape(&self) -> &[usize] {
        with_image!(self, img => img.shape())
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        with_image!(self, img => img.size())
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        with_image!(self, img => img.num_channels())
    }

    /// Borrow the image as an 8-bit image, if it is one.
    pub fn as_u8(&self) -> Option<&Image<u8>> {
        match self {
            DynImage::U8(img) => Some(img),
            _ => None,
        }
    }

    /// Borrow the image as a 16-bit image, if it is one.
    pub fn as_u16(&self) -> Option<&Image<u16>> {
        match self {
            DynImage::U16(img) => Some(img),
            _ => None,
        }
    }

    /// Borrow the image as a float image, if it is one.
    pub fn as_f32(&self) -> Option<&Image<f32>> {
        match self {
            DynImage::F32(img) => Some(img),
            _ => None,
        }
    }
}

macro_rules! impl_dyn_conversions {
    ($variant:ident, $type:ty) => {
        impl From<Image<$type>> for DynImage {
            fn from(image: Image<$type>) -> Self {
                DynImage::$variant(image)
            }
        }

        impl TryFrom<DynImage> for Image<$type> {
            type Error = ImageError;

            fn try_from(image: DynImage) -> Result<Self, Self::Error> {
                match image {
                    DynImage::$variant(img) => Ok(img),
                    other => Err(ImageError::DtypeMismatch {
                        expected: DType::$variant,
                        got: other.dtype(),
                    }),
                }
            }
        }
    };
}

impl_dyn_conversions!(U8, u8);
impl_dyn_conversions!(U16, u16);
impl_dyn_conversions!(F32, f32);

#[cfg(test)]
mod tests {
    use super::DynImage;
    use crate::{DType, Image, ImageError, ImageSize};

    #[test]
    fn dyn_image_accessors() -> Result<(), ImageError> {
        let image = Image::<u16>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            4,
            vec![0u16; 3 * 2 * 4],
        )?;
        let image = DynImage::from(image);

        assert_eq!(image.dtype(), DType::U16);
        assert_eq!(image.ndim(), 3);
        assert_eq!(image.shape(), &[2, 3, 4]);
        assert_eq!(image.num_channels(), 4);
        assert!(image.as_u16().is_some());
        assert!(image.as_u8().is_none());

        Ok(())
    }

    #[test]
    fn dyn_image_dtype_mismatch() -> Result<(), ImageError> {
        let image = DynImage::from(Image::from_gray(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![0.5f32],
        )?);

        let res = Image::<u8>::try_from(image.clone());
        assert!(matches!(
            res,
            Err(ImageError::DtypeMismatch {
                expected: DType::U8,
                got: DType::F32
            })
        ));

        let back = Image::<f32>::try_from(image)?;
        assert_eq!(back.as_slice()?, &[0.5]);

        Ok(())
    }
}
