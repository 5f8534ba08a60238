use super::ColorDepth;

/// Convert a color pixel to its luma.
///
/// # Arguments
///
/// * `src` - The source pixel with at least 3 channels, alpha is ignored.
/// * `dst` - The single channel destination pixel.
/// * `blue_first` - Whether the source pixel is stored as B, G, R.
#[inline]
pub(crate) fn gray_pixel<T: ColorDepth>(src: &[T], dst: &mut [T], blue_first: bool) {
    let (r, g, b) = if blue_first {
        (src[2], src[1], src[0])
    } else {
        (src[0], src[1], src[2])
    };
    dst[0] = T::luma(r, g, b);
}
