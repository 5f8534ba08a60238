use cv3_image::ImageDtype;

/// Copy the source channels into the destination in the given order.
///
/// Destination channels past the end of `order` are set to full intensity,
/// which is how an opaque alpha channel is appended. Replicating a gray value
/// is the order `[0, 0, 0]`.
///
/// Precondition: every index in `order` is a valid source channel.
#[inline]
pub(crate) fn swizzle_pixel<T: ImageDtype>(order: &[usize], src: &[T], dst: &mut [T]) {
    dst.iter_mut().enumerate().for_each(|(i, d)| {
        *d = match order.get(i) {
            Some(&s) => src[s],
            None => T::MAX,
        };
    });
}

#[cfg(test)]
mod tests {
    use super::swizzle_pixel;

    #[test]
    fn swap_red_blue() {
        let mut dst = [0u8; 3];
        swizzle_pixel(&[2, 1, 0], &[255, 128, 64], &mut dst);
        assert_eq!(dst, [64, 128, 255]);
    }

    #[test]
    fn swap_keeps_alpha() {
        let mut dst = [0u8; 4];
        swizzle_pixel(&[2, 1, 0, 3], &[1, 2, 3, 4], &mut dst);
        assert_eq!(dst, [3, 2, 1, 4]);
    }

    #[test]
    fn append_alpha() {
        let mut dst = [0u16; 4];
        swizzle_pixel(&[0, 1, 2], &[10, 20, 30], &mut dst);
        assert_eq!(dst, [10, 20, 30, u16::MAX]);

        let mut dst = [0f32; 4];
        swizzle_pixel(&[0, 0, 0], &[0.25], &mut dst);
        assert_eq!(dst, [0.25, 0.25, 0.25, 1.0]);
    }

    #[test]
    fn drop_alpha() {
        let mut dst = [0u8; 3];
        swizzle_pixel(&[2, 1, 0], &[1, 2, 3, 4], &mut dst);
        assert_eq!(dst, [3, 2, 1]);
    }
}
