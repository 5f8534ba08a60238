use super::ColorDepth;

/// Convert a color pixel to HSV.
///
/// The input channels are normalized by the full intensity of the depth. The
/// output channels are:
///
/// * H: the hue, scaled from degrees to `[0, hue_range)`.
/// * S: the saturation, scaled to the full intensity of the depth.
/// * V: the value, scaled to the full intensity of the depth.
///
/// For `f32` images the full intensity is 1 and the hue range 360, so the
/// hue is in degrees and saturation and value are in `[0, 1]`.
#[inline]
pub(crate) fn hsv_pixel<T: ColorDepth>(src: &[T], dst: &mut [T], blue_first: bool, hue_range: f32) {
    let max: f32 = T::MAX.into();
    let (r, g, b) = if blue_first {
        (src[2], src[1], src[0])
    } else {
        (src[0], src[1], src[2])
    };
    let unit = |c: T| Into::<f32>::into(c) / max;
    let (r, g, b) = (unit(r), unit(g), unit(b));

    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = v - min;

    let s = if v > 0.0 { delta / v } else { 0.0 };

    let h = if delta == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / delta
    } else if v == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };

    // Ensure h is in the range [0, 360)
    let h = if h < 0.0 { h + 360.0 } else { h };

    dst[0] = encode_hue(h, hue_range);
    dst[1] = T::from_f32(s * max);
    dst[2] = T::from_f32(v * max);
}

/// Convert an HSV pixel back to color.
///
/// The inverse of [`hsv_pixel`] with the same channel conventions.
#[inline]
pub(crate) fn color_from_hsv_pixel<T: ColorDepth>(
    src: &[T],
    dst: &mut [T],
    blue_first: bool,
    hue_range: f32,
) {
    let max: f32 = T::MAX.into();
    let h: f32 = src[0].into();
    let s: f32 = src[1].into();
    let v: f32 = src[2].into();
    let (h, s, v) = (h * 360.0 / hue_range, s / max, v / max);

    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let h = (h / 60.0) % 6.0;
        let h = if h < 0.0 { h + 6.0 } else { h };
        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };

    let (first, last) = if blue_first { (b, r) } else { (r, b) };
    dst[0] = T::from_f32(first * max);
    dst[1] = T::from_f32(g * max);
    dst[2] = T::from_f32(last * max);
}

fn encode_hue<T: ColorDepth>(degrees: f32, hue_range: f32) -> T {
    let h = degrees * hue_range / 360.0;
    let h = if T::DTYPE.is_float() { h } else { h.round() };
    // rounding up to the range bound wraps around to red
    let h = if h >= hue_range { h - hue_range } else { h };
    T::from_f32(h)
}

#[cfg(test)]
mod tests {
    use super::{color_from_hsv_pixel, hsv_pixel};
    use approx::assert_relative_eq;

    fn hsv_u8(rgb: [u8; 3], full: bool) -> [u8; 3] {
        let mut dst = [0u8; 3];
        hsv_pixel(&rgb, &mut dst, false, if full { 256.0 } else { 180.0 });
        dst
    }

    #[test]
    fn hsv_from_rgb_u8_primaries() {
        assert_eq!(hsv_u8([255, 0, 0], false), [0, 255, 255]);
        assert_eq!(hsv_u8([0, 255, 0], false), [60, 255, 255]);
        assert_eq!(hsv_u8([0, 0, 255], false), [120, 255, 255]);
        assert_eq!(hsv_u8([128, 128, 128], false), [0, 0, 128]);
        assert_eq!(hsv_u8([0, 0, 0], false), [0, 0, 0]);
    }

    #[test]
    fn hsv_from_rgb_u8_full_range() {
        // 240 degrees * 256 / 360 = 170.67
        assert_eq!(hsv_u8([0, 0, 255], true), [171, 255, 255]);
        // 359.x degrees rounds onto the bound and wraps to 0
        assert_eq!(hsv_u8([255, 0, 1], true)[0], 0);
    }

    #[test]
    fn hsv_from_bgr_u8() {
        let mut dst = [0u8; 3];
        hsv_pixel(&[255u8, 0, 0], &mut dst, true, 180.0);
        assert_eq!(dst, [120, 255, 255]);
    }

    #[test]
    fn hsv_from_rgb_f32() {
        let mut dst = [0f32; 3];
        hsv_pixel(&[0.0f32, 0.5, 1.0], &mut dst, false, 360.0);
        assert_relative_eq!(dst[0], 210.0, epsilon = 1e-4);
        assert_relative_eq!(dst[1], 1.0, epsilon = 1e-6);
        assert_relative_eq!(dst[2], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rgb_from_hsv_u8() {
        let mut dst = [0u8; 3];
        color_from_hsv_pixel(&[60u8, 255, 255], &mut dst, false, 180.0);
        assert_eq!(dst, [0, 255, 0]);

        color_from_hsv_pixel(&[60u8, 255, 255], &mut dst, true, 180.0);
        assert_eq!(dst, [0, 255, 0]);

        color_from_hsv_pixel(&[0u8, 255, 255], &mut dst, true, 180.0);
        assert_eq!(dst, [0, 0, 255]);

        color_from_hsv_pixel(&[17u8, 0, 99], &mut dst, false, 180.0);
        assert_eq!(dst, [99, 99, 99]);
    }

    #[test]
    fn rgb_from_hsv_f32() {
        let mut dst = [0f32; 3];
        color_from_hsv_pixel(&[210.0f32, 1.0, 1.0], &mut dst, false, 360.0);
        assert_relative_eq!(dst[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(dst[1], 0.5, epsilon = 1e-6);
        assert_relative_eq!(dst[2], 1.0, epsilon = 1e-6);
    }
}
