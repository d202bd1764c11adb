/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Opaque sRGB color (0-255)
    pub const fn srgb(r: u8, g: u8, b: u8) -> Self {
        Self::srgba(r, g, b, 255)
    }

    /// Convert back to sRGB bytes, used when rasterizing text on the CPU.
    pub fn to_srgba8(&self) -> [u8; 4] {
        fn linear_to_srgb(c: f32) -> u8 {
            let c = c.clamp(0.0, 1.0);
            let s = if c <= 0.003_130_8 {
                c * 12.92
            } else {
                1.055 * c.powf(1.0 / 2.4) - 0.055
            };
            (s * 255.0).round().clamp(0.0, 255.0) as u8
        }

        [
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

/// Exact sRGB transfer function, usable in constants.
///
/// `((x + 0.055) / 1.055)^2.4` is evaluated as `t^2 * (t^2)^(1/5)`, the fifth
/// root found by Newton iteration from above.
const fn srgb_to_linear(c: u8) -> f32 {
    let x = c as f64 / 255.0;
    if x <= 0.04045 {
        return (x / 12.92) as f32;
    }

    let t = (x + 0.055) / 1.055;
    let t2 = t * t;

    let mut root = 1.0_f64;
    let mut i = 0;
    while i < 32 {
        let r4 = root * root * root * root;
        root = (4.0 * root + t2 / r4) / 5.0;
        i += 1;
    }

    (t2 * root) as f32
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(css::BLACK, Color::rgb(0.0, 0.0, 0.0));
        let white = css::WHITE;
        assert!((white.r - 1.0).abs() < 1e-3);
        assert_eq!(white.a, 1.0);
    }

    #[test]
    fn test_srgba8_round_trip_is_exact() {
        let color = Color::srgba(100, 150, 200, 128);
        assert_eq!(color.to_srgba8(), [100, 150, 200, 128]);
        assert_eq!(Color::srgb(0, 0, 200).to_srgba8(), [0, 0, 200, 255]);

        for c in 0..=255u8 {
            assert_eq!(Color::srgb(c, c, c).to_srgba8(), [c, c, c, 255], "channel {c}");
        }
    }

    #[test]
    fn test_srgb_to_linear_matches_powf() {
        for c in [11u8, 64, 128, 200, 254] {
            let x = c as f64 / 255.0;
            let expected = ((x + 0.055) / 1.055).powf(2.4) as f32;
            assert!((srgb_to_linear(c) - expected).abs() < 1e-6, "channel {c}");
        }
    }
}
