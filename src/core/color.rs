//=========================================================================
// Color
//=========================================================================
//
// 8-bit RGBA color used by the fade overlay and tint effects.
//
//=========================================================================

//=== Color ===============================================================

/// Straight (non-premultiplied) RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0, 0, 0, 255);

    /// Fully transparent black. This is also the `Default` value.
    pub const TRANSPARENT_BLACK: Color = Color::new(0, 0, 0, 0);

    /// Opaque white.
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Inverts the color channels, leaving alpha untouched.
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    /// Linear interpolation toward `target`. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, target: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let value = from as f32 + (to as f32 - from as f32) * t;
            value.round().clamp(0.0, 255.0) as u8
        };

        Self::new(
            mix(self.r, target.r),
            mix(self.g, target.g),
            mix(self.b, target.b),
            mix(self.a, target.a),
        )
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_transparent_black() {
        assert_eq!(Color::default(), Color::TRANSPARENT_BLACK);
    }

    #[test]
    fn inverting_black_gives_white() {
        assert_eq!(Color::BLACK.inverted(), Color::WHITE);
        assert_eq!(
            Color::TRANSPARENT_BLACK.inverted(),
            Color::new(255, 255, 255, 0)
        );
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let from = Color::BLACK;
        let to = Color::new(200, 100, 0, 55);

        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        assert_eq!(from.lerp(to, 0.5), Color::new(100, 50, 0, 155));
    }

    #[test]
    fn lerp_clamps_factor() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 4.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, -1.0), Color::BLACK);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::rgb(10, 20, 30).with_alpha(40);
        assert_eq!(c, Color::new(10, 20, 30, 40));
    }
}
