//! Color representation used by the app catalog

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Packs a `0xRRGGBB` literal, the form catalog colors are written in.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn to_rgb_u8(&self) -> (u8, u8, u8) {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.0), channel(self.1), channel(self.2))
    }

    /// Formats the color as a `#rrggbb` string for the view layer.
    pub fn to_hex_string(&self) -> String {
        let (r, g, b) = self.to_rgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_round_trips_through_string() {
        assert_eq!(Color::from_hex(0x2ecc71).to_hex_string(), "#2ecc71");
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
    }
}
