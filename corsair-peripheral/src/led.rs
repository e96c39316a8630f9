//! RGB color type shared by controllers and lighting adapters

use serde::{Deserialize, Serialize};

/// RGB color value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a slice of colors into per-channel planes of length `len`
    ///
    /// Missing entries are padded with black, extra entries are ignored.
    pub fn planes(colors: &[RgbColor], len: usize) -> [Vec<u8>; 3] {
        let mut red = vec![0u8; len];
        let mut green = vec![0u8; len];
        let mut blue = vec![0u8; len];
        for (i, c) in colors.iter().take(len).enumerate() {
            red[i] = c.r;
            green[i] = c.g;
            blue[i] = c.b;
        }
        [red, green, blue]
    }

    /// Black (all LEDs off)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// White (all LEDs full)
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planes_pad_and_truncate() {
        let colors = [RgbColor::RED, RgbColor::new(1, 2, 3)];
        let [r, g, b] = RgbColor::planes(&colors, 3);
        assert_eq!(r, vec![255, 1, 0]);
        assert_eq!(g, vec![0, 2, 0]);
        assert_eq!(b, vec![0, 3, 0]);

        let [r, _, _] = RgbColor::planes(&colors, 1);
        assert_eq!(r, vec![255]);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(RgbColor::new(0x1B, 0x1C, 0xFF).to_string(), "#1B1CFF");
    }
}
