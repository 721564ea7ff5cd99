use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;

/// Display color, rendered as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform random color; each channel in 0..=255.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.gen(), rng.gen(), rng.gen())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Group palette; component `k` gets `DEFAULT_PALETTE[k % 15]`.
pub const DEFAULT_PALETTE: [Color; 15] = [
    Color::rgb(0xFF, 0x00, 0x00),
    Color::rgb(0x00, 0xFF, 0x00),
    Color::rgb(0x00, 0x00, 0xFF),
    Color::rgb(0xFF, 0xFF, 0x00),
    Color::rgb(0xFF, 0x00, 0xFF),
    Color::rgb(0x00, 0xFF, 0xFF),
    Color::rgb(0xFF, 0xA5, 0x00),
    Color::rgb(0x80, 0x00, 0x80),
    Color::rgb(0x00, 0x80, 0x00),
    Color::rgb(0x00, 0x00, 0x80),
    Color::rgb(0xFF, 0xC0, 0xCB),
    Color::rgb(0xE6, 0xE6, 0xFA),
    Color::rgb(0xFF, 0xFA, 0xCD),
    Color::rgb(0x90, 0xEE, 0x90),
    Color::rgb(0xAD, 0xD8, 0xE6),
];
