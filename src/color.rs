// src/color.rs

//! Defines the packed `Color` type and channel packing/unpacking.
//!
//! Callers hand colors across the buffer boundary as one packed 32-bit ARGB
//! value per primitive, so the type is a transparent wrapper over `u32` and is
//! byte-castable: a foreign color buffer can be viewed as `&[Color]` without
//! copying (see `crate::buffer::cast_colors`).

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A packed 32-bit ARGB color.
///
/// Layout is `(a << 24) | (r << 16) | (g << 8) | b`, matching the packing
/// callers perform on their side of the boundary before filling the color
/// buffer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable,
)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Packs four 8-bit channels into a color.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Packs three 8-bit channels, assuming full opacity (alpha 255).
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Returns the raw packed ARGB value.
    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> u32 {
        color.0
    }
}

// Prints in the `#AARRGGBB` form callers tend to write in sketches.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_assumes_full_opacity() {
        assert_eq!(Color::from_rgb(10, 20, 30), Color::from_argb(255, 10, 20, 30));
    }

    #[test]
    fn channel_accessors_invert_packing() {
        let c = Color::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.packed(), 0x12345678);
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.red(), 0x34);
        assert_eq!(c.green(), 0x56);
        assert_eq!(c.blue(), 0x78);
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::from_rgb(0, 0, 0).to_string(), "#FF000000");
    }
}
