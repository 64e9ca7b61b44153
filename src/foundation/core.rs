/// Integer pixel position. Coordinates may be negative before clipping.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal position in pixels.
    pub x: i32,
    /// Vertical position in pixels.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered.
    pub fn area(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Return `true` when `(x, y)` lies in `[0, width) x [0, height)`.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Rectangle at the origin covering the whole extent.
    pub fn to_rect(self) -> Rect {
        Rect::new(0, 0, clamp_i32(self.width), clamp_i32(self.height))
    }
}

/// Axis-aligned integer rectangle.
///
/// Width and height are signed: a requested source rectangle may be degenerate and clipping
/// reports it as a no-op instead of rejecting it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return `true` when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// A 32-bit packed color: blue in bits 0-7, green 8-15, red 16-23, alpha 24-31.
///
/// In memory (little-endian) a packed color is exactly one BGRA surface pixel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Mask selecting the red, green and blue bits.
    pub const RGB_MASK: u32 = 0x00FF_FFFF;

    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);

    /// Pack straight (non-premultiplied) channel values.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((b as u32) | ((g as u32) << 8) | ((r as u32) << 16) | ((a as u32) << 24))
    }

    /// Pack an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    /// Unpack from the in-memory BGRA byte order.
    pub const fn from_bgra_bytes(px: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(px))
    }

    /// Bytes in the in-memory BGRA order.
    pub const fn to_bgra_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red, green and blue bits with alpha cleared.
    pub const fn rgb(self) -> u32 {
        self.0 & Self::RGB_MASK
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.rgb() | ((a as u32) << 24))
    }

    /// Return `true` when alpha is 255.
    pub const fn is_opaque(self) -> bool {
        self.a() == 0xFF
    }
}

impl From<u32> for PackedColor {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<PackedColor> for u32 {
    fn from(c: PackedColor) -> Self {
        c.0
    }
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
