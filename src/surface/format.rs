use crate::foundation::error::{BlitError, BlitResult};

/// Pixel formats a surface can be created from.
///
/// Only the classification matters here: every recognized format collapses to one of the two
/// [`SurfaceFormat`] layouts when a surface is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// 1 bit per pixel, palette indices.
    Indexed1,
    /// 4 bits per pixel, palette indices.
    Indexed4,
    /// 8 bits per pixel, palette indices.
    Indexed8,
    /// 16-bit grayscale.
    Gray16,
    /// 16-bit 5-5-5 RGB.
    Rgb555,
    /// 16-bit 5-6-5 RGB.
    Rgb565,
    /// 16-bit 1-5-5-5 ARGB.
    Argb1555,
    /// 24-bit RGB.
    Rgb24,
    /// 32-bit RGB with an unused fourth byte.
    Rgb32,
    /// 32-bit straight-alpha ARGB.
    Argb32,
    /// 32-bit premultiplied ARGB.
    Pargb32,
    /// 48-bit RGB.
    Rgb48,
    /// 64-bit straight-alpha ARGB.
    Argb64,
    /// 64-bit premultiplied ARGB.
    Pargb64,
    /// 32-bit CMYK.
    Cmyk32,
}

/// The normalized in-memory layout of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceFormat {
    /// One byte per pixel holding a palette index.
    Indexed8,
    /// Four bytes per pixel in blue, green, red, alpha order.
    Bgra32,
}

impl SurfaceFormat {
    /// Bits per pixel.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            SurfaceFormat::Indexed8 => 8,
            SurfaceFormat::Bgra32 => 32,
        }
    }

    /// Bytes per pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() / 8) as usize
    }

    /// Return `true` for palette-index layouts.
    pub const fn is_indexed(self) -> bool {
        self.bits_per_pixel() <= 8
    }
}

/// Result of classifying a [`PixelFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classified {
    /// Layout the surface will use.
    pub format: SurfaceFormat,
    /// Whether the source format carries per-pixel alpha.
    pub alpha_capable: bool,
}

impl PixelFormat {
    /// Map a source format to its normalized layout.
    pub fn classify(self) -> BlitResult<Classified> {
        let (format, alpha_capable) = match self {
            PixelFormat::Indexed1 | PixelFormat::Indexed4 | PixelFormat::Indexed8 => {
                (SurfaceFormat::Indexed8, false)
            }
            PixelFormat::Gray16
            | PixelFormat::Rgb555
            | PixelFormat::Rgb565
            | PixelFormat::Rgb24
            | PixelFormat::Rgb32 => (SurfaceFormat::Bgra32, false),
            PixelFormat::Argb1555 | PixelFormat::Argb32 => (SurfaceFormat::Bgra32, true),
            PixelFormat::Pargb32
            | PixelFormat::Rgb48
            | PixelFormat::Argb64
            | PixelFormat::Pargb64
            | PixelFormat::Cmyk32 => {
                return Err(BlitError::unsupported_format(format!("{self:?}")));
            }
        };
        Ok(Classified {
            format,
            alpha_capable,
        })
    }

    /// Format matching an `image` crate color type.
    pub fn from_color_type(color: image::ColorType) -> BlitResult<Self> {
        match color {
            image::ColorType::L8 | image::ColorType::Rgb8 => Ok(PixelFormat::Rgb24),
            image::ColorType::La8 | image::ColorType::Rgba8 => Ok(PixelFormat::Argb32),
            other => Err(BlitError::unsupported_format(format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/format.rs"]
mod tests;
