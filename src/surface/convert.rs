use image::{DynamicImage, GrayImage, RgbaImage};

use crate::{
    foundation::error::{BlitError, BlitResult},
    surface::{
        buffer::Surface,
        format::{PixelFormat, SurfaceFormat},
    },
};

impl Surface {
    /// Build a surface from a decoded image.
    ///
    /// 8-bit gray and RGB images become opaque surfaces; images with an alpha channel are
    /// flagged alpha-capable only if some pixel is actually non-opaque. Other color types fail
    /// with [`BlitError::UnsupportedFormat`].
    pub fn from_image(img: &DynamicImage) -> BlitResult<Self> {
        let format = PixelFormat::from_color_type(img.color())?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut bgra = rgba.into_raw();
        for px in bgra.chunks_exact_mut(4) {
            px.swap(0, 2);
        }
        Surface::from_raw(width, height, width as usize * 4, format, bgra)
    }

    /// Copy the pixels out as an image.
    ///
    /// Bgra32 surfaces produce straight-alpha RGBA8; indexed surfaces produce an 8-bit gray
    /// image holding the raw palette indices.
    pub fn to_image(&self) -> DynamicImage {
        let pixels = self.view().pixels();
        let stride = self.stride();
        let (width, height) = (self.width(), self.height());
        match self.format() {
            SurfaceFormat::Bgra32 => {
                DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
                    let at = y as usize * stride + x as usize * 4;
                    let px = &pixels[at..at + 4];
                    image::Rgba([px[2], px[1], px[0], px[3]])
                }))
            }
            SurfaceFormat::Indexed8 => {
                DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
                    image::Luma([pixels[y as usize * stride + x as usize]])
                }))
            }
        }
    }

    /// Consume the surface and return its pixels as an image.
    pub fn into_image(self) -> DynamicImage {
        self.to_image()
    }

    /// Write the surface to an image file; the format follows the path extension.
    pub fn save(&self, path: &std::path::Path) -> BlitResult<()> {
        use anyhow::Context as _;

        self.to_image()
            .save(path)
            .with_context(|| format!("write image '{}'", path.display()))
            .map_err(BlitError::from)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/convert.rs"]
mod tests;
