use crate::{
    blit::BlitRequest,
    foundation::{
        core::{PackedColor, Point, Rect, Size},
        error::{BlitError, BlitResult},
        math::align4,
    },
    surface::{
        format::{PixelFormat, SurfaceFormat},
        lock::{SurfaceLock, SurfaceView},
    },
};

/// An owned rectangular pixel buffer with a known stride and normalized format.
///
/// Pixels are addressed as `x * bytes_per_pixel + y * stride`. Rows may carry padding past
/// `width * bytes_per_pixel`; padding bytes are never read or written by pixel operations.
///
/// Raw access goes through the scoped guards returned by [`Surface::lock`] and
/// [`Surface::view`]. The convenience methods on `Surface` take a guard for the duration of
/// a single call.
#[derive(Clone, Debug)]
pub struct Surface {
    pub(crate) size: Size,
    pub(crate) stride: usize,
    pub(crate) format: SurfaceFormat,
    pub(crate) source_format: PixelFormat,
    pub(crate) can_have_alpha: bool,
    pub(crate) generation: u64,
    pub(crate) pixels: Vec<u8>,
}

impl Surface {
    /// Allocate a surface with the default 4-byte aligned stride.
    ///
    /// Opaque formats start as opaque black; alpha-capable formats start fully transparent.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> BlitResult<Self> {
        let classified = format.classify()?;
        let row_len = row_len(width, classified.format)?;
        let stride = align4(row_len)
            .ok_or_else(|| BlitError::validation("surface stride overflows usize"))?;
        Self::with_stride(width, height, format, stride)
    }

    /// Allocate a surface with an explicit stride in bytes.
    pub fn with_stride(
        width: u32,
        height: u32,
        format: PixelFormat,
        stride: usize,
    ) -> BlitResult<Self> {
        let classified = format.classify()?;
        let len = checked_len(width, height, classified.format, stride)?;
        let mut pixels = vec![0u8; len];
        if classified.format == SurfaceFormat::Bgra32 && !classified.alpha_capable {
            fill_rows(&mut pixels, width, height, stride, PackedColor::BLACK);
        }

        tracing::debug!(width, height, stride, ?format, "surface allocated");
        Ok(Self {
            size: Size::new(width, height),
            stride,
            format: classified.format,
            source_format: format,
            can_have_alpha: classified.alpha_capable,
            generation: 0,
            pixels,
        })
    }

    /// Adopt an existing buffer already laid out in the normalized format of `format`.
    ///
    /// For Bgra32 layouts of opaque source formats the alpha bytes are forced to 255. For
    /// alpha-capable formats the alpha flag is set only if a non-opaque pixel is present.
    pub fn from_raw(
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
        mut pixels: Vec<u8>,
    ) -> BlitResult<Self> {
        let classified = format.classify()?;
        let len = checked_len(width, height, classified.format, stride)?;
        if pixels.len() < len {
            return Err(BlitError::validation(format!(
                "pixel buffer holds {} bytes, {width}x{height} with stride {stride} needs {len}",
                pixels.len()
            )));
        }

        let mut can_have_alpha = false;
        if classified.format == SurfaceFormat::Bgra32 {
            let row_bytes = width as usize * 4;
            for row in pixels.chunks_mut(stride).take(height as usize) {
                for px in row[..row_bytes].chunks_exact_mut(4) {
                    if !classified.alpha_capable {
                        px[3] = 0xFF;
                    } else if px[3] != 0xFF {
                        can_have_alpha = true;
                    }
                }
            }
        }

        tracing::debug!(width, height, stride, ?format, can_have_alpha, "surface adopted");
        Ok(Self {
            size: Size::new(width, height),
            stride,
            format: classified.format,
            source_format: format,
            can_have_alpha,
            generation: 0,
            pixels,
        })
    }

    /// Surface dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Normalized in-memory layout.
    pub fn format(&self) -> SurfaceFormat {
        self.format
    }

    /// Format the surface was created from.
    pub fn source_format(&self) -> PixelFormat {
        self.source_format
    }

    /// Bits per pixel of the normalized layout (8 or 32).
    pub fn bits_per_pixel(&self) -> u32 {
        self.format.bits_per_pixel()
    }

    /// Return `true` when pixels are palette indices.
    pub fn is_indexed(&self) -> bool {
        self.format.is_indexed()
    }

    /// Return `true` once any non-opaque alpha has been written or detected.
    ///
    /// Blits from such a surface go through alpha compositing instead of the copy path.
    pub fn can_have_alpha(&self) -> bool {
        self.can_have_alpha
    }

    /// Number of write locks released so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Acquire read/write access to the pixel buffer until the guard drops.
    pub fn lock(&mut self) -> SurfaceLock<'_> {
        SurfaceLock::new(self)
    }

    /// Acquire read access to the pixel buffer until the guard drops.
    pub fn view(&self) -> SurfaceView<'_> {
        SurfaceView::new(self)
    }

    /// Read one pixel as a packed color.
    pub fn get_pixel(&self, x: i32, y: i32) -> BlitResult<PackedColor> {
        self.view().get_pixel(x, y)
    }

    /// Write one pixel.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: PackedColor) -> BlitResult<()> {
        self.lock().set_pixel(x, y, color)
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: PackedColor) -> BlitResult<()> {
        self.lock().clear(color)
    }

    /// Zero the alpha of every pixel whose RGB equals the RGB of `color`.
    pub fn make_transparent(&mut self, color: PackedColor) -> BlitResult<()> {
        self.lock().make_transparent(color)
    }

    /// Copy or composite `src` onto this surface.
    ///
    /// The request is clipped silently; only a format mismatch between the two surfaces is
    /// reported. Both surfaces are locked for the duration of the call.
    #[allow(clippy::too_many_arguments)]
    pub fn blit(
        &mut self,
        src: &Surface,
        dest_x: i32,
        dest_y: i32,
        src_x: i32,
        src_y: i32,
        src_width: i32,
        src_height: i32,
    ) -> BlitResult<()> {
        let request = BlitRequest::new(
            Point::new(dest_x, dest_y),
            Rect::new(src_x, src_y, src_width, src_height),
        );
        self.lock().blit(&src.view(), request)
    }

    /// Blit the whole of `src` with its top-left corner at `(dest_x, dest_y)`.
    pub fn blit_surface(&mut self, src: &Surface, dest_x: i32, dest_y: i32) -> BlitResult<()> {
        let request = BlitRequest::new(Point::new(dest_x, dest_y), src.size().to_rect());
        self.lock().blit(&src.view(), request)
    }

    pub(crate) fn pixel_offset(&self, x: i32, y: i32) -> BlitResult<usize> {
        if self.is_indexed() {
            return Err(BlitError::IndexedSurface);
        }
        if !self.size.contains(x, y) {
            return Err(BlitError::OutOfBounds {
                x,
                y,
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(x as usize * self.format.bytes_per_pixel() + y as usize * self.stride)
    }

    pub(crate) fn row_bytes(&self) -> usize {
        self.size.width as usize * self.format.bytes_per_pixel()
    }
}

fn row_len(width: u32, format: SurfaceFormat) -> BlitResult<usize> {
    (width as usize)
        .checked_mul(format.bytes_per_pixel())
        .ok_or_else(|| BlitError::validation("surface row length overflows usize"))
}

fn checked_len(
    width: u32,
    height: u32,
    format: SurfaceFormat,
    stride: usize,
) -> BlitResult<usize> {
    if width == 0 || height == 0 {
        return Err(BlitError::validation(format!(
            "surface dimensions must be non-zero, got {width}x{height}"
        )));
    }
    let row = row_len(width, format)?;
    if stride < row {
        return Err(BlitError::validation(format!(
            "stride {stride} is shorter than the {row}-byte row"
        )));
    }
    stride
        .checked_mul(height as usize)
        .ok_or_else(|| BlitError::validation("surface byte length overflows usize"))
}

pub(crate) fn fill_rows(pixels: &mut [u8], width: u32, height: u32, stride: usize, c: PackedColor) {
    let bytes = c.to_bgra_bytes();
    let row_bytes = width as usize * 4;
    for row in pixels.chunks_mut(stride).take(height as usize) {
        for px in row[..row_bytes].chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/buffer.rs"]
mod tests;
