use std::ops::Deref;

use crate::{
    blit::{self, BlitRequest},
    foundation::{
        core::PackedColor,
        error::{BlitError, BlitResult},
    },
    surface::buffer::{Surface, fill_rows},
};

/// Read access to a surface's pixel buffer.
///
/// Any number of views may coexist; none may coexist with a [`SurfaceLock`] on the same surface.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceView<'a> {
    surface: &'a Surface,
}

impl<'a> SurfaceView<'a> {
    pub(crate) fn new(surface: &'a Surface) -> Self {
        Self { surface }
    }

    /// The whole buffer, padding included.
    pub fn pixels(&self) -> &'a [u8] {
        &self.surface.pixels
    }

    /// Logical bytes of row `y`, padding excluded. `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        if y >= self.surface.size.height {
            return None;
        }
        let start = y as usize * self.surface.stride;
        Some(&self.surface.pixels[start..start + self.surface.row_bytes()])
    }

    /// Read one pixel as a packed color.
    pub fn get_pixel(&self, x: i32, y: i32) -> BlitResult<PackedColor> {
        let at = self.surface.pixel_offset(x, y)?;
        let px = &self.surface.pixels[at..at + 4];
        Ok(PackedColor::from_bgra_bytes([px[0], px[1], px[2], px[3]]))
    }
}

impl Deref for SurfaceView<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        self.surface
    }
}

/// Exclusive read/write access to a surface's pixel buffer.
///
/// Dropping the guard releases the lock and bumps the surface generation. Blits issued through
/// a guard reuse it and leave it held.
#[derive(Debug)]
pub struct SurfaceLock<'a> {
    surface: &'a mut Surface,
}

impl<'a> SurfaceLock<'a> {
    pub(crate) fn new(surface: &'a mut Surface) -> Self {
        Self { surface }
    }

    /// Reborrow as a read view.
    pub fn view(&self) -> SurfaceView<'_> {
        SurfaceView::new(&*self.surface)
    }

    /// The whole buffer, padding included.
    pub fn pixels(&self) -> &[u8] {
        &self.surface.pixels
    }

    /// The whole buffer, padding included.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.surface.pixels
    }

    /// Logical bytes of row `y`, padding excluded. `None` past the last row.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.surface.size.height {
            return None;
        }
        let start = y as usize * self.surface.stride;
        let len = self.surface.row_bytes();
        Some(&mut self.surface.pixels[start..start + len])
    }

    /// Read one pixel as a packed color.
    pub fn get_pixel(&self, x: i32, y: i32) -> BlitResult<PackedColor> {
        self.view().get_pixel(x, y)
    }

    /// Write one pixel. A non-opaque alpha marks the surface alpha-capable.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: PackedColor) -> BlitResult<()> {
        let at = self.surface.pixel_offset(x, y)?;
        self.surface.pixels[at..at + 4].copy_from_slice(&color.to_bgra_bytes());
        self.surface.can_have_alpha |= !color.is_opaque();
        Ok(())
    }

    /// Fill every pixel with `color`. Padding bytes are left alone.
    pub fn clear(&mut self, color: PackedColor) -> BlitResult<()> {
        if self.surface.is_indexed() {
            return Err(BlitError::IndexedSurface);
        }
        let Surface {
            size,
            stride,
            pixels,
            ..
        } = &mut *self.surface;
        fill_rows(pixels, size.width, size.height, *stride, color);
        self.surface.can_have_alpha |= !color.is_opaque();
        Ok(())
    }

    /// Zero the alpha of every pixel whose RGB equals the RGB of `color`.
    ///
    /// The alpha of `color` is ignored. The surface is marked alpha-capable afterwards.
    pub fn make_transparent(&mut self, color: PackedColor) -> BlitResult<()> {
        if self.surface.is_indexed() {
            return Err(BlitError::IndexedSurface);
        }
        let key = color.rgb();
        let row_bytes = self.surface.row_bytes();
        let height = self.surface.size.height as usize;
        let stride = self.surface.stride;
        let mut matched = 0usize;
        for row in self.surface.pixels.chunks_mut(stride).take(height) {
            for px in row[..row_bytes].chunks_exact_mut(4) {
                let rgb = PackedColor::from_bgra_bytes([px[0], px[1], px[2], 0]).rgb();
                if rgb == key {
                    px[3] = 0;
                    matched += 1;
                }
            }
        }
        self.surface.can_have_alpha = true;
        tracing::trace!(?color, matched, "made color transparent");
        Ok(())
    }

    /// Copy or composite `src` onto the locked surface.
    pub fn blit(&mut self, src: &SurfaceView<'_>, request: BlitRequest) -> BlitResult<()> {
        blit::execute(self, src, request)
    }
}

impl Deref for SurfaceLock<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &*self.surface
    }
}

impl Drop for SurfaceLock<'_> {
    fn drop(&mut self) {
        self.surface.generation = self.surface.generation.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/lock.rs"]
mod tests;
