pub(crate) mod alpha;
pub(crate) mod clip;
pub(crate) mod copy;

use crate::{
    foundation::{
        core::{PackedColor, Point, Rect, Size},
        error::{BlitError, BlitResult},
    },
    surface::{
        buffer::Surface,
        lock::{SurfaceLock, SurfaceView},
    },
};

/// One blit: where the source lands and which part of the source is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlitRequest {
    /// Destination position of the source rectangle's top-left corner.
    pub dest: Point,
    /// Source rectangle before clipping.
    pub src: Rect,
}

impl BlitRequest {
    /// Create a request.
    pub const fn new(dest: Point, src: Rect) -> Self {
        Self { dest, src }
    }
}

/// Drawing capability shared by surface implementations.
///
/// [`Surface`] is the raw-memory implementation. Pixel operations fail with
/// [`BlitError::IndexedSurface`] on indexed surfaces; draws never fail for geometry reasons.
pub trait Blit {
    /// Surface dimensions.
    fn size(&self) -> Size;

    /// Return `true` when pixels are palette indices.
    fn is_indexed(&self) -> bool;

    /// Read one pixel.
    fn get_pixel(&self, x: i32, y: i32) -> BlitResult<PackedColor>;

    /// Write one pixel.
    fn set_pixel(&mut self, x: i32, y: i32, color: PackedColor) -> BlitResult<()>;

    /// Fill every pixel.
    fn clear(&mut self, color: PackedColor) -> BlitResult<()>;

    /// Zero the alpha of every pixel matching the RGB of `color`.
    fn make_transparent(&mut self, color: PackedColor) -> BlitResult<()>;

    /// Draw `src_rect` of `src` with its top-left corner at `dest`.
    fn draw_image(&mut self, src: &Surface, dest: Point, src_rect: Rect) -> BlitResult<()>;

    /// Draw the whole of `src` with its top-left corner at `dest`.
    fn draw_image_at(&mut self, src: &Surface, dest: Point) -> BlitResult<()> {
        self.draw_image(src, dest, src.size().to_rect())
    }
}

impl Blit for Surface {
    fn size(&self) -> Size {
        Surface::size(self)
    }

    fn is_indexed(&self) -> bool {
        Surface::is_indexed(self)
    }

    fn get_pixel(&self, x: i32, y: i32) -> BlitResult<PackedColor> {
        Surface::get_pixel(self, x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: PackedColor) -> BlitResult<()> {
        Surface::set_pixel(self, x, y, color)
    }

    fn clear(&mut self, color: PackedColor) -> BlitResult<()> {
        Surface::clear(self, color)
    }

    fn make_transparent(&mut self, color: PackedColor) -> BlitResult<()> {
        Surface::make_transparent(self, color)
    }

    fn draw_image(&mut self, src: &Surface, dest: Point, src_rect: Rect) -> BlitResult<()> {
        self.lock().blit(&src.view(), BlitRequest::new(dest, src_rect))
    }
}

/// Byte addressing of one surface buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) stride: usize,
    pub(crate) bytes_per_pixel: usize,
}

impl Layout {
    pub(crate) fn of(surface: &Surface) -> Self {
        Self {
            stride: surface.stride(),
            bytes_per_pixel: surface.format().bytes_per_pixel(),
        }
    }

    pub(crate) fn offset(self, x: usize, y: usize) -> usize {
        x * self.bytes_per_pixel + y * self.stride
    }
}

/// Clip `request` and route it to the copy or compositing path.
pub(crate) fn execute(
    dst: &mut SurfaceLock<'_>,
    src: &SurfaceView<'_>,
    request: BlitRequest,
) -> BlitResult<()> {
    if dst.format() != src.format() {
        return Err(BlitError::format_mismatch(format!(
            "cannot blit a {:?} surface onto a {:?} surface",
            src.format(),
            dst.format()
        )));
    }

    let Some(clipped) = clip::clip(src.size(), request).and_then(|c| c.fit_within(dst.size()))
    else {
        tracing::trace!(?request, "blit clipped to nothing");
        return Ok(());
    };

    let dst_layout = Layout::of(dst);
    let src_layout = Layout::of(src);
    if src.can_have_alpha() {
        tracing::trace!(?clipped, "alpha composite");
        alpha::composite_rect(
            dst.pixels_mut(),
            dst_layout,
            src.pixels(),
            src_layout,
            clipped,
        );
    } else {
        tracing::trace!(?clipped, "opaque copy");
        copy::copy_rect(
            dst.pixels_mut(),
            dst_layout,
            src.pixels(),
            src_layout,
            clipped,
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/blit/execute.rs"]
mod tests;
