use crate::{
    blit::BlitRequest,
    foundation::core::{Point, Rect, Size},
};

/// A blit rectangle known to lie inside the source surface, with a non-negative destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClippedBlit {
    /// Destination x, `>= 0`.
    pub dest_x: i32,
    /// Destination y, `>= 0`.
    pub dest_y: i32,
    /// Source x, `>= 0`.
    pub src_x: i32,
    /// Source y, `>= 0`.
    pub src_y: i32,
    /// Width in pixels, `> 0`.
    pub width: i32,
    /// Height in pixels, `> 0`.
    pub height: i32,
}

impl ClippedBlit {
    /// Destination origin.
    pub fn dest(self) -> Point {
        Point::new(self.dest_x, self.dest_y)
    }

    /// Source rectangle.
    pub fn src_rect(self) -> Rect {
        Rect::new(self.src_x, self.src_y, self.width, self.height)
    }

    /// Trim the rectangle so it ends inside a destination of size `dst`.
    ///
    /// `None` when the destination origin lies at or past the destination's far edge.
    pub fn fit_within(self, dst: Size) -> Option<Self> {
        let room_x = i64::from(dst.width) - i64::from(self.dest_x);
        let room_y = i64::from(dst.height) - i64::from(self.dest_y);
        if room_x <= 0 || room_y <= 0 {
            return None;
        }
        Some(Self {
            width: i64::from(self.width).min(room_x) as i32,
            height: i64::from(self.height).min(room_y) as i32,
            ..self
        })
    }
}

/// Clip a blit request against negative offsets and the source surface bounds.
///
/// Steps run in a fixed order: negative destination offsets shift the source rectangle,
/// negative source offsets shrink it, then it is trimmed to the source extent. The destination
/// extent is not considered here; see [`ClippedBlit::fit_within`].
///
/// Returns `None` when nothing is left to draw.
pub fn clip(src: Size, request: BlitRequest) -> Option<ClippedBlit> {
    let mut dest_x = i64::from(request.dest.x);
    let mut dest_y = i64::from(request.dest.y);
    let mut src_x = i64::from(request.src.x);
    let mut src_y = i64::from(request.src.y);
    let mut width = i64::from(request.src.width);
    let mut height = i64::from(request.src.height);

    // Source pixels that would land before the destination edge are skipped.
    if dest_x < 0 {
        src_x -= dest_x;
        width += dest_x;
        dest_x = 0;
    }
    if dest_y < 0 {
        src_y -= dest_y;
        height += dest_y;
        dest_y = 0;
    }
    if src_x < 0 {
        width += src_x;
        src_x = 0;
    }
    if src_y < 0 {
        height += src_y;
        src_y = 0;
    }
    if width <= 0 || height <= 0 {
        return None;
    }

    if src_x + width > i64::from(src.width) {
        width = i64::from(src.width) - src_x;
    }
    if src_y + height > i64::from(src.height) {
        height = i64::from(src.height) - src_y;
    }
    if width <= 0 || height <= 0 {
        return None;
    }

    Some(ClippedBlit {
        dest_x: i32::try_from(dest_x).ok()?,
        dest_y: i32::try_from(dest_y).ok()?,
        src_x: i32::try_from(src_x).ok()?,
        src_y: i32::try_from(src_y).ok()?,
        width: i32::try_from(width).ok()?,
        height: i32::try_from(height).ok()?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/blit/clip.rs"]
mod tests;
