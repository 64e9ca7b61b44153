use crate::{
    blit::{Layout, clip::ClippedBlit},
    foundation::{
        error::{BlitError, BlitResult},
        math::interpolate_channel,
    },
};

/// One pixel in memory order: blue, green, red, alpha.
pub type Bgra8 = [u8; 4];

/// Non-premultiplied "over" of `src` onto `dst`.
///
/// Transparent sources leave `dst` untouched and opaque sources replace it. Otherwise each
/// color channel is `src*a/255 + dst*(255-a)/255` with both terms truncated, and the
/// destination alpha only ever grows to `a`.
pub fn over(dst: Bgra8, src: Bgra8) -> Bgra8 {
    let a = src[3];
    match a {
        0 => dst,
        0xFF => src,
        _ => [
            interpolate_channel(src[0], dst[0], a),
            interpolate_channel(src[1], dst[1], a),
            interpolate_channel(src[2], dst[2], a),
            dst[3].max(a),
        ],
    }
}

/// Apply [`over`] pixel by pixel across two equal-length BGRA rows.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> BlitResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BlitError::validation(
            "over_in_place expects equal-length bgra8 buffers",
        ));
    }
    composite_row(dst, src);
    Ok(())
}

fn composite_row(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = s[3];
        if a == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], a]);
        d.copy_from_slice(&out);
    }
}

/// Composite a clipped rectangle, row-major, from a BGRA source onto a BGRA destination.
pub(crate) fn composite_rect(
    dst: &mut [u8],
    dst_layout: Layout,
    src: &[u8],
    src_layout: Layout,
    clipped: ClippedBlit,
) {
    let row_len = clipped.width as usize * 4;
    let mut d = dst_layout.offset(clipped.dest_x as usize, clipped.dest_y as usize);
    let mut s = src_layout.offset(clipped.src_x as usize, clipped.src_y as usize);
    for _ in 0..clipped.height {
        composite_row(&mut dst[d..d + row_len], &src[s..s + row_len]);
        d += dst_layout.stride;
        s += src_layout.stride;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blit/alpha.rs"]
mod tests;
