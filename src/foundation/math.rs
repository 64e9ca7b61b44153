/// `x * w / 255`, truncated.
pub(crate) fn mul_div255_trunc(x: u8, w: u8) -> u16 {
    (u16::from(x) * u16::from(w)) / 255
}

/// Non-premultiplied "over" for one color channel.
///
/// Both weighted terms are truncated independently before summing, so the result is biased low
/// by up to one unit compared to a single division. Output bytes depend on that bias.
pub(crate) fn interpolate_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let v = mul_div255_trunc(src, alpha) + mul_div255_trunc(dst, 255 - alpha);
    // src*a/255 + dst*(255-a)/255 <= 255 for any inputs.
    v as u8
}

/// Round `v` up to the next multiple of four.
pub(crate) fn align4(v: usize) -> Option<usize> {
    v.checked_add(3).map(|v| v & !3)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
