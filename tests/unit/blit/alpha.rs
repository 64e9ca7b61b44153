use super::*;

const fn bgra(r: u8, g: u8, b: u8, a: u8) -> Bgra8 {
    [b, g, r, a]
}

#[test]
fn half_red_over_opaque_green_is_exact() {
    let out = over(bgra(0, 255, 0, 255), bgra(255, 0, 0, 128));
    assert_eq!(out, bgra(128, 127, 0, 255));
}

#[test]
fn src_alpha_0_is_noop() {
    let dst = bgra(10, 20, 30, 40);
    assert_eq!(over(dst, bgra(255, 255, 255, 0)), dst);
}

#[test]
fn src_opaque_replaces_dst() {
    let src = bgra(1, 2, 3, 255);
    for dst in [bgra(0, 0, 0, 0), bgra(200, 100, 50, 255), bgra(9, 9, 9, 17)] {
        assert_eq!(over(dst, src), src);
    }
}

#[test]
fn dst_alpha_only_grows() {
    let out = over(bgra(0, 0, 0, 200), bgra(255, 255, 255, 100));
    assert_eq!(out[3], 200);
    let out = over(bgra(0, 0, 0, 50), bgra(255, 255, 255, 100));
    assert_eq!(out[3], 100);
}

#[test]
fn blend_is_biased_low_by_double_truncation() {
    // White over white at a = 1: 255*1/255 + 255*254/255 = 1 + 254.
    assert_eq!(over(bgra(255, 255, 255, 255), bgra(255, 255, 255, 1))[0], 255);
    // 100 at a = 77 over 200: 30 + 139 = 169, a single rounded division would give 170.
    assert_eq!(over(bgra(200, 0, 0, 0), bgra(100, 0, 0, 77))[2], 169);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    let mut odd = vec![0u8; 6];
    assert!(over_in_place(&mut odd, &[0u8; 6]).is_err());
}

#[test]
fn over_in_place_blends_each_pixel() {
    let mut dst = [bgra(0, 255, 0, 255), bgra(1, 2, 3, 4)].concat();
    let src = [bgra(255, 0, 0, 128), bgra(9, 9, 9, 0)].concat();
    over_in_place(&mut dst, &src).unwrap();
    assert_eq!(&dst[..4], &bgra(128, 127, 0, 255));
    assert_eq!(&dst[4..], &bgra(1, 2, 3, 4));
}

#[test]
fn composite_rect_respects_strides_and_offsets() {
    let src_layout = Layout {
        stride: 12,
        bytes_per_pixel: 4,
    };
    let dst_layout = Layout {
        stride: 20,
        bytes_per_pixel: 4,
    };
    let src_px = bgra(255, 0, 0, 128);
    let src: Vec<u8> = src_px.repeat(3 * 2);
    let mut dst: Vec<u8> = bgra(0, 255, 0, 255).repeat(5 * 3);

    composite_rect(
        &mut dst,
        dst_layout,
        &src,
        src_layout,
        ClippedBlit {
            dest_x: 3,
            dest_y: 1,
            src_x: 1,
            src_y: 0,
            width: 2,
            height: 2,
        },
    );

    for y in 0..3usize {
        for x in 0..5usize {
            let at = y * 20 + x * 4;
            let px = &dst[at..at + 4];
            if (1..3).contains(&y) && (3..5).contains(&x) {
                assert_eq!(px, &bgra(128, 127, 0, 255), "({x}, {y})");
            } else {
                assert_eq!(px, &bgra(0, 255, 0, 255), "({x}, {y})");
            }
        }
    }
}
