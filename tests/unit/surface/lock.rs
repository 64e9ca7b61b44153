use super::*;
use crate::surface::format::PixelFormat;

#[test]
fn write_guard_bumps_generation_on_release() {
    let mut s = Surface::new(2, 2, PixelFormat::Rgb24).unwrap();
    assert_eq!(s.generation(), 0);

    {
        let mut guard = s.lock();
        guard.set_pixel(0, 0, PackedColor::from_rgb(1, 2, 3)).unwrap();
        guard.set_pixel(1, 1, PackedColor::from_rgb(4, 5, 6)).unwrap();
    }
    assert_eq!(s.generation(), 1);

    s.set_pixel(1, 0, PackedColor::BLACK).unwrap();
    assert_eq!(s.generation(), 2);

    let _ = s.get_pixel(0, 0).unwrap();
    let _ = s.view();
    assert_eq!(s.generation(), 2);
}

#[test]
fn failed_operation_still_releases_the_guard() {
    let mut s = Surface::new(2, 2, PixelFormat::Rgb24).unwrap();
    assert!(s.set_pixel(5, 5, PackedColor::BLACK).is_err());
    assert_eq!(s.generation(), 1);
    s.set_pixel(0, 0, PackedColor::BLACK).unwrap();
}

#[test]
fn rows_exclude_padding() {
    let mut s = Surface::with_stride(2, 3, PixelFormat::Rgb24, 12).unwrap();
    {
        let mut guard = s.lock();
        assert_eq!(guard.pixels().len(), 36);
        guard.row_mut(2).unwrap().fill(0xAB);
        assert!(guard.row_mut(3).is_none());
        assert_eq!(guard.pixels_mut()[32..36], [0, 0, 0, 0]);
    }

    let view = s.view();
    assert_eq!(view.row(2).unwrap().len(), 8);
    assert!(view.row(2).unwrap().iter().all(|&b| b == 0xAB));
    assert!(view.row(3).is_none());
    assert_eq!(view.width(), 2);
    assert_eq!(view.stride(), 12);
}

#[test]
fn views_coexist() {
    let s = Surface::new(3, 3, PixelFormat::Rgb24).unwrap();
    let a = s.view();
    let b = s.view();
    assert_eq!(a.get_pixel(2, 2).unwrap(), b.get_pixel(2, 2).unwrap());
}

#[test]
fn guard_reads_see_guard_writes() {
    let mut s = Surface::new(3, 3, PixelFormat::Argb32).unwrap();
    let mut guard = s.lock();
    guard.clear(PackedColor::from_rgb(1, 1, 1)).unwrap();
    guard.make_transparent(PackedColor::from_rgb(1, 1, 1)).unwrap();
    assert_eq!(
        guard.get_pixel(1, 1).unwrap(),
        PackedColor::from_rgba(1, 1, 1, 0)
    );
    assert!(guard.view().can_have_alpha());
}
