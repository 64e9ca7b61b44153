use super::*;

#[test]
fn packed_color_layout_is_bgra() {
    let c = PackedColor::from_rgba(0x11, 0x22, 0x33, 0x44);
    assert_eq!(c.0, 0x4411_2233);
    assert_eq!(c.to_bgra_bytes(), [0x33, 0x22, 0x11, 0x44]);
    assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x11, 0x22, 0x33, 0x44));
    assert_eq!(PackedColor::from_bgra_bytes(c.to_bgra_bytes()), c);
}

#[test]
fn packed_color_rgb_ignores_alpha() {
    let a = PackedColor::from_rgba(10, 20, 30, 0);
    let b = PackedColor::from_rgb(10, 20, 30);
    assert_ne!(a, b);
    assert_eq!(a.rgb(), b.rgb());
    assert_eq!(a.with_alpha(0xFF), b);
    assert!(b.is_opaque());
    assert!(!a.is_opaque());
}

#[test]
fn size_contains_is_half_open() {
    let s = Size::new(20, 10);
    assert!(s.contains(0, 0));
    assert!(s.contains(19, 9));
    assert!(!s.contains(20, 0));
    assert!(!s.contains(0, 10));
    assert!(!s.contains(-1, 0));
    assert_eq!(s.area(), 200);
    assert_eq!(s.to_rect(), Rect::new(0, 0, 20, 10));
}

#[test]
fn rect_empty_when_any_side_non_positive() {
    assert!(Rect::new(0, 0, 0, 5).is_empty());
    assert!(Rect::new(0, 0, 5, -1).is_empty());
    assert!(!Rect::new(-3, -3, 1, 1).is_empty());
}

#[test]
fn packed_color_serializes_as_plain_integer() {
    let json = serde_json::to_string(&PackedColor(0xFF00_00FF)).unwrap();
    assert_eq!(json, "4278190335");
}
