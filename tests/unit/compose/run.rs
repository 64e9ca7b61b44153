use super::*;
use crate::{
    compose::plan::{CanvasSpec, Layer},
    foundation::{
        core::{PackedColor, Point},
        error::BlitError,
    },
    surface::format::PixelFormat,
};

fn fixture_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from("target").join("unit_compose").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn canvas(width: u32, height: u32, clear: Option<[u8; 4]>) -> CanvasSpec {
    CanvasSpec {
        width,
        height,
        format: PixelFormat::Argb32,
        clear_rgba: clear,
    }
}

#[test]
fn opaque_layer_is_copied_and_clipped() {
    let dir = fixture_dir("opaque");
    image::RgbImage::from_pixel(4, 4, image::Rgb([200, 0, 0]))
        .save(dir.join("red.png"))
        .unwrap();

    let plan = BlitPlan {
        canvas: canvas(6, 6, Some([0, 0, 255, 255])),
        layers: vec![Layer {
            source: "red.png".to_string(),
            at: Point::new(4, -2),
            src_rect: None,
            transparent_rgb: None,
        }],
    };
    let out = execute_plan(&plan, &dir).unwrap();

    assert_eq!(out.get_pixel(4, 0).unwrap(), PackedColor::from_rgb(200, 0, 0));
    assert_eq!(out.get_pixel(5, 1).unwrap(), PackedColor::from_rgb(200, 0, 0));
    assert_eq!(out.get_pixel(5, 2).unwrap(), PackedColor::from_rgb(0, 0, 255));
    assert_eq!(out.get_pixel(3, 0).unwrap(), PackedColor::from_rgb(0, 0, 255));
}

#[test]
fn color_key_turns_matching_pixels_into_holes() {
    let dir = fixture_dir("keyed");
    let mut img = image::RgbImage::from_pixel(2, 1, image::Rgb([255, 0, 255]));
    img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
    img.save(dir.join("sprite.png")).unwrap();

    let plan = BlitPlan {
        canvas: canvas(2, 1, Some([9, 9, 9, 255])),
        layers: vec![Layer {
            source: "sprite.png".to_string(),
            at: Point::default(),
            src_rect: None,
            transparent_rgb: Some([255, 0, 255]),
        }],
    };
    let out = execute_plan(&plan, &dir).unwrap();

    assert_eq!(out.get_pixel(0, 0).unwrap(), PackedColor::from_rgb(9, 9, 9));
    assert_eq!(out.get_pixel(1, 0).unwrap(), PackedColor::from_rgb(0, 255, 0));
}

#[test]
fn translucent_layer_is_blended() {
    let dir = fixture_dir("blend");
    image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 128]))
        .save(dir.join("glass.png"))
        .unwrap();

    let plan = BlitPlan {
        canvas: canvas(1, 1, Some([0, 255, 0, 255])),
        layers: vec![Layer {
            source: "glass.png".to_string(),
            at: Point::default(),
            src_rect: None,
            transparent_rgb: None,
        }],
    };
    let out = execute_plan(&plan, &dir).unwrap();
    assert_eq!(
        out.get_pixel(0, 0).unwrap(),
        PackedColor::from_rgba(128, 127, 0, 255)
    );
}

#[test]
fn invalid_plan_fails_before_loading() {
    let plan = BlitPlan {
        canvas: canvas(0, 4, None),
        layers: vec![Layer {
            source: "never-read.png".to_string(),
            at: Point::default(),
            src_rect: None,
            transparent_rgb: None,
        }],
    };
    let err = execute_plan(&plan, std::path::Path::new("target")).unwrap_err();
    assert!(matches!(err, BlitError::Validation(_)));
}

#[test]
fn degenerate_src_rect_layer_leaves_canvas_unchanged() {
    let dir = fixture_dir("degenerate");
    image::RgbImage::from_pixel(4, 4, image::Rgb([200, 0, 0]))
        .save(dir.join("red.png"))
        .unwrap();

    let mut plan = BlitPlan {
        canvas: canvas(4, 4, Some([1, 2, 3, 255])),
        layers: vec![Layer {
            source: "red.png".to_string(),
            at: Point::default(),
            src_rect: Some(Rect::new(0, 0, -1, 2)),
            transparent_rgb: None,
        }],
    };
    plan.validate().unwrap();
    let store = SourceStore::prepare(&plan, &dir).unwrap();
    let out = compose_with(&plan, &store).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.get_pixel(x, y).unwrap(), PackedColor::from_rgb(1, 2, 3));
        }
    }

    plan.layers[0].src_rect = Some(Rect::new(0, 0, 4, 0));
    let out = compose_with(&plan, &store).unwrap();
    assert_eq!(out.get_pixel(0, 0).unwrap(), PackedColor::from_rgb(1, 2, 3));
}
