use super::*;
use crate::compose::plan::{CanvasSpec, Layer};
use crate::foundation::core::Point;
use crate::surface::format::PixelFormat;

fn layer(source: &str) -> Layer {
    Layer {
        source: source.to_string(),
        at: Point::default(),
        src_rect: None,
        transparent_rgb: None,
    }
}

fn plan(layers: Vec<Layer>) -> BlitPlan {
    BlitPlan {
        canvas: CanvasSpec {
            width: 8,
            height: 8,
            format: PixelFormat::Argb32,
            clear_rgba: None,
        },
        layers,
    }
}

#[test]
fn normalize_rel_path_cleans_separators() {
    assert_eq!(normalize_rel_path("a/./b//c.png").unwrap(), "a/b/c.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("/a.png").is_err());
    assert!(normalize_rel_path("a/../b.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn prepare_decodes_each_distinct_source_once() {
    let dir = PathBuf::from("target").join("unit_source_store");
    std::fs::create_dir_all(&dir).unwrap();
    image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 128]))
        .save(dir.join("a.png"))
        .unwrap();

    let store =
        SourceStore::prepare(&plan(vec![layer("a.png"), layer("./a.png")]), &dir).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.root(), dir.as_path());

    let s = store.get("a.png").unwrap();
    assert_eq!((s.width(), s.height()), (3, 2));
    assert!(s.can_have_alpha());
    assert!(store.get("b.png").is_err());
}

#[test]
fn missing_source_is_reported_with_its_path() {
    let err = SourceStore::prepare(&plan(vec![layer("nope.png")]), "target/does-not-exist")
        .unwrap_err();
    assert!(matches!(err, BlitError::Other(_)));
    assert!(format!("{err:#}").contains("nope.png"));
}

#[test]
fn empty_plan_prepares_nothing() {
    let store = SourceStore::prepare(&plan(vec![]), ".").unwrap();
    assert!(store.is_empty());
}
