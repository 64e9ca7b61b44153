use crate::{
    compose::store::normalize_rel_path,
    foundation::{
        core::{PackedColor, Point, Rect},
        error::{BlitError, BlitResult},
    },
    surface::format::PixelFormat,
};

/// A canvas plus an ordered list of layers to blit onto it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlitPlan {
    /// Destination surface.
    pub canvas: CanvasSpec,
    /// Layers, drawn first to last.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// Destination surface description.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSpec {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Source format the canvas is created as.
    #[serde(default = "default_canvas_format")]
    pub format: PixelFormat,
    /// Straight RGBA fill applied before any layer.
    #[serde(default)]
    pub clear_rgba: Option<[u8; 4]>,
}

/// One image drawn onto the canvas.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// Image path, relative to the plan's directory.
    pub source: String,
    /// Destination of the source rectangle's top-left corner.
    #[serde(default)]
    pub at: Point,
    /// Part of the source to draw; the whole image when absent.
    #[serde(default)]
    pub src_rect: Option<Rect>,
    /// Color key: pixels of this RGB become fully transparent before drawing.
    #[serde(default)]
    pub transparent_rgb: Option<[u8; 3]>,
}

fn default_canvas_format() -> PixelFormat {
    PixelFormat::Argb32
}

impl CanvasSpec {
    /// The clear color as a packed color.
    pub fn clear_color(&self) -> Option<PackedColor> {
        self.clear_rgba
            .map(|[r, g, b, a]| PackedColor::from_rgba(r, g, b, a))
    }
}

impl Layer {
    /// The color key as a packed color.
    pub fn color_key(&self) -> Option<PackedColor> {
        self.transparent_rgb
            .map(|[r, g, b]| PackedColor::from_rgb(r, g, b))
    }
}

impl BlitPlan {
    /// Parse a plan from JSON text.
    pub fn from_json(text: &str) -> BlitResult<Self> {
        serde_json::from_str(text).map_err(|e| BlitError::validation(format!("plan json: {e}")))
    }

    /// Check the plan before anything is allocated or loaded.
    pub fn validate(&self) -> BlitResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(BlitError::validation(format!(
                "canvas dimensions must be non-zero, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        let canvas = self.canvas.format.classify()?;
        if canvas.format.is_indexed() {
            return Err(BlitError::validation(
                "canvas must be a truecolor format; layers are loaded as truecolor images",
            ));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.source.trim().is_empty() {
                return Err(BlitError::validation(format!(
                    "layer {i} has an empty source path"
                )));
            }
            normalize_rel_path(&layer.source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/plan.rs"]
mod tests;
