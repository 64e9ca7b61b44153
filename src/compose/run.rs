use std::{borrow::Cow, path::Path};

use crate::{
    compose::{plan::BlitPlan, store::SourceStore},
    foundation::{core::Rect, error::BlitResult},
    surface::buffer::Surface,
};

/// Validate the plan, decode its sources relative to `root`, and draw every layer.
#[tracing::instrument(skip(plan), fields(layers = plan.layers.len()))]
pub fn execute_plan(plan: &BlitPlan, root: &Path) -> BlitResult<Surface> {
    plan.validate()?;
    let store = SourceStore::prepare(plan, root)?;
    compose_with(plan, &store)
}

/// Draw a validated plan using already decoded sources.
pub fn compose_with(plan: &BlitPlan, store: &SourceStore) -> BlitResult<Surface> {
    let canvas = &plan.canvas;
    let mut out = Surface::new(canvas.width, canvas.height, canvas.format)?;
    if let Some(color) = canvas.clear_color() {
        out.clear(color)?;
    }

    for (i, layer) in plan.layers.iter().enumerate() {
        let decoded = store.get(&layer.source)?;
        let src: Cow<'_, Surface> = match layer.color_key() {
            Some(key) => {
                let mut keyed = decoded.clone();
                keyed.make_transparent(key)?;
                Cow::Owned(keyed)
            }
            None => Cow::Borrowed(decoded),
        };

        let rect = layer.src_rect.unwrap_or_else(|| src.size().to_rect());
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        tracing::debug!(
            layer = i,
            source = %layer.source,
            dest_x = layer.at.x,
            dest_y = layer.at.y,
            width,
            height,
            alpha = src.can_have_alpha(),
            "blit layer"
        );
        out.blit(&src, layer.at.x, layer.at.y, x, y, width, height)?;
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/run.rs"]
mod tests;
