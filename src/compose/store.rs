use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    compose::plan::BlitPlan,
    foundation::error::{BlitError, BlitResult},
    surface::buffer::Surface,
};

/// Decoded layer sources, loaded once per distinct path.
#[derive(Clone, Debug)]
pub struct SourceStore {
    root: PathBuf,
    surfaces: BTreeMap<String, Surface>,
}

impl SourceStore {
    /// Decode every source the plan references, resolving paths against `root`.
    pub fn prepare(plan: &BlitPlan, root: impl Into<PathBuf>) -> BlitResult<Self> {
        let mut out = Self {
            root: root.into(),
            surfaces: BTreeMap::new(),
        };
        for layer in &plan.layers {
            let key = normalize_rel_path(&layer.source)?;
            if out.surfaces.contains_key(&key) {
                continue;
            }
            let surface = out.load(&key)?;
            tracing::debug!(
                source = %key,
                width = surface.width(),
                height = surface.height(),
                alpha = surface.can_have_alpha(),
                "decoded source"
            );
            out.surfaces.insert(key, surface);
        }
        Ok(out)
    }

    /// Directory used when resolving relative source paths.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of distinct decoded sources.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// True when the plan referenced no sources.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Look up a decoded source by the path written in the plan.
    pub fn get(&self, source: &str) -> BlitResult<&Surface> {
        let key = normalize_rel_path(source)?;
        self.surfaces
            .get(&key)
            .ok_or_else(|| BlitError::validation(format!("source '{source}' was not prepared")))
    }

    fn load(&self, norm_path: &str) -> BlitResult<Surface> {
        let path = self.root.join(Path::new(norm_path));
        let img = image::open(&path)
            .with_context(|| format!("decode image '{}'", path.display()))?;
        Surface::from_image(&img)
    }
}

/// Normalize a plan source path: forward slashes, no `.` segments, relative, no `..`.
pub fn normalize_rel_path(source: &str) -> BlitResult<String> {
    let s = source.trim().replace('\\', "/");
    if s.is_empty() {
        return Err(BlitError::validation("source path must be non-empty"));
    }
    if s.starts_with('/') {
        return Err(BlitError::validation("source paths must be relative"));
    }

    let mut parts = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(BlitError::validation("source paths must not contain '..'"));
        }
        parts.push(part);
    }
    if parts.is_empty() {
        return Err(BlitError::validation("source path must contain a file name"));
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/store.rs"]
mod tests;
