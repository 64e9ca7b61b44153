//! rawblit copies and alpha-composites rectangular regions between raw pixel buffers.
//!
//! Every [`Surface`] is normalized to one of two layouts on creation: 8-bit palette indices or
//! 32-bit BGRA. Drawing goes through a single pipeline:
//!
//! - clip the requested source rectangle against both surfaces ([`clip`])
//! - copy rows with a length-specialized routine ([`RowCopy`]) when the source is opaque
//! - blend pixel by pixel ([`over`]) when the source may carry alpha
//!
//! Geometry never fails; requests that fall outside either surface are silent no-ops.
//! A JSON [`BlitPlan`] drives the same pipeline from image files.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blit;
mod compose;
mod foundation;
mod surface;

pub use crate::foundation::core::{PackedColor, Point, Rect, Size};
pub use crate::foundation::error::{BlitError, BlitResult};

pub use crate::blit::alpha::{Bgra8, over, over_in_place};
pub use crate::blit::clip::{ClippedBlit, clip};
pub use crate::blit::copy::RowCopy;
pub use crate::blit::{Blit, BlitRequest};
pub use crate::compose::plan::{BlitPlan, CanvasSpec, Layer};
pub use crate::compose::run::{compose_with, execute_plan};
pub use crate::compose::store::{SourceStore, normalize_rel_path};
pub use crate::surface::buffer::Surface;
pub use crate::surface::format::{Classified, PixelFormat, SurfaceFormat};
pub use crate::surface::lock::{SurfaceLock, SurfaceView};
