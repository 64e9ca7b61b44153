/// Convenience result type used across rawblit.
pub type BlitResult<T> = Result<T, BlitError>;

/// Error taxonomy for surface and blit operations.
///
/// Blit geometry never produces an error: rectangles that clip away entirely are no-ops.
#[derive(thiserror::Error, Debug)]
pub enum BlitError {
    /// The pixel format is not one of the recognized indexed or RGB(A) formats.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A color-level operation was attempted on an indexed surface.
    #[error("indexed surface: unable to operate with colors on an indexed surface")]
    IndexedSurface,

    /// A pixel coordinate fell outside the surface extent.
    #[error("out of bounds: ({x}, {y}) is outside a {width}x{height} surface")]
    OutOfBounds {
        /// Requested x coordinate.
        x: i32,
        /// Requested y coordinate.
        y: i32,
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },

    /// Source and destination surfaces do not share a normalized format.
    #[error("format mismatch: {0}")]
    FormatMismatch(String),

    /// Invalid dimensions, stride, buffer length, or plan data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlitError {
    /// Build a [`BlitError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`BlitError::FormatMismatch`] value.
    pub fn format_mismatch(msg: impl Into<String>) -> Self {
        Self::FormatMismatch(msg.into())
    }

    /// Build a [`BlitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
