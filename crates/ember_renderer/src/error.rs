use thiserror::Error;

/// Errors reported before any pixel is traced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("trace depth must be at least 1")]
    ZeroDepth,

    #[error("max path length must be at least 1")]
    ZeroPathLength,

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("output buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
