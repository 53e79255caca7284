use crate::error::RenderError;

/// Common Result type alias
pub type RenderResult<T> = Result<T, RenderError>;
