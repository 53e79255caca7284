use thiserror::Error;

/// Common error type shared by every trellis crate.
///
/// Rendering never fails for "not configured" states — missing slot content,
/// absent field metadata, and unresolvable URLs all degrade silently. The
/// variants here cover programmer-error conditions surfaced while composing
/// markup.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid {attribute} payload: {message}")]
    Payload { attribute: String, message: String },

    #[error("malformed enum domain for field '{field}': {message}")]
    EnumDomain { field: String, message: String },

    #[error("render error: {0}")]
    Generic(String),
}

impl From<String> for RenderError {
    fn from(s: String) -> Self {
        RenderError::Generic(s)
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Generic(s.to_string())
    }
}
