//! Render configuration shared by every component in a pass.

use serde::{Deserialize, Serialize};

/// Attribute dialect for the browser-side behavior layer.
///
/// The behavior layer pattern-matches attribute names byte-for-byte, so the
/// dialect is fixed per render pass, never per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// Bare `hx-*` attribute names.
    Hx,
    /// `data-hx-*` names, for hosts that require all custom attributes under
    /// the `data-` namespace.
    DataHx,
}

impl Dialect {
    /// Full attribute name for a directive suffix, e.g. `"get"` →
    /// `"hx-get"`.
    pub fn attr(&self, suffix: &str) -> String {
        match self {
            Dialect::Hx => format!("hx-{}", suffix),
            Dialect::DataHx => format!("data-hx-{}", suffix),
        }
    }
}

/// Options for one render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Directive attribute dialect.
    pub dialect: Dialect,
    /// Prefix for every BEM block class, e.g. `"ui"` → `ui-button`.
    pub block_prefix: String,
}

impl RenderOptions {
    /// BEM block name for a component, e.g. `block("button")` → `"ui-button"`.
    pub fn block(&self, component: &str) -> String {
        format!("{}-{}", self.block_prefix, component)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Hx,
            block_prefix: "ui".to_string(),
        }
    }
}
