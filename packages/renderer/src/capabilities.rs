//! Injected collaborator interfaces.
//!
//! The engine performs no routing, no model access, and no validation of its
//! own. Hosts hand the render pass an implementation of each trait below;
//! every call is synchronous and assumed local. A capability that is absent
//! or answers negatively never fails a render — the consuming component
//! degrades per its own contract.

use serde::{Deserialize, Serialize};

/// Symbolic route reference used for URL synthesis.
///
/// Carries a page name and/or a controller + action pair, plus an optional
/// parameter bag. Synthesis is attempted only when at least one symbolic
/// identifier is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRef {
    pub page: Option<String>,
    pub controller: Option<String>,
    pub action: Option<String>,
    pub params: Vec<(String, String)>,
}

impl RouteRef {
    /// Whether any symbolic identifier is set. A bare parameter bag does not
    /// count.
    pub fn has_identifiers(&self) -> bool {
        self.page.is_some() || self.controller.is_some() || self.action.is_some()
    }
}

/// Produces URLs from symbolic route references.
pub trait UrlSynthesizer {
    /// Resolve the reference to a URL, or `None` when the route cannot be
    /// resolved.
    fn synthesize(&self, route: &RouteRef) -> Option<String>;
}

/// Declared data-type tag on a bound field. Takes precedence over raw
/// value-type inspection when inferring an input subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataTypeTag {
    Email,
    Url,
    Phone,
    Password,
    Date,
    DateTime,
    Time,
}

/// Raw value-type classification of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Time,
    Enumeration,
}

impl Default for ValueType {
    fn default() -> Self {
        ValueType::Text
    }
}

/// Declared validation constraints on a bound field. Absent constraints
/// render nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConstraints {
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<String>,
}

/// One enumerant of an enumerated field's value domain, in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumVariantMeta {
    /// Raw identifier, compared case-insensitively against the field value.
    pub ident: String,
    /// Human-readable label; the identifier is used when absent.
    pub display: Option<String>,
}

/// Everything the model layer declares about one bound field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Current value, already converted to its display string.
    pub value: Option<String>,
    pub required: bool,
    pub data_type: Option<DataTypeTag>,
    pub value_type: ValueType,
    pub constraints: FieldConstraints,
    /// Value domain for [`ValueType::Enumeration`] fields.
    pub enum_domain: Option<Vec<EnumVariantMeta>>,
}

/// Field metadata lookup. `None` means the name has no backing metadata;
/// explicit component inputs still apply.
pub trait FieldSource {
    fn lookup(&self, field: &str) -> Option<FieldMetadata>;
}

/// Per-field validation messages, in declaration order. One or more
/// messages flips a bound component into its error-decorated variant.
pub trait ValidationSource {
    fn errors_for(&self, field: &str) -> Vec<String>;
}

/// Named SVG fragment lookup. A component referencing an unknown icon name
/// suppresses its own output entirely.
pub trait IconSource {
    fn svg_for(&self, name: &str) -> Option<String>;
}
