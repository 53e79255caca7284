//! Identity, value, and state resolution for bound components.
//!
//! One precedence rule, applied property by property: an explicit instance
//! input always wins over inference from the bound field, and inference
//! from the bound field always wins over the hard-coded default. Components
//! never consult metadata directly — they hand their declared inputs to
//! [`resolve_field`] and render from the result.

use tracing::debug;

use crate::capabilities::{EnumVariantMeta, FieldMetadata, ValueType};
use crate::context::RenderContext;

/// Declared identity/value inputs of one component instance, before
/// resolution. All fields are optional; `field` names the externally bound
/// field, when any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBinding {
    pub field: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub value: Option<String>,
    pub required: Option<bool>,
}

impl FieldBinding {
    /// Binding for a bare bound field, the common case.
    pub fn bound(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Default::default()
        }
    }
}

/// Resolution result consumed by the component's markup pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedField {
    /// Submitted name; empty when neither an explicit name nor a bound
    /// field was given.
    pub name: String,
    /// Element id; `None` leaves the component to apply its own placeholder
    /// policy.
    pub id: Option<String>,
    /// Display value; `None` leaves the component default in force.
    pub value: Option<String>,
    pub required: bool,
    /// First validation message for the resolved name, when any exist.
    /// Presence flips the component into its error-decorated variant.
    pub error: Option<String>,
    /// Metadata of the bound field, for subtype/constraint/option hints.
    pub metadata: Option<FieldMetadata>,
}

impl ResolvedField {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Resolve identity, value, and state for one component instance.
///
/// `default_value` is the component's own fallback, applied only when
/// neither an explicit value nor a bound-field value is available.
pub fn resolve_field(
    ctx: &RenderContext,
    binding: &FieldBinding,
    default_value: Option<&str>,
) -> ResolvedField {
    let metadata = binding
        .field
        .as_deref()
        .and_then(|field| ctx.field_metadata(field));

    let name = binding
        .name
        .clone()
        .or_else(|| binding.field.clone())
        .unwrap_or_default();

    let id = binding.id.clone().or_else(|| binding.field.clone());

    let value = binding
        .value
        .clone()
        .or_else(|| metadata.as_ref().and_then(display_value))
        .or_else(|| default_value.map(str::to_string));

    let required = binding
        .required
        .or(metadata.as_ref().map(|m| m.required))
        .unwrap_or(false);

    let error = ctx.first_error(&name);
    if error.is_some() {
        debug!(field = %name, "validation errors present, rendering error variant");
    }

    ResolvedField {
        name,
        id,
        value,
        required,
        error,
        metadata,
    }
}

/// Display string of a bound field's current value. For enumerated fields
/// this is the matching enumerant's declared display label, falling back to
/// the raw identifier.
fn display_value(metadata: &FieldMetadata) -> Option<String> {
    let value = metadata.value.as_deref()?;
    if metadata.value_type == ValueType::Enumeration {
        if let Some(domain) = &metadata.enum_domain {
            if let Some(variant) = find_variant(domain, value) {
                return Some(
                    variant
                        .display
                        .clone()
                        .unwrap_or_else(|| variant.ident.clone()),
                );
            }
        }
    }
    Some(value.to_string())
}

pub(crate) fn find_variant<'a>(
    domain: &'a [EnumVariantMeta],
    value: &str,
) -> Option<&'a EnumVariantMeta> {
    domain
        .iter()
        .find(|variant| variant.ident.eq_ignore_ascii_case(value))
}
