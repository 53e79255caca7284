//! Rendering hints derived from bound-field metadata.
//!
//! Components that bind to a field opt into this adapter for three things:
//! the input subtype, the declared constraints as markup attributes, and —
//! for enumerated fields — the option list.

use serde::{Deserialize, Serialize};

use trellis_common::{push_attr_opt, RenderError, RenderResult};

use crate::capabilities::{DataTypeTag, FieldConstraints, FieldMetadata, ValueType};
use crate::resolver::find_variant;

/// Input subtype, mapped onto the `type` attribute of a text-style input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSubtype {
    Text,
    Email,
    Url,
    Tel,
    Password,
    Date,
    DatetimeLocal,
    Time,
    Number,
}

impl InputSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSubtype::Text => "text",
            InputSubtype::Email => "email",
            InputSubtype::Url => "url",
            InputSubtype::Tel => "tel",
            InputSubtype::Password => "password",
            InputSubtype::Date => "date",
            InputSubtype::DatetimeLocal => "datetime-local",
            InputSubtype::Time => "time",
            InputSubtype::Number => "number",
        }
    }
}

/// Infer the input subtype for a bound field.
///
/// An explicit declared data-type tag always wins; raw value-type
/// inspection is the fallback; generic text is the default.
pub fn input_subtype(metadata: &FieldMetadata) -> InputSubtype {
    if let Some(tag) = metadata.data_type {
        return match tag {
            DataTypeTag::Email => InputSubtype::Email,
            DataTypeTag::Url => InputSubtype::Url,
            DataTypeTag::Phone => InputSubtype::Tel,
            DataTypeTag::Password => InputSubtype::Password,
            DataTypeTag::Date => InputSubtype::Date,
            DataTypeTag::DateTime => InputSubtype::DatetimeLocal,
            DataTypeTag::Time => InputSubtype::Time,
        };
    }
    match metadata.value_type {
        ValueType::Integer | ValueType::Float => InputSubtype::Number,
        ValueType::Date => InputSubtype::Date,
        ValueType::DateTime => InputSubtype::DatetimeLocal,
        ValueType::Time => InputSubtype::Time,
        _ => InputSubtype::Text,
    }
}

/// Append the declared constraints as input attributes. Absent constraints
/// write nothing.
pub fn push_constraint_attrs(out: &mut String, constraints: &FieldConstraints) {
    push_attr_opt(
        out,
        "minlength",
        constraints.min_length.map(|v| v.to_string()).as_deref(),
    );
    push_attr_opt(
        out,
        "maxlength",
        constraints.max_length.map(|v| v.to_string()).as_deref(),
    );
    push_attr_opt(out, "min", constraints.min.map(|v| v.to_string()).as_deref());
    push_attr_opt(out, "max", constraints.max.map(|v| v.to_string()).as_deref());
    push_attr_opt(out, "pattern", constraints.pattern.as_deref());
}

/// One generated `<option>` of an enumerated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Generate the option list of an enumerated field, in declaration order.
///
/// Each enumerant's label is its declared display name, falling back to the
/// raw identifier; an option is selected iff its identifier equals the
/// field's current value, compared case-insensitively. A field that is not
/// an enumeration, or that declares no domain, is a programmer error.
pub fn enum_options(field: &str, metadata: &FieldMetadata) -> RenderResult<Vec<SelectOption>> {
    if metadata.value_type != ValueType::Enumeration {
        return Err(RenderError::EnumDomain {
            field: field.to_string(),
            message: "field is not an enumeration".to_string(),
        });
    }
    let domain = metadata
        .enum_domain
        .as_deref()
        .ok_or_else(|| RenderError::EnumDomain {
            field: field.to_string(),
            message: "enumeration declares no value domain".to_string(),
        })?;

    let selected_ident = metadata
        .value
        .as_deref()
        .and_then(|value| find_variant(domain, value))
        .map(|variant| variant.ident.clone());

    Ok(domain
        .iter()
        .map(|variant| SelectOption {
            value: variant.ident.clone(),
            label: variant
                .display
                .clone()
                .unwrap_or_else(|| variant.ident.clone()),
            selected: selected_ident.as_deref() == Some(variant.ident.as_str()),
        })
        .collect())
}
