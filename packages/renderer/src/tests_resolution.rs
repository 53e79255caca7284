//! Attribute resolution precedence and field-metadata hints.

use std::collections::HashMap;

use crate::capabilities::{
    DataTypeTag, EnumVariantMeta, FieldConstraints, FieldMetadata, FieldSource, ValidationSource,
    ValueType,
};
use crate::context::RenderContext;
use crate::field_adapter::{enum_options, input_subtype, push_constraint_attrs, InputSubtype};
use crate::resolver::{resolve_field, FieldBinding};

#[derive(Default)]
struct StaticFields {
    fields: HashMap<String, FieldMetadata>,
}

impl StaticFields {
    fn with(mut self, name: &str, metadata: FieldMetadata) -> Self {
        self.fields.insert(name.to_string(), metadata);
        self
    }
}

impl FieldSource for StaticFields {
    fn lookup(&self, field: &str) -> Option<FieldMetadata> {
        self.fields.get(field).cloned()
    }
}

#[derive(Default)]
struct StaticValidation {
    errors: HashMap<String, Vec<String>>,
}

impl StaticValidation {
    fn with(mut self, name: &str, messages: &[&str]) -> Self {
        self.errors
            .insert(name.to_string(), messages.iter().map(|m| m.to_string()).collect());
        self
    }
}

impl ValidationSource for StaticValidation {
    fn errors_for(&self, field: &str) -> Vec<String> {
        self.errors.get(field).cloned().unwrap_or_default()
    }
}

fn email_field() -> FieldMetadata {
    FieldMetadata {
        value: Some("ada@example.test".to_string()),
        required: true,
        data_type: Some(DataTypeTag::Email),
        ..Default::default()
    }
}

#[test]
fn test_bound_field_supplies_name_id_value_required() {
    let fields = StaticFields::default().with("Email", email_field());
    let ctx = RenderContext::new().with_fields(&fields);

    let resolved = resolve_field(&ctx, &FieldBinding::bound("Email"), None);
    assert_eq!(resolved.name, "Email");
    assert_eq!(resolved.id.as_deref(), Some("Email"));
    assert_eq!(resolved.value.as_deref(), Some("ada@example.test"));
    assert!(resolved.required);
    assert!(!resolved.has_error());
}

#[test]
fn test_explicit_inputs_beat_bound_field_inference() {
    let fields = StaticFields::default().with("Email", email_field());
    let ctx = RenderContext::new().with_fields(&fields);

    let binding = FieldBinding {
        field: Some("Email".to_string()),
        name: Some("contact_email".to_string()),
        id: Some("contact-email".to_string()),
        value: Some("typed@example.test".to_string()),
        required: Some(false),
    };
    let resolved = resolve_field(&ctx, &binding, None);
    assert_eq!(resolved.name, "contact_email");
    assert_eq!(resolved.id.as_deref(), Some("contact-email"));
    assert_eq!(resolved.value.as_deref(), Some("typed@example.test"));
    assert!(!resolved.required, "explicit false beats the field's required");
}

#[test]
fn test_defaults_apply_when_nothing_is_bound() {
    let ctx = RenderContext::new();
    let resolved = resolve_field(&ctx, &FieldBinding::default(), Some("fallback"));
    assert_eq!(resolved.name, "");
    assert_eq!(resolved.id, None);
    assert_eq!(resolved.value.as_deref(), Some("fallback"));
    assert!(!resolved.required);
}

#[test]
fn test_unknown_field_keeps_explicit_inputs() {
    // The field source knows nothing about this name; the binding's own
    // inputs still resolve.
    let fields = StaticFields::default();
    let ctx = RenderContext::new().with_fields(&fields);
    let binding = FieldBinding {
        field: Some("Ghost".to_string()),
        value: Some("explicit".to_string()),
        ..Default::default()
    };
    let resolved = resolve_field(&ctx, &binding, None);
    assert_eq!(resolved.name, "Ghost");
    assert_eq!(resolved.value.as_deref(), Some("explicit"));
    assert!(resolved.metadata.is_none());
}

#[test]
fn test_enum_value_resolves_to_display_label() {
    let metadata = FieldMetadata {
        value: Some("BILLING".to_string()),
        value_type: ValueType::Enumeration,
        enum_domain: Some(vec![
            EnumVariantMeta {
                ident: "Shipping".to_string(),
                display: Some("Ship to me".to_string()),
            },
            EnumVariantMeta {
                ident: "Billing".to_string(),
                display: Some("Bill to me".to_string()),
            },
        ]),
        ..Default::default()
    };
    let fields = StaticFields::default().with("AddressKind", metadata);
    let ctx = RenderContext::new().with_fields(&fields);

    let resolved = resolve_field(&ctx, &FieldBinding::bound("AddressKind"), None);
    assert_eq!(resolved.value.as_deref(), Some("Bill to me"));
}

#[test]
fn test_enum_value_falls_back_to_raw_identifier() {
    let metadata = FieldMetadata {
        value: Some("Billing".to_string()),
        value_type: ValueType::Enumeration,
        enum_domain: Some(vec![EnumVariantMeta {
            ident: "Billing".to_string(),
            display: None,
        }]),
        ..Default::default()
    };
    let fields = StaticFields::default().with("AddressKind", metadata);
    let ctx = RenderContext::new().with_fields(&fields);

    let resolved = resolve_field(&ctx, &FieldBinding::bound("AddressKind"), None);
    assert_eq!(resolved.value.as_deref(), Some("Billing"));
}

#[test]
fn test_error_state_uses_the_resolved_name_and_first_message() {
    let validation = StaticValidation::default().with(
        "contact_email",
        &["Enter a valid address.", "Address is required."],
    );
    let ctx = RenderContext::new().with_validation(&validation);

    // The error is keyed by the *resolved* name, not the bound field name.
    let binding = FieldBinding {
        field: Some("Email".to_string()),
        name: Some("contact_email".to_string()),
        ..Default::default()
    };
    let resolved = resolve_field(&ctx, &binding, None);
    assert!(resolved.has_error());
    assert_eq!(resolved.error.as_deref(), Some("Enter a valid address."));
}

#[test]
fn test_no_messages_means_no_error_state() {
    let validation = StaticValidation::default().with("other", &["msg"]);
    let ctx = RenderContext::new().with_validation(&validation);
    let resolved = resolve_field(&ctx, &FieldBinding::bound("Email"), None);
    assert!(!resolved.has_error());
}

#[test]
fn test_subtype_tag_beats_value_type() {
    let metadata = FieldMetadata {
        data_type: Some(DataTypeTag::Password),
        value_type: ValueType::Integer,
        ..Default::default()
    };
    assert_eq!(input_subtype(&metadata), InputSubtype::Password);
}

#[test]
fn test_subtype_falls_back_to_value_type_then_text() {
    let numeric = FieldMetadata {
        value_type: ValueType::Float,
        ..Default::default()
    };
    assert_eq!(input_subtype(&numeric), InputSubtype::Number);

    let date = FieldMetadata {
        value_type: ValueType::DateTime,
        ..Default::default()
    };
    assert_eq!(input_subtype(&date), InputSubtype::DatetimeLocal);

    assert_eq!(input_subtype(&FieldMetadata::default()), InputSubtype::Text);
}

#[test]
fn test_constraints_render_iff_present() {
    let mut out = String::new();
    push_constraint_attrs(&mut out, &FieldConstraints::default());
    assert_eq!(out, "");

    let constraints = FieldConstraints {
        min_length: Some(2),
        max_length: Some(64),
        pattern: Some("[a-z]+".to_string()),
        ..Default::default()
    };
    let mut out = String::new();
    push_constraint_attrs(&mut out, &constraints);
    assert_eq!(out, r#" minlength="2" maxlength="64" pattern="[a-z]+""#);
}

#[test]
fn test_enum_options_preserve_declaration_order_and_selection() {
    let metadata = FieldMetadata {
        value: Some("green".to_string()),
        value_type: ValueType::Enumeration,
        enum_domain: Some(vec![
            EnumVariantMeta {
                ident: "Red".to_string(),
                display: Some("Warm red".to_string()),
            },
            EnumVariantMeta {
                ident: "Green".to_string(),
                display: None,
            },
            EnumVariantMeta {
                ident: "Blue".to_string(),
                display: Some("Cool blue".to_string()),
            },
        ]),
        ..Default::default()
    };

    let options = enum_options("Color", &metadata).unwrap();
    assert_eq!(
        options.iter().map(|o| o.label.as_str()).collect::<Vec<_>>(),
        ["Warm red", "Green", "Cool blue"]
    );
    assert_eq!(
        options.iter().map(|o| o.selected).collect::<Vec<_>>(),
        [false, true, false],
        "selection matches the current value case-insensitively"
    );
}

#[test]
fn test_enum_options_reject_a_missing_domain() {
    let metadata = FieldMetadata {
        value_type: ValueType::Enumeration,
        ..Default::default()
    };
    assert!(enum_options("Color", &metadata).is_err());
    assert!(enum_options("Color", &FieldMetadata::default()).is_err());
}
