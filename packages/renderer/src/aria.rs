//! Accessibility attribute set.
//!
//! A thin, uniform layer over the shared attribute writers: every field
//! renders iff a value is provided, booleans render as `"true"`/`"false"`
//! (both states are meaningful to assistive technology, unlike HTML boolean
//! attributes), and numeric range fields render their plain decimal form.

use serde::{Deserialize, Serialize};

use trellis_common::{push_attr_bool, push_attr_opt};

/// Accessibility attributes of one component instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AriaAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labelledby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describedby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid: Option<bool>,
    /// `aria-current` is token-valued (`"page"`, `"step"`, `"true"`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub haspopup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuenow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuemin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuemax: Option<f64>,
}

impl AriaAttrs {
    /// Append every present attribute to the buffer.
    pub fn write_attrs(&self, out: &mut String) {
        push_attr_opt(out, "role", self.role.as_deref());
        push_attr_opt(out, "aria-label", self.label.as_deref());
        push_attr_opt(out, "aria-labelledby", self.labelledby.as_deref());
        push_attr_opt(out, "aria-describedby", self.describedby.as_deref());
        push_attr_bool(out, "aria-expanded", self.expanded);
        push_attr_bool(out, "aria-selected", self.selected);
        push_attr_bool(out, "aria-disabled", self.disabled);
        push_attr_bool(out, "aria-hidden", self.hidden);
        push_attr_bool(out, "aria-checked", self.checked);
        push_attr_bool(out, "aria-pressed", self.pressed);
        push_attr_bool(out, "aria-required", self.required);
        push_attr_bool(out, "aria-invalid", self.invalid);
        push_attr_opt(out, "aria-current", self.current.as_deref());
        push_attr_opt(out, "aria-live", self.live.as_deref());
        push_attr_opt(out, "aria-controls", self.controls.as_deref());
        push_attr_opt(out, "aria-haspopup", self.haspopup.as_deref());
        push_attr_opt(out, "aria-valuenow", self.valuenow.map(|v| v.to_string()).as_deref());
        push_attr_opt(out, "aria-valuemin", self.valuemin.map(|v| v.to_string()).as_deref());
        push_attr_opt(out, "aria-valuemax", self.valuemax.map(|v| v.to_string()).as_deref());
    }
}
