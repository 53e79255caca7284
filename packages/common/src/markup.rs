//! Attribute and text writers shared by every component.
//!
//! Components string-compose their markup into a single output buffer. Every
//! user-supplied value passes through [`escape_html`] on the way in, and every
//! optional attribute goes through one of the `push_attr*` writers so that the
//! "render iff a value is present" rule lives in exactly one place.

/// Escape a value for insertion into text content or an attribute position.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Append ` name="value"` to the buffer, escaping the value.
///
/// The leading space means callers can chain writers directly after an open
/// tag without tracking separators.
pub fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Append an attribute iff a value is present. `None` writes nothing at all,
/// not an empty attribute.
pub fn push_attr_opt(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_attr(out, name, value);
    }
}

/// Append an attribute with a `"true"`/`"false"` value iff one is present.
/// Used by the accessibility set, where `aria-expanded="false"` is
/// meaningful and distinct from the attribute being absent.
pub fn push_attr_bool(out: &mut String, name: &str, value: Option<bool>) {
    if let Some(value) = value {
        push_attr(out, name, if value { "true" } else { "false" });
    }
}

/// Append a valueless boolean HTML attribute (`required`, `disabled`,
/// `checked`, ...) iff `on` is true.
pub fn push_flag(out: &mut String, name: &str, on: bool) {
    if on {
        out.push(' ');
        out.push_str(name);
    }
}
