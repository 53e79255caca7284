//! Field-bound form controls: text input, select, checkbox.
//!
//! Each control resolves its identity and state through
//! [`trellis_renderer::resolve_field`], so explicit inputs, bound-field
//! metadata, and defaults follow the same precedence everywhere. A control
//! whose resolved name has validation messages renders its error-decorated
//! variant: the `--invalid` class modifier, `aria-invalid`, and the first
//! message in a `__error` element wired up via `aria-describedby`.

use trellis_common::{escape_html, push_attr, push_attr_opt, push_flag, ClassList, RenderResult};
use trellis_renderer::{
    enum_options, input_subtype, push_constraint_attrs, resolve_field, AriaAttrs, FieldBinding,
    HxDirectives, InputSubtype, RenderContext, ResolvedField, SelectOption, ValueType,
};

fn error_id(resolved: &ResolvedField) -> Option<String> {
    resolved.id.as_ref().map(|id| format!("{}-error", id))
}

/// Error-state accessibility wiring shared by the bound controls.
fn decorate_invalid(aria: &mut AriaAttrs, resolved: &ResolvedField) {
    if resolved.has_error() {
        aria.invalid = Some(true);
        if aria.describedby.is_none() {
            aria.describedby = error_id(resolved);
        }
    }
}

/// First validation message, rendered after the control.
fn write_error_message(out: &mut String, block: &str, resolved: &ResolvedField) {
    if let Some(message) = &resolved.error {
        out.push_str("<span");
        push_attr(out, "class", &format!("{}__error", block));
        push_attr_opt(out, "id", error_id(resolved).as_deref());
        out.push('>');
        out.push_str(&escape_html(message));
        out.push_str("</span>");
    }
}

/// Single-line text-style input.
///
/// The `type` attribute comes from the explicit subtype when given, else
/// from the bound field's metadata, else `text`. Declared constraints
/// (length bounds, numeric range, pattern) render as native input
/// attributes.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub binding: FieldBinding,
    pub subtype: Option<InputSubtype>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub readonly: bool,
    pub directives: HxDirectives,
    pub aria: AriaAttrs,
}

impl TextInput {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let resolved = resolve_field(ctx, &self.binding, None);
        let subtype = self
            .subtype
            .or_else(|| resolved.metadata.as_ref().map(input_subtype))
            .unwrap_or(InputSubtype::Text);

        let block = ctx.options().block("input");
        let mut classes = ClassList::new(&block);
        classes.add_if(&format!("{}--invalid", block), resolved.has_error());

        let mut aria = self.aria.clone();
        decorate_invalid(&mut aria, &resolved);

        let mut out = String::new();
        out.push_str("<input");
        push_attr(&mut out, "type", subtype.as_str());
        push_attr(&mut out, "class", &classes.build());
        push_attr_opt(&mut out, "id", resolved.id.as_deref());
        if !resolved.name.is_empty() {
            push_attr(&mut out, "name", &resolved.name);
        }
        push_attr_opt(&mut out, "value", resolved.value.as_deref());
        push_attr_opt(&mut out, "placeholder", self.placeholder.as_deref());
        if let Some(metadata) = &resolved.metadata {
            push_constraint_attrs(&mut out, &metadata.constraints);
        }
        push_flag(&mut out, "required", resolved.required);
        push_flag(&mut out, "disabled", self.disabled);
        push_flag(&mut out, "readonly", self.readonly);
        aria.write_attrs(&mut out);
        self.directives.write_attrs(&mut out, ctx)?;
        out.push('>');
        write_error_message(&mut out, &block, &resolved);
        Ok(out)
    }
}

/// Drop-down bound to an enumerated field, or fed explicit options.
///
/// Explicit options always win; otherwise an enumerated bound field
/// supplies its domain in declaration order. A bound field that is not an
/// enumeration contributes no options.
#[derive(Debug, Clone, Default)]
pub struct Select {
    pub binding: FieldBinding,
    pub options: Vec<SelectOption>,
    pub disabled: bool,
    pub directives: HxDirectives,
    pub aria: AriaAttrs,
}

impl Select {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let resolved = resolve_field(ctx, &self.binding, None);

        let options = if !self.options.is_empty() {
            self.options.clone()
        } else {
            match &resolved.metadata {
                Some(metadata) if metadata.value_type == ValueType::Enumeration => {
                    enum_options(&resolved.name, metadata)?
                }
                _ => Vec::new(),
            }
        };

        let block = ctx.options().block("select");
        let mut classes = ClassList::new(&block);
        classes.add_if(&format!("{}--invalid", block), resolved.has_error());

        let mut aria = self.aria.clone();
        decorate_invalid(&mut aria, &resolved);

        let mut out = String::new();
        out.push_str("<select");
        push_attr(&mut out, "class", &classes.build());
        push_attr_opt(&mut out, "id", resolved.id.as_deref());
        if !resolved.name.is_empty() {
            push_attr(&mut out, "name", &resolved.name);
        }
        push_flag(&mut out, "required", resolved.required);
        push_flag(&mut out, "disabled", self.disabled);
        aria.write_attrs(&mut out);
        self.directives.write_attrs(&mut out, ctx)?;
        out.push('>');
        for option in &options {
            out.push_str("<option");
            push_attr(&mut out, "value", &option.value);
            push_flag(&mut out, "selected", option.selected);
            out.push('>');
            out.push_str(&escape_html(&option.label));
            out.push_str("</option>");
        }
        out.push_str("</select>");
        write_error_message(&mut out, &block, &resolved);
        Ok(out)
    }
}

/// Checkbox bound to a boolean field.
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    pub binding: FieldBinding,
    pub label: Option<String>,
    pub disabled: bool,
    pub directives: HxDirectives,
    pub aria: AriaAttrs,
}

impl Checkbox {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let resolved = resolve_field(ctx, &self.binding, None);
        let checked = resolved
            .value
            .as_deref()
            .map(is_truthy)
            .unwrap_or(false);

        let block = ctx.options().block("checkbox");
        let mut classes = ClassList::new(&block);
        classes.add_if(&format!("{}--invalid", block), resolved.has_error());

        let mut aria = self.aria.clone();
        decorate_invalid(&mut aria, &resolved);

        let mut out = String::new();
        out.push_str("<label");
        push_attr(&mut out, "class", &classes.build());
        out.push_str("><input type=\"checkbox\"");
        push_attr(&mut out, "class", &format!("{}__control", block));
        push_attr_opt(&mut out, "id", resolved.id.as_deref());
        if !resolved.name.is_empty() {
            push_attr(&mut out, "name", &resolved.name);
        }
        push_attr(&mut out, "value", "true");
        push_flag(&mut out, "checked", checked);
        push_flag(&mut out, "required", resolved.required);
        push_flag(&mut out, "disabled", self.disabled);
        aria.write_attrs(&mut out);
        self.directives.write_attrs(&mut out, ctx)?;
        out.push('>');
        if let Some(label) = &self.label {
            out.push_str("<span");
            push_attr(&mut out, "class", &format!("{}__label", block));
            out.push('>');
            out.push_str(&escape_html(label));
            out.push_str("</span>");
        }
        out.push_str("</label>");
        write_error_message(&mut out, &block, &resolved);
        Ok(out)
    }
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("on") || value == "1"
}
