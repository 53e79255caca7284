//! Radio group and its member buttons.
//!
//! The group root resolves the shared name and selected value once, opens a
//! group registry, and evaluates its children; each [`RadioButton`]
//! registers itself to learn its 1-based index (which derives its id) and
//! compares its own value against the shared selection. A radio button
//! rendered outside any group degrades to index 1 and a default scope
//! rather than failing.

use tracing::instrument;

use trellis_common::{escape_html, push_attr, push_attr_opt, push_flag, ClassList, RenderResult};
use trellis_renderer::{
    resolve_field, AriaAttrs, FieldBinding, GroupEntry, HxDirectives, RenderContext,
};

/// Fieldset-level radio group bound to a field.
#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    pub binding: FieldBinding,
    pub legend: Option<String>,
    pub directives: HxDirectives,
    pub aria: AriaAttrs,
}

impl RadioGroup {
    #[instrument(skip_all, fields(field = ?self.binding.field))]
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        let resolved = resolve_field(ctx, &self.binding, None);

        ctx.push_group_scope(resolved.name.clone(), resolved.value.clone());
        let body = children(ctx)?;
        ctx.pop_group_scope();

        let block = ctx.options().block("radio-group");
        let mut classes = ClassList::new(&block);
        classes.add_if(&format!("{}--invalid", block), resolved.has_error());

        let mut aria = self.aria.clone();
        if resolved.has_error() {
            aria.invalid = Some(true);
        }

        let mut out = String::new();
        out.push_str("<fieldset");
        push_attr(&mut out, "class", &classes.build());
        push_attr(&mut out, "role", "radiogroup");
        push_attr_opt(&mut out, "id", resolved.id.as_deref());
        aria.write_attrs(&mut out);
        self.directives.write_attrs(&mut out, ctx)?;
        out.push('>');
        if let Some(legend) = &self.legend {
            out.push_str("<legend");
            push_attr(&mut out, "class", &format!("{}__legend", block));
            out.push('>');
            out.push_str(&escape_html(legend));
            out.push_str("</legend>");
        }
        out.push_str(&body);
        if let Some(message) = &resolved.error {
            out.push_str("<span");
            push_attr(&mut out, "class", &format!("{}__error", block));
            out.push('>');
            out.push_str(&escape_html(message));
            out.push_str("</span>");
        }
        out.push_str("</fieldset>");
        Ok(out)
    }
}

/// One selectable member of a [`RadioGroup`].
#[derive(Debug, Clone, Default)]
pub struct RadioButton {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl RadioButton {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        // Shared state from the ambient group; safe defaults outside one.
        let (scope, selected) = ctx.group_state().unwrap_or_default();
        let checked = selected
            .as_deref()
            .map(|value| value.eq_ignore_ascii_case(&self.value))
            .unwrap_or(false);

        let index = ctx.register_in_group(GroupEntry {
            label: self.label.clone(),
            selected: checked,
            ..Default::default()
        });

        let scope_or_default = if scope.is_empty() { "radio" } else { scope.as_str() };
        let id = format!("{}-{}", scope_or_default, index);

        let block = ctx.options().block("radio");
        let mut out = String::new();
        out.push_str("<label");
        push_attr(&mut out, "class", &ClassList::new(&block).build());
        push_attr(&mut out, "for", &id);
        out.push_str("><input type=\"radio\"");
        push_attr(&mut out, "class", &format!("{}__control", block));
        push_attr(&mut out, "id", &id);
        if !scope.is_empty() {
            push_attr(&mut out, "name", &scope);
        }
        push_attr(&mut out, "value", &self.value);
        push_flag(&mut out, "checked", checked);
        push_flag(&mut out, "disabled", self.disabled);
        out.push_str("><span");
        push_attr(&mut out, "class", &format!("{}__label", block));
        out.push('>');
        out.push_str(&escape_html(&self.label));
        out.push_str("</span></label>");
        Ok(out)
    }
}
