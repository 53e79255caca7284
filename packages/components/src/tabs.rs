//! Tab strip composite.
//!
//! Tab panels register their caption and pre-rendered body into the group
//! registry; the strip assembles the tablist buttons and the panel stack
//! only after all children have been evaluated, because selection and the
//! id scheme depend on each panel's index. When no panel matches the
//! selected key, the first panel is the selected one.

use tracing::instrument;

use trellis_common::{escape_html, push_attr, push_flag, ClassList, RenderResult};
use trellis_renderer::{GroupEntry, HxDirectives, RenderContext};

/// Tabbed container; children are [`TabPanel`]s.
#[derive(Debug, Clone, Default)]
pub struct TabStrip {
    /// Id prefix shared by every tab and panel, e.g. `"settings"` yields
    /// `settings-tab-1` / `settings-panel-1`.
    pub id: String,
    /// Key of the selected panel; defaults to the first panel.
    pub selected: Option<String>,
    pub directives: HxDirectives,
}

impl TabStrip {
    #[instrument(skip_all, fields(id = %self.id))]
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        ctx.push_group_scope(self.id.clone(), self.selected.clone());
        children(ctx)?;
        let group = ctx.pop_group_scope();

        let selected_index = group
            .entries()
            .iter()
            .position(|entry| entry.selected)
            .unwrap_or(0);

        let block = ctx.options().block("tab-strip");
        let mut out = String::new();
        out.push_str("<div");
        push_attr(&mut out, "class", &ClassList::new(&block).build());
        push_attr(&mut out, "id", &self.id);
        self.directives.write_attrs(&mut out, ctx)?;
        out.push('>');

        out.push_str("<div");
        push_attr(&mut out, "class", &format!("{}__tabs", block));
        push_attr(&mut out, "role", "tablist");
        out.push('>');
        for (i, entry) in group.entries().iter().enumerate() {
            let selected = i == selected_index;
            let mut classes = ClassList::new(&format!("{}__tab", block));
            classes.add_if(&format!("{}__tab--selected", block), selected);

            out.push_str("<button type=\"button\"");
            push_attr(&mut out, "class", &classes.build());
            push_attr(&mut out, "id", &format!("{}-tab-{}", self.id, i + 1));
            push_attr(&mut out, "role", "tab");
            push_attr(&mut out, "aria-selected", if selected { "true" } else { "false" });
            push_attr(&mut out, "aria-controls", &format!("{}-panel-{}", self.id, i + 1));
            out.push('>');
            out.push_str(&escape_html(&entry.label));
            out.push_str("</button>");
        }
        out.push_str("</div>");

        for (i, entry) in group.entries().iter().enumerate() {
            out.push_str("<div");
            push_attr(&mut out, "class", &format!("{}__panel", block));
            push_attr(&mut out, "id", &format!("{}-panel-{}", self.id, i + 1));
            push_attr(&mut out, "role", "tabpanel");
            push_attr(&mut out, "aria-labelledby", &format!("{}-tab-{}", self.id, i + 1));
            push_flag(&mut out, "hidden", i != selected_index);
            out.push('>');
            out.push_str(entry.fragment.as_deref().unwrap_or(""));
            out.push_str("</div>");
        }

        out.push_str("</div>");
        Ok(out)
    }
}

/// One tab caption plus its panel content.
#[derive(Debug, Clone, Default)]
pub struct TabPanel {
    /// Stable key compared against the strip's selected value.
    pub key: String,
    /// Caption shown on the tab button.
    pub label: String,
}

impl TabPanel {
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        let fragment = children(ctx)?;
        let selected = ctx
            .group_state()
            .and_then(|(_, selected)| selected)
            .map(|value| value.eq_ignore_ascii_case(&self.key))
            .unwrap_or(false);

        ctx.register_in_group(GroupEntry {
            label: self.label.clone(),
            fragment: Some(fragment),
            selected,
            ..Default::default()
        });
        Ok(String::new())
    }
}
