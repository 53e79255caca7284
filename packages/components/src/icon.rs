//! Inline icon resolved through the injected icon source.

use tracing::warn;

use trellis_common::{push_attr, ClassList, ClassToken, RenderResult};
use trellis_renderer::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Sm,
    Md,
    Lg,
}

impl ClassToken for IconSize {
    fn token(&self) -> &'static str {
        match self {
            IconSize::Sm => "sm",
            IconSize::Md => "md",
            IconSize::Lg => "lg",
        }
    }
}

/// Named SVG icon.
///
/// The SVG body comes from the injected [`trellis_renderer::IconSource`]
/// and is inserted as-is — icon registries hold trusted, author-controlled
/// markup. An unknown name suppresses the component's entire output rather
/// than rendering a broken shell.
#[derive(Debug, Clone, Default)]
pub struct Icon {
    pub name: String,
    pub size: Option<IconSize>,
    /// Accessible label; icons without one are hidden from assistive
    /// technology.
    pub label: Option<String>,
}

impl Icon {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let Some(svg) = ctx.icon_svg(&self.name) else {
            warn!(icon = %self.name, "unknown icon name, suppressing output");
            return Ok(String::new());
        };

        let block = ctx.options().block("icon");
        let mut classes = ClassList::new(&block);
        classes.add_enum(&format!("{}--", block), self.size);

        let mut out = String::new();
        out.push_str("<span");
        push_attr(&mut out, "class", &classes.build());
        match &self.label {
            Some(label) => {
                push_attr(&mut out, "role", "img");
                push_attr(&mut out, "aria-label", label);
            }
            None => push_attr(&mut out, "aria-hidden", "true"),
        }
        push_attr(&mut out, "data-icon", &self.name);
        out.push('>');
        out.push_str(&svg);
        out.push_str("</span>");
        Ok(out)
    }
}
