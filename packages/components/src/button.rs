//! Button primitive.

use trellis_common::{escape_html, push_attr, push_attr_opt, push_flag, ClassList, ClassToken, RenderResult};
use trellis_renderer::{AriaAttrs, HxDirectives, RenderContext};

/// Visual variant of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Standard,
    Primary,
    Danger,
    Ghost,
}

impl ClassToken for ButtonVariant {
    fn token(&self) -> &'static str {
        match self {
            ButtonVariant::Standard => "standard",
            ButtonVariant::Primary => "primary",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Size axis of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

impl ClassToken for ButtonSize {
    fn token(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

/// Standalone action button carrying the full directive and accessibility
/// sets.
#[derive(Debug, Clone, Default)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: Option<ButtonSize>,
    pub id: Option<String>,
    pub disabled: bool,
    pub directives: HxDirectives,
    pub aria: AriaAttrs,
}

impl Button {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let block = ctx.options().block("button");
        let mut classes = ClassList::new(&block);
        classes.add_enum(
            &format!("{}--", block),
            (self.variant != ButtonVariant::Standard).then_some(self.variant),
        );
        classes.add_enum(&format!("{}--", block), self.size);

        let mut out = String::new();
        out.push_str("<button type=\"button\"");
        push_attr(&mut out, "class", &classes.build());
        push_attr_opt(&mut out, "id", self.id.as_deref());
        push_flag(&mut out, "disabled", self.disabled);
        self.aria.write_attrs(&mut out);
        self.directives.write_attrs(&mut out, ctx)?;
        out.push('>');
        out.push_str(&escape_html(&self.label));
        out.push_str("</button>");
        Ok(out)
    }
}
