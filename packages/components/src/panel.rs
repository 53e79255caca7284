//! Panel composite with header, image, and footer slot regions.
//!
//! The panel opens a slot scope, evaluates its child content (whose
//! evaluation is what triggers the region fillers to register), then reads
//! the registry and assembles its regions around the body. An unpopulated
//! region is omitted entirely. Region fillers emit nothing inline — their
//! whole output is the registered fragment.

use tracing::instrument;

use trellis_common::{push_attr, push_attr_opt, ClassList, RenderResult};
use trellis_renderer::{AriaAttrs, HxDirectives, RenderContext};

const HEADER_SLOT: &str = "header";
const IMAGE_SLOT: &str = "image";
const FOOTER_SLOT: &str = "footer";

/// Sectioned container composite.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub id: Option<String>,
    /// BEM variant modifier, e.g. `"outlined"`.
    pub variant: Option<String>,
    pub directives: HxDirectives,
    pub aria: AriaAttrs,
}

impl Panel {
    #[instrument(skip_all, fields(id = ?self.id))]
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        ctx.push_slot_scope();
        let body = children(ctx)?;
        let slots = ctx.pop_slot_scope();

        let block = ctx.options().block("panel");
        let mut classes = ClassList::new(&block);
        classes.add_variant(&block, self.variant.as_deref());

        let mut out = String::new();
        out.push_str("<section");
        push_attr(&mut out, "class", &classes.build());
        push_attr_opt(&mut out, "id", self.id.as_deref());
        self.aria.write_attrs(&mut out);
        self.directives.write_attrs(&mut out, ctx)?;
        out.push('>');

        if let Some(fragment) = slots.get(HEADER_SLOT) {
            out.push_str("<header");
            push_attr(&mut out, "class", &format!("{}__header", block));
            out.push('>');
            out.push_str(fragment);
            out.push_str("</header>");
        }
        if let Some(fragment) = slots.get(IMAGE_SLOT) {
            out.push_str("<figure");
            push_attr(&mut out, "class", &format!("{}__image", block));
            out.push('>');
            out.push_str(fragment);
            out.push_str("</figure>");
        }

        out.push_str("<div");
        push_attr(&mut out, "class", &format!("{}__body", block));
        out.push('>');
        out.push_str(&body);
        out.push_str("</div>");

        if let Some(fragment) = slots.get(FOOTER_SLOT) {
            out.push_str("<footer");
            push_attr(&mut out, "class", &format!("{}__footer", block));
            out.push('>');
            out.push_str(fragment);
            out.push_str("</footer>");
        }

        out.push_str("</section>");
        Ok(out)
    }
}

/// Contributes the panel's header region.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelHeader;

impl PanelHeader {
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        let fragment = children(ctx)?;
        ctx.fill_slot(HEADER_SLOT, fragment);
        Ok(String::new())
    }
}

/// Contributes the panel's image region.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelImage;

impl PanelImage {
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        let fragment = children(ctx)?;
        ctx.fill_slot(IMAGE_SLOT, fragment);
        Ok(String::new())
    }
}

/// Contributes the panel's footer region.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelFooter;

impl PanelFooter {
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        let fragment = children(ctx)?;
        ctx.fill_slot(FOOTER_SLOT, fragment);
        Ok(String::new())
    }
}
