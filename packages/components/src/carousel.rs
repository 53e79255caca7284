//! Carousel composite.
//!
//! Slides render inline (the track is the child content itself) and also
//! register an opaque marker, so the root knows the slide count when it
//! assembles the indicator dots. The prev/next controls are slot regions:
//! children may contribute custom fragments, and the root falls back to
//! default buttons otherwise. All behavior (sliding, wrapping) belongs to
//! the browser-side layer, driven by the `data-carousel-*` contract.

use tracing::instrument;

use trellis_common::{push_attr, ClassList, RenderResult};
use trellis_renderer::{GroupEntry, RenderContext};

const PREV_SLOT: &str = "prev";
const NEXT_SLOT: &str = "next";

/// Slide deck composite; children are [`CarouselSlide`]s plus optional
/// [`CarouselControl`]s.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    pub id: String,
}

impl Carousel {
    #[instrument(skip_all, fields(id = %self.id))]
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        ctx.push_group_scope(self.id.clone(), None);
        ctx.push_slot_scope();
        let track = children(ctx)?;
        let slots = ctx.pop_slot_scope();
        let group = ctx.pop_group_scope();
        let count = group.count();

        let block = ctx.options().block("carousel");
        let mut out = String::new();
        out.push_str("<div");
        push_attr(&mut out, "class", &ClassList::new(&block).build());
        push_attr(&mut out, "id", &self.id);
        push_attr(&mut out, "role", "region");
        push_attr(&mut out, "aria-label", "Carousel");
        push_attr(&mut out, "data-carousel-count", &count.to_string());
        out.push('>');

        out.push_str("<div");
        push_attr(&mut out, "class", &format!("{}__track", block));
        out.push('>');
        out.push_str(&track);
        out.push_str("</div>");

        match slots.get(PREV_SLOT) {
            Some(fragment) => out.push_str(fragment),
            None => write_default_control(&mut out, &block, "prev", "Previous slide"),
        }
        match slots.get(NEXT_SLOT) {
            Some(fragment) => out.push_str(fragment),
            None => write_default_control(&mut out, &block, "next", "Next slide"),
        }

        out.push_str("<div");
        push_attr(&mut out, "class", &format!("{}__dots", block));
        out.push('>');
        for i in 1..=count {
            out.push_str("<button type=\"button\"");
            push_attr(&mut out, "class", &format!("{}__dot", block));
            push_attr(&mut out, "data-carousel-slide", &i.to_string());
            push_attr(&mut out, "aria-label", &format!("Go to slide {}", i));
            out.push_str("></button>");
        }
        out.push_str("</div>");

        out.push_str("</div>");
        Ok(out)
    }
}

fn write_default_control(out: &mut String, block: &str, action: &str, label: &str) {
    let element = format!("{}__control", block);
    let mut classes = ClassList::new(&element);
    classes.add_variant(&element, Some(action));

    out.push_str("<button type=\"button\"");
    push_attr(out, "class", &classes.build());
    push_attr(out, "data-carousel-action", action);
    push_attr(out, "aria-label", label);
    out.push_str("></button>");
}

/// One slide. Renders inline and registers itself so the root can count
/// slides; the first slide starts active. Outside a carousel the slide
/// degrades to index 1 (and is therefore active).
#[derive(Debug, Clone, Default)]
pub struct CarouselSlide;

impl CarouselSlide {
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        let content = children(ctx)?;
        let index = ctx.register_in_group(GroupEntry::default());

        let block = ctx.options().block("carousel");
        let slide = format!("{}__slide", block);
        let mut classes = ClassList::new(&slide);
        classes.add_if(&format!("{}--active", slide), index == 1);

        let mut out = String::new();
        out.push_str("<div");
        push_attr(&mut out, "class", &classes.build());
        push_attr(&mut out, "data-carousel-index", &index.to_string());
        push_attr(&mut out, "role", "group");
        push_attr(&mut out, "aria-label", &format!("Slide {}", index));
        out.push('>');
        out.push_str(&content);
        out.push_str("</div>");
        Ok(out)
    }
}

/// Replaces a default prev/next control with a custom fragment.
#[derive(Debug, Clone, Default)]
pub struct CarouselControl {
    /// `"prev"` or `"next"`; anything else fills an unused slot name and
    /// the defaults stay.
    pub action: String,
}

impl CarouselControl {
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        let fragment = children(ctx)?;
        ctx.fill_slot(&self.action, fragment);
        Ok(String::new())
    }
}
