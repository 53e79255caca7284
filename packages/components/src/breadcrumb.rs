//! Breadcrumb trail.
//!
//! Items register their caption and link target; the trail assembles the
//! list after child evaluation because only then is the last item known —
//! the last item renders as plain text with `aria-current="page"`, every
//! earlier item as a link.

use tracing::instrument;

use trellis_common::{escape_html, push_attr, ClassList, RenderResult};
use trellis_renderer::{GroupEntry, RenderContext, RouteRef};

/// Navigation trail composite; children are [`BreadcrumbItem`]s.
#[derive(Debug, Clone)]
pub struct Breadcrumb {
    /// Accessible name of the navigation landmark.
    pub label: String,
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self {
            label: "Breadcrumb".to_string(),
        }
    }
}

impl Breadcrumb {
    #[instrument(skip_all)]
    pub fn render(
        &self,
        ctx: &RenderContext,
        children: impl FnOnce(&RenderContext) -> RenderResult<String>,
    ) -> RenderResult<String> {
        ctx.push_group_scope("breadcrumb", None);
        children(ctx)?;
        let group = ctx.pop_group_scope();

        let block = ctx.options().block("breadcrumb");
        let mut out = String::new();
        out.push_str("<nav");
        push_attr(&mut out, "class", &ClassList::new(&block).build());
        push_attr(&mut out, "aria-label", &self.label);
        out.push_str("><ol");
        push_attr(&mut out, "class", &format!("{}__list", block));
        out.push('>');

        let count = group.count();
        for (i, entry) in group.entries().iter().enumerate() {
            let last = i + 1 == count;
            let mut classes = ClassList::new(&format!("{}__item", block));
            classes.add_if(&format!("{}__item--current", block), last);

            out.push_str("<li");
            push_attr(&mut out, "class", &classes.build());
            if last {
                push_attr(&mut out, "aria-current", "page");
                out.push('>');
                out.push_str(&escape_html(&entry.label));
            } else {
                out.push_str("><a");
                push_attr(&mut out, "class", &format!("{}__link", block));
                push_attr(&mut out, "href", entry.link.as_deref().unwrap_or("#"));
                out.push('>');
                out.push_str(&escape_html(&entry.label));
                out.push_str("</a>");
            }
            out.push_str("</li>");
        }

        out.push_str("</ol></nav>");
        Ok(out)
    }
}

/// One step of the trail. The link target is the explicit `href` when
/// given, else a URL synthesized from the symbolic route reference, else a
/// bare `#` placeholder.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
    pub route: RouteRef,
}

impl BreadcrumbItem {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let link = self
            .href
            .clone()
            .or_else(|| ctx.synthesize_url(&self.route));
        ctx.register_in_group(GroupEntry {
            label: self.label.clone(),
            link,
            ..Default::default()
        });
        Ok(String::new())
    }
}
