//! Directive rendering: presence, absence, and the URL-synthesis fallback.

use crate::capabilities::{RouteRef, UrlSynthesizer};
use crate::context::RenderContext;
use crate::directives::HxDirectives;
use crate::options::{Dialect, RenderOptions};

/// Synthesizer that resolves `controller/action` and `page` style routes
/// the way a host router would.
struct StaticRoutes;

impl UrlSynthesizer for StaticRoutes {
    fn synthesize(&self, route: &RouteRef) -> Option<String> {
        let mut url = match (&route.page, &route.controller, &route.action) {
            (Some(page), _, _) => format!("/{}", page.trim_start_matches('/')),
            (None, Some(controller), Some(action)) => format!("/{}/{}", controller, action),
            _ => return None,
        };
        for (i, (key, value)) in route.params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        Some(url)
    }
}

fn render(directives: &HxDirectives, ctx: &RenderContext) -> String {
    let mut out = String::new();
    directives.write_attrs(&mut out, ctx).unwrap();
    out
}

#[test]
fn test_absent_directives_render_no_attributes() {
    let ctx = RenderContext::new();
    assert_eq!(render(&HxDirectives::default(), &ctx), "");
}

#[test]
fn test_explicit_verb_renders_verbatim() {
    let ctx = RenderContext::new().with_urls(&StaticRoutes);
    let directives = HxDirectives {
        get: Some("/orders/recent".to_string()),
        // A route reference is present but must be ignored for a non-empty
        // verb.
        route: RouteRef {
            controller: Some("orders".to_string()),
            action: Some("stale".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(render(&directives, &ctx), r#" hx-get="/orders/recent""#);
}

#[test]
fn test_empty_verb_synthesizes_from_route() {
    let ctx = RenderContext::new().with_urls(&StaticRoutes);
    let directives = HxDirectives {
        post: Some(String::new()),
        route: RouteRef {
            controller: Some("cart".to_string()),
            action: Some("add".to_string()),
            params: vec![("sku".to_string(), "A-100".to_string())],
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(render(&directives, &ctx), r#" hx-post="/cart/add?sku=A-100""#);
}

#[test]
fn test_empty_verb_with_page_identifier_synthesizes() {
    let ctx = RenderContext::new().with_urls(&StaticRoutes);
    let directives = HxDirectives {
        get: Some(String::new()),
        route: RouteRef {
            page: Some("inventory".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(render(&directives, &ctx), r#" hx-get="/inventory""#);
}

#[test]
fn test_empty_verb_without_identifiers_is_omitted() {
    let ctx = RenderContext::new().with_urls(&StaticRoutes);
    let directives = HxDirectives {
        get: Some(String::new()),
        // A bare parameter bag is not a symbolic identifier.
        route: RouteRef {
            params: vec![("id".to_string(), "7".to_string())],
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(render(&directives, &ctx), "");
}

#[test]
fn test_empty_verb_without_synthesizer_is_omitted() {
    let ctx = RenderContext::new();
    let directives = HxDirectives {
        delete: Some(String::new()),
        route: RouteRef {
            page: Some("sessions".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(render(&directives, &ctx), "");
}

#[test]
fn test_failed_synthesis_is_omitted() {
    struct NoRoutes;
    impl UrlSynthesizer for NoRoutes {
        fn synthesize(&self, _route: &RouteRef) -> Option<String> {
            None
        }
    }
    let ctx = RenderContext::new().with_urls(&NoRoutes);
    let directives = HxDirectives {
        put: Some(String::new()),
        route: RouteRef {
            page: Some("missing".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(render(&directives, &ctx), "");
}

#[test]
fn test_modifiers_render_in_documented_order() {
    let ctx = RenderContext::new();
    let directives = HxDirectives {
        get: Some("/poll".to_string()),
        target: Some("#list".to_string()),
        swap: Some("outerHTML".to_string()),
        trigger: Some("every 2s".to_string()),
        indicator: Some(".spinner".to_string()),
        confirm: Some("Are you sure?".to_string()),
        push_url: Some(true),
        boost: Some(false),
        sync: Some("closest form:abort".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render(&directives, &ctx),
        r##" hx-get="/poll" hx-boost="false" hx-push-url="true" hx-target="#list" hx-swap="outerHTML" hx-trigger="every 2s" hx-indicator=".spinner" hx-confirm="Are you sure?" hx-sync="closest form:abort""##
    );
}

#[test]
fn test_payload_maps_render_as_insertion_ordered_json() {
    let ctx = RenderContext::new();
    let directives = HxDirectives {
        post: Some("/save".to_string()),
        vals: vec![
            ("zeta".to_string(), "1".to_string()),
            ("alpha".to_string(), "two \"quoted\"".to_string()),
        ],
        headers: vec![("X-Requested-With".to_string(), "trellis".to_string())],
        ..Default::default()
    };
    assert_eq!(
        render(&directives, &ctx),
        r#" hx-post="/save" hx-vals="{&quot;zeta&quot;:&quot;1&quot;,&quot;alpha&quot;:&quot;two \&quot;quoted\&quot;&quot;}" hx-headers="{&quot;X-Requested-With&quot;:&quot;trellis&quot;}""#
    );
}

#[test]
fn test_data_dialect_renames_every_attribute() {
    let options = RenderOptions {
        dialect: Dialect::DataHx,
        ..Default::default()
    };
    let ctx = RenderContext::new().with_options(options);
    let directives = HxDirectives {
        get: Some("/poll".to_string()),
        target: Some("#list".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render(&directives, &ctx),
        r##" data-hx-get="/poll" data-hx-target="#list""##
    );
}

#[test]
fn test_confirm_prompt_is_escaped() {
    let ctx = RenderContext::new();
    let directives = HxDirectives {
        delete: Some("/rows/5".to_string()),
        confirm: Some(r#"Delete "row 5" & friends?"#.to_string()),
        ..Default::default()
    };
    assert_eq!(
        render(&directives, &ctx),
        r#" hx-delete="/rows/5" hx-confirm="Delete &quot;row 5&quot; &amp; friends?""#
    );
}
