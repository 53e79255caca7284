//! Cross-component behavior: composites nested inside each other, shared
//! context, and the escaping boundary.

use crate::breadcrumb::{Breadcrumb, BreadcrumbItem};
use crate::button::Button;
use crate::carousel::{Carousel, CarouselSlide};
use crate::inputs::TextInput;
use crate::panel::{Panel, PanelHeader};
use crate::radio::{RadioButton, RadioGroup};
use crate::tabs::{TabPanel, TabStrip};
use trellis_renderer::{
    FieldBinding, FieldMetadata, FieldSource, HxDirectives, RenderContext, RouteRef,
    UrlSynthesizer, ValidationSource,
};

struct DemoRoutes;

impl UrlSynthesizer for DemoRoutes {
    fn synthesize(&self, route: &RouteRef) -> Option<String> {
        match (&route.controller, &route.action) {
            (Some(controller), Some(action)) => Some(format!("/{}/{}", controller, action)),
            _ => None,
        }
    }
}

struct DemoFields;

impl FieldSource for DemoFields {
    fn lookup(&self, field: &str) -> Option<FieldMetadata> {
        (field == "Notes").then(|| FieldMetadata {
            value: Some("running <late>".to_string()),
            ..Default::default()
        })
    }
}

struct DemoValidation;

impl ValidationSource for DemoValidation {
    fn errors_for(&self, field: &str) -> Vec<String> {
        if field == "Notes" {
            vec!["Too \"short\" & vague.".to_string()]
        } else {
            Vec::new()
        }
    }
}

#[test]
fn test_composites_nest_without_leaking_registries() {
    let ctx = RenderContext::new();
    let html = Panel::default()
        .render(&ctx, |ctx| {
            let mut body = String::new();
            body.push_str(&PanelHeader.render(ctx, |_| Ok("<h2>Gallery</h2>".to_string()))?);
            // A carousel (group + slot scopes) nested inside the panel's
            // slot scope.
            body.push_str(&Carousel {
                id: "inner".to_string(),
            }
            .render(ctx, |ctx| {
                let mut track = String::new();
                track.push_str(&CarouselSlide.render(ctx, |_| Ok("slide a".to_string()))?);
                track.push_str(&CarouselSlide.render(ctx, |_| Ok("slide b".to_string()))?);
                Ok(track)
            })?);
            Ok(body)
        })
        .unwrap();

    assert!(html.contains(r#"<header class="ui-panel__header"><h2>Gallery</h2></header>"#));
    assert!(html.contains(r#"data-carousel-count="2""#));
    // The carousel's slot scope never swallowed the panel header, and the
    // panel picked up no carousel slots.
    assert!(!html.contains("ui-panel__footer"));
}

#[test]
fn test_sibling_groups_in_one_render_pass_stay_separate() {
    let ctx = RenderContext::new();

    let tabs = TabStrip {
        id: "first".to_string(),
        ..Default::default()
    }
    .render(&ctx, |ctx| {
        TabPanel {
            key: "a".to_string(),
            label: "A".to_string(),
        }
        .render(ctx, |_| Ok("a body".to_string()))
    })
    .unwrap();

    let crumbs = Breadcrumb::default()
        .render(&ctx, |ctx| {
            BreadcrumbItem {
                label: "Only".to_string(),
                ..Default::default()
            }
            .render(ctx)
        })
        .unwrap();

    assert!(tabs.contains(r#"id="first-tab-1""#));
    // One breadcrumb item, not one plus a leftover tab registration.
    assert_eq!(crumbs.matches("<li").count(), 1);
}

#[test]
fn test_bound_error_value_is_escaped_everywhere() {
    let fields = DemoFields;
    let validation = DemoValidation;
    let ctx = RenderContext::new()
        .with_fields(&fields)
        .with_validation(&validation);

    let html = TextInput {
        binding: FieldBinding::bound("Notes"),
        ..Default::default()
    }
    .render(&ctx)
    .unwrap();

    // Neither the bound value nor the validation message may reach the
    // output unescaped.
    assert!(!html.contains("<late>"));
    assert!(html.contains("running &lt;late&gt;"));
    assert!(html.contains("Too &quot;short&quot; &amp; vague."));
    assert!(html.contains("ui-input--invalid"));
}

#[test]
fn test_radio_group_and_button_directives_share_one_synthesizer() {
    let routes = DemoRoutes;
    let ctx = RenderContext::new().with_urls(&routes);

    let group = RadioGroup {
        binding: FieldBinding {
            name: Some("speed".to_string()),
            value: Some("fast".to_string()),
            ..Default::default()
        },
        directives: HxDirectives {
            post: Some(String::new()),
            route: RouteRef {
                controller: Some("prefs".to_string()),
                action: Some("save".to_string()),
                ..Default::default()
            },
            trigger: Some("change".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let html = group
        .render(&ctx, |ctx| {
            RadioButton {
                value: "fast".to_string(),
                label: "Fast".to_string(),
                ..Default::default()
            }
            .render(ctx)
        })
        .unwrap();

    assert!(html.contains(r#"hx-post="/prefs/save""#));
    assert!(html.contains(r#"hx-trigger="change""#));
    assert!(html.contains(r#"name="speed" value="fast" checked"#));

    let button = Button {
        label: "Reload".to_string(),
        directives: HxDirectives {
            get: Some(String::new()),
            route: RouteRef {
                controller: Some("prefs".to_string()),
                action: Some("show".to_string()),
                ..Default::default()
            },
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(button
        .render(&ctx)
        .unwrap()
        .contains(r#"hx-get="/prefs/show""#));
}
