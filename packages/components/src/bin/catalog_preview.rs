//! Renders one of each catalogue component to stdout.
//!
//! Usage:
//!   cargo run --bin catalog_preview --features preview
//!
//! Wires the render context to small in-memory capability implementations
//! so bound fields, validation errors, routes, and icons all resolve.

use std::collections::HashMap;

use anyhow::Result;

use trellis_components::{
    Breadcrumb, BreadcrumbItem, Button, ButtonVariant, Carousel, CarouselSlide, Checkbox, Icon,
    Panel, PanelFooter, PanelHeader, PanelImage, RadioButton, RadioGroup, Select, Sparkline, TabPanel,
    TabStrip, TextInput,
};
use trellis_renderer::{
    DataTypeTag, EnumVariantMeta, FieldBinding, FieldConstraints, FieldMetadata, FieldSource,
    HxDirectives, IconSource, RenderContext, RouteRef, UrlSynthesizer, ValidationSource, ValueType,
};

struct DemoRoutes;

impl UrlSynthesizer for DemoRoutes {
    fn synthesize(&self, route: &RouteRef) -> Option<String> {
        let mut url = match (&route.page, &route.controller, &route.action) {
            (Some(page), _, _) => format!("/{}", page),
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

struct DemoFields(HashMap<String, FieldMetadata>);

impl DemoFields {
    fn new() -> Self {
        let mut fields = HashMap::new();
        fields.insert(
            "Email".to_string(),
            FieldMetadata {
                value: Some("ada@example.test".to_string()),
                required: true,
                data_type: Some(DataTypeTag::Email),
                constraints: FieldConstraints {
                    max_length: Some(254),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        fields.insert(
            "Color".to_string(),
            FieldMetadata {
                value: Some("green".to_string()),
                value_type: ValueType::Enumeration,
                enum_domain: Some(vec![
                    EnumVariantMeta {
                        ident: "Red".to_string(),
                        display: Some("Warm red".to_string()),
                    },
                    EnumVariantMeta {
                        ident: "Green".to_string(),
                        display: Some("Leaf green".to_string()),
                    },
                    EnumVariantMeta {
                        ident: "Blue".to_string(),
                        display: None,
                    },
                ]),
                ..Default::default()
            },
        );
        fields.insert(
            "Subscribed".to_string(),
            FieldMetadata {
                value: Some("true".to_string()),
                value_type: ValueType::Boolean,
                ..Default::default()
            },
        );
        Self(fields)
    }
}

impl FieldSource for DemoFields {
    fn lookup(&self, field: &str) -> Option<FieldMetadata> {
        self.0.get(field).cloned()
    }
}

struct DemoValidation;

impl ValidationSource for DemoValidation {
    fn errors_for(&self, field: &str) -> Vec<String> {
        if field == "Email" {
            vec!["Enter a valid address.".to_string()]
        } else {
            Vec::new()
        }
    }
}

struct DemoIcons;

impl IconSource for DemoIcons {
    fn svg_for(&self, name: &str) -> Option<String> {
        (name == "gear").then(|| {
            r#"<svg viewBox="0 0 16 16"><circle cx="8" cy="8" r="6"></circle></svg>"#.to_string()
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let routes = DemoRoutes;
    let fields = DemoFields::new();
    let validation = DemoValidation;
    let icons = DemoIcons;
    let ctx = RenderContext::new()
        .with_urls(&routes)
        .with_fields(&fields)
        .with_validation(&validation)
        .with_icons(&icons);

    let mut page = String::new();

    page.push_str(&Button {
        label: "Refresh".to_string(),
        variant: ButtonVariant::Primary,
        directives: HxDirectives {
            get: Some(String::new()),
            route: RouteRef {
                controller: Some("orders".to_string()),
                action: Some("list".to_string()),
                ..Default::default()
            },
            target: Some("#orders".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
    .render(&ctx)?);

    page.push_str(&Icon {
        name: "gear".to_string(),
        label: Some("Settings".to_string()),
        ..Default::default()
    }
    .render(&ctx)?);

    page.push_str(&TextInput {
        binding: FieldBinding::bound("Email"),
        ..Default::default()
    }
    .render(&ctx)?);

    page.push_str(&Select {
        binding: FieldBinding::bound("Color"),
        ..Default::default()
    }
    .render(&ctx)?);

    page.push_str(&Checkbox {
        binding: FieldBinding::bound("Subscribed"),
        label: Some("Email me updates".to_string()),
        ..Default::default()
    }
    .render(&ctx)?);

    page.push_str(&RadioGroup {
        binding: FieldBinding {
            name: Some("speed".to_string()),
            value: Some("fast".to_string()),
            ..Default::default()
        },
        legend: Some("Delivery speed".to_string()),
        ..Default::default()
    }
    .render(&ctx, |ctx| {
        let mut body = String::new();
        for (value, label) in [("standard", "Standard"), ("fast", "Fast")] {
            body.push_str(
                &RadioButton {
                    value: value.to_string(),
                    label: label.to_string(),
                    ..Default::default()
                }
                .render(ctx)?,
            );
        }
        Ok(body)
    })?);

    page.push_str(&Panel {
        variant: Some("outlined".to_string()),
        ..Default::default()
    }
    .render(&ctx, |ctx| {
        let mut body = String::new();
        body.push_str(&PanelHeader.render(ctx, |_| Ok("<h2>Orders</h2>".to_string()))?);
        body.push_str(&PanelImage.render(ctx, |_| Ok(r#"<img src="/orders.png" alt="">"#.to_string()))?);
        body.push_str("<p>12 open orders</p>");
        body.push_str(&PanelFooter.render(ctx, |_| Ok("<small>updated just now</small>".to_string()))?);
        Ok(body)
    })?);

    page.push_str(&TabStrip {
        id: "settings".to_string(),
        selected: Some("privacy".to_string()),
        ..Default::default()
    }
    .render(&ctx, |ctx| {
        let mut body = String::new();
        for (key, label) in [("general", "General"), ("privacy", "Privacy")] {
            body.push_str(
                &TabPanel {
                    key: key.to_string(),
                    label: label.to_string(),
                }
                .render(ctx, |_| Ok(format!("<p>{} settings</p>", key)))?,
            );
        }
        Ok(body)
    })?);

    page.push_str(&Breadcrumb::default().render(&ctx, |ctx| {
        BreadcrumbItem {
            label: "Home".to_string(),
            route: RouteRef {
                page: Some("home".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
        .render(ctx)?;
        BreadcrumbItem {
            label: "Orders".to_string(),
            ..Default::default()
        }
        .render(ctx)
    })?);

    page.push_str(&Carousel {
        id: "gallery".to_string(),
    }
    .render(&ctx, |ctx| {
        let mut track = String::new();
        for caption in ["one", "two", "three"] {
            track.push_str(&CarouselSlide.render(ctx, |_| Ok(format!("<p>{}</p>", caption)))?);
        }
        Ok(track)
    })?);

    page.push_str(&Sparkline {
        values: vec![3.0, 7.0, 4.0, 9.0, 6.0],
        label: Some("Orders per day".to_string()),
        ..Default::default()
    }
    .render(&ctx)?);

    println!("{}", page);
    Ok(())
}
