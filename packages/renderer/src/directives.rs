//! Partial-update directive set.
//!
//! Every component can carry the same fixed set of behavior-layer
//! directives. Each directive renders as one attribute iff a value is
//! present; a `None` directive renders nothing at all. Attribute names and
//! the emission order below are a byte-stable contract — the browser-side
//! behavior layer pattern-matches on them.
//!
//! The four-plus-one verb directives (`get`/`post`/`put`/`patch`/`delete`)
//! have one special rule: an explicitly *empty* verb value means "derive
//! the URL from my symbolic route reference". Synthesis goes through the
//! injected [`crate::capabilities::UrlSynthesizer`]; when the reference has
//! no symbolic identifiers or the synthesizer cannot resolve it, the verb
//! attribute is omitted entirely — it never renders as `""`. A non-empty
//! verb value renders verbatim and synthesis is never attempted.

use serde::{Deserialize, Serialize};

use trellis_common::{push_attr, push_attr_bool, push_attr_opt, RenderError, RenderResult};

use crate::capabilities::RouteRef;
use crate::context::RenderContext;

/// The fixed partial-update directive set of one component instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HxDirectives {
    // Verbs: request with the given method, targeting the given URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,

    /// Symbolic route reference consulted when a verb is explicitly empty.
    #[serde(skip_serializing_if = "RouteRef::is_default")]
    pub route: RouteRef,

    // Behavior modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,

    // URL-history flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<bool>,

    // Request payload maps, rendered as JSON objects in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vals: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,

    // Selector and mode modifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_elt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_oob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_oob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<String>,
}

impl RouteRef {
    fn is_default(&self) -> bool {
        *self == RouteRef::default()
    }
}

impl HxDirectives {
    /// Append every present directive to the buffer, in the documented
    /// order: verbs, history flags, behavior modifiers, payload maps,
    /// selector/mode modifiers.
    pub fn write_attrs(&self, out: &mut String, ctx: &RenderContext) -> RenderResult<()> {
        let verbs = [
            ("get", &self.get),
            ("post", &self.post),
            ("put", &self.put),
            ("patch", &self.patch),
            ("delete", &self.delete),
        ];
        for (suffix, value) in verbs {
            self.write_verb(out, ctx, suffix, value.as_deref());
        }

        let dialect = ctx.options().dialect;
        push_attr_bool(out, &dialect.attr("boost"), self.boost);
        push_attr_bool(out, &dialect.attr("push-url"), self.push_url);
        push_attr_bool(out, &dialect.attr("replace-url"), self.replace_url);

        push_attr_opt(out, &dialect.attr("target"), self.target.as_deref());
        push_attr_opt(out, &dialect.attr("swap"), self.swap.as_deref());
        push_attr_opt(out, &dialect.attr("trigger"), self.trigger.as_deref());
        push_attr_opt(out, &dialect.attr("indicator"), self.indicator.as_deref());
        push_attr_opt(out, &dialect.attr("confirm"), self.confirm.as_deref());

        if !self.vals.is_empty() {
            let attr = dialect.attr("vals");
            push_attr(out, &attr, &json_object(&attr, &self.vals)?);
        }
        if !self.headers.is_empty() {
            let attr = dialect.attr("headers");
            push_attr(out, &attr, &json_object(&attr, &self.headers)?);
        }

        push_attr_opt(out, &dialect.attr("disabled-elt"), self.disabled_elt.as_deref());
        push_attr_opt(out, &dialect.attr("encoding"), self.encoding.as_deref());
        push_attr_opt(out, &dialect.attr("ext"), self.ext.as_deref());
        push_attr_opt(out, &dialect.attr("include"), self.include.as_deref());
        push_attr_opt(out, &dialect.attr("params"), self.params.as_deref());
        push_attr_opt(out, &dialect.attr("select"), self.select.as_deref());
        push_attr_opt(out, &dialect.attr("select-oob"), self.select_oob.as_deref());
        push_attr_opt(out, &dialect.attr("swap-oob"), self.swap_oob.as_deref());
        push_attr_opt(out, &dialect.attr("sync"), self.sync.as_deref());

        Ok(())
    }

    fn write_verb(&self, out: &mut String, ctx: &RenderContext, suffix: &str, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        let name = ctx.options().dialect.attr(suffix);
        if value.is_empty() {
            // Empty means "synthesize from the route reference"; omission on
            // failure is the contract, not an error.
            if let Some(url) = ctx.synthesize_url(&self.route) {
                push_attr(out, &name, &url);
            }
        } else {
            push_attr(out, &name, value);
        }
    }
}

/// Serialize a payload map to a JSON object, preserving insertion order.
/// Keys and values are JSON-escaped individually; `serde_json` has no
/// insertion-ordered map without extra features, so the object is composed
/// pair by pair.
fn json_object(attribute: &str, pairs: &[(String, String)]) -> RenderResult<String> {
    let mut out = String::from("{");
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let key = serde_json::to_string(key).map_err(|e| RenderError::Payload {
            attribute: attribute.to_string(),
            message: e.to_string(),
        })?;
        let value = serde_json::to_string(value).map_err(|e| RenderError::Payload {
            attribute: attribute.to_string(),
            message: e.to_string(),
        })?;
        out.push_str(&key);
        out.push(':');
        out.push_str(&value);
    }
    out.push('}');
    Ok(out)
}
