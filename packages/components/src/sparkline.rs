//! Inline sparkline chart.

use trellis_common::{push_attr, ClassList, RenderResult};
use trellis_renderer::{map_series, RenderContext};

/// Tiny inline line chart over a numeric series.
///
/// The series is normalized through [`map_series`]: evenly spaced x values,
/// inverted y interpolation with edge padding, so larger values draw
/// higher. An empty series renders the chart shell with no line.
#[derive(Debug, Clone)]
pub struct Sparkline {
    pub values: Vec<f32>,
    /// Explicit range; computed from the series when absent.
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    /// Accessible description; the chart is hidden from assistive
    /// technology without one.
    pub label: Option<String>,
}

impl Default for Sparkline {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            min: None,
            max: None,
            width: 120.0,
            height: 32.0,
            padding: 2.0,
            label: None,
        }
    }
}

impl Sparkline {
    pub fn render(&self, ctx: &RenderContext) -> RenderResult<String> {
        let points = map_series(
            &self.values,
            self.min,
            self.max,
            self.width,
            self.height,
            self.padding,
        );

        let block = ctx.options().block("sparkline");
        let mut out = String::new();
        out.push_str("<svg");
        push_attr(&mut out, "class", &ClassList::new(&block).build());
        push_attr(
            &mut out,
            "viewBox",
            &format!("0 0 {} {}", self.width, self.height),
        );
        push_attr(&mut out, "width", &self.width.to_string());
        push_attr(&mut out, "height", &self.height.to_string());
        match &self.label {
            Some(label) => {
                push_attr(&mut out, "role", "img");
                push_attr(&mut out, "aria-label", label);
            }
            None => push_attr(&mut out, "aria-hidden", "true"),
        }
        out.push('>');

        if !points.is_empty() {
            let path: Vec<String> = points
                .iter()
                .map(|point| format!("{},{}", point.x, point.y))
                .collect();
            out.push_str("<polyline");
            push_attr(&mut out, "class", &format!("{}__line", block));
            push_attr(&mut out, "fill", "none");
            push_attr(&mut out, "points", &path.join(" "));
            out.push_str("></polyline>");
        }

        out.push_str("</svg>");
        Ok(out)
    }
}
