//! Series-to-points normalization for the data-visualization components.

use serde::{Deserialize, Serialize};

/// One mapped point in component-local SVG space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Map a numeric series onto bounded 2-D points.
///
/// X values are evenly spaced from 0 to `width`; a single-element series
/// centers at `width / 2`. Y values are the inverted linear interpolation
/// of each value within `[min, max]` into `[height - padding, padding]` —
/// the minimum lands at the bottom, the maximum at the top. Values are
/// clamped into the range before normalizing. When `min` or `max` is not
/// given it is computed from the series; a degenerate range (`max == min`)
/// is widened to `min + 1`, which pins every point to the bottom edge. An
/// empty series maps to no points.
pub fn map_series(
    values: &[f32],
    min: Option<f32>,
    max: Option<f32>,
    width: f32,
    height: f32,
    padding: f32,
) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = min.unwrap_or_else(|| values.iter().copied().fold(f32::INFINITY, f32::min));
    let mut max = max.unwrap_or_else(|| values.iter().copied().fold(f32::NEG_INFINITY, f32::max));
    if max == min {
        max = min + 1.0;
    }

    let span = max - min;
    let usable_height = height - 2.0 * padding;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if values.len() == 1 {
                width / 2.0
            } else {
                width * i as f32 / (values.len() - 1) as f32
            };
            let t = (value.clamp(min, max) - min) / span;
            Point {
                x,
                y: (height - padding) - t * usable_height,
            }
        })
        .collect()
}
