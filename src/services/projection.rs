//! Chart projection: maps a numeric series onto padded canvas coordinates
//! without depending on any rendering technology.

use crate::types::{Domain, PlotPoint, Projection};

/// Project a value series onto a `width` x `height` canvas with a fixed
/// inset `padding` on all sides.
///
/// Total function: absent values are filtered by the caller beforehand, an
/// empty slice yields an empty projection, and a flat series substitutes a
/// range of 1 so the line renders centered instead of dividing by zero.
/// x runs left-to-right in series order across `[padding, width - padding]`;
/// y maps `[min, max]` onto `[height - padding, padding]` (inverted, larger
/// values higher). When `zero_line` is set, `zero_y` is the y for value 0
/// under the same mapping; it may land outside the padded area and the
/// caller is responsible for clipping it.
pub fn project(values: &[f64], width: f64, height: f64, padding: f64, zero_line: bool) -> Projection {
    if values.is_empty() {
        return Projection {
            points: Vec::new(),
            zero_y: None,
            domain: Domain { min: 0.0, max: 0.0 },
        };
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Flat series: substitute a range of 1, shifted down half a unit so the
    // line sits at the vertical center.
    let (floor, range) = if max == min {
        (min - 0.5, 1.0)
    } else {
        (min, max - min)
    };

    let inner_width = width - 2.0 * padding;
    let inner_height = height - 2.0 * padding;
    let step = if values.len() > 1 {
        inner_width / (values.len() - 1) as f64
    } else {
        0.0
    };

    let map_y = |value: f64| height - padding - (value - floor) / range * inner_height;

    let points = values
        .iter()
        .enumerate()
        .map(|(i, &value)| PlotPoint {
            x: padding + step * i as f64,
            y: map_y(value),
        })
        .collect();

    Projection {
        points,
        zero_y: zero_line.then(|| map_y(0.0)),
        domain: Domain { min, max },
    }
}
