//! Proportional scaling: one shared factor fits every selected mountain into
//! the drawing area while keeping their relative sizes.
//!
//! Every function here is pure and total over finite, non-negative input.
//! Empty selections and zero dimensions have explicit degenerate outputs
//! instead of errors.

use crate::geometry::breakpoints::Breakpoint;
use crate::geometry::limits::{sanitize_extent, DEFAULT_VIEW_BOX_SIZE, MAX_MARGIN_RATIO};
use crate::geometry::tolerance::clamp;
use crate::model::{
    ContainerDimensions, MaxDimensions, Mountain, Point, ScaledDimensions, ScaledGeometry,
    TrianglePath, ViewBox,
};

pub const DEFAULT_VIEW_BOX: ViewBox = ViewBox {
    min_x: 0.0,
    min_y: 0.0,
    width: DEFAULT_VIEW_BOX_SIZE,
    height: DEFAULT_VIEW_BOX_SIZE,
};

/// Element-wise maxima; the tallest mountain need not be the widest.
pub fn max_dimensions(mountains: &[Mountain]) -> MaxDimensions {
    mountains.iter().fold(MaxDimensions::default(), |acc, m| MaxDimensions {
        max_height: acc.max_height.max(m.height),
        max_width: acc.max_width.max(m.width),
    })
}

pub fn container_dimensions(viewport_width: f64, viewport_height: f64, padding: f64) -> ContainerDimensions {
    let rule = Breakpoint::for_width(viewport_width).rule();
    let vw = sanitize_extent(viewport_width);
    let vh = sanitize_extent(viewport_height);
    let pad = 2.0 * sanitize_extent(padding);
    ContainerDimensions {
        width: (vw - rule.reserved_width - pad).max(rule.min_width),
        height: (vh - rule.reserved_height - pad).max(rule.min_height),
    }
}

/// Tighter axis wins. `margin_ratio` is reserved on each side of each axis.
pub fn scale_factor(max: MaxDimensions, container: ContainerDimensions, margin_ratio: f64) -> f64 {
    if max.is_degenerate() {
        return 0.0;
    }
    let margin = if margin_ratio.is_nan() { 0.0 } else { clamp(margin_ratio, 0.0, MAX_MARGIN_RATIO) };
    let usable = 1.0 - 2.0 * margin;
    let available_width = container.width * usable;
    let available_height = container.height * usable;
    let width_scale = available_width / max.max_width;
    let height_scale = available_height / max.max_height;
    width_scale.min(height_scale)
}

pub fn scaled_dimensions(mountain: &Mountain, scale_factor: f64) -> ScaledDimensions {
    ScaledDimensions {
        scaled_width: mountain.width * scale_factor,
        scaled_height: mountain.height * scale_factor,
    }
}

pub fn triangle_path(mountain: &Mountain, scale_factor: f64) -> TrianglePath {
    let ScaledDimensions { scaled_width: w, scaled_height: h } = scaled_dimensions(mountain, scale_factor);
    TrianglePath {
        apex: Point::new(w / 2.0, 0.0),
        base_left: Point::new(0.0, h),
        base_right: Point::new(w, h),
    }
}

pub fn scaled_geometry(mountain: &Mountain, scale_factor: f64) -> ScaledGeometry {
    let dims = scaled_dimensions(mountain, scale_factor);
    ScaledGeometry {
        scaled_width: dims.scaled_width,
        scaled_height: dims.scaled_height,
        triangle_path: triangle_path(mountain, scale_factor),
    }
}

/// Bounding box of the triangles laid side by side with `spacing` between them.
pub fn svg_view_box(mountains: &[Mountain], scale_factor: f64, spacing: f64) -> ViewBox {
    if mountains.is_empty() {
        return DEFAULT_VIEW_BOX;
    }
    let mut width = 0.0;
    let mut height: f64 = 0.0;
    for m in mountains {
        let dims = scaled_dimensions(m, scale_factor);
        width += dims.scaled_width;
        height = height.max(dims.scaled_height);
    }
    width += spacing * (mountains.len() - 1) as f64;
    ViewBox::new(width, height)
}
