use crate::geometry::limits::{DEFAULT_MARGIN_RATIO, DEFAULT_PADDING, DEFAULT_SPACING};
use crate::model::{Mountain, ScaleConfig, ScaledGeometry, ViewBox, Viewport};
use crate::scaling;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Layout knobs. Missing fields fall back to the defaults when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleOptions {
    pub padding: f64,
    pub margin_ratio: f64,
    pub spacing: f64,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        ScaleOptions { padding: DEFAULT_PADDING, margin_ratio: DEFAULT_MARGIN_RATIO, spacing: DEFAULT_SPACING }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedShape {
    pub id: String,
    pub name: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub geometry: ScaledGeometry,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub scale_config: ScaleConfig,
    pub scale_factor: f64,
    pub view_box: ViewBox,
    pub shapes: Vec<PlacedShape>,
}

impl Layout {
    pub fn is_empty(&self) -> bool { self.shapes.is_empty() }
}

/// Runs the whole scaling pipeline for one selection and viewport. Shapes
/// sit left to right in input order with their bases on the bottom edge of
/// the view box.
pub fn compute_layout(mountains: &[Mountain], viewport: Viewport, opts: &ScaleOptions) -> Layout {
    let max = scaling::max_dimensions(mountains);
    let container = scaling::container_dimensions(viewport.width, viewport.height, opts.padding);
    let factor = scaling::scale_factor(max, container, opts.margin_ratio);
    let view_box = scaling::svg_view_box(mountains, factor, opts.spacing);

    let mut shapes = Vec::with_capacity(mountains.len());
    let mut x = 0.0;
    for m in mountains {
        let geometry = scaling::scaled_geometry(m, factor);
        shapes.push(PlacedShape {
            id: m.id.clone(),
            name: m.name.clone(),
            offset_x: x,
            offset_y: view_box.height - geometry.scaled_height,
            geometry,
        });
        x += geometry.scaled_width + opts.spacing;
    }
    trace!(count = shapes.len(), factor, view_box = %view_box, "layout computed");
    Layout { scale_config: ScaleConfig::new(max, container), scale_factor: factor, view_box, shapes }
}
