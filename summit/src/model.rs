use serde::{Deserialize, Serialize};

/// A validated dataset record. Dimensions are positive and finite once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mountain {
    pub id: String,
    pub name: String,
    pub height: f64,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Mountain {
    pub fn new(id: impl Into<String>, name: impl Into<String>, height: f64, width: f64) -> Self {
        Mountain { id: id.into(), name: name.into(), height, width, country: None, region: None }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxDimensions {
    pub max_height: f64,
    pub max_width: f64,
}

impl MaxDimensions {
    pub fn is_degenerate(&self) -> bool { self.max_height == 0.0 || self.max_width == 0.0 }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self { Viewport { width, height } }
}

/// Inputs of a single scale computation. Built per call, never shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    pub max_height: f64,
    pub max_width: f64,
    pub container_width: f64,
    pub container_height: f64,
}

impl ScaleConfig {
    pub fn new(max: MaxDimensions, container: ContainerDimensions) -> Self {
        ScaleConfig {
            max_height: max.max_height,
            max_width: max.max_width,
            container_width: container.width,
            container_height: container.height,
        }
    }}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledDimensions {
    pub scaled_width: f64,
    pub scaled_height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
    pub fn new(x: f64, y: f64) -> Self { Point { x, y } }
}

/// Apex-up isosceles triangle in local coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrianglePath {
    pub apex: Point,
    pub base_left: Point,
    pub base_right: Point,
}

impl TrianglePath {
    pub fn points(&self) -> [Point; 3] { [self.apex, self.base_right, self.base_left] }

    pub fn is_degenerate(&self) -> bool {
        self.points().iter().all(|p| *p == Point::ORIGIN)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> TrianglePath {
        let t = |p: Point| Point::new(p.x + dx, p.y + dy);
        TrianglePath { apex: t(self.apex), base_left: t(self.base_left), base_right: t(self.base_right) }
    }

    pub fn to_svg_d(&self) -> String {
        format!(
            "M {} {} L {} {} L {} {} Z",
            self.apex.x, self.apex.y, self.base_right.x, self.base_right.y, self.base_left.x, self.base_left.y
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledGeometry {
    pub scaled_width: f64,
    pub scaled_height: f64,
    pub triangle_path: TrianglePath,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(width: f64, height: f64) -> Self { ViewBox { min_x: 0.0, min_y: 0.0, width, height } }
    pub fn is_degenerate(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }
}

impl std::fmt::Display for ViewBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}
