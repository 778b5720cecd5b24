//! SVG path strings and a standalone document for a computed layout.

use crate::layout::{Layout, PlacedShape};

pub fn placed_path_d(shape: &PlacedShape) -> String {
    shape.geometry.triangle_path.translated(shape.offset_x, shape.offset_y).to_svg_d()
}

pub fn to_svg_paths(layout: &Layout) -> Vec<String> {
    layout.shapes.iter().map(placed_path_d).collect()
}

pub fn to_svg_document(layout: &Layout) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" preserveAspectRatio=\"xMidYMax meet\">",
        layout.view_box
    );
    for shape in &layout.shapes {
        out.push_str(&format!(
            "<path data-id=\"{}\" d=\"{}\"><title>{}</title></path>",
            escape_attr(&shape.id),
            placed_path_d(shape),
            escape_text(&shape.name)
        ));
    }
    out.push_str("</svg>");
    out
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String { escape_text(s).replace('"', "&quot;") }
