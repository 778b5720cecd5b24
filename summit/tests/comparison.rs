use std::rc::Rc;
use summit::json::parse_dataset_str;
use summit::scaling::DEFAULT_VIEW_BOX;
use summit::source::BUNDLED_DATASET;
use summit::svg::placed_path_d;
use summit::{compute_layout, Comparison, Mountain, ScaleOptions, ToggleOutcome, Viewport};

fn session() -> Comparison {
    Comparison::with_dataset(Rc::new(parse_dataset_str(BUNDLED_DATASET).unwrap()))
}

#[test]
fn empty_selection_renders_default_view_box() {
    let c = session();
    let layout = c.layout(Viewport::new(1200.0, 800.0));
    assert!(layout.is_empty());
    assert_eq!(layout.scale_factor, 0.0);
    assert_eq!(layout.view_box, DEFAULT_VIEW_BOX);
    assert_eq!(c.to_svg_paths(Viewport::new(1200.0, 800.0)).len(), 0);
}

#[test]
fn toggle_by_id_uses_dataset_records() {
    let mut c = session();
    assert_eq!(c.toggle("everest"), Some(ToggleOutcome::Added));
    assert_eq!(c.toggle("nowhere"), None);
    assert_eq!(c.selection().mountains()[0].name, "Mount Everest");
    assert_eq!(c.toggle("everest"), Some(ToggleOutcome::Removed));
}

#[test]
fn cap_rejects_eleventh_pick_but_allows_deselect() {
    let mut c = session();
    let ids: Vec<String> = c.dataset().unwrap().iter().map(|m| m.id.clone()).collect();
    for id in &ids[..10] {
        assert_eq!(c.toggle(id), Some(ToggleOutcome::Added));
    }
    assert_eq!(c.toggle(&ids[10]), Some(ToggleOutcome::Rejected));
    assert_eq!(c.toggle(&ids[3]), Some(ToggleOutcome::Removed));
    assert_eq!(c.toggle(&ids[10]), Some(ToggleOutcome::Added));
}

#[test]
fn shapes_sit_on_common_baseline_left_to_right() {
    let mut c = session();
    for id in ["denali", "everest", "k2"] {
        c.toggle(id);
    }
    let layout = c.layout(Viewport::new(1200.0, 800.0));
    assert_eq!(layout.scale_factor, 448.0 / 8849.0);
    let ids: Vec<&str> = layout.shapes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["denali", "everest", "k2"]);
    let mut expected_x = 0.0;
    for s in &layout.shapes {
        assert!((s.offset_x - expected_x).abs() < 1e-9);
        let bottom = s.offset_y + s.geometry.scaled_height;
        assert!((bottom - layout.view_box.height).abs() < 1e-9);
        expected_x += s.geometry.scaled_width + 20.0;
    }
    // tallest one touches the top
    assert_eq!(layout.shapes[1].offset_y, 0.0);
}

#[test]
fn svg_output_translates_paths_and_escapes_names() {
    let ms = vec![
        Mountain::new("a", "A & <B>", 100.0, 50.0),
        Mountain::new("b", "B", 50.0, 50.0),
    ];
    let opts = ScaleOptions { padding: 0.0, margin_ratio: 0.0, spacing: 10.0 };
    let layout = compute_layout(&ms, Viewport::new(1200.0, 800.0), &opts);
    let paths = layout.to_svg_paths();
    assert_eq!(paths.len(), 2);
    let s = layout.scale_factor;
    let second_x = 50.0 * s + 10.0;
    assert!(paths[1].starts_with(&format!("M {} {}", second_x + 25.0 * s, 50.0 * s)));
    let doc = layout.to_svg_document();
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(&format!("viewBox=\"{}\"", layout.view_box)));
    assert!(doc.contains("A &amp; &lt;B&gt;"));
    assert_eq!(doc.matches("<path").count(), 2);
}

#[test]
fn dataset_swap_prunes_missing_ids() {
    let mut c = session();
    c.toggle("everest");
    c.toggle("k2");
    let smaller = parse_dataset_str(r#"{"mountains":[{"id":"k2","name":"K2 (new)","height":8611,"width":4300}]}"#).unwrap();
    c.set_dataset(Rc::new(smaller));
    assert_eq!(c.selection().ids(), vec!["k2"]);
    assert_eq!(c.selection().mountains()[0].width, 4300.0);
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: ScaleOptions = serde_json::from_str(r#"{"spacing": 5}"#).unwrap();
    assert_eq!(opts.spacing, 5.0);
    assert_eq!(opts.padding, ScaleOptions::default().padding);
    assert_eq!(opts.margin_ratio, 0.1);
}

#[test]
fn placed_path_is_offset_triangle() {
    let mut c = session();
    c.toggle("k2");
    c.toggle("denali");
    let layout = c.layout(Viewport::new(1200.0, 800.0));
    let denali = &layout.shapes[1];
    let t = denali.geometry.triangle_path;
    let expected = format!(
        "M {} {} L {} {} L {} {} Z",
        t.apex.x + denali.offset_x,
        t.apex.y + denali.offset_y,
        t.base_right.x + denali.offset_x,
        t.base_right.y + denali.offset_y,
        t.base_left.x + denali.offset_x,
        t.base_left.y + denali.offset_y,
    );
    assert_eq!(placed_path_d(denali), expected);
    assert_eq!(layout.to_svg_paths()[1], expected);
}
