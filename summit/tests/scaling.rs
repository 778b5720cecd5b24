use summit::geometry::breakpoints::Breakpoint;
use summit::geometry::limits::{DEFAULT_MARGIN_RATIO, DEFAULT_PADDING, DEFAULT_SPACING};
use summit::model::{ContainerDimensions, MaxDimensions, Point};
use summit::scaling::{
    container_dimensions, max_dimensions, scale_factor, scaled_dimensions, svg_view_box, triangle_path,
    DEFAULT_VIEW_BOX,
};
use summit::Mountain;

fn fixture() -> Vec<Mountain> {
    vec![
        Mountain::new("everest", "Mount Everest", 8849.0, 5000.0),
        Mountain::new("k2", "K2", 8611.0, 4200.0),
        Mountain::new("denali", "Denali", 6190.0, 3500.0),
    ]
}

#[test]
fn max_dimensions_of_fixture() {
    let m = max_dimensions(&fixture());
    assert_eq!(m, MaxDimensions { max_height: 8849.0, max_width: 5000.0 });
}

#[test]
fn max_dimensions_axes_are_independent() {
    let ms = vec![Mountain::new("tall", "Tall", 900.0, 10.0), Mountain::new("wide", "Wide", 10.0, 700.0)];
    let m = max_dimensions(&ms);
    assert_eq!(m.max_height, 900.0);
    assert_eq!(m.max_width, 700.0);
}

#[test]
fn max_dimensions_empty_is_zero() {
    assert_eq!(max_dimensions(&[]), MaxDimensions { max_height: 0.0, max_width: 0.0 });
}

#[test]
fn container_for_small_desktop() {
    let c = container_dimensions(1200.0, 800.0, DEFAULT_PADDING);
    assert_eq!(c, ContainerDimensions { width: 800.0, height: 560.0 });
}

#[test]
fn container_per_breakpoint() {
    // mobile: list stacked above, full width
    assert_eq!(container_dimensions(600.0, 900.0, 40.0), ContainerDimensions { width: 520.0, height: 540.0 });
    // tablet
    assert_eq!(container_dimensions(800.0, 1000.0, 40.0), ContainerDimensions { width: 720.0, height: 600.0 });
    // large desktop
    assert_eq!(container_dimensions(1920.0, 1080.0, 40.0), ContainerDimensions { width: 1460.0, height: 840.0 });
}

#[test]
fn container_never_below_floor() {
    for bp in Breakpoint::ALL {
        let rule = bp.rule();
        let vw = match bp {
            Breakpoint::Mobile => 100.0,
            Breakpoint::Tablet => 640.0,
            Breakpoint::SmallDesktop => 1024.0,
            Breakpoint::LargeDesktop => 1440.0,
        };
        let c = container_dimensions(vw, 10.0, 400.0);
        assert_eq!(c.width, rule.min_width, "{:?} width floor", bp);
        assert_eq!(c.height, rule.min_height, "{:?} height floor", bp);
    }
}

#[test]
fn container_tolerates_zero_and_nan_viewport() {
    let c = container_dimensions(0.0, 0.0, DEFAULT_PADDING);
    let floor = Breakpoint::Mobile.rule();
    assert_eq!(c, ContainerDimensions { width: floor.min_width, height: floor.min_height });
    let n = container_dimensions(f64::NAN, f64::INFINITY, DEFAULT_PADDING);
    assert_eq!(n, c);
}

#[test]
fn scale_factor_zero_when_degenerate() {
    let c = ContainerDimensions { width: 800.0, height: 600.0 };
    assert_eq!(scale_factor(MaxDimensions { max_height: 0.0, max_width: 10.0 }, c, 0.1), 0.0);
    assert_eq!(scale_factor(MaxDimensions { max_height: 10.0, max_width: 0.0 }, c, 0.1), 0.0);
    assert_eq!(scale_factor(MaxDimensions::default(), c, 0.1), 0.0);
}

#[test]
fn scale_factor_picks_binding_axis() {
    let c = ContainerDimensions { width: 1000.0, height: 1000.0 };
    // width bound: 800/400 = 2, height 800/100 = 8
    assert_eq!(scale_factor(MaxDimensions { max_height: 100.0, max_width: 400.0 }, c, 0.1), 2.0);
    // height bound
    assert_eq!(scale_factor(MaxDimensions { max_height: 400.0, max_width: 100.0 }, c, 0.1), 2.0);
}

#[test]
fn zero_margin_fills_container() {
    let c = ContainerDimensions { width: 500.0, height: 300.0 };
    assert_eq!(scale_factor(MaxDimensions { max_height: 150.0, max_width: 100.0 }, c, 0.0), 2.0);
}

#[test]
fn scaled_dimensions_are_exact_products() {
    let m = Mountain::new("x", "X", 8849.0, 5000.0);
    let s = 0.0123;
    let d = scaled_dimensions(&m, s);
    assert_eq!(d.scaled_width, 5000.0 * s);
    assert_eq!(d.scaled_height, 8849.0 * s);
    let z = scaled_dimensions(&m, 0.0);
    assert_eq!((z.scaled_width, z.scaled_height), (0.0, 0.0));
}

#[test]
fn triangle_is_apex_up_and_symmetric() {
    let m = Mountain::new("x", "X", 100.0, 60.0);
    let t = triangle_path(&m, 2.0);
    assert_eq!(t.apex, Point::new(60.0, 0.0));
    assert_eq!(t.base_left, Point::new(0.0, 200.0));
    assert_eq!(t.base_right, Point::new(120.0, 200.0));
    assert_eq!(t.apex.x - t.base_left.x, t.base_right.x - t.apex.x);
    assert_eq!(t.to_svg_d(), "M 60 0 L 120 200 L 0 200 Z");
}

#[test]
fn triangle_with_zero_factor_collapses_to_origin() {
    for m in fixture() {
        let t = triangle_path(&m, 0.0);
        assert!(t.is_degenerate());
        assert!(t.points().iter().all(|p| *p == Point::ORIGIN));
    }
}

#[test]
fn view_box_empty_is_default_sentinel() {
    let vb = svg_view_box(&[], 1.0, DEFAULT_SPACING);
    assert_eq!(vb, DEFAULT_VIEW_BOX);
    assert_eq!(vb.to_string(), "0 0 100 100");
    assert_ne!(vb.to_string(), "0 0 0 0");
    assert!(!vb.is_degenerate());
    assert!(svg_view_box(&fixture(), 0.0, 0.0).is_degenerate());
}

#[test]
fn view_box_single_has_no_spacing() {
    let ms = vec![Mountain::new("a", "A", 50.0, 30.0)];
    let vb = svg_view_box(&ms, 2.0, 20.0);
    assert_eq!((vb.min_x, vb.min_y, vb.width, vb.height), (0.0, 0.0, 60.0, 100.0));
}

#[test]
fn view_box_sums_widths_and_spacing() {
    let ms = fixture();
    let s = 0.01;
    let vb = svg_view_box(&ms, s, 20.0);
    let expected: f64 = ms.iter().map(|m| m.width * s).sum::<f64>() + 40.0;
    assert!((vb.width - expected).abs() < 1e-9);
    assert_eq!(vb.height, 8849.0 * s);
}

#[test]
fn end_to_end_three_peaks_on_1200x800() {
    let ms = fixture();
    let max = max_dimensions(&ms);
    assert_eq!(max, MaxDimensions { max_height: 8849.0, max_width: 5000.0 });
    let c = container_dimensions(1200.0, 800.0, DEFAULT_PADDING);
    assert_eq!(c, ContainerDimensions { width: 800.0, height: 560.0 });
    let s = scale_factor(max, c, DEFAULT_MARGIN_RATIO);
    let width_scale: f64 = 640.0 / 5000.0;
    let height_scale: f64 = 448.0 / 8849.0;
    assert_eq!(s, width_scale.min(height_scale));
    assert_eq!(s, 448.0 / 8849.0);
    // tallest peak exactly fills the margin-adjusted height
    assert!((8849.0 * s - 448.0).abs() < 1e-9);
}
