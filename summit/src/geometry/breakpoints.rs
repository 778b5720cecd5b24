use serde::{Deserialize, Serialize};

/// Responsive layout class, picked from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    SmallDesktop,
    LargeDesktop,
}

/// Space taken by page chrome plus the smallest usable drawing area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointRule {
    pub reserved_width: f64,
    pub reserved_height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

pub const TABLET_MIN_WIDTH: f64 = 640.0;
pub const SMALL_DESKTOP_MIN_WIDTH: f64 = 1024.0;
pub const LARGE_DESKTOP_MIN_WIDTH: f64 = 1440.0;

// Mobile and tablet stack the list above the chart, desktops put it in a sidebar.
const MOBILE: BreakpointRule =
    BreakpointRule { reserved_width: 0.0, reserved_height: 280.0, min_width: 280.0, min_height: 240.0 };
const TABLET: BreakpointRule =
    BreakpointRule { reserved_width: 0.0, reserved_height: 320.0, min_width: 400.0, min_height: 300.0 };
const SMALL_DESKTOP: BreakpointRule =
    BreakpointRule { reserved_width: 320.0, reserved_height: 160.0, min_width: 500.0, min_height: 400.0 };
const LARGE_DESKTOP: BreakpointRule =
    BreakpointRule { reserved_width: 380.0, reserved_height: 160.0, min_width: 700.0, min_height: 500.0 };

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] =
        [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::SmallDesktop, Breakpoint::LargeDesktop];

    /// Non-finite widths classify as mobile.
    pub fn for_width(viewport_width: f64) -> Breakpoint {
        if viewport_width.is_nan() || viewport_width < TABLET_MIN_WIDTH {
            Breakpoint::Mobile
        } else if viewport_width < SMALL_DESKTOP_MIN_WIDTH {
            Breakpoint::Tablet
        } else if viewport_width < LARGE_DESKTOP_MIN_WIDTH {
            Breakpoint::SmallDesktop
        } else {
            Breakpoint::LargeDesktop
        }
    }

    pub fn rule(self) -> BreakpointRule {
        match self {
            Breakpoint::Mobile => MOBILE,
            Breakpoint::Tablet => TABLET,
            Breakpoint::SmallDesktop => SMALL_DESKTOP,
            Breakpoint::LargeDesktop => LARGE_DESKTOP,
        }
    }
}
