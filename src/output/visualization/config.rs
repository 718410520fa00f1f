//! Plot configuration for the diagnostic chart

use plotters::prelude::*;

/// Configuration for customizing the diagnostic chart
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels for the full two-panel image
/// - `curve_color`: Color of the measured sweep curves
/// - `cluster_color`: Color of the surviving cluster point overlay
/// - `reference_color`: Color of level and peak reference lines and
///   their annotations
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.width = 1920;
/// config.curve_color = BLACK;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1400)
    pub width: u32,

    /// Image height in pixels (default: 600)
    pub height: u32,

    /// Color of the measured curves (default: GREEN)
    pub curve_color: RGBColor,

    /// Color of the cluster point overlay (default: RED)
    pub cluster_color: RGBColor,

    /// Color of reference lines and annotations (default: BLUE)
    pub reference_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 600,
            curve_color: GREEN,
            cluster_color: RED,
            reference_color: BLUE,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}
