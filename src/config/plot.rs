//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub close_price_color: Color32,
    /// Cycled through in ascending window order.
    pub sma_colors: &'static [Color32],
    pub close_price_line_width: f32,
    pub sma_line_width: f32,
    /// Height of each chart in the dashboard (pixels)
    pub chart_height: f32,
    /// Target number of labelled marks on the date axis
    pub x_axis_divisions: u32,

    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub close_trace_name: &'static str,
    /// Theme name written into exported chart artifacts
    pub template: &'static str,

    // --- SEMANTIC COLORS ---
    pub color_error: Color32,
    pub color_info: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    close_price_color: Color32::from_rgb(99, 110, 250),
    sma_colors: &[
        Color32::from_rgb(239, 85, 59),  // Red
        Color32::from_rgb(0, 204, 150),  // Teal
        Color32::from_rgb(171, 99, 250), // Purple
        Color32::from_rgb(255, 161, 90), // Orange
        Color32::from_rgb(25, 211, 243), // Cyan
    ],
    close_price_line_width: 2.0,
    sma_line_width: 1.5,
    chart_height: 360.0,
    x_axis_divisions: 8,

    x_axis_title: "Date",
    y_axis_title: "Price",
    close_trace_name: "Close Price",
    template: "plotly_dark",

    color_error: Color32::from_rgb(255, 80, 80),
    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};

impl PlotConfig {
    pub fn sma_color(&self, trace_idx: usize) -> Color32 {
        self.sma_colors[trace_idx % self.sma_colors.len()]
    }
}
