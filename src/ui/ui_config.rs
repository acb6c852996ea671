use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(230, 230, 230),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(17, 17, 17),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
    side_panel_width: 220.0,
};

impl UiConfig {
    /// Frame for Left/Right panels (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }
}

pub struct UiText {
    pub page_title: &'static str,
    pub symbol_prompt: &'static str,
    pub load_button: &'static str,
    pub loading: &'static str,
    pub view_failed: &'static str,
    pub no_data: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    page_title: "Crypto Price Analysis with SMAs",
    symbol_prompt: "Enter Symbol (e.g., BTCUSDT)",
    load_button: "Load",
    loading: "Fetching klines for",
    view_failed: "Could not build this chart:",
    no_data: "Nothing loaded yet.",
};
