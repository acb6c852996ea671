mod chart_view;
mod panels;
mod ui_config;
mod utils;

pub(crate) use chart_view::show_chart;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::setup_custom_visuals;
pub use utils::format_price;
