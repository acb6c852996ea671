use eframe::egui::{Context, Visuals};

use crate::ui::UI_CONFIG;

/// Formats a price with "Trader Precision".
/// - Large (>=1000): 2 decimals ($95123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 5 decimals, 8 below one cent ($0.00000231)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        format!("${:.8}", price)
    }
}

// Snaps to a human-friendly step (1, 2, 5, 10, 20, 50...)
pub fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than 1 candle
    (nice_step * mag).max(1.0)
}

/// Dark theme for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_precision_scales_with_magnitude() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(95123.5), "$95123.50");
        assert_eq!(format_price(12.48291), "$12.4829");
        assert_eq!(format_price(0.05), "$0.05000");
        assert_eq!(format_price(0.00000231), "$0.00000231");
    }

    #[test]
    fn adaptive_step_snaps_to_nice_values() {
        assert_eq!(calculate_adaptive_step(168.0, 8.0), 20.0);
        assert_eq!(calculate_adaptive_step(52.0, 8.0), 5.0);
        assert_eq!(calculate_adaptive_step(90.0, 8.0), 10.0);
        assert_eq!(calculate_adaptive_step(3.0, 8.0), 1.0);
        assert_eq!(calculate_adaptive_step(0.0, 8.0), 1.0);
    }
}
