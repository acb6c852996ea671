use eframe::egui::Ui;
use egui_plot::{AxisHints, GridMark, HPlacement, Legend, Line, Plot, PlotPoints, VPlacement};

use crate::{
    config::PLOT_CONFIG,
    models::{ChartSpec, Trace},
    ui::utils::{calculate_adaptive_step, format_price},
    utils::TimeUtils,
};

// Helper to build the Time Axis. X values are open times in epoch ms.
fn create_time_axis(spacing_ms: i64) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(PLOT_CONFIG.x_axis_title)
        .formatter(move |mark, _range| TimeUtils::format_axis_label(mark.value as i64, spacing_ms))
        .placement(VPlacement::Bottom)
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(PLOT_CONFIG.y_axis_title)
        .formatter(|mark, _range| format_price(mark.value))
        .placement(HPlacement::Right)
}

/// Undefined SMA positions are dropped so the line starts where history allows.
pub(crate) fn trace_points(trace: &Trace) -> Vec<[f64; 2]> {
    trace
        .x
        .iter()
        .zip(&trace.y)
        .filter_map(|(t, y)| y.map(|v| [t.timestamp_millis() as f64, v]))
        .collect()
}

pub(crate) fn show_chart(ui: &mut Ui, spec: &ChartSpec) {
    let spacing_ms = spec.granularity.interval_ms();
    let traces = spec.traces();

    Plot::new(format!("chart_{}_{}", spec.symbol, spec.kind))
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default())
        .custom_x_axes(vec![create_time_axis(spacing_ms)])
        .custom_y_axes(vec![create_price_axis()])
        .label_formatter(move |name, value| {
            if name.is_empty() {
                return String::new();
            }
            format!(
                "{}\n{}\n{}",
                name,
                TimeUtils::format_axis_label(value.x as i64, spacing_ms),
                format_price(value.y)
            )
        })
        .x_grid_spacer(move |input| {
            let (min, max) = input.bounds;
            let candles_in_view = (max - min) / spacing_ms as f64;
            let step = calculate_adaptive_step(candles_in_view, PLOT_CONFIG.x_axis_divisions as f64)
                * spacing_ms as f64;

            let start = (min / step).ceil() as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        .show(ui, |plot_ui| {
            for (idx, trace) in traces.iter().enumerate() {
                // Trace 0 is the close price, the rest are SMAs
                let (color, width) = if idx == 0 {
                    (PLOT_CONFIG.close_price_color, PLOT_CONFIG.close_price_line_width)
                } else {
                    (PLOT_CONFIG.sma_color(idx - 1), PLOT_CONFIG.sma_line_width)
                };
                plot_ui.line(
                    Line::new(trace.name.clone(), PlotPoints::new(trace_points(trace)))
                        .color(color)
                        .width(width),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn undefined_positions_are_skipped() {
        let x = (0..3)
            .map(|i| DateTime::from_timestamp_millis(i * 1000).unwrap())
            .collect();
        let trace = Trace {
            name: "3-SMA".to_string(),
            x,
            y: vec![None, Some(2.0), Some(3.0)],
        };
        assert_eq!(trace_points(&trace), vec![[1000.0, 2.0], [2000.0, 3.0]]);
    }
}
