use eframe::egui::{Button, CentralPanel, Context, Key, RichText, ScrollArea, SidePanel};

use crate::{
    app::App,
    config::PLOT_CONFIG,
    ui::{UI_CONFIG, UI_TEXT, show_chart},
};

impl App {
    /// Symbol input. Returns true when the user asked for a (re)load.
    pub(crate) fn render_side_panel(&mut self, ctx: &Context, loading: bool) -> bool {
        let mut load_requested = false;

        SidePanel::left("symbol_panel")
            .exact_width(UI_CONFIG.side_panel_width)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                ui.label(RichText::new(UI_TEXT.symbol_prompt).color(UI_CONFIG.colors.label));
                let response = ui.text_edit_singleline(&mut self.symbol_input);
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                let clicked = ui
                    .add_enabled(!loading, Button::new(UI_TEXT.load_button))
                    .clicked();
                load_requested = !loading && (submitted || clicked);

                if let Some(dashboard) = &self.dashboard {
                    ui.separator();
                    ui.label(
                        RichText::new(&dashboard.symbol)
                            .strong()
                            .color(PLOT_CONFIG.color_info),
                    );
                    for chart in &dashboard.charts {
                        ui.label(
                            RichText::new(format!(
                                "{}: {} candles",
                                chart.kind,
                                chart.candles.len()
                            ))
                            .color(PLOT_CONFIG.color_text_subdued),
                        );
                    }
                    for failure in &dashboard.failures {
                        ui.label(
                            RichText::new(format!("{}: failed", failure.kind))
                                .color(PLOT_CONFIG.color_error),
                        );
                    }
                }
            });

        load_requested
    }

    /// Page title then one section per view, in configured order.
    pub(crate) fn render_central_panel(&self, ctx: &Context, loading_symbol: Option<&str>) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(UI_TEXT.page_title)
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                if let Some(symbol) = loading_symbol {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            RichText::new(format!("{} {}...", UI_TEXT.loading, symbol))
                                .italics()
                                .color(PLOT_CONFIG.color_text_neutral),
                        );
                    });
                }

                let Some(dashboard) = &self.dashboard else {
                    ui.label(UI_TEXT.no_data);
                    return;
                };
                if let Some(fatal) = &dashboard.fatal {
                    ui.colored_label(PLOT_CONFIG.color_error, fatal);
                    return;
                }

                ScrollArea::vertical().show(ui, |ui| {
                    for view in self.config.views() {
                        ui.add_space(12.0);
                        ui.heading(
                            RichText::new(&view.title).color(UI_CONFIG.colors.subsection_heading),
                        );
                        if let Some(spec) = dashboard.chart(view.kind) {
                            show_chart(ui, spec);
                        } else if let Some(failure) = dashboard.failure(view.kind) {
                            ui.colored_label(
                                PLOT_CONFIG.color_error,
                                format!("{} {}", UI_TEXT.view_failed, failure.message),
                            );
                        }
                    }
                });
            });
    }
}
