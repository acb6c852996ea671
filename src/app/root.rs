use {
    eframe::{Frame, Storage, egui::Context},
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{mpsc, mpsc::Receiver},
        thread,
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    app::{AppState, DashboardLoad, LoadingState, PhaseView, ReadyState},
    config::{BinanceApiConfig, DF, DashboardConfig},
    data::BinanceProvider,
    engine::{ChartCollector, run},
    ui::setup_custom_visuals,
};

pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// Fetches, computes and collects all three views for `symbol`.
pub async fn load_dashboard(
    symbol: &str,
    config: &DashboardConfig,
    api: BinanceApiConfig,
) -> DashboardLoad {
    let provider = BinanceProvider::new(api);
    let mut collector = ChartCollector::default();
    match run(&provider, &mut collector, symbol, config).await {
        Ok(report) => DashboardLoad::from_report(report, collector.charts),
        Err(e) => DashboardLoad::fatal(symbol, format!("{:#}", e)),
    }
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // persists across sessions.
    pub(crate) symbol_input: String,
    #[serde(skip)]
    pub(crate) config: DashboardConfig,
    #[serde(skip)]
    pub(crate) api: BinanceApiConfig,
    #[serde(skip)]
    pub(crate) dashboard: Option<DashboardLoad>,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<DashboardLoad>>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            symbol_input: DEFAULT_SYMBOL.to_string(),
            config: DashboardConfig::default(),
            api: BinanceApiConfig::default(),
            dashboard: None,
            data_rx: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli, config: DashboardConfig) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.api = args.api_config();
        if let Some(symbol) = args.symbol {
            app.symbol_input = symbol;
        }
        app.config = config;
        app.state = app.start_load(&cc.egui_ctx);
        app
    }

    /// Kicks off one orchestration run on a background thread with its own runtime.
    pub(crate) fn start_load(&mut self, ctx: &Context) -> AppState {
        let symbol = self.symbol_input.trim().to_string();
        let config = self.config.clone();
        let api = self.api.clone();
        let repaint_ctx = ctx.clone();

        if DF.log_selection {
            log::info!("Loading dashboard for symbol {:?}", symbol);
        }

        let (data_tx, data_rx) = mpsc::channel();
        self.data_rx = Some(data_rx);

        let thread_symbol = symbol.clone();
        thread::spawn(move || {
            let load = match Runtime::new() {
                Ok(rt) => rt.block_on(load_dashboard(&thread_symbol, &config, api)),
                Err(e) => DashboardLoad::fatal(
                    &thread_symbol,
                    format!("failed to start async runtime: {}", e),
                ),
            };
            let _ = data_tx.send(load);
            repaint_ctx.request_repaint();
        });

        AppState::Loading(LoadingState { symbol })
    }

    pub(crate) fn finalize_load_if_ready(&mut self) -> bool {
        if let Some(rx) = &self.data_rx {
            if let Ok(load) = rx.try_recv() {
                if !load.failures.is_empty() || load.fatal.is_some() {
                    log::warn!(
                        "Dashboard for {} loaded with {} failed view(s)",
                        load.symbol,
                        load.failures.len()
                    );
                }
                self.dashboard = Some(load);
                self.data_rx = None;
                return true;
            }
        }
        false
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, state: &mut LoadingState) -> AppState {
        if self.finalize_load_if_ready() {
            return self.tick_ready_state(ctx);
        }
        // Load is disabled while a run is in flight, so no reload can be requested here
        self.render_side_panel(ctx, true);
        self.render_central_panel(ctx, Some(&state.symbol));
        ctx.request_repaint();
        AppState::Loading(state.clone())
    }

    pub(crate) fn tick_ready_state(&mut self, ctx: &Context) -> AppState {
        let reload = self.render_side_panel(ctx, false);
        self.render_central_panel(ctx, None);
        if reload {
            return self.start_load(ctx);
        }
        AppState::Ready(ReadyState)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Ready(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_selection {
            log::info!("💾 SAVE [App]: symbol = {:?}", self.symbol_input);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
