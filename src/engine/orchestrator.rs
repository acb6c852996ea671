use anyhow::Result;

use crate::{
    config::{DashboardConfig, ViewKind},
    data::{MarketDataProvider, normalize_symbol},
    engine::{ChartRenderer, run_view},
};

/// How one view of a run ended.
#[derive(Debug)]
pub enum ViewOutcome {
    Rendered {
        kind: ViewKind,
        title: String,
    },
    /// The view aborted; nothing was rendered for it.
    Failed {
        kind: ViewKind,
        title: String,
        error: anyhow::Error,
    },
}

impl ViewOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ViewOutcome::Failed { .. })
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub symbol: String,
    pub outcomes: Vec<ViewOutcome>,
}

impl RunReport {
    pub fn failures(&self) -> impl Iterator<Item = &ViewOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    pub fn all_rendered(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Runs every configured view in page order, one after another.
///
/// Views are independent: a failing fetch or render is recorded in the report
/// and the remaining views still run. Only an invalid config or an unusable
/// symbol aborts the run.
pub async fn run(
    provider: &dyn MarketDataProvider,
    renderer: &mut dyn ChartRenderer,
    symbol: &str,
    config: &DashboardConfig,
) -> Result<RunReport> {
    config.validate()?;
    let symbol = normalize_symbol(symbol)?;
    let mut outcomes = Vec::with_capacity(3);

    for view in config.views() {
        let result = match run_view(provider, &symbol, view).await {
            Ok(spec) => renderer.render(spec),
            Err(e) => Err(anyhow::Error::new(e)),
        };

        let outcome = match result {
            Ok(()) => ViewOutcome::Rendered {
                kind: view.kind,
                title: view.title.clone(),
            },
            Err(error) => {
                log::error!("{} view for {} failed: {:#}", view.kind, symbol, error);
                ViewOutcome::Failed {
                    kind: view.kind,
                    title: view.title.clone(),
                    error,
                }
            }
        };
        outcomes.push(outcome);
    }

    Ok(RunReport { symbol, outcomes })
}
