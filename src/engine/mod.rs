mod orchestrator;
mod pipeline;
mod renderer;

pub use orchestrator::{RunReport, ViewOutcome, run};
pub use pipeline::{build_chart_spec, compute_smas, run_view};
pub use renderer::{ChartCollector, ChartRenderer, JsonChartWriter};
