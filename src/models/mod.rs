mod chart_spec;

pub use chart_spec::{AxisTitle, ChartLayout, ChartSpec, Trace, sma_trace_name};
