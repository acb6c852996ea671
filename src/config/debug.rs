//! Debugging feature flags.

pub struct LogFlags {
    /// Log every klines request (symbol, interval, limit) and the row count returned.
    pub log_fetch: bool,

    /// Log each pipeline stage (sma windows, slice lengths, render target).
    pub log_pipeline: bool,

    /// Log chart artifact writes in export mode.
    pub log_export: bool,

    /// Anything about the symbol input and re-runs triggered from the side panel.
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_pipeline: false,
    log_export: true,
    log_selection: true,
};
