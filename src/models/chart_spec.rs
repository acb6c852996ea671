use {
    chrono::{DateTime, Utc},
    serde::Serialize,
    std::collections::BTreeMap,
};

use crate::{
    analysis::SmaSeries,
    config::{PLOT_CONFIG, ViewKind},
    domain::{Candle, Granularity},
};

/// Everything a renderer needs for one view: the displayed candle slice and
/// each SMA co-sliced to the same trailing range.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ViewKind,
    pub symbol: String,
    pub granularity: Granularity,
    pub title: String,
    pub candles: Vec<Candle>,
    /// Keyed by window so iteration is ascending.
    pub smas: BTreeMap<usize, SmaSeries>,
}

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<DateTime<Utc>>,
    /// `None` where an SMA has insufficient history.
    pub y: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: AxisTitle,
    pub yaxis: AxisTitle,
    pub template: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct DocumentTrace<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    mode: &'static str,
    #[serde(flatten)]
    trace: &'a Trace,
}

/// Embeddable line-chart description (`data` + `layout`).
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ChartDocument<'a> {
    data: Vec<DocumentTrace<'a>>,
    layout: ChartLayout,
}

pub fn sma_trace_name(window: usize) -> String {
    format!("{}-SMA", window)
}

impl ChartSpec {
    pub fn x_values(&self) -> Vec<DateTime<Utc>> {
        self.candles.iter().map(|c| c.open_time).collect()
    }

    /// Close price first, then one trace per SMA in ascending window order.
    pub fn traces(&self) -> Vec<Trace> {
        let x = self.x_values();
        let mut traces = Vec::with_capacity(1 + self.smas.len());
        traces.push(Trace {
            name: PLOT_CONFIG.close_trace_name.to_string(),
            x: x.clone(),
            y: self.candles.iter().map(|c| Some(c.close)).collect(),
        });
        for (window, sma) in &self.smas {
            traces.push(Trace {
                name: sma_trace_name(*window),
                x: x.clone(),
                y: sma.values.clone(),
            });
        }
        traces
    }

    pub fn trace_count(&self) -> usize {
        1 + self.smas.len()
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout {
            title: self.title.clone(),
            xaxis: AxisTitle {
                title: PLOT_CONFIG.x_axis_title,
            },
            yaxis: AxisTitle {
                title: PLOT_CONFIG.y_axis_title,
            },
            template: PLOT_CONFIG.template,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let traces = self.traces();
        let document = ChartDocument {
            data: traces
                .iter()
                .map(|trace| DocumentTrace {
                    kind: "scatter",
                    mode: "lines",
                    trace,
                })
                .collect(),
            layout: self.layout(),
        };
        serde_json::to_string_pretty(&document)
    }
}
