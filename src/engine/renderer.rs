use {
    anyhow::{Context, Result},
    std::{
        fs,
        path::PathBuf,
    },
};

use crate::{
    config::{DF, PERSISTENCE},
    models::ChartSpec,
};

/// Terminal stage of a view pipeline. Nothing downstream consumes the result.
pub trait ChartRenderer {
    fn render(&mut self, spec: ChartSpec) -> Result<()>;
}

/// Keeps rendered specs in page order for the interactive dashboard.
#[derive(Default)]
pub struct ChartCollector {
    pub charts: Vec<ChartSpec>,
}

impl ChartRenderer for ChartCollector {
    fn render(&mut self, spec: ChartSpec) -> Result<()> {
        self.charts.push(spec);
        Ok(())
    }
}

/// Writes one JSON chart description per view into `out_dir`.
pub struct JsonChartWriter {
    out_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

impl JsonChartWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("creating export directory {}", out_dir.display()))?;
        Ok(Self {
            out_dir,
            written: Vec::new(),
        })
    }

    pub fn file_name(spec: &ChartSpec) -> String {
        format!(
            "{}_{}.{}",
            spec.symbol,
            spec.kind.to_string().to_lowercase(),
            PERSISTENCE.export.file_extension
        )
    }
}

impl ChartRenderer for JsonChartWriter {
    fn render(&mut self, spec: ChartSpec) -> Result<()> {
        let path = self.out_dir.join(Self::file_name(&spec));
        let json = spec
            .to_json()
            .with_context(|| format!("serializing chart '{}'", spec.title))?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

        if DF.log_export {
            log::info!(
                "Wrote '{}' ({} traces) to {}",
                spec.title,
                spec.trace_count(),
                path.display()
            );
        }
        self.written.push(path);
        Ok(())
    }
}
