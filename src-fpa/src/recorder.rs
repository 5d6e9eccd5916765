use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::history::History;

/// Writes run traces as CSV, one file per objective function.
#[derive(Debug, Clone)]
pub struct OptimizationRecorder {
    /// Function name (used for CSV filename)
    function_name: String,
}

impl OptimizationRecorder {
    pub fn new(function_name: &str) -> Self {
        Self { function_name: function_name.to_string() }
    }

    pub fn csv_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.csv", self.function_name))
    }

    /// Save the history to `<output_dir>/<function_name>.csv`.
    ///
    /// Columns: `iteration,x0..xn,best_fit,is_improvement`. An empty history
    /// produces an empty file.
    pub fn save_to_csv(&self, history: &History, output_dir: &Path) -> Result<PathBuf> {
        create_dir_all(output_dir)?;
        let path = self.csv_path(output_dir);
        let mut writer = csv::Writer::from_path(&path)?;

        let Some(first) = history.records().first() else {
            writer.flush()?;
            return Ok(path);
        };

        let mut header = vec!["iteration".to_string()];
        header.extend((0..first.best_position.len()).map(|i| format!("x{}", i)));
        header.push("best_fit".to_string());
        header.push("is_improvement".to_string());
        writer.write_record(&header)?;

        for record in history.records() {
            let mut row = Vec::with_capacity(header.len());
            row.push(record.iteration.to_string());
            row.extend(record.best_position.iter().map(|x| format!("{:.16}", x)));
            row.push(format!("{:.16}", record.best_fit));
            row.push(record.is_improvement.to_string());
            writer.write_record(&row)?;
        }
        writer.flush()?;

        log::info!("Recorded {} iterations to {}", history.len(), path.display());
        Ok(path)
    }
}
