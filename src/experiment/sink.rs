//! Persistence of aggregate result rows.

use super::harness::AggregateResult;
use crate::error::PersistenceError;
use chrono::{Local, NaiveDate};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Destination for the aggregate row of each iteration budget.
pub trait ResultSink {
    /// Appends one row: one aggregate per strategy, in harness order.
    fn append(&mut self, row: &[AggregateResult]) -> Result<(), PersistenceError>;
}

/// Appends rows to `<output_dir>/<yyyy-MM-dd>/<file_name>` as headerless
/// CSV records.
///
/// Each record holds `tag, budget, mean_fitness, mean_elapsed_seconds` for
/// every strategy in turn. Missing directories are created and an existing
/// file is appended to, never truncated.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    output_dir: PathBuf,
    file_name: String,
    date: Option<NaiveDate>,
}

impl CsvFileSink {
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
            date: None,
        }
    }

    /// Pins the date directory instead of using today's local date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Full path of the file the next row goes to.
    pub fn path(&self) -> PathBuf {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        self.output_dir
            .join(date.format("%Y-%m-%d").to_string())
            .join(&self.file_name)
    }
}

impl ResultSink for CsvFileSink {
    fn append(&mut self, row: &[AggregateResult]) -> Result<(), PersistenceError> {
        let path = self.path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record(row.iter().flat_map(|r| {
            [
                r.strategy.tag().to_string(),
                r.iteration_budget.to_string(),
                r.mean_fitness.to_string(),
                r.mean_elapsed_seconds.to_string(),
            ]
        }))?;
        wtr.flush()?;
        Ok(())
    }
}

/// Keeps rows in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub rows: Vec<Vec<AggregateResult>>,
}

impl ResultSink for MemorySink {
    fn append(&mut self, row: &[AggregateResult]) -> Result<(), PersistenceError> {
        self.rows.push(row.to_vec());
        Ok(())
    }
}
