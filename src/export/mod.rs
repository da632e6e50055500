//! Output of generated records
//!
//! Records always go to the console; they can additionally be written to
//! a `.json` file (queries only) or a `.csv` file (`query,url` rows).

mod console;

pub use console::{render_record, write_console};

use crate::error::{ConfigError, Result};
use crate::results::ResultRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Export file format, chosen by file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Array of query strings
    Json,
    /// `query,url` header followed by one row per record
    Csv,
}

impl ExportFormat {
    /// Pick the format from a path suffix (`.json` or `.csv`)
    pub fn from_path(path: &Path) -> std::result::Result<Self, ConfigError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        if name.ends_with(".json") {
            Ok(Self::Json)
        } else if name.ends_with(".csv") {
            Ok(Self::Csv)
        } else {
            Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Write records to `path`, truncating any existing file.
///
/// Returns the number of records written.
pub fn export_to_file(records: &[ResultRecord], path: &Path) -> Result<usize> {
    let format = ExportFormat::from_path(path)?;
    debug!("Exporting {} records as {} to {}", records.len(), format.as_str(), path.display());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Json => write_json(records, &mut writer)?,
        ExportFormat::Csv => write_csv(records, &mut writer)?,
    }
    writer.flush()?;

    info!("Exported {} queries to {}", records.len(), path.display());
    Ok(records.len())
}

/// Serialize the bare queries as a pretty-printed JSON array
pub fn write_json<W: Write>(records: &[ResultRecord], writer: W) -> Result<()> {
    let queries: Vec<&str> = records.iter().map(|r| r.query.as_str()).collect();
    serde_json::to_writer_pretty(writer, &queries)?;
    Ok(())
}

/// Serialize records as CSV with a `query,url` header
pub fn write_csv<W: Write>(records: &[ResultRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["query", "url"])?;

    for record in records {
        wtr.write_record([record.query.as_str(), record.url.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
