//! Console rendering

use crate::engines::SearchEngine;
use crate::results::ResultRecord;
use std::io::{self, Write};

/// Render one record as printed on the console, without the trailing blank line
pub fn render_record(label: &str, record: &ResultRecord) -> String {
    format!("[{}] {}\n   → {}\n", label, record.query, record.url)
}

/// Print every record followed by a blank line
pub fn write_console<W: Write>(
    mut out: W,
    engine: &SearchEngine,
    records: &[ResultRecord],
) -> io::Result<()> {
    let label = engine.label();
    for record in records {
        writeln!(out, "{}", render_record(&label, record))?;
    }
    out.flush()
}
