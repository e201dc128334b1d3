//! Plain-text quote writer

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::output::{OutputLayout, QuoteRecord};
use crate::Result;

/// Number of dashes in the separator line written after each record
pub const SEPARATOR_WIDTH: usize = 20;

/// Destination of the quote file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub dir: PathBuf,
    pub file_name: String,
    pub layout: OutputLayout,
}

impl OutputTarget {
    pub fn new(
        dir: impl Into<PathBuf>,
        file_name: impl Into<String>,
        layout: OutputLayout,
    ) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            layout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.output.dir.clone(),
            settings.output.file_name.clone(),
            settings.output.layout,
        )
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Write `records` to `<dir>/<file_name>`, replacing any previous content.
///
/// The directory (and any missing parents) is created first. Returns the
/// path that was written.
pub fn write_quotes(records: &[QuoteRecord], target: &OutputTarget) -> Result<PathBuf> {
    ensure_dir(&target.dir)?;

    let path = target.path();
    tracing::info!("Saving {} quotes to {}", records.len(), path.display());

    let mut writer = BufWriter::new(File::create(&path)?);
    write_records(&mut writer, records, target.layout)?;
    writer.flush()?;

    Ok(path)
}

/// Render records into a string using the same format as the file writer
pub fn render_quotes(records: &[QuoteRecord], layout: OutputLayout) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_records(&mut buf, records, layout);
    String::from_utf8_lossy(&buf).into_owned()
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    tracing::info!("Creating directory: {}", dir.display());
    fs::create_dir_all(dir)?;
    Ok(())
}

fn write_records<W: Write>(
    out: &mut W,
    records: &[QuoteRecord],
    layout: OutputLayout,
) -> std::io::Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let trailer = "\n".repeat(layout.separator_newlines());

    for record in records {
        writeln!(out, "{}{}", layout.quote_prefix(), record.text)?;
        writeln!(out, "{}{}", layout.author_prefix(), record.author)?;
        write!(out, "{}{}", separator, trailer)?;
    }

    Ok(())
}
