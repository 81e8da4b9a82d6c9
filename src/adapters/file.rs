use crate::domain::model::Report;
use crate::domain::ports::LogSink;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persists a report as `title + "\n" + content`, a whole-file overwrite.
/// Failures propagate to the caller unretried.
#[derive(Debug, Clone)]
pub struct ReportFileWriter {
    path: PathBuf,
}

impl ReportFileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn write(&self, report: &Report) -> Result<()> {
        tracing::debug!("writing report to {}", self.path.display());
        fs::write(&self.path, format!("{}\n{}", report.title(), report.content()))?;
        Ok(())
    }
}

/// File variant of the log sink: appends the raw message bytes, no
/// delimiter, no timestamp. The file is created on first use.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LogSink for FileSink {
    fn log(&mut self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(message.as_bytes())?;
        Ok(())
    }
}
