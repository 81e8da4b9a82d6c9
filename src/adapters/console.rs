use crate::domain::model::Report;
use crate::domain::ports::LogSink;
use crate::utils::error::Result;
use std::io::Write;

/// Prints a report as exactly two lines: title, then content. Generic over
/// the writer so tests can capture the output in a buffer.
pub struct ReportPrinter<W: Write> {
    out: W,
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print(&mut self, report: &Report) -> Result<()> {
        writeln!(self.out, "{}", report.title())?;
        writeln!(self.out, "{}", report.content())?;
        Ok(())
    }
}

/// Console variant of the log sink: one message per line.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> LogSink for ConsoleSink<W> {
    fn log(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }
}
