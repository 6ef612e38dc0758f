use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use lexevo_sim::simulation::{LineSink, WriterSink};
use std::io::{self, Write};

use crate::defaults::{PROGRESS_CHARS, PROGRESS_TEMPLATE};

pub fn progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)?
            .progress_chars(PROGRESS_CHARS),
    );
    Ok(pb)
}

/// Primary output: one line per tree node, advancing the progress bar.
pub struct NodeSink<W: Write> {
    inner: WriterSink<W>,
    bar: Option<ProgressBar>,
}

impl<W: Write> NodeSink<W> {
    pub fn new(writer: W, bar: Option<ProgressBar>) -> Self {
        Self {
            inner: WriterSink::new(writer),
            bar,
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> LineSink for NodeSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_line(line)?;
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
        Ok(())
    }
}

/// Diagnostic stream on stderr, kept clear of the progress bar.
pub struct StderrSink {
    bar: Option<ProgressBar>,
}

impl StderrSink {
    pub fn new(bar: Option<ProgressBar>) -> Self {
        Self { bar }
    }
}

impl LineSink for StderrSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let write = || writeln!(io::stderr().lock(), "{line}");
        match &self.bar {
            Some(bar) => bar.suspend(write),
            None => write(),
        }
    }
}
