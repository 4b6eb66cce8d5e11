//! Live notifications printed while the scan is still running.

use crate::types::Port;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
    Silent,
}

/// Prints `Port <n> is open` the moment a worker finds one, and optionally
/// drives a progress bar over completed batches.
///
/// Lines are printed in discovery order, which is not port order.
#[derive(Debug, Clone)]
pub struct LiveOutput {
    stream: Stream,
    progress: Option<ProgressBar>,
}

impl LiveOutput {
    /// Print live lines to stdout.
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
            progress: None,
        }
    }

    /// Print live lines to stderr, keeping stdout free for machine output.
    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
            progress: None,
        }
    }

    /// Print nothing.
    pub fn silent() -> Self {
        Self {
            stream: Stream::Silent,
            progress: None,
        }
    }

    /// Show a progress bar over `total_batches`. Live lines are then printed
    /// above the bar so they do not tear it.
    pub fn with_progress(mut self, total_batches: usize) -> Self {
        let pb = ProgressBar::new(total_batches as u64);
        if let Ok(progress_style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches ({percent}%) {msg}",
        ) {
            pb.set_style(progress_style.progress_chars("=>-"));
        }
        self.progress = Some(pb);
        self
    }

    /// Announce an open port.
    pub fn port_open(&self, port: Port) {
        if self.stream == Stream::Silent {
            return;
        }

        let line = format!("Port {} is open", style(port).green().bold());
        match (&self.progress, self.stream) {
            (Some(pb), _) => pb.println(line),
            (None, Stream::Stdout) => println!("{}", line),
            (None, _) => eprintln!("{}", line),
        }
    }

    /// Mark one batch as finished.
    pub fn batch_done(&self) {
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    /// Remove the progress bar, if any.
    pub fn finish(&self) {
        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }
    }
}
