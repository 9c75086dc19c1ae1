// pixconv/src/reporting.rs
use crate::core::{ConversionEvent, EventSink};
use indicatif::{ProgressBar, ProgressStyle};

/// Writes one log record per job.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &ConversionEvent<'_>) {
        if event.outcome.is_failure() {
            log::warn!("{}", event);
        } else {
            log::info!("{}", event);
        }
    }
}

/// Drives a progress bar; failures are printed above it.
pub struct ProgressSink {
    pb: Option<ProgressBar>,
}

impl ProgressSink {
    pub fn new() -> Self {
        Self { pb: None }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }

    fn bar(&mut self, total: usize) -> &ProgressBar {
        self.pb.get_or_insert_with(|| create_progress_bar(total))
    }
}

impl Default for ProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for ProgressSink {
    fn on_event(&mut self, event: &ConversionEvent<'_>) {
        let pb = self.bar(event.total);

        if event.outcome.is_failure() {
            // hidden bars drop println output
            if pb.is_hidden() {
                log::warn!("{}", event);
            } else {
                pb.println(event.to_string());
            }
        }

        pb.set_position(event.index as u64);
    }
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
    {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => log::debug!("Falling back to default progress style: {}", e),
    }
    pb
}
