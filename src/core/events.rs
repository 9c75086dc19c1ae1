// pixconv/src/core/events.rs
use std::fmt;
use std::path::PathBuf;

/// One input file and the path it converts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyExists,
    /// An earlier job in the same run already targets this output path.
    Collision,
    /// The output path is one of the files being converted.
    InputFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Decode(String),
    Encode(String),
    Io(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Decode(msg) => write!(f, "decode error: {}", msg),
            FailureReason::Encode(msg) => write!(f, "encode error: {}", msg),
            FailureReason::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted,
    Skipped(SkipReason),
    Failed(FailureReason),
}

impl ConversionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ConversionOutcome::Converted => "OK",
            ConversionOutcome::Skipped(SkipReason::AlreadyExists) => "SKIP (exists)",
            ConversionOutcome::Skipped(SkipReason::Collision) => "SKIP (collision)",
            ConversionOutcome::Skipped(SkipReason::InputFile) => "SKIP (input)",
            ConversionOutcome::Failed(_) => "FAIL",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ConversionOutcome::Failed(_))
    }
}

/// Progress report for a single job. `index` is 1-based.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEvent<'a> {
    pub index: usize,
    pub total: usize,
    pub job: &'a ConversionJob,
    pub outcome: &'a ConversionOutcome,
}

impl fmt::Display for ConversionEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{}] {}: {} -> {}",
            self.index,
            self.total,
            self.outcome.label(),
            self.job.input.display(),
            self.job.output.display()
        )?;

        if let ConversionOutcome::Failed(reason) = self.outcome {
            write!(f, " ({})", reason)?;
        }

        Ok(())
    }
}

/// Receives one event per job, in enumeration order.
pub trait EventSink {
    fn on_event(&mut self, event: &ConversionEvent<'_>);
}

impl<F> EventSink for F
where
    F: FnMut(&ConversionEvent<'_>),
{
    fn on_event(&mut self, event: &ConversionEvent<'_>) {
        self(event)
    }
}
