// pixconv/src/core/converter.rs
use super::{
    ConversionEvent, ConversionJob, ConversionOutcome, ConversionSummary, ConvertConfig,
    ConvertError, EventSink, Result, SkipReason,
};
use crate::processors::prelude::*;
use crate::utils::PathMapping;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct FolderConverter {
    config: ConvertConfig,
    loader: Loader,
    encoder: Encoder,
}

impl FolderConverter {
    pub fn new(config: ConvertConfig) -> Self {
        let encoder = Encoder::new(config.format);

        Self {
            config,
            loader: Loader::new(),
            encoder,
        }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Enumerates every job for this run without touching the output tree.
    /// Roots are canonicalized when they exist, and an output root nested
    /// inside the input root is never walked.
    pub fn plan(&self) -> Vec<ConversionJob> {
        let input_root = absolute_root(&self.config.input_root);
        let output_root = absolute_root(&self.config.output_root);

        let mut walker = Walker::new(self.config.recursive);
        if output_root != input_root && output_root.starts_with(&input_root) {
            walker = walker.excluding(&output_root);
        }

        let mapping = PathMapping::new(
            &input_root,
            &output_root,
            self.config.format.extension(),
            self.config.recursive,
        );

        walker
            .collect(&input_root)
            .into_iter()
            .map(|input| {
                let output = mapping.map(&input);
                ConversionJob { input, output }
            })
            .collect()
    }

    /// Runs every job in order. Per-file failures end up in the summary;
    /// only failures to create output directories abort the run.
    pub fn convert(&self, sink: &mut dyn EventSink) -> Result<ConversionSummary> {
        let output_root = &self.config.output_root;
        std::fs::create_dir_all(output_root).map_err(|source| ConvertError::CreateOutputRoot {
            path: output_root.clone(),
            source,
        })?;

        let jobs = self.plan();
        let total = jobs.len();

        log::info!(
            "Converting {} file(s) from {} to {}",
            total,
            self.config.input_root.display(),
            self.config.format
        );

        // outputs must never land on a file that is itself an input
        let inputs: HashSet<&Path> = jobs.iter().map(|job| job.input.as_path()).collect();

        let mut summary = ConversionSummary::default();
        let mut claimed: HashSet<&Path> = HashSet::with_capacity(total);

        for (idx, job) in jobs.iter().enumerate() {
            ensure_parent(&job.output)?;

            let outcome = if inputs.contains(job.output.as_path()) {
                ConversionOutcome::Skipped(SkipReason::InputFile)
            } else if !claimed.insert(job.output.as_path()) {
                ConversionOutcome::Skipped(SkipReason::Collision)
            } else if job.output.exists() && !self.config.overwrite {
                ConversionOutcome::Skipped(SkipReason::AlreadyExists)
            } else {
                self.convert_one(job)
            };

            summary.record(&outcome);

            if !self.config.quiet {
                sink.on_event(&ConversionEvent {
                    index: idx + 1,
                    total,
                    job,
                    outcome: &outcome,
                });
            }
        }

        Ok(summary)
    }

    fn convert_one(&self, job: &ConversionJob) -> ConversionOutcome {
        let result = self
            .loader
            .load(&job.input)
            .and_then(|image| self.encoder.save(&image, &job.output));

        match result {
            Ok(()) => ConversionOutcome::Converted,
            Err(reason) => {
                log::debug!("Failed to convert {}: {}", job.input.display(), reason);
                ConversionOutcome::Failed(reason)
            }
        }
    }
}

fn absolute_root(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn ensure_parent(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConvertError::CreateOutputParent {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Validates `config`, then converts the whole tree.
pub fn convert_folder(config: ConvertConfig, sink: &mut dyn EventSink) -> Result<ConversionSummary> {
    config.validate()?;
    FolderConverter::new(config).convert(sink)
}
