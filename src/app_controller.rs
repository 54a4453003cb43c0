use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::errors::NormalizeError;
use crate::file_utils::FileManager;
use crate::normalizer::{NormalizationReport, Normalizer, RuleTables};
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle normalization

/// Per-run switches coming from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Write outputs here instead of next to the inputs
    pub output_dir: Option<PathBuf>,

    /// Replace outputs that already exist
    pub force_overwrite: bool,

    /// Normalize and report without writing anything
    pub dry_run: bool,
}

/// What happened to one input file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Normalized and written to the given path
    Written(PathBuf, NormalizationReport),

    /// Normalized but not written (dry run)
    DryRun(NormalizationReport),

    /// Output already existed
    Skipped(PathBuf),

    /// The file had no events
    Empty,
}

/// Counts for a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    pub empty: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Written(..) | FileOutcome::DryRun(_) => self.processed += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Empty => self.empty += 1,
        }
    }
}

/// Main application controller for subtitle normalization
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Pipeline built once from the config
    normalizer: Normalizer,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let normalization = &config.normalization;
        let tables = RuleTables::with_extra_final_rules(&normalization.extra_rules)
            .context("Failed to compile rule tables")?;
        let normalizer = Normalizer::with_tables(tables, normalization.to_options());

        Ok(Self { config, normalizer })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Output path for `input_file`: `<stem>.<suffix>.<ext>` in `output_dir` or beside the input
    pub fn output_path_for(&self, input_file: &Path, output_dir: Option<&Path>) -> PathBuf {
        let dir = output_dir
            .map(Path::to_path_buf)
            .or_else(|| input_file.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        FileManager::generate_output_path(input_file, dir, &self.config.output.suffix)
    }

    /// Normalize one subtitle file
    pub fn run(&self, input_file: &Path, options: &RunOptions) -> Result<FileOutcome> {
        let start_time = Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = self.output_path_for(input_file, options.output_dir.as_deref());
        if output_path.exists() && !options.force_overwrite && !options.dry_run {
            warn!("Skipping file, output already exists (use -f to force overwrite): {}", output_path.display());
            return Ok(FileOutcome::Skipped(output_path));
        }

        let mut subtitles = SubtitleCollection::from_file(input_file)?;

        let report = match self.normalizer.normalize(&mut subtitles.entries) {
            Ok(report) => report,
            Err(NormalizeError::EmptyInput) => {
                warn!("Nothing to process in {}", input_file.display());
                return Ok(FileOutcome::Empty);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to normalize {}", input_file.display()));
            }
        };

        if options.dry_run {
            info!(
                "Dry run: {} -> {} events in {}",
                report.input_events,
                report.output_events,
                input_file.display()
            );
            return Ok(FileOutcome::DryRun(report));
        }

        subtitles.write_to_file(&output_path)?;
        info!("Success: {} ({})", output_path.display(), Self::format_duration(start_time.elapsed()));

        Ok(FileOutcome::Written(output_path, report))
    }

    /// Run the workflow in folder mode, processing every subtitle file under `input_dir`
    pub fn run_folder(&self, input_dir: &Path, options: &RunOptions) -> Result<RunSummary> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_subtitle_files(input_dir, &self.config.output.suffix)?;
        if files.is_empty() {
            return Err(anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }
        debug!("Found {} subtitle file(s) in {}", files.len(), input_dir.display());

        let folder_pb = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        let mut summary = RunSummary::default();

        for file in &files {
            let file_name = file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            let file_options = RunOptions {
                output_dir: options
                    .output_dir
                    .as_ref()
                    .map(|out| Self::mirror_dir(out, input_dir, file)),
                ..options.clone()
            };

            match self.run(file, &file_options) {
                Ok(outcome) => summary.record(&outcome),
                Err(e) => {
                    error!("Error processing file {}: {:#}", file_name, e);
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed in {}: {} processed, {} skipped, {} empty, {} errors",
            Self::format_duration(start_time.elapsed()),
            summary.processed,
            summary.skipped,
            summary.empty,
            summary.failed
        );

        Ok(summary)
    }

    // Keep the sub-folder layout of `input_dir` under `output_dir`
    fn mirror_dir(output_dir: &Path, input_dir: &Path, file: &Path) -> PathBuf {
        file.parent()
            .and_then(|parent| parent.strip_prefix(input_dir).ok())
            .map(|relative| output_dir.join(relative))
            .unwrap_or_else(|| output_dir.to_path_buf())
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
