/*!
 * Pipeline orchestrator for the normalization passes.
 *
 * Fixed order, each step working on the output of the previous one:
 * 1. line-break cleanup
 * 2. symbol, tag and speaker-label cleanup
 * 3. dual-speaker split
 * 4. empty / ruby filter
 * 5. identical-text merge
 * 6. identical-timing merge
 * 7. katakana and alphanumeric width tables
 * 8. final adjustment rules (plus extra rules from the config)
 * 9. isolated half-width widening
 * 10. uniform style
 */

use log::{debug, info, warn};

use super::filter::LineFilter;
use super::merger::LineMerger;
use super::rules::{RuleSpec, RuleTable};
use super::splitter::LineSplitter;
use super::tables::{CLEANUP_RULES, FINAL_RULES, SYMBOL_RULES};
use super::width;
use crate::errors::{NormalizeError, RuleError};
use crate::subtitle_processor::{SubtitleEntry, DEFAULT_STYLE};

/// Options that are not rule data.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    /// Style applied to every dialogue line at the end
    pub target_style: String,

    /// Style whose lines are dropped as ruby annotations
    pub annotation_style: String,

    /// Actor value written on both halves of a split line
    pub split_marker: String,

    /// Joins texts merged by the timing pass
    pub merge_separator: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            target_style: DEFAULT_STYLE.to_string(),
            annotation_style: "Rubi".to_string(),
            split_marker: "split".to_string(),
            merge_separator: "\u{3000}".to_string(),
        }
    }
}

/// Every rule table the pipeline uses, compiled.
#[derive(Debug, Clone)]
pub struct RuleTables {
    pub cleanup: RuleTable,
    pub symbols: RuleTable,
    pub katakana: RuleTable,
    pub alnum: RuleTable,
    pub final_rules: RuleTable,
    pub isolated: RuleTable,
}

impl RuleTables {
    /// Compile the built-in tables.
    pub fn builtin() -> Result<Self, RuleError> {
        Ok(Self {
            cleanup: RuleTable::compile("cleanup", CLEANUP_RULES)?,
            symbols: RuleTable::compile("symbols", SYMBOL_RULES)?,
            katakana: width::katakana_table()?,
            alnum: width::alnum_table()?,
            final_rules: RuleTable::compile("final", FINAL_RULES)?,
            isolated: width::isolated_table()?,
        })
    }

    /// Built-in tables with `extra` appended to the final adjustment table.
    pub fn with_extra_final_rules(extra: &[RuleSpec]) -> Result<Self, RuleError> {
        let mut tables = Self::builtin()?;
        if !extra.is_empty() {
            tables.final_rules.extend(RuleTable::from_specs("extra", extra)?);
        }
        Ok(tables)
    }
}

/// Counts gathered over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub input_events: usize,
    pub output_events: usize,
    pub split_lines: usize,
    pub filtered_lines: usize,
    pub text_merges: usize,
    pub timing_merges: usize,
}

/// Runs the whole pass sequence over an event list.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tables: RuleTables,
    options: NormalizeOptions,
    splitter: LineSplitter,
    filter: LineFilter,
    merger: LineMerger,
}

impl Normalizer {
    /// Normalizer with the built-in tables.
    pub fn new(options: NormalizeOptions) -> Result<Self, RuleError> {
        Ok(Self::with_tables(RuleTables::builtin()?, options))
    }

    /// Normalizer with caller-provided tables.
    pub fn with_tables(tables: RuleTables, options: NormalizeOptions) -> Self {
        Self {
            splitter: LineSplitter::new(&options.split_marker),
            filter: LineFilter::new(&options.annotation_style),
            merger: LineMerger::new(&options.merge_separator),
            tables,
            options,
        }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize `entries` in place.
    ///
    /// An empty list is reported as [`NormalizeError::EmptyInput`] and left untouched.
    /// A rule failing mid-run aborts the run with [`NormalizeError::Rule`].
    pub fn normalize(&self, entries: &mut Vec<SubtitleEntry>) -> Result<NormalizationReport, NormalizeError> {
        if entries.is_empty() {
            warn!("Nothing to process: no subtitle events");
            return Err(NormalizeError::EmptyInput);
        }

        let mut report = NormalizationReport {
            input_events: entries.len(),
            ..Default::default()
        };

        self.apply_table(&self.tables.cleanup, entries)?;
        self.apply_table(&self.tables.symbols, entries)?;

        report.split_lines = self.splitter.split(entries)?;
        debug!("split: {} line(s)", report.split_lines);

        report.filtered_lines = self.filter.filter(entries);
        debug!("filter: {} line(s) removed", report.filtered_lines);

        report.text_merges = self.merger.merge_identical_text(entries);
        debug!("text merge: {} merge(s)", report.text_merges);

        report.timing_merges = self.merger.merge_identical_timing(entries);
        debug!("timing merge: {} merge(s)", report.timing_merges);

        self.apply_table(&self.tables.katakana, entries)?;
        self.apply_table(&self.tables.alnum, entries)?;
        self.apply_table(&self.tables.final_rules, entries)?;
        self.apply_table(&self.tables.isolated, entries)?;

        let target_style = &self.options.target_style;
        for entry in entries.iter_mut().filter(|e| e.is_dialogue()) {
            if &entry.style != target_style {
                entry.style.clone_from(target_style);
            }
        }

        report.output_events = entries.len();
        info!(
            "Normalized {} events ({} in, {} split, {} filtered, {} merged)",
            report.output_events,
            report.input_events,
            report.split_lines,
            report.filtered_lines,
            report.text_merges + report.timing_merges
        );

        Ok(report)
    }

    fn apply_table(&self, table: &RuleTable, entries: &mut [SubtitleEntry]) -> Result<(), RuleError> {
        let changed = table.apply(entries)?;
        debug!("{}: {} line(s) changed", table.name(), changed);
        Ok(())
    }
}
