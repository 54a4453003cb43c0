/*!
 * Two-speaker line splitting.
 *
 * A dialogue line of the form `label）first（second` is replaced by two
 * events: `first` over the first half of the time range and `second` over
 * the rest. Only the first `）…（` pair is used and nothing is split twice.
 */

use log::debug;
use once_cell::sync::Lazy;
use fancy_regex::Regex;

use crate::errors::RuleError;
use crate::subtitle_processor::SubtitleEntry;

// @const: label）first（second
static DUAL_SPEAKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(.*?)）(.*?)（(.*)$").unwrap()
});

/// Splits dual-speaker lines into two time-sliced events.
#[derive(Debug, Clone)]
pub struct LineSplitter {
    marker: String,
}

impl LineSplitter {
    /// `marker` is written to the actor field of both halves.
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
        }
    }

    /// Split every matching dialogue line in place. Returns the number of lines split.
    pub fn split(&self, entries: &mut Vec<SubtitleEntry>) -> Result<usize, RuleError> {
        let mut split_count = 0;
        let mut i = 0;

        while i < entries.len() {
            if !entries[i].is_dialogue() {
                i += 1;
                continue;
            }

            let parts = DUAL_SPEAKER_REGEX
                .captures(&entries[i].text)
                .map_err(|e| RuleError::Matching {
                    pattern: DUAL_SPEAKER_REGEX.as_str().to_string(),
                    message: e.to_string(),
                })?
                .map(|caps| {
                    let group = |n: usize| caps.get(n).map(|m| m.as_str().to_string()).unwrap_or_default();
                    (group(2), group(3))
                });

            let Some((first, second)) = parts else {
                i += 1;
                continue;
            };

            let current = &mut entries[i];
            let original_end = current.end_time_ms;
            let half = current.duration_ms() / 2;

            current.actor = self.marker.clone();
            current.end_time_ms = current.start_time_ms + half;
            current.text = first;

            let mut next = current.clone();
            next.start_time_ms = current.end_time_ms;
            next.end_time_ms = original_end;
            next.text = second;

            debug!(
                "Split line {} at {} ms into '{}' / '{}'",
                current.seq_num, next.start_time_ms, current.text, next.text
            );

            entries.insert(i + 1, next);
            split_count += 1;
            // resume after the inserted half
            i += 2;
        }

        Ok(split_count)
    }
}
