/*!
 * Merging of adjacent dialogue lines.
 *
 * Two passes over neighbouring pairs, each with a cursor that stays in place
 * after a merge so the survivor is compared with its new neighbour:
 * - identical text: the first event absorbs the second's end time
 * - identical timing: the texts are joined with a separator
 */

use log::debug;

use crate::subtitle_processor::SubtitleEntry;

/// Joins adjacent duplicate or co-timed dialogue lines.
#[derive(Debug, Clone)]
pub struct LineMerger {
    separator: String,
}

impl LineMerger {
    /// `separator` goes between texts joined by the timing pass.
    pub fn new(separator: &str) -> Self {
        Self {
            separator: separator.to_string(),
        }
    }

    /// Merge neighbours with byte-identical text. Returns the number of merges.
    pub fn merge_identical_text(&self, entries: &mut Vec<SubtitleEntry>) -> usize {
        let mut merges = 0;
        let mut i = 0;

        while i + 1 < entries.len() {
            let (current, next) = (&entries[i], &entries[i + 1]);
            if current.is_dialogue() && next.is_dialogue() && current.text == next.text {
                let absorbed = entries.remove(i + 1);
                debug!(
                    "Merged repeated line {} into {} ({} ms -> {} ms)",
                    absorbed.seq_num, entries[i].seq_num, entries[i].end_time_ms, absorbed.end_time_ms
                );
                entries[i].end_time_ms = absorbed.end_time_ms;
                merges += 1;
                continue;
            }
            i += 1;
        }

        merges
    }

    /// Merge neighbours with identical start and end. Returns the number of merges.
    pub fn merge_identical_timing(&self, entries: &mut Vec<SubtitleEntry>) -> usize {
        let mut merges = 0;
        let mut i = 0;

        while i + 1 < entries.len() {
            let (current, next) = (&entries[i], &entries[i + 1]);
            let same_timing = current.start_time_ms == next.start_time_ms
                && current.end_time_ms == next.end_time_ms;
            if current.is_dialogue() && next.is_dialogue() && same_timing {
                let absorbed = entries.remove(i + 1);
                debug!("Joined co-timed line {} into {}", absorbed.seq_num, entries[i].seq_num);
                let survivor = &mut entries[i];
                survivor.text.push_str(&self.separator);
                survivor.text.push_str(&absorbed.text);
                merges += 1;
                continue;
            }
            i += 1;
        }

        merges
    }
}
