/*!
 * Removal of empty and annotation-only (ruby) dialogue lines.
 */

use log::debug;

use crate::subtitle_processor::SubtitleEntry;

/// Drops blank dialogue lines and lines in the annotation style.
#[derive(Debug, Clone)]
pub struct LineFilter {
    annotation_style: String,
}

impl LineFilter {
    pub fn new(annotation_style: &str) -> Self {
        Self {
            annotation_style: annotation_style.to_string(),
        }
    }

    fn should_remove(&self, entry: &SubtitleEntry) -> bool {
        entry.is_dialogue()
            && (entry.text.trim().is_empty() || entry.style == self.annotation_style)
    }

    /// Remove matching entries in place. Returns how many were removed.
    pub fn filter(&self, entries: &mut Vec<SubtitleEntry>) -> usize {
        let mut removed = 0;
        let mut i = 0;

        while i < entries.len() {
            if self.should_remove(&entries[i]) {
                let dropped = entries.remove(i);
                debug!("Dropped line {} (style '{}')", dropped.seq_num, dropped.style);
                removed += 1;
                // the next entry now sits at i
                continue;
            }
            i += 1;
        }

        removed
    }
}
