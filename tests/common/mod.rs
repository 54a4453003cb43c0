/*!
 * Common test utilities for the jsubnorm test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use jsubnorm::subtitle_processor::SubtitleEntry;

/// ASS script covering tags, ruby, a two-speaker line, a repeat and an emptied line
pub const SAMPLE_ASS: &str = r#"[Script Info]
Title: sample
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize
Style: Default,MS Gothic,48
Style: Rubi,MS Gothic,24

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Comment: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,メモ
Dialogue: 0,0:00:01.00,0:00:03.00,TV,,0,0,0,,{\an8}（Ａ）　ｐｍ１２：００っ…
Dialogue: 0,0:00:01.00,0:00:03.00,Rubi,,0,0,0,,ごぜん
Dialogue: 0,0:00:03.00,0:00:05.00,TV,,0,0,0,,（太郎）行くぞ\N（花子）待って
Dialogue: 0,0:00:05.00,0:00:06.00,TV,,0,0,0,,ｻﾞｯｸ出来る？
Dialogue: 0,0:00:06.00,0:00:07.00,TV,,0,0,0,,ｻﾞｯｸ出来る？
Dialogue: 0,0:00:07.00,0:00:08.00,TV,,0,0,0,,♪♪

[Fonts]
"#;

/// SRT file with a narrator label and a reaction-only line
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:02,000
（ナレーター）ｶﾒﾗは 1台

2
00:00:02,000 --> 00:00:03,000
(笑)
";

/// Route `log` output to the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Dialogue entry with the default style
pub fn dialogue(start: u64, end: u64, text: &str) -> SubtitleEntry {
    SubtitleEntry::new(1, start, end, text.to_string())
}

/// (start, end, text) of every entry, for compact assertions
pub fn timeline(entries: &[SubtitleEntry]) -> Vec<(u64, u64, String)> {
    entries
        .iter()
        .map(|e| (e.start_time_ms, e.end_time_ms, e.text.clone()))
        .collect()
}
