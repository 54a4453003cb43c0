use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, Context, anyhow};
use std::path::{Path, PathBuf};
use log::{warn, debug};
use crate::errors::SubtitleError;
use crate::file_utils::FileManager;

// @module: Subtitle events and the ASS/SRT boundary

// @const: SRT timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2},\d{3}) --> (\d{2}:\d{2}:\d{2},\d{3})").unwrap()
});

// @const: ASS timestamp regex (H:MM:SS.cc)
static ASS_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})[.:](\d{2})$").unwrap()
});

/// Style name given to entries that come from formats without styles
pub const DEFAULT_STYLE: &str = "Default";

/// Column order used when an ASS file does not carry its own
const DEFAULT_EVENTS_FORMAT: [&str; 10] = [
    "Layer", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect", "Text",
];

/// Class of a subtitle event. Only dialogue takes part in normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Dialogue,
    Comment,
    /// Picture, Sound, Movie, Command or anything unknown
    Other(String),
}

impl EventKind {
    /// Map an ASS line key ("Dialogue", "Comment", ...) to a kind
    pub fn from_ass_key(key: &str) -> Self {
        match key {
            "Dialogue" => Self::Dialogue,
            "Comment" => Self::Comment,
            other => Self::Other(other.to_string()),
        }
    }

    /// Key used when writing the event back to ASS
    pub fn ass_key(&self) -> &str {
        match self {
            Self::Dialogue => "Dialogue",
            Self::Comment => "Comment",
            Self::Other(key) => key,
        }
    }
}

// @struct: Single subtitle event
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Event class
    pub kind: EventKind,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Presentation style name
    pub style: String,

    // @field: Actor / name column
    pub actor: String,

    // @field: Subtitle text
    pub text: String,

    // @field: Raw ASS columns, kept for lossless writing
    pub fields: Vec<String>,
}

impl SubtitleEntry {
    /// Creates a dialogue entry with the default style
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            kind: EventKind::Dialogue,
            start_time_ms,
            end_time_ms,
            style: DEFAULT_STYLE.to_string(),
            actor: String::new(),
            text,
            fields: Vec::new(),
        }
    }

    /// Replace the style, builder style
    pub fn with_style(mut self, style: &str) -> Self {
        self.style = style.to_string();
        self
    }

    /// Replace the event class, builder style
    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_dialogue(&self) -> bool {
        self.kind == EventKind::Dialogue
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }

    /// Parse an SRT timestamp to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        // Parse HH:MM:SS,mmm format
        let parts: Vec<&str> = timestamp.split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    /// Parse an ASS timestamp (H:MM:SS.cc) to milliseconds
    pub fn parse_ass_timestamp(timestamp: &str) -> Option<u64> {
        let caps = ASS_TIME_REGEX.captures(timestamp.trim())?;
        let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
        let (hours, minutes, seconds, centis) = (part(1)?, part(2)?, part(3)?, part(4)?);
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some((hours * 3600 + minutes * 60 + seconds) * 1000 + centis * 10)
    }

    /// Format milliseconds as an ASS timestamp; sub-centisecond precision is truncated
    pub fn format_ass_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let centis = (ms % 1_000) / 10;

        format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
    }

    /// Build the ASS columns for this entry following `format`
    fn ass_columns(&self, format: &[String]) -> Vec<String> {
        format
            .iter()
            .enumerate()
            .map(|(i, column)| match column.to_ascii_lowercase().as_str() {
                "start" => Self::format_ass_timestamp(self.start_time_ms),
                "end" => Self::format_ass_timestamp(self.end_time_ms),
                "style" => self.style.clone(),
                "name" | "actor" => self.actor.clone(),
                "text" => self.text.clone(),
                "layer" | "marginl" | "marginr" | "marginv" => {
                    self.fields.get(i).cloned().unwrap_or_else(|| "0".to_string())
                }
                _ => self.fields.get(i).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(
            f,
            "{} --> {}",
            Self::format_timestamp(self.start_time_ms),
            Self::format_timestamp(self.end_time_ms)
        )?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// On-disk subtitle format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Ass,
    Srt,
}

impl SubtitleFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> std::result::Result<Self, SubtitleError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "ass" | "ssa" => Ok(Self::Ass),
            "srt" => Ok(Self::Srt),
            _ => Err(SubtitleError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ass => "ass",
            Self::Srt => "srt",
        }
    }
}

/// A loaded subtitle file: its events plus whatever is needed to write it back
#[derive(Debug, Clone)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Format the file was read from
    pub format: SubtitleFormat,

    /// ASS lines before the events (script info, styles, the [Events] header)
    pub header: Vec<String>,

    /// ASS column names from the [Events] Format line
    pub events_format: Vec<String>,

    /// List of subtitle entries
    pub entries: Vec<SubtitleEntry>,

    /// ASS sections that follow [Events] (fonts, graphics)
    pub trailer: Vec<String>,
}

impl SubtitleCollection {
    /// Create an empty collection
    pub fn new(source_file: PathBuf, format: SubtitleFormat) -> Self {
        SubtitleCollection {
            source_file,
            format,
            header: Vec::new(),
            events_format: DEFAULT_EVENTS_FORMAT.iter().map(|s| s.to_string()).collect(),
            entries: Vec::new(),
            trailer: Vec::new(),
        }
    }

    /// Load an ASS or SRT file, picking the parser from the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = SubtitleFormat::from_path(path)?;
        let content = FileManager::read_to_string(path)?;

        let mut collection = match format {
            SubtitleFormat::Ass => Self::parse_ass_string(&content)
                .with_context(|| format!("Failed to parse ASS file: {}", path.display()))?,
            SubtitleFormat::Srt => {
                let mut collection = Self::new(PathBuf::new(), SubtitleFormat::Srt);
                collection.entries = Self::parse_srt_string(&content)
                    .with_context(|| format!("Failed to parse SRT file: {}", path.display()))?;
                collection
            }
        };
        collection.source_file = path.to_path_buf();

        debug!("Loaded {} events from {}", collection.entries.len(), path.display());
        Ok(collection)
    }

    /// Number of dialogue-class entries
    pub fn dialogue_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dialogue()).count()
    }

    /// Parse ASS/SSA content. Lines outside [Events] are kept verbatim.
    pub fn parse_ass_string(content: &str) -> std::result::Result<Self, SubtitleError> {
        let mut collection = Self::new(PathBuf::new(), SubtitleFormat::Ass);
        collection.events_format.clear();

        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        let mut in_events = false;
        let mut seen_events = false;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();

            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                in_events = trimmed.eq_ignore_ascii_case("[events]");
                if in_events {
                    seen_events = true;
                    collection.header.push(line.to_string());
                    continue;
                }
            }

            if !in_events {
                if seen_events {
                    collection.trailer.push(line.to_string());
                } else {
                    collection.header.push(line.to_string());
                }
                continue;
            }

            // Blank lines and ';' comments inside [Events] are not kept
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once(':') else {
                warn!("Skipping unrecognized line {} in [Events]: {}", line_no, trimmed);
                continue;
            };
            let value = value.strip_prefix(' ').unwrap_or(value);

            if key == "Format" {
                collection.events_format = value.split(',').map(|c| c.trim().to_string()).collect();
                continue;
            }

            if collection.events_format.is_empty() {
                return Err(SubtitleError::MissingEventsFormat);
            }

            let entry = Self::parse_ass_event(
                key,
                value,
                &collection.events_format,
                collection.entries.len() + 1,
                line_no,
            )?;
            collection.entries.push(entry);
        }

        if collection.events_format.is_empty() {
            collection.events_format = DEFAULT_EVENTS_FORMAT.iter().map(|s| s.to_string()).collect();
        }
        if !seen_events {
            warn!("No [Events] section found in ASS content");
            if !collection.header.is_empty() {
                collection.header.push("[Events]".to_string());
            }
        }

        Ok(collection)
    }

    fn parse_ass_event(
        key: &str,
        value: &str,
        format: &[String],
        seq_num: usize,
        line_no: usize,
    ) -> std::result::Result<SubtitleEntry, SubtitleError> {
        let fields: Vec<String> = value.splitn(format.len(), ',').map(|s| s.to_string()).collect();
        if fields.len() != format.len() {
            return Err(SubtitleError::Parse {
                line: line_no,
                message: format!("expected {} columns, found {}", format.len(), fields.len()),
            });
        }

        let column = |name: &str| {
            format
                .iter()
                .position(|c| c.eq_ignore_ascii_case(name))
                .map(|i| fields[i].as_str())
        };
        let time = |name: &str| -> std::result::Result<u64, SubtitleError> {
            let raw = column(name).unwrap_or("0:00:00.00");
            SubtitleEntry::parse_ass_timestamp(raw).ok_or_else(|| SubtitleError::Parse {
                line: line_no,
                message: format!("invalid {} time '{}'", name, raw),
            })
        };

        let start_time_ms = time("Start")?;
        let mut end_time_ms = time("End")?;
        if end_time_ms < start_time_ms {
            warn!("Line {}: end time before start time, clamping to start", line_no);
            end_time_ms = start_time_ms;
        }

        Ok(SubtitleEntry {
            seq_num,
            kind: EventKind::from_ass_key(key),
            start_time_ms,
            end_time_ms,
            style: column("Style").unwrap_or(DEFAULT_STYLE).trim().to_string(),
            actor: column("Name").or_else(|| column("Actor")).unwrap_or_default().to_string(),
            text: column("Text").unwrap_or_default().to_string(),
            fields,
        })
    }

    /// Render the collection as ASS
    pub fn to_ass_string(&self) -> String {
        let mut out = String::new();
        if self.header.is_empty() {
            out.push_str("[Script Info]\nScriptType: v4.00+\n\n[Events]\n");
        } else {
            for line in &self.header {
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str("Format: ");
        out.push_str(&self.events_format.join(", "));
        out.push('\n');

        for entry in &self.entries {
            out.push_str(entry.kind.ass_key());
            out.push_str(": ");
            out.push_str(&entry.ass_columns(&self.events_format).join(","));
            out.push('\n');
        }

        for line in &self.trailer {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Render the dialogue entries as SRT, renumbered from 1
    pub fn to_srt_string(&self) -> String {
        self.entries
            .iter()
            .filter(|e| e.is_dialogue())
            .enumerate()
            .map(|(i, entry)| {
                let mut numbered = entry.clone();
                numbered.seq_num = i + 1;
                numbered.to_string()
            })
            .collect()
    }

    /// Write the collection in its own format
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = match self.format {
            SubtitleFormat::Ass => self.to_ass_string(),
            SubtitleFormat::Srt => self.to_srt_string(),
        };
        FileManager::write_to_file(path, &content)
    }

    /// Parse SRT format string into subtitle entries
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>> {
        let mut entries = Vec::new();

        // State variables for parsing
        let mut current_seq_num: Option<usize> = None;
        let mut current_start_time_ms: Option<u64> = None;
        let mut current_end_time_ms: Option<u64> = None;
        let mut current_text = String::new();

        let mut add_current_entry = |seq_num: usize, start_ms: u64, end_ms: u64, text: &str| {
            if end_ms < start_ms {
                warn!("Skipping subtitle entry {}: end time {} < start time {}", seq_num, end_ms, start_ms);
                return;
            }
            entries.push(SubtitleEntry::new(seq_num, start_ms, end_ms, text.trim().to_string()));
        };

        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            // Blank line finalizes the current entry
            if trimmed.is_empty() {
                if let (Some(seq_num), Some(start_ms), Some(end_ms)) = (current_seq_num, current_start_time_ms, current_end_time_ms) {
                    if !current_text.is_empty() {
                        add_current_entry(seq_num, start_ms, end_ms, &current_text);
                        current_seq_num = None;
                        current_start_time_ms = None;
                        current_end_time_ms = None;
                        current_text.clear();
                    }
                }
                continue;
            }

            if current_seq_num.is_none() && current_text.is_empty() {
                if let Ok(num) = trimmed.parse::<usize>() {
                    current_seq_num = Some(num);
                    continue;
                }
            }

            if current_seq_num.is_some() && current_start_time_ms.is_none() {
                if let Some(caps) = TIMESTAMP_REGEX.captures(trimmed) {
                    match (SubtitleEntry::parse_timestamp(&caps[1]), SubtitleEntry::parse_timestamp(&caps[2])) {
                        (Ok(start_ms), Ok(end_ms)) => {
                            current_start_time_ms = Some(start_ms);
                            current_end_time_ms = Some(end_ms);
                        }
                        (Err(e), _) | (_, Err(e)) => {
                            warn!("Skipping entry at line {}: {}", idx + 1, e);
                            current_seq_num = None;
                        }
                    }
                    continue;
                }
            }

            if current_seq_num.is_some() && current_start_time_ms.is_some() {
                if !current_text.is_empty() {
                    current_text.push('\n');
                }
                current_text.push_str(trimmed);
            } else {
                warn!("Unexpected text at line {} before sequence number or timestamp: {}", idx + 1, trimmed);
            }
        }

        if let (Some(seq_num), Some(start_ms), Some(end_ms)) = (current_seq_num, current_start_time_ms, current_end_time_ms) {
            if !current_text.is_empty() {
                add_current_entry(seq_num, start_ms, end_ms, &current_text);
            }
        }

        if entries.is_empty() {
            warn!("No valid subtitle entries found in SRT content");
        }

        // Renumber entries to ensure sequential order
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.seq_num = i + 1;
        }

        Ok(entries)
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Format: {}", self.format.extension())?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
