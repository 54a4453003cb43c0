/*!
 * Integration tests for the full normalization pipeline
 */

use anyhow::Result;

use crate::common::{self, dialogue, timeline};
use jsubnorm::errors::NormalizeError;
use jsubnorm::normalizer::{NormalizeOptions, Normalizer};
use jsubnorm::subtitle_processor::{EventKind, SubtitleCollection};

fn normalizer() -> Normalizer {
    Normalizer::new(NormalizeOptions::default()).unwrap()
}

#[test]
fn test_normalize_withSpeakerLabelAndFullwidthTime_shouldProduceCleanLine() -> Result<()> {
    common::init_logging();
    let mut entries = vec![dialogue(0, 2000, "（Ａ）　ｐｍ１２：００っ…")];

    let report = normalizer().normalize(&mut entries)?;

    assert_eq!(report.output_events, 1);
    assert_eq!(entries[0].text, "pm12:00…");
    assert_eq!(entries[0].style, "Default");
    Ok(())
}

#[test]
fn test_normalize_withReadingGloss_shouldNotSplitLine() -> Result<()> {
    let mut entries = vec![dialogue(0, 2000, "東京（とうきょう）に行く")];

    let report = normalizer().normalize(&mut entries)?;

    assert_eq!(report.split_lines, 0);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "東京（とうきょう）に行く");
    Ok(())
}

#[test]
fn test_normalize_withSampleScript_shouldRunEveryPassInOrder() -> Result<()> {
    common::init_logging();
    let mut collection = SubtitleCollection::parse_ass_string(common::SAMPLE_ASS)?;

    let report = normalizer().normalize(&mut collection.entries)?;

    assert_eq!(report.input_events, 7);
    assert_eq!(report.output_events, 5);
    assert_eq!(report.split_lines, 1);
    assert_eq!(report.filtered_lines, 2);
    assert_eq!(report.text_merges, 1);
    assert_eq!(report.timing_merges, 0);

    assert_eq!(
        timeline(&collection.entries),
        vec![
            (0, 1000, "メモ".to_string()),
            (1000, 3000, "pm12:00…".to_string()),
            (3000, 4000, "行くぞ".to_string()),
            (4000, 5000, "待って".to_string()),
            (5000, 7000, "ザックできる？".to_string()),
        ]
    );

    assert_eq!(collection.entries[0].kind, EventKind::Comment);
    assert!(collection.entries[1..].iter().all(|e| e.style == "Default"));
    assert_eq!(collection.entries[2].actor, "split");
    assert_eq!(collection.entries[3].actor, "split");
    assert_eq!(collection.entries[1].actor, "");

    Ok(())
}

#[test]
fn test_normalize_withRepeatsAroundRubi_shouldMergeIntoOneSpan() -> Result<()> {
    let mut entries = vec![
        dialogue(0, 1000, "また明日"),
        dialogue(0, 1000, "あした").with_style("Rubi"),
        dialogue(1000, 2500, "また明日"),
        dialogue(2500, 3000, "　"),
        dialogue(3000, 4000, "また明日"),
    ];

    let report = normalizer().normalize(&mut entries)?;

    assert_eq!(report.filtered_lines, 2);
    assert_eq!(report.text_merges, 2);
    assert_eq!(timeline(&entries), vec![(0, 4000, "また明日".to_string())]);
    Ok(())
}

#[test]
fn test_normalize_withCoTimedLines_shouldJoinWithFullwidthSpace() -> Result<()> {
    let mut entries = vec![dialogue(0, 1000, "上の段"), dialogue(0, 1000, "下の段"), dialogue(1000, 2000, "次")];

    let report = normalizer().normalize(&mut entries)?;

    assert_eq!(report.timing_merges, 1);
    assert_eq!(
        timeline(&entries),
        vec![(0, 1000, "上の段　下の段".to_string()), (1000, 2000, "次".to_string())]
    );
    Ok(())
}

#[test]
fn test_normalize_withWhitespaceAndRubiLines_shouldLeaveNone() -> Result<()> {
    let mut entries = vec![
        dialogue(0, 100, " "),
        dialogue(100, 200, "本文"),
        dialogue(200, 300, "るび").with_style("Rubi"),
        dialogue(300, 400, "\u{200B}"),
        dialogue(400, 500, "{\\i1}{\\i0}"),
    ];

    normalizer().normalize(&mut entries)?;

    assert_eq!(entries.len(), 1);
    assert!(entries.iter().all(|e| !e.text.trim().is_empty() && e.style != "Rubi"));
    Ok(())
}

#[test]
fn test_normalize_withCustomOptions_shouldUseThem() -> Result<()> {
    let options = NormalizeOptions {
        target_style: "Main".to_string(),
        annotation_style: "Furigana".to_string(),
        split_marker: "dual".to_string(),
        merge_separator: "／".to_string(),
    };
    let normalizer = Normalizer::new(options)?;
    let mut entries = vec![
        dialogue(0, 1000, "ふりがな").with_style("Furigana"),
        dialogue(0, 1000, "上"),
        dialogue(0, 1000, "下"),
        dialogue(1000, 2000, "（Ａ）はい（Ｂ）いいえ").with_style("Rubi"),
    ];

    normalizer.normalize(&mut entries)?;

    assert_eq!(
        timeline(&entries),
        vec![
            (0, 1000, "上／下".to_string()),
            (1000, 1500, "はい".to_string()),
            (1500, 2000, "いいえ".to_string()),
        ]
    );
    assert!(entries.iter().all(|e| e.style == "Main"));
    assert_eq!(entries[1].actor, "dual");
    Ok(())
}

#[test]
fn test_normalize_withEmptyInput_shouldReportNothingToProcess() {
    let mut entries = Vec::new();

    let result = normalizer().normalize(&mut entries);

    assert!(matches!(result, Err(NormalizeError::EmptyInput)));
    assert!(entries.is_empty());
}

#[test]
fn test_normalize_withOnlyComments_shouldPassThrough() -> Result<()> {
    let comment = dialogue(0, 100, "（Ａ）メモ\\N（Ｂ）です").with_kind(EventKind::Comment).with_style("Notes");
    let mut entries = vec![comment.clone(), comment.clone()];

    let report = normalizer().normalize(&mut entries)?;

    assert_eq!(report.output_events, 2);
    assert_eq!(entries, vec![comment.clone(), comment]);
    Ok(())
}
