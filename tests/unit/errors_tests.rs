/*!
 * Tests for error types
 */

use std::error::Error;
use std::io;

use jsubnorm::errors::{AppError, NormalizeError, RuleError, SubtitleError};
use jsubnorm::normalizer::RuleTable;

#[test]
fn test_ruleError_invalidPattern_shouldExposeSource() {
    let err = RuleTable::compile("symbols", &[("[", "")]).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("symbols"));
    assert!(message.contains('['));
    assert!(err.source().is_some());
}

#[test]
fn test_normalizeError_fromRuleError_shouldWrap() {
    let rule_error = RuleError::Matching {
        pattern: "a+".to_string(),
        message: "backtrack limit".to_string(),
    };
    let err: NormalizeError = rule_error.into();

    assert!(matches!(err, NormalizeError::Rule(RuleError::Matching { .. })));
    assert!(err.to_string().contains("backtrack limit"));
}

#[test]
fn test_normalizeError_emptyInput_shouldSayNothingToProcess() {
    assert!(NormalizeError::EmptyInput.to_string().contains("Nothing to process"));
}

#[test]
fn test_subtitleError_parse_shouldIncludeLine() {
    let err = SubtitleError::Parse {
        line: 12,
        message: "expected 10 columns, found 3".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to parse subtitle at line 12: expected 10 columns, found 3"
    );
}

#[test]
fn test_appError_conversions_shouldPickMatchingVariant() {
    let from_io: AppError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(from_io, AppError::File(ref m) if m == "gone"));

    let from_anyhow: AppError = anyhow::anyhow!("odd").into();
    assert!(matches!(from_anyhow, AppError::Unknown(ref m) if m == "odd"));

    let from_subtitle: AppError = SubtitleError::MissingEventsFormat.into();
    assert!(from_subtitle.to_string().starts_with("Subtitle error:"));

    let from_normalize: AppError = NormalizeError::EmptyInput.into();
    assert!(matches!(from_normalize, AppError::Normalize(NormalizeError::EmptyInput)));
}
