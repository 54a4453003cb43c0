/*!
 * Tests for width conversion
 */

use jsubnorm::normalizer::width::{alnum_table, isolated_table, katakana_table, to_fullwidth};

fn widen(text: &str) -> String {
    isolated_table().unwrap().apply_to_text(text).unwrap()
}

#[test]
fn test_to_fullwidth_withAsciiAlnum_shouldUseFullwidthBlock() {
    let widened: String = "Az09".chars().map(to_fullwidth).collect();
    assert_eq!(widened, "Ａｚ０９");
}

#[test]
fn test_isolated_withEachBoundary_shouldWiden() {
    assert_eq!(widen("Aランク"), "Ａランク");
    assert_eq!(widen("ランクA"), "ランクＡ");
    assert_eq!(widen("A"), "Ａ");
    assert_eq!(widen("ランクAです"), "ランクＡです");
}

#[test]
fn test_isolated_withRunsOfTwoOrMore_shouldStayHalfwidth() {
    assert_eq!(widen("ab"), "ab");
    assert_eq!(widen("DVD買った"), "DVD買った");
    assert_eq!(widen("2024年"), "2024年");
}

#[test]
fn test_isolated_withMixedLine_shouldOnlyWidenSingles() {
    assert_eq!(widen("第1話はTVで3回"), "第１話はTVで３回");
}

#[test]
fn test_isolated_appliedTwice_shouldBeStable() {
    let once = widen("x軸とy軸");
    assert_eq!(once, "ｘ軸とｙ軸");
    assert_eq!(widen(&once), once);
}

#[test]
fn test_katakana_withSmallAndVoicedKana_shouldConvert() {
    let table = katakana_table().unwrap();
    assert_eq!(table.apply_to_text("ｼﾞｬﾝﾌﾟ").unwrap(), "ジャンプ");
    assert_eq!(table.apply_to_text("ﾎﾟｹｯﾄ").unwrap(), "ポケット");
    assert_eq!(table.apply_to_text("ひらがなは無変換").unwrap(), "ひらがなは無変換");
}

#[test]
fn test_alnum_withFullwidthLettersAndDigits_shouldNarrow() {
    let table = alnum_table().unwrap();
    assert_eq!(table.apply_to_text("ＤＶＤ２枚").unwrap(), "DVD2枚");
    assert_eq!(table.apply_to_text("ｐｍ").unwrap(), "pm");
}
