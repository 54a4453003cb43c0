/*!
 * Built-in rule tables.
 *
 * Pure data: each table is an ordered list of (pattern, replacement) pairs
 * compiled once by the pipeline. Order inside a table matters.
 */

/// Step 1: explicit line-break markers
pub const CLEANUP_RULES: &[(&str, &str)] = &[
    (r"\\[Nn]", ""),
    (r"\\h", "　"),
    (r"\r?\n", ""),
];

/// Step 2: override tags, invisible characters, annotations and speaker labels
pub const SYMBOL_RULES: &[(&str, &str)] = &[
    // ASS override blocks
    (r"\{[^{}]*\}", ""),
    // zero-width characters and stray BOMs
    (r"[\x{200B}-\x{200F}\x{2060}\x{FEFF}]", ""),
    // music marks
    (r"[♪♬♫]+", ""),
    // sound and reaction annotations
    (r"[（(][^（）()]*(?:笑|拍手|歓声|ため息|せき払い|鳴き声|物音|ＢＧＭ|BGM)[^（）()]*[）)]", ""),
    (r"［[^［］]*］|\[[^\[\]]*\]|〔[^〔〕]*〕", ""),
    // half-width parentheses
    (r"\(", "（"),
    (r"\)", "）"),
    // on a line that opens with a speaker label, the next label becomes a bare opening bracket
    (r"^(（[^（）]{1,8}）[^（）]*?)[ 　]*（[^（）]{1,8}）[ 　]*", "${1}（"),
    // lone leading label
    (r"^（[^（）]{1,8}）(?!.*（)[ 　]*", ""),
    (r"）[ 　]+", "）"),
    (r"[ 　]{2,}", "　"),
    (r"^[ 　]+|[ 　]+$", ""),
];

/// Step 7a: half-width katakana. Voiced and semi-voiced pairs come first.
pub const HALFWIDTH_KATAKANA: &[(&str, &str)] = &[
    ("ｶﾞ", "ガ"), ("ｷﾞ", "ギ"), ("ｸﾞ", "グ"), ("ｹﾞ", "ゲ"), ("ｺﾞ", "ゴ"),
    ("ｻﾞ", "ザ"), ("ｼﾞ", "ジ"), ("ｽﾞ", "ズ"), ("ｾﾞ", "ゼ"), ("ｿﾞ", "ゾ"),
    ("ﾀﾞ", "ダ"), ("ﾁﾞ", "ヂ"), ("ﾂﾞ", "ヅ"), ("ﾃﾞ", "デ"), ("ﾄﾞ", "ド"),
    ("ﾊﾞ", "バ"), ("ﾋﾞ", "ビ"), ("ﾌﾞ", "ブ"), ("ﾍﾞ", "ベ"), ("ﾎﾞ", "ボ"),
    ("ﾊﾟ", "パ"), ("ﾋﾟ", "ピ"), ("ﾌﾟ", "プ"), ("ﾍﾟ", "ペ"), ("ﾎﾟ", "ポ"),
    ("ｳﾞ", "ヴ"), ("ﾜﾞ", "ヷ"), ("ｦﾞ", "ヺ"),
    ("ｱ", "ア"), ("ｲ", "イ"), ("ｳ", "ウ"), ("ｴ", "エ"), ("ｵ", "オ"),
    ("ｶ", "カ"), ("ｷ", "キ"), ("ｸ", "ク"), ("ｹ", "ケ"), ("ｺ", "コ"),
    ("ｻ", "サ"), ("ｼ", "シ"), ("ｽ", "ス"), ("ｾ", "セ"), ("ｿ", "ソ"),
    ("ﾀ", "タ"), ("ﾁ", "チ"), ("ﾂ", "ツ"), ("ﾃ", "テ"), ("ﾄ", "ト"),
    ("ﾅ", "ナ"), ("ﾆ", "ニ"), ("ﾇ", "ヌ"), ("ﾈ", "ネ"), ("ﾉ", "ノ"),
    ("ﾊ", "ハ"), ("ﾋ", "ヒ"), ("ﾌ", "フ"), ("ﾍ", "ヘ"), ("ﾎ", "ホ"),
    ("ﾏ", "マ"), ("ﾐ", "ミ"), ("ﾑ", "ム"), ("ﾒ", "メ"), ("ﾓ", "モ"),
    ("ﾔ", "ヤ"), ("ﾕ", "ユ"), ("ﾖ", "ヨ"),
    ("ﾗ", "ラ"), ("ﾘ", "リ"), ("ﾙ", "ル"), ("ﾚ", "レ"), ("ﾛ", "ロ"),
    ("ﾜ", "ワ"), ("ｦ", "ヲ"), ("ﾝ", "ン"),
    ("ｧ", "ァ"), ("ｨ", "ィ"), ("ｩ", "ゥ"), ("ｪ", "ェ"), ("ｫ", "ォ"),
    ("ｬ", "ャ"), ("ｭ", "ュ"), ("ｮ", "ョ"), ("ｯ", "ッ"),
    ("ｰ", "ー"), ("ﾞ", "゛"), ("ﾟ", "゜"),
    ("｡", "。"), ("｢", "「"), ("｣", "」"), ("､", "、"), ("･", "・"),
];

/// Step 7b: full-width Latin letters and digits
pub const FULLWIDTH_ALNUM: &[(&str, &str)] = &[
    ("０", "0"), ("１", "1"), ("２", "2"), ("３", "3"), ("４", "4"),
    ("５", "5"), ("６", "6"), ("７", "7"), ("８", "8"), ("９", "9"),
    ("Ａ", "A"), ("Ｂ", "B"), ("Ｃ", "C"), ("Ｄ", "D"), ("Ｅ", "E"),
    ("Ｆ", "F"), ("Ｇ", "G"), ("Ｈ", "H"), ("Ｉ", "I"), ("Ｊ", "J"),
    ("Ｋ", "K"), ("Ｌ", "L"), ("Ｍ", "M"), ("Ｎ", "N"), ("Ｏ", "O"),
    ("Ｐ", "P"), ("Ｑ", "Q"), ("Ｒ", "R"), ("Ｓ", "S"), ("Ｔ", "T"),
    ("Ｕ", "U"), ("Ｖ", "V"), ("Ｗ", "W"), ("Ｘ", "X"), ("Ｙ", "Y"),
    ("Ｚ", "Z"),
    ("ａ", "a"), ("ｂ", "b"), ("ｃ", "c"), ("ｄ", "d"), ("ｅ", "e"),
    ("ｆ", "f"), ("ｇ", "g"), ("ｈ", "h"), ("ｉ", "i"), ("ｊ", "j"),
    ("ｋ", "k"), ("ｌ", "l"), ("ｍ", "m"), ("ｎ", "n"), ("ｏ", "o"),
    ("ｐ", "p"), ("ｑ", "q"), ("ｒ", "r"), ("ｓ", "s"), ("ｔ", "t"),
    ("ｕ", "u"), ("ｖ", "v"), ("ｗ", "w"), ("ｘ", "x"), ("ｙ", "y"),
    ("ｚ", "z"),
];

/// Step 8: idioms, kana spellings, fillers and the punctuation pass
pub const FINAL_RULES: &[(&str, &str)] = &[
    // small tsu before an ellipsis
    (r"[っッ]+…", "…"),
    (r"\.{3}|・{3}|．{3}", "…"),
    (r"…{3,}", "……"),
    // clock times
    (r"(\d)：(\d)", "$1:$2"),
    // auxiliary verbs after te-form are written in kana
    (r"(?<=[てで])下さ(?=[いるれ])", "くださ"),
    (r"(?<=[てで])頂(?=[いかきくけこ])", "いただ"),
    (r"(?<=[てで])欲し(?=[いかくけ])", "ほし"),
    (r"(?<![一合極筆])致(?=しま)", "いた"),
    (r"出来(?=[るたてなずればまよ])", "でき"),
    (r"有難う", "ありがとう"),
    (r"御免(?=[なね])", "ごめん"),
    (r"何故", "なぜ"),
    (r"沢山", "たくさん"),
    (r"丁度", "ちょうど"),
    (r"全て", "すべて"),
    // fillers at line start, only when something follows
    (r"^(?:え[ー～]+と?|あの[ー～]+|えっと)[、　 ]+(?=[^、　 ])", ""),
    // punctuation
    (r"!", "！"),
    (r"\?", "？"),
    (r"？！", "！？"),
    // trailing stops go only after a visible character, so no line ends up empty
    (r"(?<=[^。、 　])[。、]+$", ""),
    (r"。(?=.)", "　"),
    (r"[ 　]{2,}", "　"),
    (r"^[ 　]+|[ 　]+$", ""),
];
