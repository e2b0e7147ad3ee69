//! Input cleaning: Unicode noise folding, separator removal, prefix
//! stripping and the alphanumeric gate that produces the compact form.

use super::error::ValidationError;

/// Fold visually similar Unicode characters to their ASCII counterpart.
///
/// Covers the separator and digit look-alikes that show up when numbers
/// are pasted out of PDFs, word processors and non-Latin keyboards.
/// Characters without a mapping pass through unchanged.
fn fold(c: char) -> char {
    match c {
        // hyphen look-alikes
        '\u{00AD}' // SOFT HYPHEN
        | '\u{00AF}' // MACRON
        | '\u{02D7}' // MODIFIER LETTER MINUS SIGN
        | '\u{058A}' // ARMENIAN HYPHEN
        | '\u{05BE}' // HEBREW PUNCTUATION MAQAF
        | '\u{180A}' // MONGOLIAN NIRUGU
        | '\u{2010}'..='\u{2015}' // HYPHEN .. HORIZONTAL BAR
        | '\u{203E}' // OVERLINE
        | '\u{2043}' // HYPHEN BULLET
        | '\u{207B}' // SUPERSCRIPT MINUS
        | '\u{208B}' // SUBSCRIPT MINUS
        | '\u{2212}' // MINUS SIGN
        | '\u{23AF}' // HORIZONTAL LINE EXTENSION
        | '\u{23E4}' // STRAIGHTNESS
        | '\u{FE63}' // SMALL HYPHEN-MINUS
        | '\u{FF0D}' // FULLWIDTH HYPHEN-MINUS
        | '\u{FFE3}' // FULLWIDTH MACRON
        => '-',

        // space look-alikes
        '\u{0009}' // TAB
        | '\u{000B}' // VERTICAL TAB
        | '\u{000C}' // FORM FEED
        | '\u{00A0}' // NO-BREAK SPACE
        | '\u{1680}' // OGHAM SPACE MARK
        | '\u{2000}'..='\u{200A}' // EN QUAD .. HAIR SPACE
        | '\u{2028}' // LINE SEPARATOR
        | '\u{2029}' // PARAGRAPH SEPARATOR
        | '\u{202F}' // NARROW NO-BREAK SPACE
        | '\u{205F}' // MEDIUM MATHEMATICAL SPACE
        | '\u{3000}' // IDEOGRAPHIC SPACE
        => ' ',

        // full stop look-alikes
        '\u{00B7}' // MIDDLE DOT
        | '\u{02D9}' // DOT ABOVE
        | '\u{0387}' // GREEK ANO TELEIA
        | '\u{06D4}' // ARABIC FULL STOP
        | '\u{2022}' // BULLET
        | '\u{2024}' // ONE DOT LEADER
        | '\u{2027}' // HYPHENATION POINT
        | '\u{2219}' // BULLET OPERATOR
        | '\u{22C5}' // DOT OPERATOR
        | '\u{2E31}' // WORD SEPARATOR MIDDLE DOT
        | '\u{2E33}' // RAISED DOT
        | '\u{3002}' // IDEOGRAPHIC FULL STOP
        | '\u{30FB}' // KATAKANA MIDDLE DOT
        | '\u{FE52}' // SMALL FULL STOP
        | '\u{FF0E}' // FULLWIDTH FULL STOP
        | '\u{FF65}' // HALFWIDTH KATAKANA MIDDLE DOT
        => '.',

        // comma look-alikes
        '\u{00B8}' // CEDILLA
        | '\u{060C}' // ARABIC COMMA
        | '\u{066B}' // ARABIC DECIMAL SEPARATOR
        | '\u{066C}' // ARABIC THOUSANDS SEPARATOR
        | '\u{201A}' // SINGLE LOW-9 QUOTATION MARK
        | '\u{2E34}' // RAISED COMMA
        | '\u{3001}' // IDEOGRAPHIC COMMA
        | '\u{FE50}' // SMALL COMMA
        | '\u{FF0C}' // FULLWIDTH COMMA
        | '\u{FF64}' // HALFWIDTH IDEOGRAPHIC COMMA
        => ',',

        // solidus look-alikes
        '\u{2044}' // FRACTION SLASH
        | '\u{2215}' // DIVISION SLASH
        | '\u{29F8}' // BIG SOLIDUS
        | '\u{FF0F}' // FULLWIDTH SOLIDUS
        => '/',

        // colon look-alikes
        '\u{1361}' // ETHIOPIC WORDSPACE
        | '\u{1804}' // MONGOLIAN COLON
        | '\u{FE13}' // PRESENTATION FORM FOR VERTICAL COLON
        | '\u{FE55}' // SMALL COLON
        | '\u{FF1A}' // FULLWIDTH COLON
        => ':',

        // apostrophe look-alikes
        '\u{0060}' // GRAVE ACCENT
        | '\u{00B4}' // ACUTE ACCENT
        | '\u{02B9}' // MODIFIER LETTER PRIME
        | '\u{02BB}'..='\u{02BC}' // TURNED COMMA, APOSTROPHE
        | '\u{0300}'..='\u{0301}' // COMBINING GRAVE, ACUTE
        | '\u{2018}'..='\u{2019}' // LEFT, RIGHT SINGLE QUOTATION MARK
        | '\u{201B}' // SINGLE HIGH-REVERSED-9 QUOTATION MARK
        => '\'',

        // asterisk look-alikes
        '\u{066D}' // ARABIC FIVE POINTED STAR
        | '\u{204E}' // LOW ASTERISK
        | '\u{2217}' // ASTERISK OPERATOR
        | '\u{22C6}' // STAR OPERATOR
        | '\u{2731}' // HEAVY ASTERISK
        | '\u{FE61}' // SMALL ASTERISK
        | '\u{FF0A}' // FULLWIDTH ASTERISK
        => '*',

        // digit look-alikes
        '\u{0660}'..='\u{0669}' => ascii_digit(c, 0x0660), // ARABIC-INDIC
        '\u{06F0}'..='\u{06F9}' => ascii_digit(c, 0x06F0), // EASTERN ARABIC-INDIC
        '\u{FF10}'..='\u{FF19}' => ascii_digit(c, 0xFF10), // FULLWIDTH
        '\u{1D7CE}'..='\u{1D7FF}' => ascii_digit(c, 0x1D7CE), // MATHEMATICAL

        _ => c,
    }
}

/// Map a character in a contiguous digit block starting at `zero` back to
/// its ASCII digit. The mathematical block holds five runs of ten, which
/// the `% 10` collapses.
fn ascii_digit(c: char, zero: u32) -> char {
    (b'0' + ((c as u32 - zero) % 10) as u8) as char
}

/// Produce the canonical compact string for `input`.
///
/// Folds Unicode look-alikes to ASCII, deletes every character present in
/// `separators`, and upper-cases the rest. Any remaining character that is
/// not ASCII alphanumeric makes the whole input invalid.
pub fn clean(input: &str, separators: &str) -> Result<String, ValidationError> {
    clean_prefix(input, separators, &[])
}

/// [`clean`], additionally dropping the first matching entry of `prefixes`
/// from the front of the cleaned value.
///
/// Prefixes are matched after upper-casing, so the comparison is
/// case-insensitive; supply them in upper case.
pub fn clean_prefix(
    input: &str,
    separators: &str,
    prefixes: &[&str],
) -> Result<String, ValidationError> {
    let cleaned: String = input
        .chars()
        .map(fold)
        .filter(|c| !separators.contains(*c))
        .collect::<String>()
        .to_uppercase();

    let value = prefixes
        .iter()
        .find_map(|p| cleaned.strip_prefix(p))
        .map(str::to_owned)
        .unwrap_or(cleaned);

    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Whether `value` is non-empty and all ASCII digits.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `value` is non-empty and all ASCII letters.
pub fn is_alpha(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Whether `value` is non-empty and all ASCII letters or digits.
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric())
}
