//! Best-effort cleanup of values coming out of spreadsheet exports.

/// UTF-8 accented letters that were decoded as Windows-1252, paired with
/// the letter they should have been. Applied in order as plain substring
/// replacements.
///
/// Only the two-character forms are listed. `à` is `Ã` followed by a
/// no-break space; a bare `Ã` is a legitimate letter and is left alone.
const MISDECODED: &[(&str, &str)] = &[
    ("Ã€", "À"),
    ("Ã‚", "Â"),
    ("Ã‡", "Ç"),
    ("Ãˆ", "È"),
    ("Ã‰", "É"),
    ("ÃŠ", "Ê"),
    ("Ã‹", "Ë"),
    ("ÃŽ", "Î"),
    ("Ã\u{8f}", "Ï"),
    ("Ã”", "Ô"),
    ("Ã–", "Ö"),
    ("Ã™", "Ù"),
    ("Ã›", "Û"),
    ("Ãœ", "Ü"),
    ("Ã\u{89}", "É"),
    ("Ã¨", "è"),
    ("Ã©", "é"),
    ("Ãª", "ê"),
    ("Ã«", "ë"),
    ("Ã¢", "â"),
    ("Ã´", "ô"),
    ("Ã®", "î"),
    ("Ã¯", "ï"),
    ("Ã»", "û"),
    ("Ã¹", "ù"),
    ("Ã§", "ç"),
    ("Ã¶", "ö"),
    ("Ã¼", "ü"),
    ("Ã\u{a0}", "à"),
    ("Å“", "œ"),
    ("Å’", "Œ"),
];

/// Replace known mis-decoded sequences with the intended character.
///
/// Text that contains none of the table's sequences is returned unchanged.
/// There is no context check: correct text that happens to contain one of
/// the sequences is rewritten too.
pub fn repair_encoding(text: &str) -> String {
    if !text.contains(['Ã', 'Å']) {
        return text.to_string();
    }
    MISDECODED
        .iter()
        .fold(text.to_string(), |acc, (wrong, right)| acc.replace(wrong, right))
}

/// Numeric cleanup for a single cell.
///
/// Returns `Some` when the value is numeric in one of the handled forms:
/// a decimal that is an exact integer loses its fraction (`"69001.0"` →
/// `"69001"`), and an all-digit string is returned as-is (leading zeros
/// kept). Anything else yields `None`.
///
/// Plain decimals are cut on the text so every digit survives. Only
/// exponent forms (`"1.5e3"`) go through `f64`.
pub fn normalize_number(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if let Some(integral) = strip_zero_fraction(trimmed) {
        return Some(integral);
    }

    if trimmed.contains('.')
        && trimmed.contains(['e', 'E'])
        && let Ok(number) = trimmed.parse::<f64>()
        && number.is_finite()
        && number.fract() == 0.0
    {
        return Some(format_integral(number));
    }

    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return Some(value.to_string());
    }

    None
}

/// `-?digits.zeros` without its fraction, `None` for any other shape.
fn strip_zero_fraction(value: &str) -> Option<String> {
    let (int, fraction) = value.split_once('.')?;
    let digits = int.strip_prefix('-').unwrap_or(int);
    if digits.is_empty()
        || fraction.is_empty()
        || !digits.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b == b'0')
    {
        return None;
    }
    if digits.bytes().all(|b| b == b'0') {
        return Some("0".to_string());
    }
    Some(int.to_string())
}

fn format_integral(number: f64) -> String {
    // `-0.0` would print as "-0"
    if number == 0.0 {
        "0".to_string()
    } else {
        format!("{number}")
    }
}

/// Normalize one cell: numeric cleanup if it applies, otherwise repair.
pub fn normalize_cell(value: &str) -> String {
    normalize_number(value).unwrap_or_else(|| repair_encoding(value))
}
