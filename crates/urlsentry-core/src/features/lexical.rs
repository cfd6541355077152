//! Character-level features computed on the raw, unmodified URL.

use std::collections::HashMap;

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::ExtractError;

/// Characters counted by [`count_special_char`].
pub const SPECIAL_CHARS: [char; 14] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=',
];

/// Keywords that set `is_filter`, matched against the lower-cased URL.
pub const FILTER_WORDS: [&str; 11] = [
    "login",
    "secure",
    "update",
    "account",
    "bank",
    "confirm",
    "signin",
    "submit",
    "webscr",
    "ebayisapi",
    "cmd",
];

pub fn count_special_char(url: &str) -> usize {
    url.chars().filter(|c| SPECIAL_CHARS.contains(c)).count()
}

pub fn is_filter(url: &str) -> bool {
    let lower = url.to_lowercase();
    FILTER_WORDS.iter().any(|word| lower.contains(word))
}

/// Letters (`L*`) and numbers (`N*`). Combining marks do not count, unlike
/// [`char::is_alphanumeric`].
fn is_letter_or_number(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

/// Fraction of alphanumeric characters; 0 for the empty string.
pub fn ratio_alpha_numeric(url: &str) -> f64 {
    let total = url.chars().count();
    if total == 0 {
        return 0.0;
    }
    let alnum = url.chars().filter(|&c| is_letter_or_number(c)).count();
    alnum as f64 / total as f64
}

pub fn count_url_dots(url: &str) -> usize {
    url.matches('.').count()
}

/// Counts every `/`, including the two of `://`.
pub fn count_file_path(url: &str) -> usize {
    url.matches('/').count()
}

/// Shannon entropy (bits) of the character distribution of `url`.
///
/// Terms are summed in order of first occurrence so the result is
/// bit-for-bit reproducible.
pub fn value_entropy_url(url: &str) -> Result<f64, ExtractError> {
    let mut order: Vec<char> = Vec::new();
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in url.chars() {
        let n = counts.entry(c).or_insert(0);
        if *n == 0 {
            order.push(c);
        }
        *n += 1;
    }

    let len = url.chars().count();
    if len == 0 {
        return Err(ExtractError::EmptyInput);
    }

    let sum = order.iter().fold(0.0f64, |acc, c| {
        let p = counts[c] as f64 / len as f64;
        acc + p * p.log2()
    });
    Ok(-sum)
}
