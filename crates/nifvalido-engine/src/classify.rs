//! Character-level predicates.
//!
//! All predicates compare code points against the ASCII ranges only. A NIF is
//! written in the Latin alphabet plus decimal digits, so anything outside
//! `A-Z`, `a-z` and `0-9` (accented letters, full-width digits, punctuation)
//! is treated as noise by the normalizer.

/// Offset between an ASCII lowercase letter and its uppercase form.
const CASE_OFFSET: u32 = ('a' as u32) - ('A' as u32);

/// Returns true for `A-Z` and `a-z`.
pub fn is_letter(c: char) -> bool {
    ('A'..='Z').contains(&c) || ('a'..='z').contains(&c)
}

/// Returns true for `0-9`.
pub fn is_digit(c: char) -> bool {
    ('0'..='9').contains(&c)
}

pub fn is_alnum(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Shifts `a-z` onto `A-Z`; every other character is returned unchanged.
pub fn to_upper(c: char) -> char {
    if ('a'..='z').contains(&c) {
        char::from_u32(c as u32 - CASE_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Numeric value of a decimal digit, `None` for anything else.
pub fn digit_value(c: char) -> Option<u32> {
    is_digit(c).then(|| c as u32 - '0' as u32)
}

/// Accumulates the decimal value of the digits in `chars`, left to right,
/// skipping every non-digit character. Saturates instead of overflowing.
pub fn to_number(chars: impl IntoIterator<Item = char>) -> u64 {
    chars
        .into_iter()
        .filter_map(digit_value)
        .fold(0u64, |n, d| n.saturating_mul(10).saturating_add(u64::from(d)))
}
