//! Reduction of raw input to the canonical 9-character layout.
//!
//! Normalization never computes a check character; it only decides where
//! every significant character goes:
//!
//! ```text
//! "12-345.678 z"  → strip → "12345678Z" → 1 2 3 4 5 6 7 8 | Z
//! "x-123456"      → strip → "X123456"   → X 0 1 2 3 4 5 6 | #
//! "A5881850"      → strip → "A5881850"  → A 0 5 8 8 1 8 5 | 0
//! ```
//!
//! The final slot is either the check character supplied by the caller or
//! the `#` placeholder when the caller left it out. A placeholder is only
//! ever reserved for document classes whose check character is a letter, so
//! a trailing digit on a DNI means "no check letter given" while on an
//! `A`-class CIF it *is* the check digit.

use std::fmt;

use crate::classify::{is_digit, is_letter, to_upper};
use crate::error::NifError;
use crate::lexer::lex;

/// Length of every canonical code.
pub const CODE_LEN: usize = 9;

/// Characters before the check slot.
pub const BODY_LEN: usize = CODE_LEN - 1;

/// Longest raw input accepted from a host.
pub const MAX_INPUT_LEN: usize = 20;

/// Rendering of [`CheckSlot::Missing`].
pub const PLACEHOLDER: char = '#';

/// Letters that never start a NIF.
const EXCLUDED_LEADS: [char; 6] = ['I', 'K', 'L', 'M', 'O', 'T'];

/// Leading letters whose check character is always a letter. Together with
/// a leading digit (DNI) these are the classes that get a placeholder when
/// the input ends in a digit.
const LETTER_CHECK_LEADS: [char; 7] = ['Z', 'Y', 'X', 'W', 'S', 'Q', 'P'];

/// The trailing slot of a [`NormalizedCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSlot {
    /// The caller did not supply a check character.
    Missing,
    /// The caller supplied this candidate, still unverified.
    Supplied(char),
}

/// A code in canonical layout: an optional leading letter, a zero-padded
/// digit field, and the check slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCode {
    body: [char; BODY_LEN],
    check: CheckSlot,
}

impl NormalizedCode {
    /// The first character, which selects the document class.
    pub fn first(&self) -> char {
        self.body[0]
    }

    /// Everything before the check slot.
    pub fn body(&self) -> &[char; BODY_LEN] {
        &self.body
    }

    /// The digits after the leading letter, or the whole body for a DNI.
    pub fn digit_field(&self) -> &[char] {
        if is_letter(self.first()) {
            &self.body[1..]
        } else {
            &self.body
        }
    }

    pub fn check(&self) -> CheckSlot {
        self.check
    }

    /// Renders the body followed by `check`.
    pub fn with_check(&self, check: char) -> String {
        self.body.iter().copied().chain(std::iter::once(check)).collect()
    }
}

impl fmt::Display for NormalizedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = match self.check {
            CheckSlot::Missing => PLACEHOLDER,
            CheckSlot::Supplied(c) => c,
        };
        f.write_str(&self.with_check(check))
    }
}

/// Drops every token that is not a letter or digit and uppercases the rest.
pub fn strip(input: &str) -> String {
    lex(input)
        .into_iter()
        .filter(|token| token.kind.is_significant())
        .flat_map(|token| token.text.chars())
        .map(to_upper)
        .collect()
}

/// Normalizes raw input into a [`NormalizedCode`].
pub fn normalize(input: &str) -> Result<NormalizedCode, NifError> {
    let len = input.chars().count();
    if len > MAX_INPUT_LEN {
        return Err(NifError::InputTooLong { len });
    }

    let stripped: Vec<char> = strip(input).chars().collect();
    let (Some(&first), Some(&last)) = (stripped.first(), stripped.last()) else {
        return Err(NifError::Empty);
    };
    if EXCLUDED_LEADS.contains(&first) {
        return Err(NifError::ExcludedLetter(first));
    }

    // The leading letter is kept as is; zeros after it are padding.
    let lead = usize::from(is_letter(first));
    let start = stripped[lead..]
        .iter()
        .position(|&c| c != '0')
        .map(|i| i + lead)
        .ok_or(NifError::NoSignificantDigit)?;
    let significant = &stripped[start..];

    let reserve = is_digit(last) && (is_digit(first) || LETTER_CHECK_LEADS.contains(&first));
    let width = CODE_LEN - lead - usize::from(reserve);
    if significant.len() > width {
        return Err(NifError::Overflow {
            significant: significant.len(),
            width,
        });
    }

    let (digits, check) = match significant.split_last() {
        Some((&c, rest)) if !reserve => (rest, CheckSlot::Supplied(c)),
        _ => (significant, CheckSlot::Missing),
    };
    if let Some(offset) = digits.iter().position(|&c| is_letter(c)) {
        return Err(NifError::EmbeddedLetter {
            position: start + offset,
        });
    }

    let mut body = ['0'; BODY_LEN];
    if lead == 1 {
        body[0] = first;
    }
    body[BODY_LEN - digits.len()..].copy_from_slice(digits);

    Ok(NormalizedCode { body, check })
}
