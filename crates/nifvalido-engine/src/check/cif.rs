//! Weighted-sum control digit for legal-entity codes.

use crate::classify::digit_value;

/// Letter form of the control digit, indexed by the digit.
pub const LETTERS: [char; 10] = ['J', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Computes the control digit (0-9) over the seven digits that follow the
/// entity letter. Returns `None` if any of them is not a digit.
///
/// Digits in odd positions, counting from 1, are doubled and the two digits
/// of the product added; digits in even positions are added as they are.
pub fn control_digit(digits: &[char]) -> Option<u32> {
    let mut sum = 0;
    for (i, &c) in digits.iter().enumerate() {
        let d = digit_value(c)?;
        sum += if i % 2 == 0 {
            let doubled = d * 2;
            doubled / 10 + doubled % 10
        } else {
            d
        };
    }
    Some((10 - sum % 10) % 10)
}

pub fn as_digit(n: u32) -> char {
    char::from_digit(n, 10).unwrap_or('0')
}

pub fn as_letter(n: u32) -> char {
    LETTERS[n as usize % LETTERS.len()]
}
