//! Check character computation.
//!
//! The first character of a [`NormalizedCode`] selects one of five rules:
//!
//! | first char            | class                 | check character              |
//! |-----------------------|-----------------------|------------------------------|
//! | `0-9`                 | DNI                   | letter, modulo 23            |
//! | `X`, `Y`, `Z`         | NIE                   | letter, modulo 23 + offset   |
//! | `A`, `B`, `E`, `H`    | CIF, digit only       | digit, weighted sum          |
//! | `P`, `Q`, `S`, `W`    | CIF, letter only      | letter, weighted sum         |
//! | other `A-W`           | CIF, either           | whatever form was supplied   |
//!
//! `I`, `K`, `L`, `M`, `O` and `T` start no valid code.

pub mod cif;
pub mod dni;

use serde::Serialize;

use crate::classify::{is_digit, is_letter, to_number};
use crate::normalize::{CheckSlot, NormalizedCode};

/// Leading letter of a NIE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NiePrefix {
    X,
    Y,
    Z,
}

impl NiePrefix {
    /// Value added to the seven digits so NIEs share the DNI letter table.
    pub fn offset(self) -> u64 {
        match self {
            NiePrefix::X => 0,
            NiePrefix::Y => 10_000_000,
            NiePrefix::Z => 20_000_000,
        }
    }
}

/// Which form of check character a CIF entity letter takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CifKind {
    DigitOnly,
    LetterOnly,
    Either,
}

/// Document class, derived from the first character of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentClass {
    Dni,
    Nie(NiePrefix),
    Cif(CifKind),
}

impl DocumentClass {
    /// Classifies by leading character. `None` for excluded letters and
    /// anything that is not an uppercase letter or digit.
    pub fn from_first(first: char) -> Option<Self> {
        let class = match first {
            c if is_digit(c) => DocumentClass::Dni,
            'X' => DocumentClass::Nie(NiePrefix::X),
            'Y' => DocumentClass::Nie(NiePrefix::Y),
            'Z' => DocumentClass::Nie(NiePrefix::Z),
            'I' | 'K' | 'L' | 'M' | 'O' | 'T' => return None,
            'A' | 'B' | 'E' | 'H' => DocumentClass::Cif(CifKind::DigitOnly),
            'P' | 'Q' | 'S' | 'W' => DocumentClass::Cif(CifKind::LetterOnly),
            'A'..='W' => DocumentClass::Cif(CifKind::Either),
            _ => return None,
        };
        Some(class)
    }

    /// Short lowercase name: `dni`, `nie` or `cif`.
    pub fn name(self) -> &'static str {
        match self {
            DocumentClass::Dni => "dni",
            DocumentClass::Nie(_) => "nie",
            DocumentClass::Cif(_) => "cif",
        }
    }
}

/// Computes the check character `code` should carry, or `None` when it
/// cannot be determined.
pub fn expected_check(code: &NormalizedCode) -> Option<char> {
    match DocumentClass::from_first(code.first())? {
        DocumentClass::Dni => Some(dni::check_letter(to_number(code.body().iter().copied()))),
        DocumentClass::Nie(prefix) => {
            let n = prefix.offset() + to_number(code.digit_field().iter().copied());
            Some(dni::check_letter(n))
        }
        DocumentClass::Cif(kind) => {
            let n = cif::control_digit(code.digit_field())?;
            match kind {
                CifKind::DigitOnly => Some(cif::as_digit(n)),
                CifKind::LetterOnly => Some(cif::as_letter(n)),
                // Defer to the form the caller wrote.
                CifKind::Either => match code.check() {
                    CheckSlot::Supplied(c) if is_letter(c) => Some(cif::as_letter(n)),
                    CheckSlot::Supplied(_) => Some(cif::as_digit(n)),
                    CheckSlot::Missing => None,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use rstest::rstest;

    #[rstest]
    #[case('0', Some(DocumentClass::Dni))]
    #[case('9', Some(DocumentClass::Dni))]
    #[case('X', Some(DocumentClass::Nie(NiePrefix::X)))]
    #[case('Z', Some(DocumentClass::Nie(NiePrefix::Z)))]
    #[case('A', Some(DocumentClass::Cif(CifKind::DigitOnly)))]
    #[case('H', Some(DocumentClass::Cif(CifKind::DigitOnly)))]
    #[case('P', Some(DocumentClass::Cif(CifKind::LetterOnly)))]
    #[case('W', Some(DocumentClass::Cif(CifKind::LetterOnly)))]
    #[case('C', Some(DocumentClass::Cif(CifKind::Either)))]
    #[case('N', Some(DocumentClass::Cif(CifKind::Either)))]
    #[case('V', Some(DocumentClass::Cif(CifKind::Either)))]
    #[case('I', None)]
    #[case('K', None)]
    #[case('L', None)]
    #[case('M', None)]
    #[case('O', None)]
    #[case('T', None)]
    #[case('a', None)]
    #[case('#', None)]
    fn classes(#[case] first: char, #[case] expected: Option<DocumentClass>) {
        assert_eq!(DocumentClass::from_first(first), expected);
    }

    #[rstest]
    #[case("12345678", 'Z')]
    #[case("00000000T", 'T')]
    #[case("00000001", 'R')]
    #[case("99999999", 'R')]
    #[case("X1234567", 'L')]
    #[case("Y1234567", 'X')]
    #[case("Z1234567", 'R')]
    #[case("A58818501", '1')]
    #[case("B65410011", '1')]
    #[case("P2807900", 'B')]
    #[case("Q2826000H", 'H')]
    #[case("N0032484H", 'H')]
    #[case("N00324848", '8')]
    fn expected_characters(#[case] input: &str, #[case] expected: char) {
        let code = normalize(input).unwrap();
        assert_eq!(expected_check(&code), Some(expected));
    }

    #[test]
    fn nie_offsets() {
        assert_eq!(NiePrefix::X.offset(), 0);
        assert_eq!(NiePrefix::Y.offset(), 10_000_000);
        assert_eq!(NiePrefix::Z.offset(), 20_000_000);
    }

    #[test]
    fn names() {
        assert_eq!(DocumentClass::Dni.name(), "dni");
        assert_eq!(DocumentClass::Nie(NiePrefix::Y).name(), "nie");
        assert_eq!(DocumentClass::Cif(CifKind::Either).name(), "cif");
    }
}
