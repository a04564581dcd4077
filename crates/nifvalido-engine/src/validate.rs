use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::check::{DocumentClass, expected_check};
use crate::error::NifError;
use crate::normalize::{CODE_LEN, CheckSlot, normalize};

/// Result returned to hosts for any invalid input: nine spaces.
pub const BLANK: &str = "         ";

/// A validated NIF in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Nif {
    code: String,
    class: DocumentClass,
    completed: bool,
}

impl Nif {
    /// The nine-character canonical code.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn class(&self) -> DocumentClass {
        self.class
    }

    /// True when the input carried no check character and it was filled in.
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn into_code(self) -> String {
        self.code
    }
}

impl fmt::Display for Nif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for Nif {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl FromStr for Nif {
    type Err = NifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/// Normalizes `input`, then confirms or fills in its check character.
pub fn validate(input: &str) -> Result<Nif, NifError> {
    let result = normalize(input).and_then(|code| {
        log::trace!("normalized {input:?} to {code}");
        let class = DocumentClass::from_first(code.first()).ok_or(NifError::UndefinedCheck)?;
        let expected = expected_check(&code).ok_or(NifError::UndefinedCheck)?;

        let completed = match code.check() {
            CheckSlot::Supplied(found) if found == expected => false,
            CheckSlot::Supplied(found) => {
                return Err(NifError::CheckMismatch { expected, found });
            }
            CheckSlot::Missing => true,
        };

        let code = code.with_check(expected);
        debug_assert_eq!(code.len(), CODE_LEN);
        Ok(Nif {
            code,
            class,
            completed,
        })
    });

    if let Err(err) = &result {
        log::debug!("rejected {input:?}: {err}");
    }
    result
}

/// Host-facing contract: the canonical code, or [`BLANK`] if `input` is
/// not a valid NIF. Always nine characters.
pub fn nif_valido(input: &str) -> String {
    validate(input).map_or_else(|_| BLANK.to_string(), Nif::into_code)
}

pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CifKind, NiePrefix};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("12345678Z", "12345678Z")]
    #[case("X1234567L", "X1234567L")]
    #[case("12345678", "12345678Z")]
    #[case("A58818501", "A58818501")]
    #[case("12-345.678 z", "12345678Z")]
    #[case("x-1234567", "X1234567L")]
    #[case("1234567", "01234567L")]
    #[case("P2807900", "P2807900B")]
    #[case("p-2807900-b", "P2807900B")]
    #[case("N0032484H", "N0032484H")]
    #[case("N00324848", "N00324848")]
    #[case("00000000T", "00000000T")]
    fn accepted(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(nif_valido(input), expected);
    }

    #[rstest]
    #[case("12345678A")]
    #[case("X1234567A")]
    #[case("A58818502")]
    #[case("A5881850J")]
    #[case("P2807900C")]
    #[case("N0032484A")]
    #[case("N00324841")]
    #[case("I1234567")]
    #[case("K12345678")]
    #[case("L1234567D")]
    #[case("M12345678")]
    #[case("O1234567")]
    #[case("T12345678")]
    #[case("")]
    #[case("hello")]
    #[case("123456789012")]
    fn rejected(#[case] input: &str) {
        assert_eq!(nif_valido(input), BLANK);
    }

    #[test]
    fn reports_reason() {
        assert_eq!(
            validate("12345678A"),
            Err(NifError::CheckMismatch {
                expected: 'Z',
                found: 'A'
            })
        );
        assert_eq!(validate("M1234567"), Err(NifError::ExcludedLetter('M')));
    }

    #[test]
    fn marks_completed_codes() {
        let filled = validate("12345678").unwrap();
        assert!(filled.completed());
        assert_eq!(filled.class(), DocumentClass::Dni);

        let confirmed = validate("12345678Z").unwrap();
        assert!(!confirmed.completed());
    }

    #[test]
    fn classifies_results() {
        assert_eq!(
            validate("Y1234567").unwrap().class(),
            DocumentClass::Nie(NiePrefix::Y)
        );
        assert_eq!(
            validate("A58818501").unwrap().class(),
            DocumentClass::Cif(CifKind::DigitOnly)
        );
        assert_eq!(
            validate("Q2826000H").unwrap().class(),
            DocumentClass::Cif(CifKind::LetterOnly)
        );
    }

    #[test]
    fn parses_through_from_str() {
        let nif: Nif = "x1234567l".parse().unwrap();
        assert_eq!(nif.to_string(), "X1234567L");
        assert_eq!(nif.as_ref(), "X1234567L");
        assert!("X1234567A".parse::<Nif>().is_err());
    }

    #[test]
    fn blank_is_nine_spaces() {
        assert_eq!(BLANK.len(), CODE_LEN);
        assert!(BLANK.chars().all(|c| c == ' '));
    }

    #[test]
    fn is_valid_matches_result() {
        assert!(is_valid("12345678Z"));
        assert!(!is_valid("12345678A"));
    }
}
