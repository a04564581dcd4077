use thiserror::Error;

/// Reasons an input is not a valid NIF.
///
/// Hosts calling [`nif_valido`](crate::nif_valido) never see these: every
/// variant collapses into the blank sentinel. They are kept apart for
/// [`validate`](crate::validate) callers and for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NifError {
    #[error("input is {len} characters long, at most {max} are accepted", max = crate::MAX_INPUT_LEN)]
    InputTooLong { len: usize },

    #[error("input has no letters or digits")]
    Empty,

    #[error("'{0}' cannot start a NIF")]
    ExcludedLetter(char),

    #[error("no significant digit found")]
    NoSignificantDigit,

    #[error("{significant} significant characters do not fit in {width}")]
    Overflow { significant: usize, width: usize },

    #[error("unexpected letter at position {position}")]
    EmbeddedLetter { position: usize },

    #[error("check character '{found}' does not match expected '{expected}'")]
    CheckMismatch { expected: char, found: char },

    #[error("check character cannot be computed")]
    UndefinedCheck,
}
