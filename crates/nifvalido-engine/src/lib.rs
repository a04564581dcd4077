//! # nifvalido-engine
//!
//! Validation and canonicalization of Spanish tax identification codes:
//! DNI (citizens), NIE (foreign residents) and CIF (legal entities),
//! collectively NIF.
//!
//! Any string goes in; either a nine-character canonical code or nine
//! blanks comes out.
//!
//! ```
//! use nifvalido_engine::{nif_valido, BLANK};
//!
//! assert_eq!(nif_valido("12-345.678 z"), "12345678Z");
//! assert_eq!(nif_valido("12345678"), "12345678Z"); // check letter filled in
//! assert_eq!(nif_valido("12345678A"), BLANK);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! raw input → lexer → strip → normalize → expected_check → validate
//!                     (uppercase,          (DNI/NIE mod 23,
//!                      alnum only)          CIF weighted sum)
//! ```
//!
//! Every stage is a pure function of its input: no I/O, no shared state,
//! nothing carried between calls. Hosts may call [`nif_valido`] from as many
//! threads as they like.
//!
//! ## Module Structure
//!
//! ```text
//! nifvalido-engine/
//! ├── classify.rs   # ASCII letter/digit predicates and case folding
//! ├── lexer.rs      # Logos tokenizer: letters, digits, noise
//! ├── normalize.rs  # Canonical 9-slot layout, check slot, placeholder
//! ├── check/
//! │   ├── mod.rs    # DocumentClass and dispatch on the first character
//! │   ├── dni.rs    # Modulo-23 letter table
//! │   └── cif.rs    # Weighted-sum control digit and letter table
//! ├── validate.rs   # Confirm or fill in the check character
//! └── error.rs      # NifError
//! ```
//!
//! [`validate`] keeps the reason an input was rejected; [`nif_valido`]
//! folds every rejection into [`BLANK`] as hosts expect.

pub mod check;
pub mod classify;
pub mod error;
pub mod lexer;
pub mod normalize;
pub mod validate;

pub use check::{CifKind, DocumentClass, NiePrefix, expected_check};
pub use error::NifError;
pub use normalize::{CODE_LEN, CheckSlot, MAX_INPUT_LEN, NormalizedCode, normalize, strip};
pub use validate::{BLANK, Nif, is_valid, nif_valido, validate};
