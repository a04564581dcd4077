//! Host bindings for nifvalido
//!
//! Two calling conventions over the same engine:
//!
//! - UniFFI exports for Kotlin/Swift/Python hosts (this module)
//! - a C scalar-UDF entry point for database engines ([`udf`])
//!
//! Both are stateless; every call validates one value.

pub mod udf;

use nifvalido_engine::Nif;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid NIF: {reason}")]
    Invalid { reason: String },
}

// ============ DTOs ============

/// A validated code.
#[derive(Debug, uniffi::Record)]
pub struct NifDto {
    /// Nine-character canonical code
    pub code: String,
    /// Document class: "dni", "nie" or "cif"
    pub document_class: String,
    /// True when the check character was filled in rather than confirmed
    pub completed: bool,
}

impl NifDto {
    fn from_engine(nif: Nif) -> Self {
        Self {
            document_class: nif.class().name().to_string(),
            completed: nif.completed(),
            code: nif.into_code(),
        }
    }
}

// ============ Standalone Functions ============

/// Canonical code for `input`, or nine spaces if it is not a valid NIF.
#[uniffi::export]
pub fn nif_valido(input: String) -> String {
    nifvalido_engine::nif_valido(&input)
}

/// Validate `input`, reporting why it was rejected.
#[uniffi::export]
pub fn validate_nif(input: String) -> Result<NifDto, FfiError> {
    nifvalido_engine::validate(&input)
        .map(NifDto::from_engine)
        .map_err(|e| FfiError::Invalid {
            reason: e.to_string(),
        })
}
