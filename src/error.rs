use thiserror::Error;

/// Failures of the algebraic core.
///
/// All variants signal non-retryable input or programming errors. The one
/// deliberate exception to erroring is signature verification, which folds
/// every merely-invalid signature into `Ok(false)` and reserves errors for
/// malformed field or curve inputs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("operands belong to different fields: {lhs} and {rhs}")]
    FieldMismatch { lhs: String, rhs: String },
    #[error("attempted to invert a value congruent to zero in {field}")]
    NotInvertible { field: String },
    #[error("no square root branch for {field}: modulus is 1 mod 8")]
    UnsupportedModulus { field: String },
    #[error("degenerate signature ({component} = 0), re-sign with a fresh nonce")]
    DegenerateSignature { component: &'static str },
    #[error("signatures disagree on the recovered private key, nonce was not shared")]
    NonceMismatch,
}
