#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod digest;
mod ecdsa;
mod error;
pub mod parse;
pub mod secp256k1;

pub use arithmetic::{Curve, Field, FieldElement, Parity, Point};
pub use ecdsa::{RecoveredSecrets, Signature, SignatureContext};
pub use error::Error;
pub use num_bigint::BigUint;
