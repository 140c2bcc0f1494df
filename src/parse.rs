use crate::arithmetic::{Curve, Point};
use crate::ecdsa::Signature;

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid hex digits in {0:?}")]
    InvalidDigits(String),
}

/// Parses a big-endian hex integer of any width, with or without a `0x`
/// prefix.
pub fn biguint_from_hex(hex: &str) -> Result<BigUint, ParseError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| ParseError::InvalidDigits(hex.to_string()))
}

/// Parses affine coordinates onto the given curve. Membership is not
/// checked here; callers use [`Curve::is_on_curve`] where it matters.
pub fn point_from_hex(curve: &Curve, x_hex: &str, y_hex: &str) -> Result<Point, ParseError> {
    Ok(curve.point(&biguint_from_hex(x_hex)?, &biguint_from_hex(y_hex)?))
}

pub fn signature_from_hex(r_hex: &str, s_hex: &str) -> Result<Signature, ParseError> {
    Ok(Signature {
        r: biguint_from_hex(r_hex)?,
        s: biguint_from_hex(s_hex)?,
    })
}
