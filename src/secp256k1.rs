use crate::arithmetic::{Curve, Field};
use crate::ecdsa::SignatureContext;

use num_bigint::BigUint;

const PRIME_MODULUS: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
const ORDER: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
const GENERATOR_X: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const GENERATOR_Y: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

// NOTE unwrap is fine because the embedded constants are valid hex
fn constant(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

/// The Bitcoin curve `y^2 = x^3 + 7` over its 256 bit prime field.
pub fn curve() -> Curve {
    let field = Field::new(constant(PRIME_MODULUS));
    Curve::new(field, &BigUint::from(0_u32), &BigUint::from(7_u32))
}

/// A ready-made signature context over secp256k1 and its standard
/// generator.
pub fn context() -> SignatureContext {
    let curve = curve();
    let generator = curve.point(&constant(GENERATOR_X), &constant(GENERATOR_Y));
    // NOTE unwrap is fine because the generator was minted on this curve
    SignatureContext::new(curve, generator, constant(ORDER)).unwrap()
}
