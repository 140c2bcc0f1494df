use crate::error::Error;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand_core::{CryptoRng, RngCore};

use std::fmt;
use std::sync::Arc;

/// A prime field given by its modulus at runtime.
///
/// The handle is cheap to clone and every element minted through it carries
/// a copy, so binary operations can reject operands from different fields.
/// The modulus must be prime for `inverse` and `sqrt` to be meaningful.
#[derive(Clone, Debug)]
pub struct Field(Arc<BigUint>);

/// An integer in canonical form, i.e. reduced to `[0, p)`.
#[derive(Clone, Debug)]
pub struct FieldElement {
    field: Field,
    value: BigUint,
}

/// Parity of a canonical field value, used to select one of the two square
/// roots of a quadratic residue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(value: &BigUint) -> Self {
        if value.is_even() {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

impl Field {
    pub fn new(modulus: BigUint) -> Self {
        assert!(modulus > BigUint::one(), "field modulus must be at least 2");
        Self(Arc::new(modulus))
    }

    pub fn modulus(&self) -> &BigUint {
        &self.0
    }

    /// Mints the canonical representative of `value` in this field.
    pub fn element(&self, value: &BigUint) -> FieldElement {
        let value = if value < self.modulus() {
            value.clone()
        } else {
            value % self.modulus()
        };
        FieldElement {
            field: self.clone(),
            value,
        }
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement {
            field: self.clone(),
            value: BigUint::zero(),
        }
    }

    pub fn one(&self) -> FieldElement {
        FieldElement {
            field: self.clone(),
            value: BigUint::one(),
        }
    }

    /// Samples a uniformly distributed element.
    pub fn random_element<R: CryptoRng + RngCore>(&self, rng: &mut R) -> FieldElement {
        // NOTE 128 bits of slack over the modulus width keeps the
        // reduction bias negligible
        let len = self.modulus().bits().div_ceil(8) as usize + 16;
        let mut bytes = vec![0_u8; len];
        rng.fill_bytes(&mut bytes);
        self.element(&BigUint::from_bytes_be(&bytes))
    }

    pub(crate) fn expect_same(&self, other: &Self) -> Result<(), Error> {
        if self == other {
            Ok(())
        } else {
            Err(Error::FieldMismatch {
                lhs: self.to_string(),
                rhs: other.to_string(),
            })
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Field {}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(0x{:x})", self.0.as_ref())
    }
}

// NOTE the arithmetic methods deliberately shadow the operator trait
// names: the checks can fail, so they return Result instead of Output
#[allow(clippy::should_implement_trait)]
impl FieldElement {
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn inner(&self) -> &BigUint {
        &self.value
    }

    pub fn into_inner(self) -> BigUint {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn parity(&self) -> Parity {
        Parity::of(&self.value)
    }

    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.field.expect_same(&other.field)?;
        Ok(self.field.element(&(&self.value + &other.value)))
    }

    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.field.expect_same(&other.field)?;
        Ok(self
            .field
            .element(&(&self.value + self.field.modulus() - &other.value)))
    }

    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        self.field.expect_same(&other.field)?;
        Ok(self.field.element(&(&self.value * &other.value)))
    }

    pub fn div(&self, other: &Self) -> Result<Self, Error> {
        self.field.expect_same(&other.field)?;
        self.mul(&other.inverse()?)
    }

    pub fn square(&self) -> Self {
        self.field.element(&(&self.value * &self.value))
    }

    pub fn neg(&self) -> Self {
        self.field.element(&(self.field.modulus() - &self.value))
    }

    /// Square-and-multiply exponentiation with a plain integer exponent.
    pub fn pow(&self, exponent: &BigUint) -> Self {
        Self {
            field: self.field.clone(),
            value: self.value.modpow(exponent, self.field.modulus()),
        }
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    pub fn inverse(&self) -> Result<Self, Error> {
        if self.value.is_zero() {
            return Err(Error::NotInvertible {
                field: self.field.to_string(),
            });
        }
        let value = BigInt::from(self.value.clone());
        let modulus = BigInt::from(self.field.modulus().clone());
        let ext = value.extended_gcd(&modulus);
        debug_assert!(ext.gcd.is_one());
        // NOTE unwrap is fine because mod_floor returns a value in [0, p)
        let inverse = ext.x.mod_floor(&modulus).to_biguint().unwrap();
        Ok(self.field.element(&inverse))
    }

    /// Square root of a quadratic residue, selected by the parity of the
    /// returned canonical value.
    ///
    /// Dispatches on `p mod 8`. The residue classes 3 and 7 use the
    /// `(p + 1) / 4` exponent, class 5 needs an extra twist and class 1
    /// (which would require Tonelli-Shanks) is rejected as unsupported.
    /// Non-residue inputs yield a well-formed element that is not a root,
    /// so callers validate the result where it matters.
    pub fn sqrt(&self, parity: Parity) -> Result<Self, Error> {
        if self.value.is_zero() {
            return Ok(self.clone());
        }
        let p = self.field.modulus();
        let root = match (p % 8_u32).to_u8() {
            Some(3) | Some(7) => self.pow(&((p + 1_u32) >> 2_u32)),
            Some(5) => {
                let check = self.pow(&((p + 1_u32) >> 2_u32));
                if check.value.is_one() {
                    self.pow(&((p + 3_u32) >> 3_u32))
                } else {
                    let doubled = self.field.element(&(&self.value * 2_u32));
                    let quadrupled = self.field.element(&(&self.value * 4_u32));
                    quadrupled.pow(&((p - 5_u32) >> 3_u32)).mul(&doubled)?
                }
            }
            _ => {
                return Err(Error::UnsupportedModulus {
                    field: self.field.to_string(),
                })
            }
        };
        if root.parity() == parity {
            Ok(root)
        } else {
            Ok(root.neg())
        }
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.value == other.value
    }
}

impl Eq for FieldElement {}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}
