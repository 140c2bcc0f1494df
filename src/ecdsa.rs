use crate::arithmetic::{Curve, Field, FieldElement, Parity, Point};
use crate::error::Error;

use num_bigint::BigUint;
use num_traits::Zero;

use std::fmt;

/// An ECDSA signature as a pair of plain integers.
///
/// The pair is untrusted data. Range and validity checks happen in the
/// consuming operations, not at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

/// The nonce and private key extracted from two signatures that were made
/// with the same nonce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveredSecrets {
    pub nonce: BigUint,
    pub private_key: BigUint,
}

/// Signing, verification and key recovery over one curve and generator.
///
/// Scalars (digests, keys, nonces) are plain integers at the boundary and
/// are canonicalized into the field induced by the generator's order before
/// use, so the curve's coordinate field never mixes with the scalar field.
#[derive(Clone, Debug)]
pub struct SignatureContext {
    curve: Curve,
    generator: Point,
    scalar_field: Field,
}

impl SignatureContext {
    /// Builds a context from a curve, a generator on it and the
    /// generator's prime order.
    pub fn new(curve: Curve, generator: Point, order: BigUint) -> Result<Self, Error> {
        if let Point::Affine { x, y } = &generator {
            curve.field().expect_same(x.field())?;
            curve.field().expect_same(y.field())?;
        }
        Ok(Self {
            curve,
            generator,
            scalar_field: Field::new(order),
        })
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// The field of integers modulo the generator's order.
    pub fn scalar_field(&self) -> &Field {
        &self.scalar_field
    }

    fn scalar(&self, value: &BigUint) -> FieldElement {
        self.scalar_field.element(value)
    }

    /// Derives the public key `Y = G * x`.
    pub fn public_key(&self, private_key: &BigUint) -> Result<Point, Error> {
        let x = self.scalar(private_key);
        self.curve.scalar_mul(&self.generator, x.inner())
    }

    /// Signs a digest with the given private key and one-shot nonce:
    /// `r = x(G * k) mod n` and `s = (m + x * r) / k mod n`.
    ///
    /// Fails with `DegenerateSignature` when either component reduces to
    /// zero, which includes a nonce that is a multiple of the order. The
    /// caller retries with a fresh nonce.
    pub fn sign(
        &self,
        digest: &BigUint,
        private_key: &BigUint,
        nonce: &BigUint,
    ) -> Result<Signature, Error> {
        let m = self.scalar(digest);
        let x = self.scalar(private_key);
        let k = self.scalar(nonce);

        let nonce_point = self.curve.scalar_mul(&self.generator, k.inner())?;
        // a nonce point at infinity signs as r = 0 and is caught below
        let r = match nonce_point.x() {
            None => self.scalar_field.zero(),
            Some(coordinate) => self.scalar(coordinate.inner()),
        };
        if r.is_zero() {
            return Err(Error::DegenerateSignature { component: "r" });
        }
        let s = m.add(&x.mul(&r)?)?.div(&k)?;
        if s.is_zero() {
            return Err(Error::DegenerateSignature { component: "s" });
        }
        Ok(Signature {
            r: r.into_inner(),
            s: s.into_inner(),
        })
    }

    /// Checks a signature against a digest and public key by recomputing
    /// the nonce point as `G * (m / s) + Y * (r / s)`.
    ///
    /// Invalid signatures, including components outside `[1, n - 1]`,
    /// yield `Ok(false)`. Errors are reserved for malformed field or curve
    /// inputs such as a public key on a foreign curve.
    pub fn verify(
        &self,
        digest: &BigUint,
        public_key: &Point,
        signature: &Signature,
    ) -> Result<bool, Error> {
        let order = self.scalar_field.modulus();
        if signature.r.is_zero() || &signature.r >= order {
            return Ok(false);
        }
        if signature.s.is_zero() || &signature.s >= order {
            return Ok(false);
        }

        let m = self.scalar(digest);
        let r = self.scalar(&signature.r);
        let s = self.scalar(&signature.s);
        let generator_part = self.curve.scalar_mul(&self.generator, m.div(&s)?.inner())?;
        let key_part = self.curve.scalar_mul(public_key, r.div(&s)?.inner())?;
        let candidate = self.curve.add(&generator_part, &key_part)?;
        match candidate.x() {
            None => Ok(false),
            Some(coordinate) => Ok(self.scalar(coordinate.inner()) == r),
        }
    }

    /// Recovers the public key from a single signature given the parity of
    /// the nonce point's y coordinate: `Y = R * (s / r) - G * (m / r)`.
    ///
    /// Both parities yield valid candidates; the caller picks the one that
    /// matches other evidence, e.g. a known address.
    pub fn recover_public_key(
        &self,
        digest: &BigUint,
        signature: &Signature,
        parity: Parity,
    ) -> Result<Point, Error> {
        let m = self.scalar(digest);
        let r = self.scalar(&signature.r);
        let s = self.scalar(&signature.s);
        let nonce_point = self.curve.decompress(r.inner(), parity)?;
        let nonce_part = self.curve.scalar_mul(&nonce_point, s.div(&r)?.inner())?;
        let generator_part = self.curve.scalar_mul(&self.generator, m.div(&r)?.inner())?;
        self.curve.sub(&nonce_part, &generator_part)
    }

    /// Recovers the public key from two signatures over the same digest,
    /// without knowing the digest: `Y = (R1 * s1 - R2 * s2) / (r1 - r2)`.
    ///
    /// With two unknown nonce parities there are four candidates; one per
    /// parity pair. Fails with `NotInvertible` when the signatures share
    /// their `r` component.
    pub fn recover_public_key_from_pair(
        &self,
        first: &Signature,
        second: &Signature,
        first_parity: Parity,
        second_parity: Parity,
    ) -> Result<Point, Error> {
        let r1 = self.scalar(&first.r);
        let s1 = self.scalar(&first.s);
        let r2 = self.scalar(&second.r);
        let s2 = self.scalar(&second.s);
        let first_point = self.curve.decompress(r1.inner(), first_parity)?;
        let second_point = self.curve.decompress(r2.inner(), second_parity)?;
        let lhs = self.curve.scalar_mul(&first_point, s1.inner())?;
        let rhs = self.curve.scalar_mul(&second_point, s2.inner())?;
        let difference = self.curve.sub(&lhs, &rhs)?;
        self.curve.scalar_div(&difference, &r1.sub(&r2)?)
    }

    /// Extracts the nonce and private key from two signatures that share
    /// their `r` component, i.e. were made with the same nonce:
    /// `k = (m1 - m2) / (s1 - s2)`, then `x = (s * k - m) / r`.
    ///
    /// The private key is derived from both signatures and the two
    /// derivations must agree; a disagreement surfaces as `NonceMismatch`.
    /// The algebra cannot attest that the inputs really came from a shared
    /// nonce, so callers confirm the result against independent evidence,
    /// e.g. by deriving the public key from it.
    pub fn recover_from_nonce_reuse(
        &self,
        r: &BigUint,
        s1: &BigUint,
        s2: &BigUint,
        digest1: &BigUint,
        digest2: &BigUint,
    ) -> Result<RecoveredSecrets, Error> {
        let s_difference = self.scalar(s1).sub(&self.scalar(s2))?;
        let m_difference = self.scalar(digest1).sub(&self.scalar(digest2))?;
        let nonce = m_difference.div(&s_difference)?;
        let first = self.private_key_from_nonce(r, s1, digest1, &nonce)?;
        let second = self.private_key_from_nonce(r, s2, digest2, &nonce)?;
        if first != second {
            return Err(Error::NonceMismatch);
        }
        Ok(RecoveredSecrets {
            nonce: nonce.into_inner(),
            private_key: first.into_inner(),
        })
    }

    /// Recovers the private key from one signature whose nonce leaked:
    /// `x = (s * k - m) / r`.
    pub fn recover_from_known_nonce(
        &self,
        r: &BigUint,
        s: &BigUint,
        digest: &BigUint,
        nonce: &BigUint,
    ) -> Result<BigUint, Error> {
        let nonce = self.scalar(nonce);
        Ok(self
            .private_key_from_nonce(r, s, digest, &nonce)?
            .into_inner())
    }

    fn private_key_from_nonce(
        &self,
        r: &BigUint,
        s: &BigUint,
        digest: &BigUint,
        nonce: &FieldElement,
    ) -> Result<FieldElement, Error> {
        let m = self.scalar(digest);
        let r = self.scalar(r);
        let s = self.scalar(s);
        s.mul(nonce)?.sub(&m)?.div(&r)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r = 0x{:x}, s = 0x{:x})", self.r, self.s)
    }
}
