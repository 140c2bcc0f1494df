use super::field::{Field, FieldElement, Parity};
use super::point::Point;
use crate::error::Error;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use std::fmt;

/// A short Weierstrass curve `y^2 = x^3 + ax + b` over a prime field.
///
/// Operations take points by reference and verify that every coordinate
/// belongs to the curve's field before touching it, so a point minted for
/// one curve cannot silently leak into another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    field: Field,
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    pub fn new(field: Field, a: &BigUint, b: &BigUint) -> Self {
        let a = field.element(a);
        let b = field.element(b);
        Self { field, a, b }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn coeff_a(&self) -> &FieldElement {
        &self.a
    }

    pub fn coeff_b(&self) -> &FieldElement {
        &self.b
    }

    /// Mints an affine point from integer coordinates, canonicalizing them
    /// into the curve's field. The point is not required to satisfy the
    /// curve equation; see [`Curve::is_on_curve`].
    pub fn point(&self, x: &BigUint, y: &BigUint) -> Point {
        Point::Affine {
            x: self.field.element(x),
            y: self.field.element(y),
        }
    }

    pub fn identity(&self) -> Point {
        Point::Infinity
    }

    /// Borrows the coordinates of an affine point after checking that they
    /// belong to this curve's field. The identity has no coordinates.
    fn coords<'p>(
        &self,
        point: &'p Point,
    ) -> Result<Option<(&'p FieldElement, &'p FieldElement)>, Error> {
        match point {
            Point::Infinity => Ok(None),
            Point::Affine { x, y } => {
                self.field.expect_same(x.field())?;
                self.field.expect_same(y.field())?;
                Ok(Some((x, y)))
            }
        }
    }

    pub fn is_on_curve(&self, point: &Point) -> Result<bool, Error> {
        match self.coords(point)? {
            None => Ok(true),
            Some((x, y)) => {
                let rhs = x
                    .square()
                    .mul(x)?
                    .add(&self.a.mul(x)?)?
                    .add(&self.b)?;
                Ok(y.square() == rhs)
            }
        }
    }

    /// Adds two points with the chord-and-tangent rule.
    ///
    /// The identity absorbs, doubling a point with `y = 0` lands on the
    /// identity (the tangent is vertical) and so does adding two distinct
    /// points that share an x coordinate.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point, Error> {
        let p_coords = self.coords(p)?;
        let q_coords = self.coords(q)?;
        let (px, py) = match p_coords {
            None => return Ok(q.clone()),
            Some(coords) => coords,
        };
        let (qx, qy) = match q_coords {
            None => return Ok(p.clone()),
            Some(coords) => coords,
        };

        let lambda = if px == qx {
            if py == qy {
                if py.is_zero() {
                    return Ok(Point::Infinity);
                }
                let x_squared = px.square();
                let numerator = x_squared.add(&x_squared)?.add(&x_squared)?.add(&self.a)?;
                let denominator = py.add(py)?;
                numerator.div(&denominator)?
            } else {
                // opposite points
                return Ok(Point::Infinity);
            }
        } else {
            py.sub(qy)?.div(&px.sub(qx)?)?
        };

        let x = lambda.square().sub(px)?.sub(qx)?;
        let y = lambda.mul(&px.sub(&x)?)?.sub(py)?;
        Ok(Point::Affine { x, y })
    }

    pub fn double(&self, point: &Point) -> Result<Point, Error> {
        self.add(point, point)
    }

    pub fn negate(&self, point: &Point) -> Result<Point, Error> {
        self.coords(point)?;
        Ok(point.negate())
    }

    pub fn sub(&self, p: &Point, q: &Point) -> Result<Point, Error> {
        self.add(p, &q.negate())
    }

    /// Multiplies a point by a plain integer with a least-significant-bit
    /// first double-and-add loop. A zero scalar yields the identity.
    pub fn scalar_mul(&self, point: &Point, scalar: &BigUint) -> Result<Point, Error> {
        self.coords(point)?;
        let mut remaining = scalar.clone();
        let mut accumulator = Point::Infinity;
        let mut shifter = point.clone();
        while !remaining.is_zero() {
            if remaining.is_odd() {
                accumulator = self.add(&accumulator, &shifter)?;
            }
            shifter = self.add(&shifter, &shifter)?;
            remaining >>= 1_u32;
        }
        Ok(accumulator)
    }

    /// Multiplies a point by the inverse of `scalar`, taken in the field
    /// the scalar belongs to. For group elements that field is the one
    /// induced by the group order, not the curve's coordinate field.
    pub fn scalar_div(&self, point: &Point, scalar: &FieldElement) -> Result<Point, Error> {
        let inverse = scalar.inverse()?;
        self.scalar_mul(point, inverse.inner())
    }

    /// Lifts an x coordinate back onto the curve, picking the solution of
    /// `y^2 = x^3 + ax + b` with the requested parity.
    ///
    /// When `x` is not on the curve the square root is not a solution and
    /// the returned point fails [`Curve::is_on_curve`].
    pub fn decompress(&self, x: &BigUint, parity: Parity) -> Result<Point, Error> {
        let x = self.field.element(x);
        let y_squared = x
            .square()
            .mul(&x)?
            .add(&self.a.mul(&x)?)?
            .add(&self.b)?;
        let y = y_squared.sqrt(parity)?;
        Ok(Point::Affine { x, y })
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {} over {}", self.a, self.b, self.field)
    }
}
