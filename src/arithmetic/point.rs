use super::field::FieldElement;
use crate::error::Error;

use std::fmt;

/// An affine curve point or the point at infinity.
///
/// The identity is a dedicated variant rather than a magic coordinate pair,
/// so `(0, 0)` stays available as an ordinary point on curves where it
/// satisfies the equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// Builds an affine point after checking that both coordinates live in
    /// the same field. No on-curve check is performed.
    pub fn affine(x: FieldElement, y: FieldElement) -> Result<Self, Error> {
        x.field().expect_same(y.field())?;
        Ok(Self::Affine { x, y })
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Self::Infinity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    /// Mirrors the point across the x axis. The identity is its own
    /// negation.
    pub fn negate(&self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Affine { x, y } => Self::Affine {
                x: x.clone(),
                y: y.neg(),
            },
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "(infinity)"),
            Self::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
