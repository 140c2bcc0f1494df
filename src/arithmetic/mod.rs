mod curve;
mod field;
mod point;

pub use curve::Curve;
pub use field::{Field, FieldElement, Parity};
pub use point::Point;
