//! Geometry of liquid tanks measured from the top.

mod level;
mod linear_tank;
mod tank;

pub use crate::level::Level;
pub use crate::linear_tank::{Error, LinearTank};
pub use crate::tank::Tank;
