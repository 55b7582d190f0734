//! Dice for the wilderness encounter simulator.
//!
//! Provides polyhedral die types, dice expressions in the classic
//! `NdS[xM|/M][+A]` notation (parsed once, rolled many times), and the
//! [`DiceRoller`] seam through which all randomness flows.

pub mod die;
pub mod error;
pub mod expr;
pub mod roller;

pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use expr::{DiceExpr, MAX_DICE, MAX_SCALE, MAX_SIDES, Scale};
pub use roller::{DiceRoller, FixedRolls};
