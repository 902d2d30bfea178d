/*
    Top-level
*/

//! Controlled rounding of IEEE-754 double-precision values.
//!
//! Every rounding direction is derived in software from the packed bit
//! pattern of the input; the floating-point environment's rounding-mode
//! register is never read or written. All operations are pure, total
//! functions, so concurrent callers on any mix of modes cannot observe
//! each other.

mod ieee754;
mod round;

pub use ieee754::*;
pub use round::*;
