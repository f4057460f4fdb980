//! Arithmetic on [`Int256`](crate::Int256).
//!
//! Every operation is a pure function of its operands. Those that can
//! overflow or divide by zero return an [`Outcome`](crate::Outcome); the
//! rest return a plain value.

mod add;
mod bitwise;
mod derived;
mod div;
mod mul;
