//! The prime layer shared by the Steenrod crates.
//!
//! Only what callers need in order to talk about "the prime $p$" lives here: a validated prime
//! type and the handful of integer helpers that depend on it.

pub mod prime;
