//! Checks a per-minute or per-hour tutoring rate against a monthly fee ceiling.
//! Derives the fewest weekly sessions of a fixed-length lesson for which the rate justifies the
//! ceiling, along with the unit prices implied by charging exactly the ceiling.

pub mod display;
pub mod fee;
pub mod file;
pub mod input;
pub mod print;
pub mod report;
pub mod schedule;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
