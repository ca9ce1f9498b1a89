//! Enemy AI for Operation Singularity.
//!
//! Implements the drone behavior state machine and the per-kind
//! behavior profiles it is parameterized by.

pub mod fsm;
pub mod profiles;

pub use singularity_core as core;

#[cfg(test)]
mod tests;
