//! Galaxy collision physics
//!
//! Bottom-up: [`stars`] samples one star into its galaxy's disk, [`galaxy`]
//! samples a galaxy and its stars, and [`universe`] advances all of them with
//! a fixed time step. [`simulation`] wraps a universe with its lifetime counter
//! and regenerates it when the lifetime runs out.

pub mod error;
pub mod forces;
pub mod galaxy;
pub mod math;
pub mod simulation;
pub mod stars;
pub mod universe;
