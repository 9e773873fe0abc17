//! Galaxies library
//!
//! This provides the colliding galaxies engine and its Bevy plugins as a
//! library so the binary, integration tests and benchmarks share one core.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;
