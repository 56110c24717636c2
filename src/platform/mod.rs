//! Platform abstraction layer
//!
//! Event capture lives with whatever hosts the game (browser, window, test
//! harness); this module only holds the state the simulation reads.

pub mod input;

pub use input::{Key, KeyboardState};
