//! `primer` - language feature primer.
//!
//! Runs a fixed sequence of demonstration blocks, logs each step to an
//! injected console, and renders one titled section per block into an
//! HTML page.

pub mod cli;
pub mod console;
pub mod demos;
pub mod document;
pub mod engine;
pub mod events;
pub mod exit_codes;
pub mod model;
pub mod reporter;
pub mod value;
