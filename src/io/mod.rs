//! I/O module
//!
//! Handles reading operator input for interactive and scripted sessions.
//!
//! # Components
//!
//! - `input` - Input source selection and a line reader with an iterator interface

pub mod input;

pub use input::{open_input, LineReader};
