//! Presentation helpers for terminal front ends.
//!
//! Rendering only reads engine state. The engine never depends on anything
//! here.

pub mod text;

pub use text::{Glyphs, TextRenderer};
