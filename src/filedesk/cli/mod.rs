//! Terminal layer: the only part of the crate that prompts, prints or
//! colors anything. Everything goes through [`console::Console`] so the
//! menu can be driven by in-memory buffers in tests.

pub mod console;
pub mod menu;
mod print;
