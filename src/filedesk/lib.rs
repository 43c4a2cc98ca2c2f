//! # Filedesk
//!
//! Filedesk is an interactive terminal desk for everyday file chores:
//! plain text files, JSON records, XML documents, ZIP archives and a
//! quick disk-space report.
//!
//! The crate is split into two halves:
//!
//! - `ops/` holds the operation layer: pure functions that take paths and
//!   values, do their filesystem work and return a structured
//!   [`ops::CmdResult`]. Nothing in here reads stdin, writes stdout or
//!   exits the process.
//! - `cli/` is the only place that touches a terminal. The menu loop and
//!   all prompting go through a [`cli::console::Console`] port that is
//!   generic over `BufRead + Write`, so the whole interactive surface can
//!   be driven by in-memory buffers in tests.
//!
//! `model` carries the small domain vocabulary ([`model::Mode`],
//! [`model::Command`], [`model::Record`]) and `error` the crate-wide
//! error enum.

pub mod cli;
pub mod error;
pub mod model;
pub mod ops;
