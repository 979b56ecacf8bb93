//! # Warlord Development Tools
//!
//! Command-line tools for working with the decision engine:
//! - Snapshot and config loading (RON or JSON)
//! - Snapshot validators
//! - Turn decisions, whole-world plans and turn records

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod commands;
pub mod io;
pub mod validate;
