//! Road map CLI library.
//!
//! This crate provides the command handlers and output formatting used by the
//! `roadmap-cli` binary.

pub mod commands;
pub mod output;
