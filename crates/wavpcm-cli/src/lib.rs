//! wavpcm CLI library.
//!
//! This crate provides the host side of the codec: reading and writing files,
//! configuration, and the `inspect`, `process` and `hash` commands.

pub mod commands;
pub mod config;
