//! msfpat — Metasploit-style cyclic pattern generator and offset finder.
//!
//! Generates a long, non-repeating pattern to feed into a crashing target,
//! then maps a captured value (a clobbered instruction pointer, a register
//! dump, or a few raw bytes) back to its byte offset in that pattern. The
//! standard workflow for finding buffer overflow offsets.
//!
//! # Module overview
//!
//! - [`error`] — Error types used throughout the crate.
//! - [`pattern`] — Cyclic pattern generation from the triplet alphabet scheme.
//! - [`query`] — Query normalization (ASCII or little-endian hex) into needle bytes.
//! - [`offset`] — Overlap-aware offset search within a generated pattern.

pub mod error;
pub mod offset;
pub mod pattern;
pub mod query;
