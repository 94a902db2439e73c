//! # Pad Architecture
//!
//! Pad widens a string to a target width with a fill character, placing the
//! fill on the left, the right, both sides, or so the text sits centred on
//! the terminal. Width is counted in codepoints, so multi-byte text and
//! multi-byte fill characters line up the way they look.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and config into a PadRequest            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the alignment algorithms                │
//! │  - Converts buffer overflow into an error                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Alignment Layer (align/*.rs)                               │
//! │  - Sizes the output buffer, builds fill runs                │
//! │  - left / right / both / centered                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Buffer Layer (buffer.rs, fill.rs)                          │
//! │  - BoundedTextBuffer: fixed capacity, overflow flag         │
//! │  - FillRun and codepoint counting                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Process State in the Core
//!
//! Everything from `api.rs` inward takes a [`model::PadRequest`] value and
//! returns a `Result`. It never prints, never exits and never reads
//! process-wide settings. The terminal width is injected through
//! [`terminal::ColumnSource`], so centred padding is testable without a tty.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`align`]: The four alignment algorithms and buffer sizing
//! - [`buffer`]: Bounded, overflow-flagging output buffer
//! - [`fill`]: Fill runs and codepoint counting
//! - [`model`]: `PadRequest` and `Mode`
//! - [`terminal`]: Terminal width sources
//! - [`config`]: User defaults
//! - [`sandbox`]: Process hardening
//! - [`error`]: Error types
//! - `cli`: Argument parsing, usage text, logging setup and exit codes for the binary (not part of the lib API)

pub mod align;
pub mod api;
pub mod buffer;
pub mod config;
pub mod error;
pub mod fill;
pub mod model;
pub mod sandbox;
pub mod terminal;
