//! # Furiyomi Architecture
//!
//! Furiyomi annotates Japanese text with furigana and tracks which words a
//! learner already knows, so unknown words can be highlighted in subtitles
//! and flashcard fields. It is a library first; the `furiyomi` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, main.rs)                               │
//! │  - Parses arguments, colors and prints results              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Opens the known-vocabulary database when needed          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user operation, returns CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - known.rs: derived known set, highlighting                │
//! │  - reading.rs: furigana alignment                           │
//! │  - cache.rs, queue.rs, store/: collections and caches       │
//! │  - analyzer/: MeCab and KAKASI behind traits                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process; diagnostics go through `tracing` and failures through
//! [`error::FuriError`].
//!
//! ## Testing
//!
//! The analyzer tools are external processes, so every layer above them is
//! tested with the in-memory [`analyzer::memory`] implementations and the
//! in-memory collection backend. Only `analyzer::process` talks to a real
//! child process in tests (`cat` as an echo server).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`known`]: Known-vocabulary database
//! - [`reading`]: Furigana alignment and markup
//! - [`analyzer`]: Segmenter and phonetic converter traits, MeCab/KAKASI adapters
//! - [`cache`]: Segmentation cache
//! - [`queue`]: Study queue with cursor
//! - [`store`]: Text collections and their storage backends
//! - [`kanjistudy`]: Kanji Study backup comparison
//! - [`model`], [`script`]: Segments and character classification
//! - [`config`], [`init`], [`logging`], [`error`]: Ambient plumbing

pub mod analyzer;
pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod kanjistudy;
pub mod known;
pub mod logging;
pub mod model;
pub mod queue;
pub mod reading;
pub mod script;
pub mod store;
