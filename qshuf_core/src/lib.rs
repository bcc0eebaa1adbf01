//! `qshuf_core` is the core library for the `qshuf` quiz randomizer. It takes
//! a loosely structured document of question blocks — each with a question
//! stem, enumerated answer options (exactly one carrying the `✅` correct
//! marker), and an optional explanation — and produces the same document with
//! both the block order and the per-block option order randomized.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Raw document
//!   → Segmenter (splits the text into question blocks at `Q<n>` / `<n>.` lines)
//!   → Classifier (partitions each block's lines into question / options / explanation)
//!   → Engine (shuffles blocks, then options per block under the position constraint,
//!             and reassembles the document)
//! ```
//!
//! The option shuffle is constrained: the correct option must not land on a
//! position used by any of the last three shuffled blocks, so the answer key
//! never forms an obvious visual run. The constraint is best-effort — after
//! ten rejected permutations the last one is accepted anyway.
//!
//! ## Key Types
//!
//! - [`ClassifiedBlock`] — One question block split into its three line groups.
//! - [`ShuffleOutcome`] — The reassembled document plus any diagnostics.
//! - [`ShuffleDiagnostic`] — A degenerate block that was handled leniently.
//!
//! ## Quick Start
//!
//! ```rust
//! use qshuf_core::shuffle_document_seeded;
//!
//! let input = "Q1. What is 2+2?\na) 3\nb) 4 ✅\nc) 5\nEx: basic arithmetic";
//! let outcome = shuffle_document_seeded(input, 42);
//! assert_eq!(outcome.blocks, 1);
//! assert!(outcome.content.starts_with("\n\n"));
//! ```
//!
//! The random source is always injected by the caller — either an explicit
//! [`rand::Rng`] through [`shuffle_document`] or a seed through
//! [`shuffle_document_seeded`] — so invocations are independent, repeatable,
//! and safe to run concurrently.

pub use classifier::*;
pub use engine::*;
pub use error::*;
pub use segmenter::*;

mod classifier;
mod engine;
mod error;
mod segmenter;

#[cfg(test)]
mod __fixtures;
