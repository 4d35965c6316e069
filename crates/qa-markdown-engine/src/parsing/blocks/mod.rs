//! # Block Parsing
//!
//! Two-phase, single forward pass over the document's lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    holding only local facts (which opener, if any, it starts with)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps at most one open
//!    multi-line block (a list run or a code fence) and emits `Block`s in order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `HeadingLevel`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, ListItem,
//!   BlockQuote, CodeFence, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Nothing nests: no lists in quotes, no multi-line quotes or paragraphs
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Every line lands in exactly one block, except fence lines themselves

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{Block, HeadingLevel};
