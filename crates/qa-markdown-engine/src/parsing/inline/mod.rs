//! # Inline Parsing
//!
//! Cursor-based inline parsing over the text of one block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing. The block builder calls
//! [`parse_inline`] once per logical text unit: a heading, a blockquote, a
//! paragraph, or a single list item. Code blocks are never inline parsed.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` with the shared open/close scan
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` steps
//!
//! ## Degrade to literal
//!
//! Nothing here can fail. An opener that never closes is kept as plain text,
//! so no input character is ever dropped.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Inline, InlineSequence};
