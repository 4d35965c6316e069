//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIM = "**"`
//! - **`Emphasis`**: `DELIM = "*"`, never opened by a star that follows a star
//! - **`CodeSpan`**: `TICK = "\`"` - raw zone that suppresses other parsing
//! - **`Link`**: `[` `]` `(` `)`
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
