pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{IoError, read_document};
pub use parsing::{
    Document,
    blocks::{Block, HeadingLevel},
    inline::{Inline, InlineSequence, parse_inline},
    parse_document,
};
pub use render::{HtmlOptions, render_html, render_preview};
