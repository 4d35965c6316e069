//! # Rendering
//!
//! Projections of a parsed [`Document`](crate::parsing::Document) for
//! display. The tree stays the primary output; these are consumers of it.

pub mod html;

pub use html::{HtmlOptions, render_html, render_preview};
