//! Rendering module for brev.
//!
//! Turns resolved elements into HTML fragments. Each element becomes one
//! `<div>` block with its presentation carried in an inline `style`.

mod html;

pub use html::{escape_html, render_fragment, HtmlRenderer, RenderOptions};
