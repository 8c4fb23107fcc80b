//! HTML fragment rendering.

use crate::types::{ElementKind, Metadata, ResolvedElement};

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `>` and `"` in element content.
    ///
    /// Off by default: content is inserted verbatim.
    pub escape_content: bool,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self {
            escape_content: true,
        }
    }
}

/// Renders resolved elements to HTML fragments.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render one element wrapped in a `<div>`.
    pub fn render(&self, element: &ResolvedElement) -> String {
        let content = if self.options.escape_content {
            escape_html(&element.content)
        } else {
            element.content.clone()
        };
        let style = |name: &str| style_value(&element.metadata, name);

        let inner = match element.kind {
            ElementKind::H1 | ElementKind::H2 | ElementKind::H3 | ElementKind::Text => {
                let tag = match element.kind {
                    ElementKind::Text => "span",
                    other => other.as_str(),
                };
                format!(
                    "<{tag} style=\"font-size:{}rem;font-weight:{};color:{}\">{content}</{tag}>",
                    style("font-size"),
                    style("weight"),
                    style("color"),
                )
            }
            ElementKind::Img => {
                format!("<img style=\"width:{}rem;\" src=\"{content}\">", style("width"))
            }
        };

        format!("<div>{inner}</div>")
    }

    /// Render by identifier. Unknown identifiers render as an empty string.
    pub fn render_fragment(&self, identifier: &str, metadata: &Metadata, content: &str) -> String {
        match ElementKind::from_identifier(identifier) {
            Some(kind) => self.render(&ResolvedElement {
                kind,
                metadata: metadata.clone(),
                content: content.to_string(),
            }),
            None => String::new(),
        }
    }
}

/// Render one element with default options.
pub fn render_fragment(identifier: &str, metadata: &Metadata, content: &str) -> String {
    HtmlRenderer::default().render_fragment(identifier, metadata, content)
}

fn style_value(metadata: &Metadata, name: &str) -> String {
    metadata
        .get(name)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Escape markup-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
