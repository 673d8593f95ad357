//! Figgen code generator.
//!
//! Renders a normalized design page into static HTML markup and CSS text.
//! Both outputs key every element and rule on the same deterministic class
//! name, produced by [`class_name`] — the binding contract between markup
//! and stylesheet.
//!
//! ```text
//! DesignPage → generate_page() → PageOutput { html, css }
//! ```

pub mod css;
pub mod html;

use figgen_normalize::{DesignNode, DesignPage, NodeKind};

/// The generated artifacts for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutput {
    pub html: String,
    pub css: String,
}

/// Generate markup and stylesheet text for one page.
///
/// The two generators are independent pure functions over the same immutable
/// tree; running them in either order yields identical output.
pub fn generate_page(page: &DesignPage) -> PageOutput {
    PageOutput {
        html: html::generate(&page.root, &page.name),
        css: css::generate(&page.root),
    }
}

/// Deterministic class name binding a markup element to its stylesheet rule.
///
/// The slug is the display name lowercased with runs of non-alphanumerics
/// collapsed to single hyphens and the edges trimmed (`"node"` when nothing
/// remains), joined with the node id stripped to its alphanumerics.
pub fn class_name(node: &DesignNode) -> String {
    let mut slug = String::new();
    for ch in node.name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "node" } else { slug };

    let id: String = node
        .id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("{slug}-{id}")
}

/// The literal characters of a text node, when non-empty.
///
/// Both generators key their text handling on this: the CSS generator emits
/// the glyph-color and typography block, the HTML generator renders a leaf.
pub(crate) fn literal_text(node: &DesignNode) -> Option<&str> {
    if node.kind != NodeKind::Text {
        return None;
    }
    node.text
        .as_ref()
        .map(|text| text.characters.as_str())
        .filter(|characters| !characters.is_empty())
}
