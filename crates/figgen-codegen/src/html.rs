//! HTML code generator.
//!
//! One pre-order walk over the IR tree producing nested `div` elements,
//! each tagged with the shared class name. Text nodes with literal content
//! render as leaves holding their escaped characters; everything else wraps
//! its children. The tree is wrapped in a minimal document shell.

use crate::{class_name, literal_text};
use figgen_normalize::DesignNode;

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// Generate a complete HTML document for the tree rooted at `root`.
pub fn generate(root: &DesignNode, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\" />\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str("  <link rel=\"stylesheet\" href=\"styles.css\" />\n");
    html.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{FONT_STYLESHEET}\" />\n"
    ));
    html.push_str("</head>\n<body>\n");
    html.push_str("<div class=\"canvas-root\">\n");
    html.push_str(&render_node(root, 1));
    html.push_str("\n</div>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_node(node: &DesignNode, depth: usize) -> String {
    let class = class_name(node);
    let indent = "  ".repeat(depth);

    // Text leaves render their escaped characters and nothing else, even if
    // the node happens to carry children.
    if let Some(characters) = literal_text(node) {
        return format!(
            "{indent}<div class=\"{class}\">{}</div>",
            escape_html(characters)
        );
    }

    let children: Vec<String> = node
        .children
        .iter()
        .map(|child| render_node(child, depth + 1))
        .collect();

    format!(
        "{indent}<div class=\"{class}\">\n{}\n{indent}</div>",
        children.join("\n")
    )
}

/// Escape inner content and attribute text: `&`, `<`, `>`.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figgen_normalize::{
        AlignItems, JustifyContent, LayoutMode, LayoutProps, NodeKind, Position, StyleProps,
        TextProps,
    };
    use pretty_assertions::assert_eq;

    fn node(kind: NodeKind, name: &str, id: &str) -> DesignNode {
        DesignNode {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
            layout: LayoutProps {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                position: Position::Absolute,
                layout_mode: LayoutMode::None,
                gap: 0.0,
                justify_content: JustifyContent::FlexStart,
                align_items: AlignItems::FlexStart,
            },
            style: StyleProps {
                fills: Vec::new(),
                border: None,
                corner_radius: None,
                shadows: Vec::new(),
                opacity: 1.0,
            },
            text: None,
            component_key: None,
            instance_of: None,
        }
    }

    fn text_node(name: &str, id: &str, characters: &str) -> DesignNode {
        let mut sample = node(NodeKind::Text, name, id);
        sample.text = Some(TextProps {
            characters: characters.into(),
            font_family: "Inter".into(),
            font_size: 16.0,
            font_weight: None,
            line_height_px: None,
            letter_spacing: None,
            align: None,
        });
        sample
    }

    // =========================================================================
    // Node rendering
    // =========================================================================

    #[test]
    fn test_childless_wrapper() {
        let rendered = render_node(&node(NodeKind::Frame, "Box", "1:1"), 1);
        assert_eq!(rendered, "  <div class=\"box-11\">\n\n  </div>");
    }

    #[test]
    fn test_nested_markup_indentation() {
        let mut root = node(NodeKind::Frame, "Root", "1:1");
        root.children.push(text_node("Label", "2:1", "Hi"));
        let rendered = render_node(&root, 1);
        assert_eq!(
            rendered,
            "  <div class=\"root-11\">\n    <div class=\"label-21\">Hi</div>\n  </div>"
        );
    }

    #[test]
    fn test_text_leaf_escapes_content() {
        let rendered = render_node(&text_node("Label", "2:1", "A & B"), 0);
        assert_eq!(rendered, "<div class=\"label-21\">A &amp; B</div>");
    }

    #[test]
    fn test_text_escaping_is_single_pass() {
        let sample = text_node("Label", "2:1", "a < b > c & d");
        let once = render_node(&sample, 0);
        let twice = render_node(&sample, 0);
        assert_eq!(once, twice);
        assert!(once.contains("a &lt; b &gt; c &amp; d"));
    }

    #[test]
    fn test_text_leaf_ignores_children() {
        let mut sample = text_node("Label", "2:1", "Hi");
        sample.children.push(node(NodeKind::Rectangle, "Stray", "3:1"));
        let rendered = render_node(&sample, 0);
        assert_eq!(rendered, "<div class=\"label-21\">Hi</div>");
    }

    #[test]
    fn test_empty_text_node_renders_as_wrapper() {
        let mut sample = text_node("Label", "2:1", "");
        sample.children.push(node(NodeKind::Rectangle, "Inner", "3:1"));
        let rendered = render_node(&sample, 0);
        assert!(rendered.contains("<div class=\"inner-31\">"));
    }

    #[test]
    fn test_multiple_children_newline_joined() {
        let mut root = node(NodeKind::Frame, "Root", "1:1");
        root.children.push(text_node("A", "2:1", "A"));
        root.children.push(text_node("B", "2:2", "B"));
        let rendered = render_node(&root, 0);
        assert_eq!(
            rendered,
            "<div class=\"root-11\">\n  <div class=\"a-21\">A</div>\n  <div class=\"b-22\">B</div>\n</div>"
        );
    }

    // =========================================================================
    // Document shell
    // =========================================================================

    #[test]
    fn test_document_shell() {
        let html = generate(&node(NodeKind::Frame, "Root", "1:1"), "Login");
        assert!(html.starts_with("<!doctype html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Login</title>"));
        assert!(html.contains("<meta charset=\"utf-8\" />"));
        assert!(html.contains("<meta name=\"viewport\""));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\" />"));
        assert!(html.contains("fonts.googleapis.com"));
        assert!(html.contains("<div class=\"canvas-root\">"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = generate(&node(NodeKind::Frame, "Root", "1:1"), "Q&A <draft>");
        assert!(html.contains("<title>Q&amp;A &lt;draft&gt;</title>"));
    }
}
