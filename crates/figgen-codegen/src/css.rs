//! CSS code generator.
//!
//! One depth-first pre-order walk over the IR tree, one rule per node, each
//! keyed by the shared class name, behind a fixed boilerplate prelude that
//! centers the canvas container.

use crate::{class_name, literal_text};
use figgen_normalize::{CornerRadius, DesignNode, Fill, NodeKind, Position, Rgba, TextAlign};

/// Generate stylesheet text for the tree rooted at `root`.
pub fn generate(root: &DesignNode) -> String {
    let mut rules = Vec::new();
    collect_rules(root, &mut rules);
    format!("{}\n\n{}\n", prelude(root), rules.join("\n\n"))
}

fn collect_rules(node: &DesignNode, rules: &mut Vec<String>) {
    rules.push(node_rule(node, &class_name(node)));
    for child in &node.children {
        collect_rules(child, rules);
    }
}

/// Margin reset, viewport centering, and the canvas container sized to the
/// root frame.
fn prelude(root: &DesignNode) -> String {
    format!(
        "html, body {{\n  margin: 0;\n  padding: 0;\n}}\n\n\
         body {{\n  /* center the frame on large screens */\n  display: flex;\n  \
         justify-content: center;\n  align-items: center;\n  min-height: 100vh;\n}}\n\n\
         .canvas-root {{\n  position: relative;\n  overflow: hidden;\n  \
         width: {}px;\n  height: {}px;\n}}",
        root.layout.width, root.layout.height
    )
}

fn node_rule(node: &DesignNode, class: &str) -> String {
    // Device-chrome artifacts captured in the source design (iOS home
    // indicator bars) are suppressed wholesale.
    if node.kind == NodeKind::Rectangle && node.name.to_lowercase().contains("home indicator") {
        return format!(".{class} {{ display: none; }}");
    }

    let layout = &node.layout;
    let style = &node.style;
    let is_text = literal_text(node).is_some();
    let mut lines: Vec<String> = Vec::new();

    if layout.width > 0.0 {
        lines.push(format!("width: {}px;", layout.width));
    }
    if layout.height > 0.0 {
        lines.push(format!("height: {}px;", layout.height));
    }

    match layout.position {
        Position::Absolute => {
            lines.push("position: absolute;".into());
            lines.push(format!("left: {}px;", layout.x));
            lines.push(format!("top: {}px;", layout.y));
        }
        Position::Relative => lines.push("position: relative;".into()),
    }

    // Text glyphs take the fill as `color`; everything else gets a
    // background.
    if let Some(fill) = style.fills.first() {
        match fill {
            Fill::Solid { color } if is_text => {
                lines.push(format!("color: {};", rgba_to_css(color)));
            }
            _ => {
                if let Some(background) = fill_to_css(fill) {
                    lines.push(background);
                }
            }
        }
    }

    if let Some(border) = &style.border {
        lines.push(format!(
            "border: {}px solid {};",
            border.width,
            rgba_to_css(&border.color)
        ));
    }

    match style.corner_radius {
        Some(CornerRadius::Uniform(radius)) => {
            lines.push(format!("border-radius: {radius}px;"));
        }
        Some(CornerRadius::PerCorner([tl, tr, br, bl])) => {
            lines.push(format!("border-radius: {tl}px {tr}px {br}px {bl}px;"));
        }
        None => {}
    }

    if let Some(shadow) = style.shadows.first() {
        lines.push(format!(
            "box-shadow: {}px {}px {}px {}px {};",
            shadow.offset_x,
            shadow.offset_y,
            shadow.blur_radius,
            shadow.spread.unwrap_or(0.0),
            rgba_to_css(&shadow.color)
        ));
    }

    if style.opacity < 1.0 {
        lines.push(format!("opacity: {};", style.opacity));
    }

    if let Some(text) = node.text.as_ref().filter(|_| is_text) {
        lines.push("display: flex;".into());
        lines.push("align-items: center;".into());
        lines.push("justify-content: flex-start;".into());
        lines.push(format!(
            "font-family: \"{}\", system-ui, sans-serif;",
            text.font_family
        ));
        lines.push(format!("font-size: {}px;", text.font_size));
        if let Some(weight) = text.font_weight {
            lines.push(format!("font-weight: {weight};"));
        }
        if let Some(line_height) = text.line_height_px {
            lines.push(format!("line-height: {line_height}px;"));
        }
        if let Some(spacing) = text.letter_spacing {
            lines.push(format!("letter-spacing: {spacing}px;"));
        }
        if let Some(align) = text.align {
            lines.push(format!("text-align: {};", align_to_css(align)));
            if align == TextAlign::Center {
                lines.push("justify-content: center;".into());
            }
        }
        // The fill, if any, went to `color` above; the box itself stays
        // transparent.
        lines.push("background-color: transparent;".into());
    }

    format!(".{class} {{\n  {}\n}}", lines.join("\n  "))
}

fn fill_to_css(fill: &Fill) -> Option<String> {
    match fill {
        Fill::Solid { color } => Some(format!("background-color: {};", rgba_to_css(color))),
        Fill::GradientLinear { stops, handles } if stops.len() >= 2 => {
            // Figma's 0° points right, CSS's 0° points up.
            let angle = handles
                .as_ref()
                .map(|(p0, p1)| {
                    let degrees = (p1.y - p0.y).atan2(p1.x - p0.x).to_degrees();
                    (degrees + 90.0 + 360.0) % 360.0
                })
                .unwrap_or(90.0);
            let stop_list = stops
                .iter()
                .map(|stop| {
                    format!(
                        "{} {}%",
                        rgba_to_css(&stop.color),
                        (stop.position * 100.0).round() as i64
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!(
                "background-image: linear-gradient({angle}deg, {stop_list});"
            ))
        }
        // Radial gradients, images, and unclassified paints have no CSS
        // rendering in this version.
        _ => None,
    }
}

fn align_to_css(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justified => "justify",
    }
}

/// `rgba(r, g, b, a)` with channels scaled to 0-255 and rounded; the alpha
/// passes through unrounded.
fn rgba_to_css(color: &Rgba) -> String {
    let r = (color.r * 255.0).round() as i64;
    let g = (color.g * 255.0).round() as i64;
    let b = (color.b * 255.0).round() as i64;
    format!("rgba({r}, {g}, {b}, {})", color.a)
}
