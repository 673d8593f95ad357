//! Figma document normalizer.
//!
//! Converts the raw file JSON (one `serde_json::Value` tree, shape not
//! statically guaranteed) into the typed IR. One [`DesignPage`] per canvas;
//! each page's root is the first frame on that canvas.
//!
//! The policy throughout: fail with [`SchemaError`] only when the document
//! shape itself is unusable (no canvas list, a canvas without frames). A
//! single node's missing decoration — colors, fonts, layout enums — never
//! fails; it resolves to a documented default so every node renders
//! deterministically even on corrupt input.

use crate::ir::{
    AlignItems, Border, CornerRadius, DesignNode, DesignPage, Fill, GradientStop, JustifyContent,
    LayoutMode, LayoutProps, NodeKind, Position, Rgba, Shadow, StyleProps, TextAlign, TextProps,
    Vec2,
};
use crate::SchemaError;
use serde_json::Value;

/// An absolute bounding box from the raw document, pixels.
///
/// Nodes without their own box inherit the parent's reference box, so the
/// coordinate re-basing below always has something to subtract.
#[derive(Debug, Clone, Copy)]
struct BoundingBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Normalize a Figma file into pages.
///
/// One page per `CANVAS` child of the document, in source order. Errors only
/// on document-shape problems; everything below that level is defaulted.
pub fn document_to_pages(file: &Value) -> Result<Vec<DesignPage>, SchemaError> {
    let children = file
        .get("document")
        .and_then(|doc| doc.get("children"))
        .and_then(Value::as_array)
        .ok_or_else(|| SchemaError {
            message: "missing document.children".into(),
        })?;

    let mut pages = Vec::new();
    for canvas in children.iter().filter(|n| type_tag(n) == Some("CANVAS")) {
        let frame = canvas
            .get("children")
            .and_then(Value::as_array)
            .and_then(|nodes| nodes.iter().find(|n| type_tag(n) == Some("FRAME")))
            .ok_or_else(|| SchemaError {
                message: format!("page \"{}\" has no frames", str_field(canvas, "name")),
            })?;

        // The root's own box doubles as its reference frame, which pins it
        // at (0, 0).
        let frame_box = bounding_box(frame).unwrap_or(BoundingBox {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        });

        pages.push(DesignPage {
            id: str_field(canvas, "id"),
            name: str_field(canvas, "name"),
            root: normalize_node(frame, frame_box, true),
        });
    }

    Ok(pages)
}

/// Convert one raw node, re-basing its coordinates against `parent_box` and
/// passing its own box down as the reference frame for its children.
fn normalize_node(node: &Value, parent_box: BoundingBox, is_root: bool) -> DesignNode {
    let own_box = bounding_box(node).unwrap_or(parent_box);
    let kind = map_node_type(type_tag(node));

    let children = node
        .get("children")
        .and_then(Value::as_array)
        .map(|nodes| {
            nodes
                .iter()
                .map(|child| normalize_node(child, own_box, false))
                .collect()
        })
        .unwrap_or_default();

    let component_key = node
        .get("componentId")
        .and_then(Value::as_str)
        .map(str::to_string);

    DesignNode {
        id: str_field(node, "id"),
        name: str_field(node, "name"),
        kind,
        children,
        layout: extract_layout(node, own_box, parent_box, is_root),
        style: extract_style(node),
        text: (kind == NodeKind::Text).then(|| extract_text(node)),
        instance_of: if type_tag(node) == Some("INSTANCE") {
            component_key.clone()
        } else {
            None
        },
        component_key,
    }
}

/// Closed-set type mapping; anything unrecognized becomes a group so unknown
/// containers still render their children.
fn map_node_type(raw: Option<&str>) -> NodeKind {
    match raw {
        Some("FRAME") => NodeKind::Frame,
        Some("GROUP") => NodeKind::Group,
        Some("RECTANGLE") => NodeKind::Rectangle,
        Some("TEXT") => NodeKind::Text,
        Some("VECTOR") => NodeKind::Vector,
        Some("COMPONENT") => NodeKind::Component,
        Some("INSTANCE") => NodeKind::Instance,
        _ => NodeKind::Group,
    }
}

fn extract_layout(node: &Value, own_box: BoundingBox, parent_box: BoundingBox, is_root: bool) -> LayoutProps {
    let layout_mode = match node.get("layoutMode").and_then(Value::as_str) {
        Some("HORIZONTAL") => LayoutMode::Horizontal,
        Some("VERTICAL") => LayoutMode::Vertical,
        _ => LayoutMode::None,
    };

    if is_root {
        // Root frame anchored at (0, 0) regardless of its raw position.
        return LayoutProps {
            x: 0.0,
            y: 0.0,
            width: own_box.width,
            height: own_box.height,
            position: Position::Relative,
            layout_mode,
            gap: 0.0,
            justify_content: JustifyContent::default(),
            align_items: AlignItems::default(),
        };
    }

    LayoutProps {
        x: own_box.x - parent_box.x,
        y: own_box.y - parent_box.y,
        width: own_box.width,
        height: own_box.height,
        position: Position::Absolute,
        layout_mode,
        gap: node
            .get("itemSpacing")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        justify_content: map_primary_axis(node.get("primaryAxisAlignItems").and_then(Value::as_str)),
        align_items: map_counter_axis(node.get("counterAxisAlignItems").and_then(Value::as_str)),
    }
}

fn map_primary_axis(raw: Option<&str>) -> JustifyContent {
    match raw {
        Some("CENTER") => JustifyContent::Center,
        Some("MAX") => JustifyContent::FlexEnd,
        Some("SPACE_BETWEEN") => JustifyContent::SpaceBetween,
        _ => JustifyContent::FlexStart,
    }
}

fn map_counter_axis(raw: Option<&str>) -> AlignItems {
    match raw {
        Some("CENTER") => AlignItems::Center,
        Some("MAX") => AlignItems::FlexEnd,
        Some("STRETCH") => AlignItems::Stretch,
        _ => AlignItems::FlexStart,
    }
}

// -------------------------------------------------------------------------
// Styles
// -------------------------------------------------------------------------

fn extract_style(node: &Value) -> StyleProps {
    let fills = node
        .get("fills")
        .and_then(Value::as_array)
        .map(|paints| {
            paints
                .iter()
                .filter(|paint| is_visible(paint))
                .map(extract_fill)
                .collect()
        })
        .unwrap_or_default();

    let shadows = node
        .get("effects")
        .and_then(Value::as_array)
        .map(|effects| {
            effects
                .iter()
                .filter(|effect| {
                    type_tag(effect) == Some("DROP_SHADOW") && is_visible(effect)
                })
                .map(extract_shadow)
                .collect()
        })
        .unwrap_or_default();

    StyleProps {
        fills,
        border: extract_border(node),
        corner_radius: extract_corner_radius(node),
        shadows,
        opacity: node.get("opacity").and_then(Value::as_f64).unwrap_or(1.0),
    }
}

fn extract_fill(paint: &Value) -> Fill {
    match type_tag(paint) {
        Some("SOLID") => Fill::Solid {
            color: resolve_color(paint.get("color"), paint_opacity(paint)),
        },
        Some("GRADIENT_LINEAR") => Fill::GradientLinear {
            stops: gradient_stops(paint),
            handles: gradient_handles(paint),
        },
        Some("GRADIENT_RADIAL") => Fill::GradientRadial,
        Some("IMAGE") => Fill::Image,
        _ => Fill::Other,
    }
}

fn gradient_stops(paint: &Value) -> Vec<GradientStop> {
    paint
        .get("gradientStops")
        .and_then(Value::as_array)
        .map(|stops| {
            stops
                .iter()
                .map(|stop| GradientStop {
                    color: resolve_color(
                        stop.get("color"),
                        color_alpha(stop.get("color")).unwrap_or(1.0),
                    ),
                    position: stop.get("position").and_then(Value::as_f64).unwrap_or(0.0),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn gradient_handles(paint: &Value) -> Option<(Vec2, Vec2)> {
    let handles = paint
        .get("gradientHandlePositions")
        .and_then(Value::as_array)?;
    if handles.len() < 2 {
        return None;
    }
    Some((point(&handles[0]), point(&handles[1])))
}

fn point(raw: &Value) -> Vec2 {
    Vec2 {
        x: raw.get("x").and_then(Value::as_f64).unwrap_or(0.0),
        y: raw.get("y").and_then(Value::as_f64).unwrap_or(0.0),
    }
}

/// First visible stroke, and only when the node declares a positive stroke
/// width. A stroke without a resolvable color is dropped entirely.
fn extract_border(node: &Value) -> Option<Border> {
    let width = node
        .get("strokeWeight")
        .and_then(Value::as_f64)
        .filter(|w| *w > 0.0)?;
    let stroke = node.get("strokes").and_then(Value::as_array)?.first()?;
    if !is_visible(stroke) {
        return None;
    }
    let color = stroke.get("color").filter(|c| !c.is_null())?;
    Some(Border {
        color: resolve_color(Some(color), paint_opacity(stroke)),
        width,
    })
}

fn extract_corner_radius(node: &Value) -> Option<CornerRadius> {
    if let Some(radius) = node.get("cornerRadius").and_then(Value::as_f64) {
        return Some(CornerRadius::Uniform(radius));
    }
    let corners = node
        .get("rectangleCornerRadii")
        .and_then(Value::as_array)
        .filter(|corners| corners.len() == 4)?;
    let mut radii = [0.0; 4];
    for (radius, corner) in radii.iter_mut().zip(corners) {
        *radius = corner.as_f64().unwrap_or(0.0);
    }
    Some(CornerRadius::PerCorner(radii))
}

fn extract_shadow(effect: &Value) -> Shadow {
    let offset = effect.get("offset");
    Shadow {
        offset_x: offset
            .and_then(|o| o.get("x"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        offset_y: offset
            .and_then(|o| o.get("y"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        blur_radius: effect.get("radius").and_then(Value::as_f64).unwrap_or(0.0),
        spread: effect.get("spread").and_then(Value::as_f64),
        color: resolve_color(effect.get("color"), paint_opacity(effect)),
    }
}

/// Effective opacity of a paint or effect: explicit `opacity` if present,
/// else the color's own alpha channel, else 1.
fn paint_opacity(paint: &Value) -> f64 {
    paint
        .get("opacity")
        .and_then(Value::as_f64)
        .or_else(|| color_alpha(paint.get("color")))
        .unwrap_or(1.0)
}

fn color_alpha(color: Option<&Value>) -> Option<f64> {
    color?.get("a").and_then(Value::as_f64)
}

/// Safe color conversion. A missing or malformed source color resolves to
/// black at the given opacity rather than failing, so every node renders
/// deterministically.
fn resolve_color(color: Option<&Value>, opacity: f64) -> Rgba {
    let channel = |name| {
        color
            .and_then(|c| c.get(name))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    };
    Rgba {
        r: channel("r"),
        g: channel("g"),
        b: channel("b"),
        a: opacity,
    }
}

// -------------------------------------------------------------------------
// Text
// -------------------------------------------------------------------------

fn extract_text(node: &Value) -> TextProps {
    let style = node.get("style");
    let style_field = |name| style.and_then(|s: &Value| s.get(name));

    TextProps {
        characters: str_field(node, "characters"),
        font_family: style_field("fontFamily")
            .and_then(Value::as_str)
            .unwrap_or("System")
            .to_string(),
        font_size: style_field("fontSize")
            .and_then(Value::as_f64)
            .unwrap_or(16.0),
        font_weight: style_field("fontWeight").and_then(Value::as_f64),
        line_height_px: style_field("lineHeightPx").and_then(Value::as_f64),
        letter_spacing: style_field("letterSpacing").and_then(Value::as_f64),
        align: match style_field("textAlignHorizontal").and_then(Value::as_str) {
            Some("LEFT") => Some(TextAlign::Left),
            Some("CENTER") => Some(TextAlign::Center),
            Some("RIGHT") => Some(TextAlign::Right),
            Some("JUSTIFIED") => Some(TextAlign::Justified),
            _ => None,
        },
    }
}

// -------------------------------------------------------------------------
// Raw-tree helpers
// -------------------------------------------------------------------------

fn type_tag(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

fn str_field(node: &Value, name: &str) -> String {
    node.get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// `visible` defaults to true; only an explicit `false` hides an entry.
fn is_visible(entry: &Value) -> bool {
    entry.get("visible").and_then(Value::as_bool) != Some(false)
}

fn bounding_box(node: &Value) -> Option<BoundingBox> {
    let raw = node.get("absoluteBoundingBox").filter(|b| b.is_object())?;
    let field = |name| raw.get(name).and_then(Value::as_f64).unwrap_or(0.0);
    Some(BoundingBox {
        x: field("x"),
        y: field("y"),
        width: field("width"),
        height: field("height"),
    })
}
