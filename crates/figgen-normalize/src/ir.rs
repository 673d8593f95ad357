//! Intermediate representation for normalized design documents.
//!
//! Contains the page/node tree plus the style, layout, and text records
//! hanging off each node. Everything here is plain data: the tree is built
//! once by [`crate::normalize`] and read-only during code generation.
//!
//! Coordinates are parent-relative pixels. The raw document carries absolute
//! bounding boxes; the normalizer re-bases them so that a node's `x`/`y` are
//! offsets into its immediate parent's box, with the page root pinned at
//! `(0, 0)`.

/// An RGBA color with all four channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A 2D point, used for gradient handle positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Node classification after normalization.
///
/// A closed set: raw types outside it collapse to `Group` so that unknown
/// containers still render their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Frame,
    Group,
    Rectangle,
    Text,
    Vector,
    Component,
    Instance,
}

/// CSS positioning scheme. `Relative` only ever appears on a page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Relative,
    Absolute,
}

/// Auto-layout direction. Carried through for future use; code generation
/// does not consume it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Main-axis alignment of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

/// Cross-axis alignment of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

/// Geometry and positioning for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProps {
    /// Horizontal offset into the parent's bounding box, pixels.
    pub x: f64,
    /// Vertical offset into the parent's bounding box, pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub position: Position,
    pub layout_mode: LayoutMode,
    /// Auto-layout item spacing, pixels. 0 when the source declares none.
    pub gap: f64,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
}

/// One stop of a gradient, position in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Rgba,
    pub position: f64,
}

/// A paint applied to a shape's interior or a text node's glyph color.
///
/// Only solid and linear-gradient paints are rendered; the remaining kinds
/// are carried so the tree stays faithful to the source, but produce no CSS.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid {
        color: Rgba,
    },
    GradientLinear {
        /// Stops in source order.
        stops: Vec<GradientStop>,
        /// First two gradient handle positions, when the source declares
        /// at least two. Absent handles fall back to a 90° angle.
        handles: Option<(Vec2, Vec2)>,
    },
    GradientRadial,
    Image,
    Other,
}

/// A single stroke. Only the first visible stroke of a node is represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Rgba,
    pub width: f64,
}

/// A drop shadow. Inner shadows and other effect kinds are not represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur_radius: f64,
    pub spread: Option<f64>,
    pub color: Rgba,
}

/// Corner rounding: one uniform radius, or four per-corner values ordered
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerRadius {
    Uniform(f64),
    PerCorner([f64; 4]),
}

/// Visual styling for one node. The first fill and the first shadow are
/// authoritative for rendering; the rest are carried in order.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProps {
    pub fills: Vec<Fill>,
    pub border: Option<Border>,
    pub corner_radius: Option<CornerRadius>,
    pub shadows: Vec<Shadow>,
    /// Whole-node opacity, default 1.
    pub opacity: f64,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
}

/// Typography for a text node. Present if and only if the node's kind is
/// [`NodeKind::Text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub characters: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub align: Option<TextAlign>,
}

/// One node of the normalized design tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<DesignNode>,
    pub layout: LayoutProps,
    pub style: StyleProps,
    pub text: Option<TextProps>,
    /// Component the node is linked to, when the source declares one.
    pub component_key: Option<String>,
    /// Set only on instance nodes: the component they instantiate.
    pub instance_of: Option<String>,
}

/// One output page: a canvas from the source document, rooted at that
/// canvas's first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignPage {
    pub id: String,
    pub name: String,
    pub root: DesignNode,
}
