//! Figma document normalization.
//!
//! Turns the raw file JSON from the Figma API into a strictly-typed IR:
//! one [`DesignPage`] per canvas, each rooted at the canvas's first frame,
//! with parent-relative coordinates and resolved style/text semantics.
//! The loosely-typed `serde_json::Value` tree never leaks past this crate.
//!
//! ```text
//! file JSON → document_to_pages() → Vec<DesignPage>
//! ```

pub mod ir;
pub mod normalize;

pub use ir::{
    AlignItems, Border, CornerRadius, DesignNode, DesignPage, Fill, GradientStop, JustifyContent,
    LayoutMode, LayoutProps, NodeKind, Position, Rgba, Shadow, StyleProps, TextAlign, TextProps,
    Vec2,
};
pub use normalize::document_to_pages;

/// Document-shape error: the input cannot yield any page at all.
///
/// Raised only when the document lacks a canvas list or a canvas has no
/// frames. Missing decoration on individual nodes never errors; it falls
/// back to documented defaults instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Schema error: {message}")]
pub struct SchemaError {
    pub message: String,
}
