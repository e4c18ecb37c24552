//! figboot document tree
//!
//! Typed model of a design-tool document tree. Raw JSON is deserialized into
//! loosely-typed records (`raw`) and then lowered into a closed set of node
//! kinds with explicit optional attributes (`node`), so the code generator
//! never has to second-guess its input.
//!
//! ```
//! use figboot_tree::{parse_node, NodeKind};
//!
//! let node = parse_node(r#"{ "type": "FRAME", "name": "Hero" }"#).unwrap();
//! assert_eq!(node.kind, NodeKind::Frame);
//! ```

pub mod document;
pub mod node;
mod raw;

pub use document::{load_root, parse_node};
pub use node::{
    AutoLayout, AxisAlign, Color, DesignNode, Effect, EffectKind, LayoutMode, NodeKind, Padding,
    Paint, TextAlign, TextStyle, Visual,
};

/// Error raised while loading a document tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No node data found")]
    NoNodeData,

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid color on node '{node}': {field}.{channel} = {value} (expected 0..=1)")]
    InvalidColor {
        node: String,
        field: &'static str,
        channel: char,
        value: f64,
    },

    #[error("Invalid number on node '{node}': {field} = {value}")]
    InvalidNumber {
        node: String,
        field: &'static str,
        value: f64,
    },
}
