//! Document loading.
//!
//! Accepts the three JSON shapes the design tool hands out: a full file
//! response (`{"document": ...}`), a nodes response
//! (`{"nodes": {"<id>": {"document": ...}}}`), or a bare node.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::node::DesignNode;
use crate::raw::{lower, RawNode};
use crate::TreeError;

/// Parse a single bare node (with its subtree) from JSON.
pub fn parse_node(json: &str) -> Result<DesignNode, TreeError> {
    let raw: RawNode = from_str_unbounded(json)?;
    lower(raw)
}

/// Load the root node to convert from a design document.
///
/// With `node_id`, the node is looked up in the document (depth-first) and
/// only that subtree is lowered and validated.
pub fn load_root(json: &str, node_id: Option<&str>) -> Result<DesignNode, TreeError> {
    let value: Value = from_str_unbounded(json)?;
    let raw_root = unwrap_envelope(value, node_id)?;
    let raw: RawNode = serde_json::from_value(raw_root)?;

    match node_id {
        Some(id) => match raw.take_node(id) {
            Some(node) => lower(node),
            None => Err(TreeError::NodeNotFound(id.to_string())),
        },
        None => lower(raw),
    }
}

/// Deserialize without serde_json's nesting limit; deep design trees are
/// legal input. The stack grows on the heap as needed.
fn from_str_unbounded<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn unwrap_envelope(value: Value, node_id: Option<&str>) -> Result<Value, TreeError> {
    let Value::Object(mut map) = value else {
        return Err(TreeError::NoNodeData);
    };

    if let Some(document) = map.remove("document") {
        return non_null(document);
    }

    if let Some(nodes) = map.remove("nodes") {
        let Value::Object(mut nodes) = nodes else {
            return Err(TreeError::NoNodeData);
        };
        let entry = match node_id.and_then(|id| nodes.remove(id)) {
            Some(entry) => entry,
            None => {
                let first = nodes.keys().next().cloned();
                match first.and_then(|key| nodes.remove(&key)) {
                    Some(entry) => entry,
                    None => return Err(TreeError::NoNodeData),
                }
            }
        };
        return match entry {
            Value::Object(mut entry) => non_null(entry.remove("document").unwrap_or(Value::Null)),
            _ => Err(TreeError::NoNodeData),
        };
    }

    if map.contains_key("type") {
        return Ok(Value::Object(map));
    }

    Err(TreeError::NoNodeData)
}

fn non_null(value: Value) -> Result<Value, TreeError> {
    match value {
        Value::Null => Err(TreeError::NoNodeData),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{AxisAlign, Color, EffectKind, LayoutMode, NodeKind, Paint, TextAlign};
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Bare nodes
    // =========================================================================

    #[test]
    fn test_parse_minimal_frame() {
        let node = parse_node(r#"{ "type": "FRAME", "name": "Hero" }"#).unwrap();
        assert_eq!(node.kind, NodeKind::Frame);
        assert_eq!(node.name, "Hero");
        assert!(node.children.is_empty());
        assert_eq!(node.visual.fills, Vec::new());
    }

    #[test]
    fn test_parse_unknown_type_is_other() {
        let node = parse_node(r#"{ "type": "ELLIPSE", "name": "Dot" }"#).unwrap();
        assert_eq!(node.kind, NodeKind::Other("ELLIPSE".into()));
    }

    #[test]
    fn test_parse_text_style() {
        let node = parse_node(
            r#"{
                "type": "TEXT",
                "characters": "Hello",
                "style": {
                    "fontSize": 28,
                    "fontWeight": 700,
                    "lineHeightPx": 33.6,
                    "letterSpacing": 0.5,
                    "textAlignHorizontal": "CENTER"
                }
            }"#,
        )
        .unwrap();
        let NodeKind::Text(style) = &node.kind else {
            panic!("expected text node");
        };
        assert_eq!(style.font_size, Some(28.0));
        assert_eq!(style.font_weight, Some(700.0));
        assert_eq!(style.line_height, Some(33.6));
        assert_eq!(style.letter_spacing, Some(0.5));
        assert_eq!(style.text_align, Some(TextAlign::Center));
        assert_eq!(node.characters.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_parse_visual_attributes() {
        let node = parse_node(
            r#"{
                "type": "RECTANGLE",
                "fills": [
                    { "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0, "a": 1 }, "opacity": 0.5 },
                    { "type": "GRADIENT_LINEAR" }
                ],
                "strokes": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }],
                "strokeWeight": 2,
                "effects": [
                    { "type": "DROP_SHADOW", "visible": false, "offset": { "x": 1, "y": 2 },
                      "radius": 4, "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 } },
                    { "type": "LAYER_BLUR", "radius": 3 }
                ],
                "cornerRadius": 8,
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 120, "height": 40 }
            }"#,
        )
        .unwrap();
        assert_eq!(
            node.visual.fills,
            vec![
                Paint::Solid {
                    color: Color::rgb(1.0, 0.0, 0.0),
                    opacity: 0.5
                },
                Paint::Other("GRADIENT_LINEAR".into()),
            ]
        );
        assert_eq!(node.visual.strokes, vec![Paint::solid(Color::rgb(0.0, 0.0, 0.0))]);
        assert_eq!(node.visual.stroke_weight, Some(2.0));
        assert_eq!(node.visual.effects.len(), 2);
        assert_eq!(node.visual.effects[0].kind, EffectKind::DropShadow);
        assert!(!node.visual.effects[0].visible);
        assert_eq!(node.visual.effects[0].offset_y, Some(2.0));
        assert!(node.visual.effects[1].visible);
        assert_eq!(node.visual.corner_radius, Some(8.0));
        assert_eq!(node.visual.width, Some(120.0));
        assert_eq!(node.visual.height, Some(40.0));
    }

    #[test]
    fn test_explicit_size_wins_over_bounding_box() {
        let node = parse_node(
            r#"{ "type": "FRAME", "width": 10, "absoluteBoundingBox": { "width": 99, "height": 5 } }"#,
        )
        .unwrap();
        assert_eq!(node.visual.width, Some(10.0));
        assert_eq!(node.visual.height, Some(5.0));
    }

    #[test]
    fn test_parse_auto_layout() {
        let node = parse_node(
            r#"{
                "type": "FRAME",
                "layoutMode": "VERTICAL",
                "primaryAxisAlignItems": "SPACE_BETWEEN",
                "counterAxisAlignItems": "CENTER",
                "itemSpacing": 12,
                "paddingLeft": 16, "paddingRight": 16, "paddingTop": 8
            }"#,
        )
        .unwrap();
        assert_eq!(node.layout.mode, LayoutMode::Vertical);
        assert_eq!(node.layout.primary_align, Some(AxisAlign::SpaceBetween));
        assert_eq!(node.layout.counter_align, Some(AxisAlign::Center));
        assert_eq!(node.layout.item_spacing, Some(12.0));
        assert_eq!(node.layout.padding.left, Some(16.0));
        assert_eq!(node.layout.padding.bottom, None);
    }

    #[test]
    fn test_null_children_are_dropped() {
        let node = parse_node(
            r#"{ "type": "GROUP", "children": [null, { "type": "RECTANGLE", "name": "A" }, null] }"#,
        )
        .unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].name, "A");
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_color_out_of_range_rejected() {
        let err = parse_node(
            r#"{ "type": "RECTANGLE", "name": "Bad",
                 "fills": [{ "type": "SOLID", "color": { "r": 255, "g": 0, "b": 0 } }] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TreeError::InvalidColor { channel: 'r', field: "fills", .. }
        ));
        assert!(err.to_string().contains("'Bad'"));
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = parse_node(r#"{ "type": "FRAME", "width": -1 }"#).unwrap_err();
        assert!(matches!(err, TreeError::InvalidNumber { field: "width", .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_node("{ not json").unwrap_err();
        assert!(matches!(err, TreeError::Json(_)));
    }

    // =========================================================================
    // Envelopes
    // =========================================================================

    const FILE: &str = r#"{
        "name": "Landing",
        "document": {
            "id": "0:0", "type": "DOCUMENT", "name": "Document",
            "children": [{
                "id": "0:1", "type": "CANVAS", "name": "Page 1",
                "children": [{ "id": "1:2", "type": "FRAME", "name": "Home" }]
            }]
        }
    }"#;

    #[test]
    fn test_load_file_document() {
        let root = load_root(FILE, None).unwrap();
        assert_eq!(root.kind, NodeKind::Other("DOCUMENT".into()));
        assert_eq!(root.node_count(), 3);
    }

    #[test]
    fn test_load_file_with_node_id() {
        let root = load_root(FILE, Some("1:2")).unwrap();
        assert_eq!(root.name, "Home");
        assert_eq!(root.kind, NodeKind::Frame);
    }

    #[test]
    fn test_load_missing_node_id() {
        let err = load_root(FILE, Some("7:7")).unwrap_err();
        assert!(matches!(err, TreeError::NodeNotFound(ref id) if id == "7:7"));
    }

    #[test]
    fn test_load_nodes_response() {
        let json = r#"{ "nodes": { "4:2": { "document": { "id": "4:2", "type": "FRAME", "name": "Card" } } } }"#;
        assert_eq!(load_root(json, Some("4:2")).unwrap().name, "Card");
        assert_eq!(load_root(json, None).unwrap().name, "Card");
    }

    #[test]
    fn test_load_nodes_response_null_document() {
        let json = r#"{ "nodes": { "4:2": null } }"#;
        assert!(matches!(load_root(json, None), Err(TreeError::NoNodeData)));
    }

    #[test]
    fn test_load_bare_node() {
        let root = load_root(r#"{ "type": "GROUP", "name": "G" }"#, None).unwrap();
        assert_eq!(root.kind, NodeKind::Group);
    }

    #[test]
    fn test_load_node_skips_invalid_siblings() {
        let json = r#"{ "document": { "id": "0:0", "type": "DOCUMENT", "children": [
            { "id": "1:1", "type": "FRAME", "name": "Broken",
              "fills": [{ "type": "SOLID", "color": { "r": 2, "g": 0, "b": 0 } }] },
            { "id": "2:1", "type": "FRAME", "name": "Fine" }
        ] } }"#;
        assert_eq!(load_root(json, Some("2:1")).unwrap().name, "Fine");
        assert!(matches!(
            load_root(json, None),
            Err(TreeError::InvalidColor { .. })
        ));
    }

    // =========================================================================
    // Deep trees
    // =========================================================================

    fn nested(depth: usize) -> String {
        let mut json = r#"{ "id": "leaf", "type": "RECTANGLE", "name": "Leaf" }"#.to_string();
        for level in 0..depth {
            json = format!(
                r#"{{ "id": "g{level}", "type": "GROUP", "name": "Level", "children": [{json}] }}"#
            );
        }
        json
    }

    #[test]
    fn test_parse_deep_chain() {
        let node = parse_node(&nested(100)).unwrap();
        assert_eq!(node.node_count(), 101);
    }

    #[test]
    fn test_load_deep_chain_in_envelope() {
        let json = format!(r#"{{ "document": {} }}"#, nested(100));
        let root = load_root(&json, None).unwrap();
        assert_eq!(root.node_count(), 101);
        let leaf = load_root(&json, Some("leaf")).unwrap();
        assert_eq!(leaf.name, "Leaf");
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let err = parse_node(r#"{ "type": "FRAME" } extra"#).unwrap_err();
        assert!(matches!(err, TreeError::Json(_)));
    }

    #[test]
    fn test_load_no_node_data() {
        assert!(matches!(load_root("{}", None), Err(TreeError::NoNodeData)));
        assert!(matches!(load_root("[]", None), Err(TreeError::NoNodeData)));
        assert!(matches!(
            load_root(r#"{ "document": null }"#, None),
            Err(TreeError::NoNodeData)
        ));
    }
}
