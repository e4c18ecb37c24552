//! Layout and spacing classification.
//!
//! Auto-layout settings become flexbox utilities; padding and item spacing
//! become spacing utilities parameterized by the scale index.

use figboot_tree::{AxisAlign, DesignNode, LayoutMode};

use crate::scale::nearest_scale;

/// Flex utilities for an auto-layout node, in emission order:
/// display, direction, justify, align, gap. Empty without a layout mode.
pub fn layout_classes(node: &DesignNode) -> Vec<String> {
    let layout = &node.layout;
    let direction = match layout.mode {
        LayoutMode::None => return Vec::new(),
        LayoutMode::Horizontal => "flex-row",
        LayoutMode::Vertical => "flex-column",
    };

    let mut classes = vec!["d-flex".to_string(), direction.to_string()];

    if let Some(justify) = layout.primary_align.and_then(justify_suffix) {
        classes.push(format!("justify-content-{justify}"));
    }
    if let Some(align) = layout.counter_align.and_then(align_suffix) {
        classes.push(format!("align-items-{align}"));
    }
    classes.extend(gap_class(node));

    classes
}

/// Padding utilities (and the gap utility) regardless of layout mode.
pub fn spacing_classes(node: &DesignNode) -> Vec<String> {
    let padding = &node.layout.padding;
    let left = padding.left.unwrap_or(0.0);
    let right = padding.right.unwrap_or(0.0);
    let top = padding.top.unwrap_or(0.0);
    let bottom = padding.bottom.unwrap_or(0.0);

    let mut classes = Vec::new();

    if left == right && top == bottom {
        let horizontal = nearest_scale(Some(left));
        let vertical = nearest_scale(Some(top));
        if horizontal == vertical {
            if horizontal != 0 {
                classes.push(format!("p-{horizontal}"));
            }
        } else {
            if horizontal != 0 {
                classes.push(format!("px-{horizontal}"));
            }
            if vertical != 0 {
                classes.push(format!("py-{vertical}"));
            }
        }
    } else {
        for (side, value) in [("ps", left), ("pe", right), ("pt", top), ("pb", bottom)] {
            let index = nearest_scale(Some(value));
            if index != 0 {
                classes.push(format!("{side}-{index}"));
            }
        }
    }

    classes.extend(gap_class(node));
    classes
}

/// Concatenate class groups, dropping empty names and repeats (first wins).
pub fn merge_classes<I>(groups: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut merged: Vec<String> = Vec::new();
    for class in groups.into_iter().flatten() {
        if !class.is_empty() && !merged.contains(&class) {
            merged.push(class);
        }
    }
    merged
}

fn gap_class(node: &DesignNode) -> Option<String> {
    match nearest_scale(node.layout.item_spacing) {
        0 => None,
        index => Some(format!("gap-{index}")),
    }
}

fn justify_suffix(align: AxisAlign) -> Option<&'static str> {
    match align {
        AxisAlign::Min => Some("start"),
        AxisAlign::Center => Some("center"),
        AxisAlign::Max => Some("end"),
        AxisAlign::SpaceBetween => Some("between"),
        AxisAlign::SpaceAround => Some("around"),
        AxisAlign::SpaceEvenly => Some("evenly"),
        AxisAlign::Stretch | AxisAlign::Baseline => None,
    }
}

fn align_suffix(align: AxisAlign) -> Option<&'static str> {
    match align {
        AxisAlign::Min => Some("start"),
        AxisAlign::Center => Some("center"),
        AxisAlign::Max => Some("end"),
        AxisAlign::Stretch => Some("stretch"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figboot_tree::{NodeKind, Padding};
    use pretty_assertions::assert_eq;

    fn frame() -> DesignNode {
        DesignNode::new(NodeKind::Frame, "Frame")
    }

    fn padded(left: f64, right: f64, top: f64, bottom: f64) -> DesignNode {
        let mut node = frame();
        node.layout.padding = Padding {
            left: Some(left),
            right: Some(right),
            top: Some(top),
            bottom: Some(bottom),
        };
        node
    }

    // =========================================================================
    // layout_classes
    // =========================================================================

    #[test]
    fn test_no_layout_mode() {
        let mut node = frame();
        node.layout.item_spacing = Some(16.0);
        node.layout.primary_align = Some(AxisAlign::Center);
        assert!(layout_classes(&node).is_empty());
    }

    #[test]
    fn test_horizontal_full() {
        let mut node = frame();
        node.layout.mode = LayoutMode::Horizontal;
        node.layout.primary_align = Some(AxisAlign::SpaceBetween);
        node.layout.counter_align = Some(AxisAlign::Center);
        node.layout.item_spacing = Some(12.0);
        assert_eq!(
            layout_classes(&node),
            vec![
                "d-flex",
                "flex-row",
                "justify-content-between",
                "align-items-center",
                "gap-3",
            ]
        );
    }

    #[test]
    fn test_vertical_minimal() {
        let mut node = frame();
        node.layout.mode = LayoutMode::Vertical;
        assert_eq!(layout_classes(&node), vec!["d-flex", "flex-column"]);
    }

    #[test]
    fn test_unmapped_alignment_emits_nothing() {
        let mut node = frame();
        node.layout.mode = LayoutMode::Horizontal;
        node.layout.primary_align = Some(AxisAlign::Stretch);
        node.layout.counter_align = Some(AxisAlign::Baseline);
        node.layout.item_spacing = Some(1.0);
        assert_eq!(layout_classes(&node), vec!["d-flex", "flex-row"]);
    }

    #[test]
    fn test_alignment_tables() {
        let mut node = frame();
        node.layout.mode = LayoutMode::Horizontal;
        node.layout.primary_align = Some(AxisAlign::SpaceEvenly);
        node.layout.counter_align = Some(AxisAlign::Stretch);
        assert_eq!(
            layout_classes(&node),
            vec![
                "d-flex",
                "flex-row",
                "justify-content-evenly",
                "align-items-stretch"
            ]
        );
    }

    // =========================================================================
    // spacing_classes
    // =========================================================================

    #[test]
    fn test_symmetric_padding_single_class() {
        let node = padded(8.0, 8.0, 8.0, 8.0);
        assert_eq!(spacing_classes(&node), vec!["p-2"]);
    }

    #[test]
    fn test_symmetric_padding_split_axes() {
        let node = padded(16.0, 16.0, 4.0, 4.0);
        assert_eq!(spacing_classes(&node), vec!["px-4", "py-1"]);
    }

    #[test]
    fn test_symmetric_padding_zero_axis_skipped() {
        let node = padded(0.0, 0.0, 24.0, 24.0);
        assert_eq!(spacing_classes(&node), vec!["py-5"]);
    }

    #[test]
    fn test_asymmetric_padding() {
        let node = padded(16.0, 0.0, 4.0, 0.0);
        assert_eq!(spacing_classes(&node), vec!["ps-4", "pt-1"]);
    }

    #[test]
    fn test_asymmetric_padding_all_sides() {
        let node = padded(4.0, 8.0, 12.0, 24.0);
        assert_eq!(spacing_classes(&node), vec!["ps-1", "pe-2", "pt-3", "pb-5"]);
    }

    #[test]
    fn test_no_padding_no_classes() {
        assert!(spacing_classes(&frame()).is_empty());
        let node = DesignNode {
            layout: figboot_tree::AutoLayout {
                padding: Padding::uniform(1.0),
                ..Default::default()
            },
            ..frame()
        };
        assert!(spacing_classes(&node).is_empty());
    }

    #[test]
    fn test_gap_without_layout_mode() {
        let mut node = frame();
        node.layout.item_spacing = Some(24.0);
        assert_eq!(spacing_classes(&node), vec!["gap-5"]);
    }

    // =========================================================================
    // merge_classes
    // =========================================================================

    #[test]
    fn test_merge_drops_duplicate_gap() {
        let mut node = padded(8.0, 8.0, 8.0, 8.0);
        node.layout.mode = LayoutMode::Vertical;
        node.layout.item_spacing = Some(8.0);
        let merged = merge_classes([
            vec!["frame-0".to_string()],
            spacing_classes(&node),
            layout_classes(&node),
        ]);
        assert_eq!(
            merged,
            vec!["frame-0", "p-2", "gap-2", "d-flex", "flex-column"]
        );
        assert_eq!(merged.iter().filter(|c| c.starts_with("gap-")).count(), 1);
    }

    #[test]
    fn test_merge_drops_empty() {
        let merged = merge_classes([vec![String::new(), "a".into()], vec!["b".into()]]);
        assert_eq!(merged, vec!["a", "b"]);
    }
}
