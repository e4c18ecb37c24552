//! Style extraction.
//!
//! Turns a node's visual attributes into an ordered map of style properties.
//! Keys use attribute-style naming (`backgroundColor`); `css` converts them
//! when the stylesheet is serialized. An absent attribute never produces a
//! placeholder value.

use figboot_tree::{Color, DesignNode, EffectKind, Paint, TextAlign, TextStyle};
use indexmap::IndexMap;

use crate::format_number;

/// Ordered property → value map for one class.
pub type StyleMap = IndexMap<&'static str, String>;

/// Extract background, border, shadow, radius and size styles.
pub fn extract_styles(node: &DesignNode) -> StyleMap {
    let visual = &node.visual;
    let mut styles = StyleMap::new();

    if let Some(color) = visual.fills.first().and_then(paint_color) {
        styles.insert("backgroundColor", color);
    }

    let stroke = visual.strokes.first().and_then(paint_color);
    if let (Some(color), Some(weight)) = (stroke, visual.stroke_weight) {
        styles.insert("border", format!("{}px solid {color}", format_number(weight)));
    }

    let shadows: Vec<String> = visual
        .effects
        .iter()
        .filter(|e| e.kind == EffectKind::DropShadow && e.visible)
        .map(|e| {
            let color = e
                .color
                .map(|c| css_color(&c, 1.0))
                .unwrap_or_else(|| "rgb(0, 0, 0)".into());
            format!(
                "{}px {}px {}px {}px {color}",
                format_number(e.offset_x.unwrap_or(0.0)),
                format_number(e.offset_y.unwrap_or(0.0)),
                format_number(e.radius.unwrap_or(0.0)),
                format_number(e.spread.unwrap_or(0.0)),
            )
        })
        .collect();
    if !shadows.is_empty() {
        styles.insert("boxShadow", shadows.join(", "));
    }

    if let Some(radius) = visual.corner_radius {
        styles.insert("borderRadius", px(radius));
    }
    if let Some(width) = visual.width {
        styles.insert("width", px(width));
    }
    if let Some(height) = visual.height {
        styles.insert("height", px(height));
    }

    styles
}

/// Typography-only styles for a text node. Alignment defaults to `left`.
pub fn typography_styles(style: &TextStyle) -> StyleMap {
    let mut styles = StyleMap::new();

    if let Some(size) = style.font_size {
        styles.insert("fontSize", px(size));
    }
    if let Some(weight) = style.font_weight {
        styles.insert("fontWeight", format_number(weight));
    }
    if let Some(line_height) = style.line_height {
        styles.insert("lineHeight", px(line_height));
    }
    if let Some(spacing) = style.letter_spacing {
        styles.insert("letterSpacing", px(spacing));
    }

    let align = match style.text_align.unwrap_or(TextAlign::Left) {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justified => "justify",
    };
    styles.insert("textAlign", align.into());

    styles
}

/// `rgb(...)` when fully opaque, `rgba(...)` otherwise.
pub fn css_color(color: &Color, opacity: f64) -> String {
    let channel = |c: f64| (c * 255.0).round() as u8;
    let (r, g, b) = (channel(color.r), channel(color.g), channel(color.b));
    let alpha = color.a * opacity;

    if alpha >= 1.0 {
        format!("rgb({r}, {g}, {b})")
    } else {
        // Three decimals, but never printed as a fully opaque 1.
        let shown = ((alpha * 1000.0).round() / 1000.0).min(0.999);
        format!("rgba({r}, {g}, {b}, {})", format_number(shown))
    }
}

fn paint_color(paint: &Paint) -> Option<String> {
    match paint {
        Paint::Solid { color, opacity } => Some(css_color(color, *opacity)),
        Paint::Other(_) => None,
    }
}

fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}
