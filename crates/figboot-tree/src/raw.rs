//! Serde mirror of the design tool's JSON, and its lowering into typed nodes.
//!
//! Raw records accept whatever the tool sends (unknown fields are ignored,
//! most fields optional). `lower` validates values and builds `DesignNode`s.

use serde::Deserialize;

use crate::node::{
    AutoLayout, AxisAlign, Color, DesignNode, Effect, EffectKind, LayoutMode, NodeKind, Padding,
    Paint, TextAlign, TextStyle, Visual,
};
use crate::TreeError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    node_type: String,
    characters: Option<String>,
    #[serde(default)]
    children: Vec<Option<RawNode>>,

    #[serde(default)]
    fills: Vec<RawPaint>,
    #[serde(default)]
    strokes: Vec<RawPaint>,
    stroke_weight: Option<f64>,
    #[serde(default)]
    effects: Vec<RawEffect>,
    corner_radius: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    absolute_bounding_box: Option<RawBox>,

    layout_mode: Option<String>,
    primary_axis_align_items: Option<String>,
    counter_axis_align_items: Option<String>,
    item_spacing: Option<f64>,
    padding_left: Option<f64>,
    padding_right: Option<f64>,
    padding_top: Option<f64>,
    padding_bottom: Option<f64>,

    style: Option<RawTextStyle>,
}

#[derive(Debug, Deserialize)]
struct RawColor {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque")]
    a: f64,
}

#[derive(Debug, Deserialize)]
struct RawPaint {
    #[serde(rename = "type", default)]
    paint_type: String,
    color: Option<RawColor>,
    opacity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawVector {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

#[derive(Debug, Deserialize)]
struct RawEffect {
    #[serde(rename = "type", default)]
    effect_type: String,
    visible: Option<bool>,
    offset: Option<RawVector>,
    radius: Option<f64>,
    spread: Option<f64>,
    color: Option<RawColor>,
}

#[derive(Debug, Deserialize)]
struct RawBox {
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTextStyle {
    font_size: Option<f64>,
    font_weight: Option<f64>,
    line_height_px: Option<f64>,
    letter_spacing: Option<f64>,
    text_align_horizontal: Option<String>,
}

impl RawNode {
    /// Detach the node with `id` (depth-first, pre-order) without lowering
    /// anything else in the tree.
    pub(crate) fn take_node(self, id: &str) -> Option<RawNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .into_iter()
            .flatten()
            .find_map(|child| child.take_node(id))
    }
}

fn opaque() -> f64 {
    1.0
}

/// Lower a raw node (and its subtree) into a typed `DesignNode`.
///
/// `null` children are absent nodes and are dropped.
pub(crate) fn lower(raw: RawNode) -> Result<DesignNode, TreeError> {
    let node_name = raw.name.clone();
    let check = NodeCheck { node: &node_name };

    let style = match raw.style {
        Some(s) => TextStyle {
            font_size: check.measure("style.fontSize", s.font_size)?,
            font_weight: check.finite("style.fontWeight", s.font_weight)?,
            line_height: check.finite("style.lineHeightPx", s.line_height_px)?,
            letter_spacing: check.finite("style.letterSpacing", s.letter_spacing)?,
            text_align: s.text_align_horizontal.as_deref().and_then(TextAlign::parse),
        },
        None => TextStyle::default(),
    };

    let bbox = raw.absolute_bounding_box.as_ref();
    let visual = Visual {
        fills: raw
            .fills
            .into_iter()
            .map(|p| check.paint("fills", p))
            .collect::<Result<_, _>>()?,
        strokes: raw
            .strokes
            .into_iter()
            .map(|p| check.paint("strokes", p))
            .collect::<Result<_, _>>()?,
        stroke_weight: check.measure("strokeWeight", raw.stroke_weight)?,
        effects: raw
            .effects
            .into_iter()
            .map(|e| check.effect(e))
            .collect::<Result<_, _>>()?,
        corner_radius: check.measure("cornerRadius", raw.corner_radius)?,
        width: check.measure("width", raw.width.or(bbox.and_then(|b| b.width)))?,
        height: check.measure("height", raw.height.or(bbox.and_then(|b| b.height)))?,
    };

    let layout = AutoLayout {
        mode: raw
            .layout_mode
            .as_deref()
            .map(LayoutMode::parse)
            .unwrap_or_default(),
        primary_align: raw.primary_axis_align_items.as_deref().and_then(AxisAlign::parse),
        counter_align: raw.counter_axis_align_items.as_deref().and_then(AxisAlign::parse),
        item_spacing: check.finite("itemSpacing", raw.item_spacing)?,
        padding: Padding {
            left: check.measure("paddingLeft", raw.padding_left)?,
            right: check.measure("paddingRight", raw.padding_right)?,
            top: check.measure("paddingTop", raw.padding_top)?,
            bottom: check.measure("paddingBottom", raw.padding_bottom)?,
        },
    };

    let kind = NodeKind::from_type(&raw.node_type, style);
    if let NodeKind::Other(ref t) = kind {
        log::debug!("node '{}' has unrecognized type '{t}'", raw.name);
    }

    let children = raw
        .children
        .into_iter()
        .flatten()
        .map(lower)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DesignNode {
        id: raw.id,
        name: raw.name,
        kind,
        characters: raw.characters,
        visual,
        layout,
        children,
    })
}

/// Per-node validation helpers; carry the node name for error messages.
struct NodeCheck<'a> {
    node: &'a str,
}

impl NodeCheck<'_> {
    fn color(&self, field: &'static str, raw: RawColor) -> Result<Color, TreeError> {
        for (channel, value) in [('r', raw.r), ('g', raw.g), ('b', raw.b), ('a', raw.a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TreeError::InvalidColor {
                    node: self.node.to_string(),
                    field,
                    channel,
                    value,
                });
            }
        }
        Ok(Color::rgba(raw.r, raw.g, raw.b, raw.a))
    }

    /// Sizes, radii and paddings: finite and not negative.
    fn measure(&self, field: &'static str, value: Option<f64>) -> Result<Option<f64>, TreeError> {
        match self.finite(field, value)? {
            Some(v) if v < 0.0 => Err(self.invalid_number(field, v)),
            other => Ok(other),
        }
    }

    fn finite(&self, field: &'static str, value: Option<f64>) -> Result<Option<f64>, TreeError> {
        match value {
            Some(v) if !v.is_finite() => Err(self.invalid_number(field, v)),
            other => Ok(other),
        }
    }

    fn invalid_number(&self, field: &'static str, value: f64) -> TreeError {
        TreeError::InvalidNumber {
            node: self.node.to_string(),
            field,
            value,
        }
    }

    fn paint(&self, field: &'static str, raw: RawPaint) -> Result<Paint, TreeError> {
        match (raw.paint_type.as_str(), raw.color) {
            ("SOLID", Some(color)) => Ok(Paint::Solid {
                color: self.color(field, color)?,
                opacity: raw.opacity.unwrap_or(1.0).clamp(0.0, 1.0),
            }),
            _ => Ok(Paint::Other(raw.paint_type)),
        }
    }

    fn effect(&self, raw: RawEffect) -> Result<Effect, TreeError> {
        let kind = match raw.effect_type.as_str() {
            "DROP_SHADOW" => EffectKind::DropShadow,
            other => EffectKind::Other(other.to_string()),
        };
        let color = raw.color.map(|c| self.color("effects", c)).transpose()?;
        Ok(Effect {
            kind,
            visible: raw.visible.unwrap_or(true),
            offset_x: self.finite("effects.offset.x", raw.offset.as_ref().map(|o| o.x))?,
            offset_y: self.finite("effects.offset.y", raw.offset.as_ref().map(|o| o.y))?,
            radius: self.measure("effects.radius", raw.radius)?,
            spread: self.finite("effects.spread", raw.spread)?,
            color,
        })
    }
}
