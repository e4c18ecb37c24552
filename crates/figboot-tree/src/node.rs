//! Typed design nodes.
//!
//! Every attribute the generator reads is optional; absence means "unset"
//! and is never replaced by a zero or transparent placeholder.

/// One node of the design tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    /// Text content. Text nodes carry it; other kinds may too.
    pub characters: Option<String>,
    pub visual: Visual,
    pub layout: AutoLayout,
    pub children: Vec<DesignNode>,
}

/// Closed set of node kinds. Unknown design-tool types land in `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Text(TextStyle),
    Rectangle,
    Frame,
    Group,
    Component,
    Instance,
    Image,
    Other(String),
}

impl NodeKind {
    /// Build a kind from the design tool's `type` string.
    pub fn from_type(node_type: &str, style: TextStyle) -> Self {
        match node_type {
            "TEXT" => NodeKind::Text(style),
            "RECTANGLE" => NodeKind::Rectangle,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "COMPONENT" => NodeKind::Component,
            "INSTANCE" => NodeKind::Instance,
            "IMAGE" => NodeKind::Image,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// The design tool's `type` string for this kind.
    pub fn type_name(&self) -> &str {
        match self {
            NodeKind::Text(_) => "TEXT",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Component => "COMPONENT",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Image => "IMAGE",
            NodeKind::Other(name) => name,
        }
    }
}

/// Typography of a text node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_align: Option<TextAlign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlign {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LEFT" => Some(TextAlign::Left),
            "CENTER" => Some(TextAlign::Center),
            "RIGHT" => Some(TextAlign::Right),
            "JUSTIFIED" => Some(TextAlign::Justified),
            _ => None,
        }
    }
}

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid { color: Color, opacity: f64 },
    /// Gradients, image paints and anything else without a flat color.
    Other(String),
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid {
            color,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    DropShadow,
    Other(String),
}

/// A visual effect such as a drop shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub visible: bool,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub radius: Option<f64>,
    pub spread: Option<f64>,
    pub color: Option<Color>,
}

impl Effect {
    pub fn drop_shadow(color: Color) -> Self {
        Self {
            kind: EffectKind::DropShadow,
            visible: true,
            offset_x: None,
            offset_y: None,
            radius: None,
            spread: None,
            color: Some(color),
        }
    }
}

/// Visual attributes read by the style extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Visual {
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub effects: Vec<Effect>,
    pub corner_radius: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl LayoutMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "HORIZONTAL" => LayoutMode::Horizontal,
            "VERTICAL" => LayoutMode::Vertical,
            _ => LayoutMode::None,
        }
    }
}

/// Auto-layout alignment along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Stretch,
    Baseline,
}

impl AxisAlign {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MIN" => Some(AxisAlign::Min),
            "CENTER" => Some(AxisAlign::Center),
            "MAX" => Some(AxisAlign::Max),
            "SPACE_BETWEEN" => Some(AxisAlign::SpaceBetween),
            "SPACE_AROUND" => Some(AxisAlign::SpaceAround),
            "SPACE_EVENLY" => Some(AxisAlign::SpaceEvenly),
            "STRETCH" => Some(AxisAlign::Stretch),
            "BASELINE" => Some(AxisAlign::Baseline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
}

impl Padding {
    pub fn uniform(px: f64) -> Self {
        Self {
            left: Some(px),
            right: Some(px),
            top: Some(px),
            bottom: Some(px),
        }
    }
}

/// Auto-layout attributes read by the layout classifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub primary_align: Option<AxisAlign>,
    pub counter_align: Option<AxisAlign>,
    pub item_spacing: Option<f64>,
    pub padding: Padding,
}

impl DesignNode {
    /// Create a node with no attributes and no children.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            kind,
            characters: None,
            visual: Visual::default(),
            layout: AutoLayout::default(),
            children: Vec::new(),
        }
    }

    /// Create a text node with the given content and font size.
    pub fn text(characters: impl Into<String>, font_size: f64) -> Self {
        let style = TextStyle {
            font_size: Some(font_size),
            ..TextStyle::default()
        };
        let mut node = Self::new(NodeKind::Text(style), "Text");
        node.characters = Some(characters.into());
        node
    }

    pub fn with_children(mut self, children: Vec<DesignNode>) -> Self {
        self.children = children;
        self
    }

    /// Depth-first, pre-order search by node id.
    pub fn find(&self, id: &str) -> Option<&DesignNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DesignNode::node_count).sum::<usize>()
    }
}
