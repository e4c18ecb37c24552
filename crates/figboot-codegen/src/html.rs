//! HTML code generator.
//!
//! Walks the design tree depth-first and emits indented markup. Each node is
//! classified once (text, container, button, image, fallback); nodes that
//! carry styles get a minted class and a rule in the context's style table.

use figboot_tree::{DesignNode, NodeKind, TextStyle};

use crate::layout::{layout_classes, merge_classes, spacing_classes};
use crate::style::{extract_styles, typography_styles};
use crate::ConversionContext;

/// Generate the HTML body for a tree, recording style rules in `ctx`.
pub fn generate(root: Option<&DesignNode>, ctx: &mut ConversionContext) -> String {
    emit(root, ctx, 0)
}

/// Emit the fragment for one subtree at the given depth.
/// An absent node yields an empty fragment.
pub fn emit(node: Option<&DesignNode>, ctx: &mut ConversionContext, depth: usize) -> String {
    let mut html = String::new();
    if let Some(node) = node {
        generate_node(node, ctx, &mut html, depth);
    }
    html
}

/// Semantic role of a node, in classification precedence order.
#[derive(Debug, PartialEq)]
enum Role<'a> {
    Text(&'a TextStyle),
    Container { prefix: &'static str, tag: &'static str },
    Button,
    Image,
    Fallback,
}

fn classify(node: &DesignNode) -> Role<'_> {
    match &node.kind {
        NodeKind::Text(style) => Role::Text(style),
        NodeKind::Frame => Role::Container {
            prefix: "frame",
            tag: "section",
        },
        NodeKind::Component => Role::Container {
            prefix: "component",
            tag: "section",
        },
        NodeKind::Rectangle => Role::Container {
            prefix: "rectangle",
            tag: "div",
        },
        NodeKind::Group => Role::Container {
            prefix: "group",
            tag: "div",
        },
        NodeKind::Instance => Role::Container {
            prefix: "instance",
            tag: "div",
        },
        _ if is_button_like(node) => Role::Button,
        NodeKind::Image => Role::Image,
        NodeKind::Other(_) => Role::Fallback,
    }
}

/// Instances also count as buttons, but the container arm above claims
/// them first, so only the name check decides in practice.
fn is_button_like(node: &DesignNode) -> bool {
    matches!(node.kind, NodeKind::Instance) || node.name.to_lowercase().contains("button")
}

fn generate_node(node: &DesignNode, ctx: &mut ConversionContext, out: &mut String, depth: usize) {
    match classify(node) {
        Role::Text(style) => generate_text(node, style, ctx, out, depth),
        Role::Container { prefix, tag } => generate_block(node, prefix, tag, ctx, out, depth),
        Role::Button => generate_button(node, ctx, out, depth),
        Role::Image => generate_image(node, ctx, out, depth),
        Role::Fallback => {
            log::warn!(
                "node '{}' of type {} has no dedicated mapping, emitting a container",
                node.name,
                node.kind.type_name()
            );
            generate_block(node, "container", "div", ctx, out, depth)
        }
    }
}

fn generate_text(
    node: &DesignNode,
    style: &TextStyle,
    ctx: &mut ConversionContext,
    out: &mut String,
    depth: usize,
) {
    let indent = "  ".repeat(depth);
    let tag = heading_tag(style.font_size);
    let class = ctx.mint_class("text");
    ctx.styles.record(&class, typography_styles(style));
    log::debug!("text '{}' -> <{tag}> .{class}", node.name);

    let content = escape_html(node.characters.as_deref().unwrap_or(""));
    out.push_str(&format!("{indent}<{tag} class=\"{class}\">{content}</{tag}>\n"));
}

fn generate_block(
    node: &DesignNode,
    prefix: &str,
    tag: &str,
    ctx: &mut ConversionContext,
    out: &mut String,
    depth: usize,
) {
    let indent = "  ".repeat(depth);
    let class = ctx.mint_class(prefix);
    ctx.styles.record(&class, extract_styles(node));
    log::debug!("{} '{}' -> <{tag}> .{class}", node.kind.type_name(), node.name);

    let classes = merge_classes([vec![class], spacing_classes(node), layout_classes(node)]);

    // Opening tag
    out.push_str(&format!("{indent}<{tag} class=\"{}\">", classes.join(" ")));

    // Children
    if !node.children.is_empty() {
        out.push('\n');
        for child in &node.children {
            generate_node(child, ctx, out, depth + 1);
        }
        out.push_str(&indent);
    }

    // Closing tag
    out.push_str(&format!("</{tag}>\n"));
}

fn generate_button(node: &DesignNode, ctx: &mut ConversionContext, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);
    let class = ctx.mint_class("button");
    ctx.styles.record(&class, extract_styles(node));
    log::debug!("button '{}' -> .{class}", node.name);

    let classes = merge_classes([
        vec!["btn".to_string(), "btn-primary".to_string(), class],
        spacing_classes(node),
    ]);
    let label = node
        .characters
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(Some(node.name.as_str()).filter(|s| !s.is_empty()))
        .unwrap_or("Button");

    out.push_str(&format!(
        "{indent}<button class=\"{}\">{}</button>\n",
        classes.join(" "),
        escape_html(label)
    ));
}

fn generate_image(node: &DesignNode, ctx: &mut ConversionContext, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);
    let class = ctx.mint_class("img");
    ctx.styles.record(&class, extract_styles(node));
    log::debug!("image '{}' -> .{class}", node.name);

    let classes = merge_classes([
        vec![class, "img-fluid".to_string()],
        spacing_classes(node),
    ]);
    let alt = if node.name.is_empty() {
        "image"
    } else {
        node.name.as_str()
    };

    out.push_str(&format!(
        "{indent}<img class=\"{}\" alt=\"{}\" />\n",
        classes.join(" "),
        escape_html(alt)
    ));
}

/// Heading level by font size; body text below 17px.
fn heading_tag(font_size: Option<f64>) -> &'static str {
    match font_size.unwrap_or(0.0) {
        size if size > 24.0 => "h1",
        size if size > 20.0 => "h2",
        size if size > 16.0 => "h3",
        _ => "p",
    }
}

/// Escape the five HTML-significant characters. Not idempotent: escape once.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
