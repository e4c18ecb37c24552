//! figboot Code Generator
//!
//! Transpiles a design-tool node tree into two outputs: an HTML body built on
//! Bootstrap utility classes, and a stylesheet with one rule per generated
//! class. The walk is a single depth-first pass; every node that needs a
//! class gets a fresh `<prefix>-<n>` name from the conversion context.
//!
//! ```text
//! DesignNode → compile() → CompilerOutput { html, css }
//! ```

pub mod css;
pub mod html;
pub mod layout;
pub mod page;
pub mod scale;
pub mod style;

use figboot_tree::DesignNode;

use crate::css::StyleTable;

/// The compiled output for one design tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub html: String,
    pub css: String,
    /// Number of rules in `css`.
    pub rule_count: usize,
}

/// Per-conversion options consumed by the page shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub title: String,
    /// `false` for documents written one directory below the stylesheet.
    pub top_level: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            title: "Untitled".into(),
            top_level: true,
        }
    }
}

/// State threaded through one conversion: the class-name counter and the
/// style table. Never shared between conversions.
#[derive(Debug, Default)]
pub struct ConversionContext {
    next_id: usize,
    pub styles: StyleTable,
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a unique class name `<prefix>-<n>`.
    pub fn mint_class(&mut self, prefix: &str) -> String {
        let class = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        class
    }
}

/// Compile a design tree into HTML + CSS. An absent root yields empty output.
pub fn compile(root: Option<&DesignNode>) -> CompilerOutput {
    let mut ctx = ConversionContext::new();

    let html_output = html::generate(root, &mut ctx);
    let css_output = css::generate(&ctx.styles);

    log::info!(
        "compiled {} node(s) into {} style rule(s)",
        root.map(DesignNode::node_count).unwrap_or(0),
        ctx.styles.len()
    );

    CompilerOutput {
        html: html_output,
        css: css_output,
        rule_count: ctx.styles.len(),
    }
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
