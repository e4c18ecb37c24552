//! Standalone page shell.
//!
//! Wraps a compiled body in a full HTML document that pulls Bootstrap from
//! its CDN and links the generated stylesheet.

use crate::html::escape_html;
use crate::{CompilerOutput, ConvertOptions};

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// File name of the generated stylesheet.
pub const STYLESHEET_FILE: &str = "styles.css";

/// Stylesheet path relative to the page.
pub fn stylesheet_href(top_level: bool) -> String {
    if top_level {
        STYLESHEET_FILE.to_string()
    } else {
        format!("../{STYLESHEET_FILE}")
    }
}

/// Render a complete HTML document around the compiled body.
pub fn render_page(output: &CompilerOutput, options: &ConvertOptions) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("  <title>{}</title>\n", escape_html(&options.title)));
    html.push_str(&format!("  <link rel=\"stylesheet\" href=\"{BOOTSTRAP_CSS}\">\n"));
    html.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{}\">\n",
        stylesheet_href(options.top_level)
    ));
    html.push_str("</head>\n<body>\n");
    html.push_str(&output.html);
    html.push_str(&format!("<script src=\"{BOOTSTRAP_JS}\"></script>\n"));
    html.push_str("</body>\n</html>\n");
    html
}

/// Output file name for a node: lowercased, whitespace runs become `-`.
pub fn page_file_name(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "index.html".to_string()
    } else {
        format!("{slug}.html")
    }
}
