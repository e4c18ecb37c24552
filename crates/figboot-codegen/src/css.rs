//! CSS code generator.
//!
//! Collects one rule per generated class during the walk and serializes the
//! table into a stylesheet, in first-recorded order.

use indexmap::IndexMap;

use crate::style::StyleMap;

/// Style rules keyed by class name, in first-recorded order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleTable {
    rules: IndexMap<String, StyleMap>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rule for `class`. Empty maps are ignored; recording the
    /// same class again replaces its properties but keeps its position.
    pub fn record(&mut self, class: &str, styles: StyleMap) {
        if styles.is_empty() {
            return;
        }
        log::debug!("rule .{class} ({} properties)", styles.len());
        self.rules.insert(class.to_string(), styles);
    }

    pub fn get(&self, class: &str) -> Option<&StyleMap> {
        self.rules.get(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Serialize a style table into a stylesheet.
pub fn generate(table: &StyleTable) -> String {
    let blocks: Vec<String> = table
        .rules
        .iter()
        .map(|(class, styles)| {
            let mut block = format!(".{class} {{\n");
            for (property, value) in styles {
                block.push_str(&format!("  {}: {value};\n", to_kebab_case(property)));
            }
            block.push_str("}\n");
            block
        })
        .collect();

    blocks.join("\n")
}

/// `backgroundColor` → `background-color`.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
