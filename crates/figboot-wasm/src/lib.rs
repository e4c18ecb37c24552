//! WASM bindings for the figboot transpiler.
//!
//! Exposes `convert()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ html, css }` or throws on error.

use wasm_bindgen::prelude::*;

/// Convert a design document (JSON) to an HTML page + stylesheet.
///
/// Returns a JS object with `{ html: string, css: string }`, where `html` is
/// a complete page titled `title`. Throws a JS error if the document cannot
/// be loaded.
#[wasm_bindgen]
pub fn convert(json: &str, title: &str) -> Result<JsValue, JsError> {
    let (html, css) = convert_native(json, title).map_err(|e| JsError::new(&e.to_string()))?;

    // Serialize to a plain JS object { html, css }
    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"html".into(), &html.into())
        .map_err(|_| JsError::new("Failed to set html property"))?;
    js_sys::Reflect::set(&js_obj, &"css".into(), &css.into())
        .map_err(|_| JsError::new("Failed to set css property"))?;

    Ok(js_obj.into())
}

/// Get the transpiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn convert_native(json: &str, title: &str) -> Result<(String, String), figboot_tree::TreeError> {
    let root = figboot_tree::load_root(json, None)?;
    let output = figboot_codegen::compile(Some(&root));

    let title = if title.is_empty() {
        root.name.clone()
    } else {
        title.to_string()
    };
    let options = figboot_codegen::ConvertOptions {
        title,
        top_level: true,
    };
    let page = figboot_codegen::page::render_page(&output, &options);

    Ok((page, output.css))
}
