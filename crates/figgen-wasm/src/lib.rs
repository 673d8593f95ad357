//! WASM bindings for the figgen pipeline.
//!
//! Exposes `generate()` to JavaScript via wasm-bindgen: Figma file JSON in,
//! one `{ name, html, css }` object per page out. Throws on malformed JSON
//! or an unusable document shape.

use wasm_bindgen::prelude::*;

/// Generate HTML + CSS for every page of a Figma file.
///
/// Takes the raw file JSON as a string and returns a JS array of objects
/// `{ name: string, html: string, css: string }`, one per canvas.
/// Throws a JS error if the JSON does not parse or the document has no
/// usable shape.
#[wasm_bindgen]
pub fn generate(file_json: &str) -> Result<JsValue, JsError> {
    let file: serde_json::Value =
        serde_json::from_str(file_json).map_err(|e| JsError::new(&e.to_string()))?;

    let pages =
        figgen_normalize::document_to_pages(&file).map_err(|e| JsError::new(&e.to_string()))?;

    let results = js_sys::Array::new();
    for page in &pages {
        let output = figgen_codegen::generate_page(page);

        let entry = js_sys::Object::new();
        js_sys::Reflect::set(&entry, &"name".into(), &page.name.as_str().into())
            .map_err(|_| JsError::new("Failed to set name property"))?;
        js_sys::Reflect::set(&entry, &"html".into(), &output.html.into())
            .map_err(|_| JsError::new("Failed to set html property"))?;
        js_sys::Reflect::set(&entry, &"css".into(), &output.css.into())
            .map_err(|_| JsError::new("Failed to set css property"))?;
        results.push(&entry);
    }

    Ok(results.into())
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use figgen_codegen::PageOutput;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM) — verify the pipeline works end to end
    // =========================================================================

    fn native_generate(file_json: &str) -> Vec<(String, PageOutput)> {
        let file: serde_json::Value = serde_json::from_str(file_json).unwrap();
        let pages = figgen_normalize::document_to_pages(&file).unwrap();
        pages
            .iter()
            .map(|page| (page.name.clone(), figgen_codegen::generate_page(page)))
            .collect()
    }

    const MINIMAL_FILE: &str = r#"{
        "document": {
            "children": [{
                "id": "0:1",
                "name": "Page 1",
                "type": "CANVAS",
                "children": [{
                    "id": "1:1",
                    "name": "Screen",
                    "type": "FRAME",
                    "absoluteBoundingBox": { "x": 0, "y": 0, "width": 390, "height": 844 },
                    "children": [{
                        "id": "2:1",
                        "name": "Title",
                        "type": "TEXT",
                        "characters": "Hello",
                        "absoluteBoundingBox": { "x": 24, "y": 60, "width": 342, "height": 30 }
                    }]
                }]
            }]
        }
    }"#;

    #[test]
    fn test_minimal_file_generates_one_page() {
        let pages = native_generate(MINIMAL_FILE);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, "Page 1");
    }

    #[test]
    fn test_generated_markup_and_styles_agree() {
        let pages = native_generate(MINIMAL_FILE);
        let output = &pages[0].1;
        assert!(output.html.contains("class=\"title-21\">Hello</div>"));
        assert!(output.css.contains(".title-21 {"));
        assert!(output.css.contains(".canvas-root {"));
    }

    #[test]
    fn test_invalid_json_fails() {
        assert!(serde_json::from_str::<serde_json::Value>("{not json").is_err());
    }

    #[test]
    fn test_unusable_document_fails() {
        let file: serde_json::Value = serde_json::from_str("{}").unwrap();
        assert!(figgen_normalize::document_to_pages(&file).is_err());
    }

    #[test]
    fn test_version() {
        let v = super::version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_repeated_generation_is_deterministic() {
        let first = native_generate(MINIMAL_FILE);
        let second = native_generate(MINIMAL_FILE);
        assert_eq!(first[0].1, second[0].1);
    }
}
