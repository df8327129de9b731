use wasm_bindgen::prelude::*;

use crate::model::Breakpoint;

#[wasm_bindgen(js_name = layoutDocument)]
pub fn layout_document(json: &str, breakpoint: &str) -> Result<String, JsValue> {
    let breakpoint: Breakpoint = breakpoint
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    crate::layout_json(json, breakpoint).map_err(|e| JsValue::from_str(&format!("{}", e)))
}

#[wasm_bindgen(js_name = canvasSize)]
pub fn canvas_size(json: &str, breakpoint: &str) -> Result<JsValue, JsValue> {
    let breakpoint: Breakpoint = breakpoint
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    let document = crate::Document::from_json(json).map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    let size = crate::layout::canvas_size(
        breakpoint,
        &document.elements,
        crate::EditorConfig::default().footer_slack,
    );
    serde_wasm_bindgen::to_value(&size).map_err(|e| JsValue::from_str(&format!("{}", e)))
}
