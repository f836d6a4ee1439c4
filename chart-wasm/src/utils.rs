use js_sys::Array;
use wasm_bindgen::JsValue;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Collect a JS array of strings, rejecting anything that is not a string.
pub fn labels_from_array(labels: &Array) -> Result<Vec<String>, JsValue> {
    labels
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_string()
                .ok_or_else(|| JsValue::from_str(&format!("label at index {i} is not a string")))
        })
        .collect()
}

/// Convert palette colors into a JS array of strings.
pub fn colors_to_array(colors: &[&str]) -> Array {
    colors.iter().map(|c| JsValue::from_str(c)).collect()
}
