use chart_core::{TextStyle, TextSurface};
use wasm_bindgen::prelude::*;
use web_sys::{Element, SvgElement, SvgTextContentElement};

use crate::constants::SVG_NS;
use crate::utils::log;

/// Text surface backed by a live SVG element (usually the widget's `<svg>`
/// root). Labels are laid out as `<text>` children and read back through
/// `getComputedTextLength`.
pub struct SvgSurface {
    root: SvgElement,
}

impl SvgSurface {
    pub fn new(root: SvgElement) -> Self {
        SvgSurface { root }
    }
}

impl TextSurface for SvgSurface {
    type Node = SvgTextContentElement;
    type Error = JsValue;

    fn append_text(
        &mut self,
        text: &str,
        style: &TextStyle<'_>,
        marker: &str,
    ) -> Result<SvgTextContentElement, JsValue> {
        let document = self
            .root
            .owner_document()
            .ok_or_else(|| JsValue::from_str("measurement surface has no owner document"))?;
        let el = document.create_element_ns(Some(SVG_NS), "text")?;
        el.set_attribute("class", marker)?;
        el.set_text_content(Some(text));
        let text_el: SvgTextContentElement = el
            .dyn_into()
            .map_err(|_| JsValue::from_str("created node is not an SVG text element"))?;
        let css = text_el.style();
        css.set_property("font-size", &format!("{}px", style.font_size_px))?;
        css.set_property("font-family", style.font_family)?;
        self.root.append_child(&text_el)?;
        Ok(text_el)
    }

    fn text_length(&self, node: &SvgTextContentElement) -> Result<f64, JsValue> {
        Ok(node.get_computed_text_length() as f64)
    }

    fn remove_marked(&mut self, marker: &str) {
        let nodes = match self.root.query_selector_all(&format!(".{marker}")) {
            Ok(n) => n,
            Err(e) => {
                log(&format!("Failed to query measurement nodes: {:?}", e));
                return;
            }
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                el.remove();
            }
        }
    }
}
