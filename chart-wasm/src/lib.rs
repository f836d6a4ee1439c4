use chart_core::ChartKind;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::SvgElement;

mod constants;
mod state;
mod surface;
mod utils;

use crate::state::SURFACE;
use crate::surface::SvgSurface;
use crate::utils::{colors_to_array, labels_from_array, log};

fn parse_kind(chart_kind: &str) -> Result<ChartKind, JsValue> {
    chart_kind
        .parse()
        .map_err(|e: chart_core::ChartError| JsValue::from_str(&e.to_string()))
}

/// Colors for `count` series of a `"bar"`, `"line"`, `"point"` or
/// `"breakDown"` chart. Fallback palettes are longer than `count`; slice on
/// the JS side or call `getPaletteExact`.
#[wasm_bindgen(js_name = getPalette)]
pub fn get_palette(count: u32, chart_kind: &str) -> Result<Array, JsValue> {
    let kind = parse_kind(chart_kind)?;
    Ok(colors_to_array(&chart_core::palette(count as usize, kind)))
}

#[wasm_bindgen(js_name = getPaletteExact)]
pub fn get_palette_exact(count: u32, chart_kind: &str) -> Result<Array, JsValue> {
    let kind = parse_kind(chart_kind)?;
    Ok(colors_to_array(&chart_core::palette_exact(count as usize, kind)))
}

/// Register the SVG element labels are measured against.
#[wasm_bindgen(js_name = attachSurface)]
pub fn attach_surface(svg: SvgElement) {
    SURFACE.with(|s| {
        let mut slot = s.borrow_mut();
        if slot.is_some() {
            log("Replacing previously attached measurement surface");
        }
        *slot = Some(SvgSurface::new(svg));
    });
}

#[wasm_bindgen(js_name = detachSurface)]
pub fn detach_surface() {
    SURFACE.with(|s| s.borrow_mut().take());
}

/// Widest rendered width of `labels` at 11px Fira Sans, measured on the
/// attached surface. Returns 0 for an empty array.
#[wasm_bindgen(js_name = measureMaxTextWidth)]
pub fn measure_max_text_width(labels: &Array) -> Result<f64, JsValue> {
    let labels = labels_from_array(labels)?;
    SURFACE.with(|s| match s.borrow_mut().as_mut() {
        Some(surface) => chart_core::measure_max_text_width(surface, &labels),
        None => {
            log("measureMaxTextWidth called before attachSurface");
            Err(JsValue::from_str("no measurement surface attached"))
        }
    })
}

/// Same as `measureMaxTextWidth` but against an explicit SVG element.
#[wasm_bindgen(js_name = measureMaxTextWidthIn)]
pub fn measure_max_text_width_in(svg: &SvgElement, labels: &Array) -> Result<f64, JsValue> {
    let labels = labels_from_array(labels)?;
    let mut surface = SvgSurface::new(svg.clone());
    chart_core::measure_max_text_width(&mut surface, &labels)
}
