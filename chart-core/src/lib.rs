//! Presentation helpers shared by the chart widgets: series palettes and
//! label width measurement against a host text surface.

mod palette;
mod text_width;

pub use palette::{BASE_PALETTE, ChartKind, get_palette, palette, palette_exact};
pub use text_width::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PX, MEASURE_MARKER_CLASS, MeasureScope, TextStyle,
    TextSurface, measure_max_text_width, measure_max_text_width_with, measure_text_widths,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("unsupported chart kind: {0:?}")]
    UnsupportedChartKind(String),
}
