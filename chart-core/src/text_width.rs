/// Font size used for axis and legend labels (px).
pub const DEFAULT_FONT_SIZE_PX: f64 = 11.0;
/// Font stack used for axis and legend labels.
pub const DEFAULT_FONT_FAMILY: &str = "Fira Sans, sans-serif";
/// Class attached to every temporary node inserted while measuring.
pub const MEASURE_MARKER_CLASS: &str = "chart-measure-scratch";

/// Style applied to the temporary text nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle<'a> {
    pub font_size_px: f64,
    pub font_family: &'a str,
}

impl Default for TextStyle<'_> {
    fn default() -> Self {
        TextStyle {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            font_family: DEFAULT_FONT_FAMILY,
        }
    }
}

/// A rendering surface that can lay out text and report its length.
///
/// The browser implementation is backed by the widget's SVG root; tests use
/// an in-memory surface.
pub trait TextSurface {
    type Node;
    type Error;

    /// Insert a temporary text node tagged with `marker`.
    fn append_text(
        &mut self,
        text: &str,
        style: &TextStyle<'_>,
        marker: &str,
    ) -> Result<Self::Node, Self::Error>;

    /// Rendered length of a node inserted by [`TextSurface::append_text`].
    fn text_length(&self, node: &Self::Node) -> Result<f64, Self::Error>;

    /// Remove every node tagged with `marker`.
    fn remove_marked(&mut self, marker: &str);
}

/// Exclusive hold on a surface for one measurement batch. Temporary nodes
/// are removed when the scope drops, whichever way the batch ends.
pub struct MeasureScope<'s, S: TextSurface> {
    surface: &'s mut S,
    marker: &'s str,
}

impl<'s, S: TextSurface> MeasureScope<'s, S> {
    pub fn new(surface: &'s mut S, marker: &'s str) -> Self {
        MeasureScope { surface, marker }
    }

    /// Insert `text` and return its rendered length.
    pub fn measure(&mut self, text: &str, style: &TextStyle<'_>) -> Result<f64, S::Error> {
        let node = self.surface.append_text(text, style, self.marker)?;
        self.surface.text_length(&node)
    }
}

impl<S: TextSurface> Drop for MeasureScope<'_, S> {
    fn drop(&mut self) {
        self.surface.remove_marked(self.marker);
    }
}

/// Rendered width of each label, in input order.
pub fn measure_text_widths<S, L>(
    surface: &mut S,
    labels: &[L],
    style: &TextStyle<'_>,
) -> Result<Vec<f64>, S::Error>
where
    S: TextSurface,
    L: AsRef<str>,
{
    let mut scope = MeasureScope::new(surface, MEASURE_MARKER_CLASS);
    let widths = labels
        .iter()
        .map(|label| scope.measure(label.as_ref(), style))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(widths)
}

/// Widest label at the default label style. An empty batch measures 0.
pub fn measure_max_text_width<S, L>(surface: &mut S, labels: &[L]) -> Result<f64, S::Error>
where
    S: TextSurface,
    L: AsRef<str>,
{
    measure_max_text_width_with(surface, labels, &TextStyle::default())
}

pub fn measure_max_text_width_with<S, L>(
    surface: &mut S,
    labels: &[L],
    style: &TextStyle<'_>,
) -> Result<f64, S::Error>
where
    S: TextSurface,
    L: AsRef<str>,
{
    let widths = measure_text_widths(surface, labels, style)?;
    Ok(widths.into_iter().fold(0.0, f64::max))
}
