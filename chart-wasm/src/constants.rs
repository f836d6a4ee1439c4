/// Namespace for elements created inside the SVG surface.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
