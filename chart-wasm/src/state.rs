use std::cell::RefCell;

use crate::surface::SvgSurface;

/// Thread local storage for the surface labels are measured against. The
/// widget attaches its SVG root once it has been created.
thread_local! {
    pub static SURFACE: RefCell<Option<SvgSurface>> = const { RefCell::new(None) };
}
