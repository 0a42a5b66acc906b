//! Access to the window the document is displayed in.
//!
//! [CSSOM View § 4 Extensions to the Window Interface](https://www.w3.org/TR/cssom-view-1/#extensions-to-the-window-interface)
//!
//! The positioner never reaches for a global window. Hosts pass a
//! [`ViewportProvider`] in, which keeps every computation a function of its
//! explicit inputs.

use serde::{Deserialize, Serialize};

/// Read-only window metrics needed by the dimension probe.
pub trait ViewportProvider {
    /// "The `innerWidth` attribute must return the viewport width including the
    /// size of a rendered scroll bar (if any)"
    fn inner_width(&self) -> f32;

    /// "The `innerHeight` attribute must return the viewport height including the
    /// size of a rendered scroll bar (if any)"
    fn inner_height(&self) -> f32;

    /// `window.pageXOffset`: horizontal scroll position of the viewport.
    fn page_x_offset(&self) -> f32 {
        0.0
    }

    /// `window.pageYOffset`: vertical scroll position of the viewport.
    fn page_y_offset(&self) -> f32 {
        0.0
    }
}

/// A fixed snapshot of window metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportMetrics {
    /// `window.innerWidth`
    pub inner_width: f32,
    /// `window.innerHeight`
    pub inner_height: f32,
    /// `window.pageXOffset`
    pub page_x_offset: f32,
    /// `window.pageYOffset`
    pub page_y_offset: f32,
}

impl ViewportMetrics {
    /// An unscrolled viewport of the given size.
    #[must_use]
    pub const fn new(inner_width: f32, inner_height: f32) -> Self {
        Self {
            inner_width,
            inner_height,
            page_x_offset: 0.0,
            page_y_offset: 0.0,
        }
    }

    /// The same viewport scrolled to `(x, y)`.
    #[must_use]
    pub const fn scrolled_to(mut self, x: f32, y: f32) -> Self {
        self.page_x_offset = x;
        self.page_y_offset = y;
        self
    }
}

impl ViewportProvider for ViewportMetrics {
    fn inner_width(&self) -> f32 {
        self.inner_width
    }

    fn inner_height(&self) -> f32 {
        self.inner_height
    }

    fn page_x_offset(&self) -> f32 {
        self.page_x_offset
    }

    fn page_y_offset(&self) -> f32 {
        self.page_y_offset
    }
}
