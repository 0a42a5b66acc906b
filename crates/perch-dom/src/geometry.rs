//! Resolved layout geometry attached to DOM nodes.
//!
//! [CSSOM View Module](https://www.w3.org/TR/cssom-view-1/)
//!
//! The host's layout engine owns layout; these types are the read-only
//! snapshot of what it computed, expressed the way the CSSOM View
//! extensions to `Element` and `HTMLElement` expose it.

use serde::{Deserialize, Serialize};

/// [§ 6.1 The DOMRect interfaces](https://www.w3.org/TR/geometry-1/#DOMRect)
///
/// "Objects implementing the DOMRectReadOnly interface represent a rectangle."
///
/// Coordinates are relative to the viewport (as returned by
/// `getBoundingClientRect()`), so they change as the document scrolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomRect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl DomRect {
    /// Create a rectangle from its origin and extent.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// "The top attribute must return min(y coordinate, y coordinate + height dimension)"
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y.min(self.y + self.height)
    }

    /// "The left attribute must return min(x coordinate, x coordinate + width dimension)"
    #[must_use]
    pub fn left(&self) -> f32 {
        self.x.min(self.x + self.width)
    }

    /// A rectangle with no area; used by hosts for nodes that are not rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Edge sizes for margin or border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

/// Layout snapshot for a single node.
///
/// Field names follow the CSSOM View attribute names (`offsetWidth`,
/// `scrollTop`, ...) so scene files read like devtools output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutGeometry {
    /// [§ 6.1 `getBoundingClientRect()`](https://www.w3.org/TR/cssom-view-1/#dom-element-getboundingclientrect)
    pub client_rect: DomRect,
    /// [§ 7 `offsetWidth`](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsetwidth)
    ///
    /// "Return the width of the axis-aligned bounding box of the border boxes
    /// of all fragments generated by the element's principal box"
    pub offset_width: f32,
    /// [§ 7 `offsetHeight`](https://www.w3.org/TR/cssom-view-1/#dom-htmlelement-offsetheight)
    pub offset_height: f32,
    /// [§ 6.1 `clientWidth`](https://www.w3.org/TR/cssom-view-1/#dom-element-clientwidth)
    ///
    /// Padding box width, excluding any scrollbar.
    pub client_width: f32,
    /// [§ 6.1 `clientHeight`](https://www.w3.org/TR/cssom-view-1/#dom-element-clientheight)
    pub client_height: f32,
    /// [§ 6.1 `clientTop`](https://www.w3.org/TR/cssom-view-1/#dom-element-clienttop)
    ///
    /// "the computed value of the border-top-width property"
    pub client_top: f32,
    /// [§ 6.1 `clientLeft`](https://www.w3.org/TR/cssom-view-1/#dom-element-clientleft)
    pub client_left: f32,
    /// [§ 6.1 `scrollWidth`](https://www.w3.org/TR/cssom-view-1/#dom-element-scrollwidth)
    ///
    /// Width of the element's content including the part hidden by overflow.
    pub scroll_width: f32,
    /// [§ 6.1 `scrollTop`](https://www.w3.org/TR/cssom-view-1/#dom-element-scrolltop)
    pub scroll_top: f32,
    /// [§ 6.1 `scrollLeft`](https://www.w3.org/TR/cssom-view-1/#dom-element-scrollleft)
    pub scroll_left: f32,
    /// Used margin widths, as `getComputedStyle()` would report them.
    pub margin: EdgeSizes,
}

impl LayoutGeometry {
    /// Geometry for a box whose visible and scrollable extents coincide.
    ///
    /// `offsetWidth`, `clientWidth` and `scrollWidth` all equal the rect
    /// width; borders, margins and scroll offsets are zero.
    #[must_use]
    pub const fn from_rect(rect: DomRect) -> Self {
        Self {
            client_rect: rect,
            offset_width: rect.width,
            offset_height: rect.height,
            client_width: rect.width,
            client_height: rect.height,
            client_top: 0.0,
            client_left: 0.0,
            scroll_width: rect.width,
            scroll_top: 0.0,
            scroll_left: 0.0,
            margin: EdgeSizes {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            },
        }
    }

    /// Whether content overflows the box horizontally (`scrollWidth > offsetWidth`).
    #[must_use]
    pub fn is_horizontally_clipped(&self) -> bool {
        self.scroll_width > self.offset_width
    }
}
