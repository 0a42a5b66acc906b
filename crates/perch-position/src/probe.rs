//! Dimension probe: geometric facts read from the DOM snapshot.
//!
//! [CSSOM View Module](https://www.w3.org/TR/cssom-view-1/)
//!
//! Everything here is a read-only query against a [`DomTree`] and a
//! [`ViewportProvider`]. Nothing is cached between calls.

use perch_dom::{DomTree, NodeId};

use crate::geometry::Rect;
use crate::viewport::ViewportProvider;

/// How a container bounds its overlays.
///
/// Decided once at the boundary (see [`ContainerRef::infer`]) so the probe
/// never has to re-inspect tags while measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The document body. Bounds are the viewport, positions are page coordinates.
    Body,
    /// Any other element. Bounds are its own box, positions are local to it.
    Element,
}

impl ContainerKind {
    /// `Body` for a `<body>` element, `Element` for everything else.
    #[must_use]
    pub fn infer(tree: &DomTree, node: NodeId) -> Self {
        if tree.is_element(node, "body") {
            Self::Body
        } else {
            Self::Element
        }
    }
}

/// A container node together with its resolved [`ContainerKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRef {
    /// The container element.
    pub node: NodeId,
    /// How it bounds overlays.
    pub kind: ContainerKind,
}

impl ContainerRef {
    /// A container whose kind the caller already knows.
    #[must_use]
    pub const fn new(node: NodeId, kind: ContainerKind) -> Self {
        Self { node, kind }
    }

    /// A container whose kind is inferred from its tag.
    #[must_use]
    pub fn infer(tree: &DomTree, node: NodeId) -> Self {
        Self::new(node, ContainerKind::infer(tree, node))
    }
}

/// Visible extent of a container and its vertical scroll offset.
///
/// Invariant: `scroll >= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerMetrics {
    /// Visible width.
    pub width: f32,
    /// Visible height.
    pub height: f32,
    /// Vertical scroll offset.
    pub scroll: f32,
}

/// The two independently measured container heights.
///
/// The bottom-anchored branch of the engine measures from the container's
/// `clientHeight`, while boundary correction uses [`ContainerMetrics::height`].
/// They usually agree; [`ContainerHeights::is_consistent`] reports when they
/// don't.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerHeights {
    /// `container.clientHeight`
    pub client_height: f32,
    /// [`ContainerMetrics::height`] for the same container.
    pub metrics_height: f32,
}

impl ContainerHeights {
    /// Whether both measurements name the same height (to within half a pixel).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (self.client_height - self.metrics_height).abs() < 0.5
    }
}

/// Read-only geometry queries for one positioning pass.
pub struct Probe<'a> {
    tree: &'a DomTree,
    viewport: &'a dyn ViewportProvider,
}

impl<'a> Probe<'a> {
    /// Probe `tree` as displayed in `viewport`.
    #[must_use]
    pub fn new(tree: &'a DomTree, viewport: &'a dyn ViewportProvider) -> Self {
        Self { tree, viewport }
    }

    /// Visible extent and vertical scroll of a container.
    ///
    /// For the body, the extent is the viewport and the scroll is the larger
    /// of the document element's and the body's `scrollTop`: engines disagree
    /// about which of the two reports page scroll.
    #[must_use]
    pub fn measure_container(&self, container: ContainerRef) -> ContainerMetrics {
        match container.kind {
            ContainerKind::Body => {
                let body_scroll = self.tree.geometry(container.node).scroll_top;
                let root_scroll = self
                    .tree
                    .document_element()
                    .map_or(0.0, |html| self.tree.geometry(html).scroll_top);
                ContainerMetrics {
                    width: self.viewport.inner_width(),
                    height: self.viewport.inner_height(),
                    scroll: root_scroll.max(body_scroll).max(0.0),
                }
            }
            ContainerKind::Element => {
                let offset = self.offset(container.node);
                ContainerMetrics {
                    width: offset.width,
                    height: offset.height,
                    scroll: self.tree.geometry(container.node).scroll_top.max(0.0),
                }
            }
        }
    }

    /// Both container height measurements, for consistency checking.
    #[must_use]
    pub fn container_heights(&self, container: ContainerRef) -> ContainerHeights {
        ContainerHeights {
            client_height: self.client_height(container.node),
            metrics_height: self.measure_container(container).height,
        }
    }

    /// `container.clientHeight`, read directly from the node.
    #[must_use]
    pub fn client_height(&self, node: NodeId) -> f32 {
        self.tree.geometry(node).client_height
    }

    /// Border box of `node` in document coordinates.
    ///
    /// [§ 6.1 `getBoundingClientRect()`](https://www.w3.org/TR/cssom-view-1/#dom-element-getboundingclientrect)
    /// shifted by the page scroll and by the document element's border
    /// (`clientTop`/`clientLeft`). Nodes with an empty client rect fall back
    /// to their `offsetWidth`/`offsetHeight` for the extent.
    #[must_use]
    pub fn offset(&self, node: NodeId) -> Rect {
        let geometry = self.tree.geometry(node);
        let rect = geometry.client_rect;
        let (root_top, root_left) = self.tree.document_element().map_or((0.0, 0.0), |html| {
            let root = self.tree.geometry(html);
            (root.client_top, root.client_left)
        });

        let (width, height) = if rect.is_empty() {
            (geometry.offset_width, geometry.offset_height)
        } else {
            (rect.width, rect.height)
        };

        Rect {
            top: rect.top() + self.viewport.page_y_offset() - root_top,
            left: rect.left() + self.viewport.page_x_offset() - root_left,
            width,
            height,
        }
    }

    /// Border box of `node` relative to the padding box of `container`.
    ///
    /// The container's own offset is shifted inward by its border and by
    /// how far its content is scrolled, so the result stays stable as the
    /// container scrolls. The node's top/left margins are removed, matching
    /// what `position: absolute` offsets inside the container would need.
    /// When the container is the `<html>` element, document coordinates are
    /// already container coordinates.
    #[must_use]
    pub fn position(&self, node: NodeId, container: NodeId) -> Rect {
        let offset = self.offset(node);

        let parent = if self.tree.is_element(container, "html") {
            Rect::default()
        } else {
            let geometry = self.tree.geometry(container);
            let mut parent = self.offset(container);
            parent.top += geometry.client_top - geometry.scroll_top;
            parent.left += geometry.client_left - geometry.scroll_left;
            parent
        };

        let margin = self.tree.geometry(node).margin;
        Rect {
            top: offset.top - parent.top - margin.top,
            left: offset.left - parent.left - margin.left,
            ..offset
        }
    }

    /// Where the anchor sits, in the coordinate space overlays in
    /// `container` are positioned in.
    ///
    /// If the anchor's content is horizontally clipped, its visible
    /// `offsetWidth` replaces the measured width. Otherwise, if its parent
    /// is clipped, the parent's `offsetWidth` is used. Truncated labels are
    /// centred on what the user can see, not on the overflowing text.
    #[must_use]
    pub fn measure_anchor_offset(&self, target: NodeId, container: ContainerRef) -> Rect {
        let mut rect = match container.kind {
            ContainerKind::Body => self.offset(target),
            ContainerKind::Element => self.position(target, container.node),
        };

        let geometry = self.tree.geometry(target);
        if geometry.is_horizontally_clipped() {
            rect.width = geometry.offset_width;
        } else if let Some(parent) = self.tree.parent(target) {
            let parent_geometry = self.tree.geometry(parent);
            if parent_geometry.is_horizontally_clipped() {
                rect.width = parent_geometry.offset_width;
            }
        }

        rect
    }
}
