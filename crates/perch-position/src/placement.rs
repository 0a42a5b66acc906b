//! Placement engine.
//!
//! Single pass, four terminal branches selected by [`Placement`]:
//!
//! ```text
//!            top
//!        ┌─────────┐
//!   left │ anchor  │ right
//!        └─────────┘
//!          bottom
//! ```
//!
//! Left/right overlays are centred vertically on the anchor and corrected
//! vertically; top/bottom overlays are centred horizontally and corrected
//! horizontally. The arrow offset compensates for whatever correction was
//! applied so it keeps pointing at the anchor's centre.

use std::str::FromStr;

use perch_common::warning::warn_once;
use perch_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::boundary::{correct_horizontal, correct_vertical};
use crate::error::PositionError;
use crate::probe::{ContainerRef, Probe};
use crate::result::{ArrowOffset, Percentage, PositionResult, VerticalPosition};
use crate::viewport::ViewportProvider;

/// Which side of the anchor the overlay appears on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Placement {
    /// Whether the overlay sits beside the anchor (corrected vertically).
    #[must_use]
    pub const fn is_beside(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// How a top/bottom overlay's vertical position is expressed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    /// As `top`, the distance from the container's top edge.
    #[default]
    Top,
    /// As `bottom`, the distance from the container's bottom edge.
    Bottom,
}

/// Everything needed to position one overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    /// Requested side.
    pub placement: Placement,
    /// Vertical anchoring mode; only consulted for top/bottom placements.
    pub vertical_anchor: VerticalAnchor,
    /// The floating element being positioned.
    pub overlay: NodeId,
    /// The element the overlay points at.
    pub target: NodeId,
    /// The element whose box bounds the overlay.
    pub container: ContainerRef,
    /// Minimum gap between the overlay and the container edge, in pixels.
    pub padding: f32,
}

impl PlacementRequest {
    /// A top-anchored request with no padding.
    #[must_use]
    pub const fn new(
        placement: Placement,
        overlay: NodeId,
        target: NodeId,
        container: ContainerRef,
    ) -> Self {
        Self {
            placement,
            vertical_anchor: VerticalAnchor::Top,
            overlay,
            target,
            container,
            padding: 0.0,
        }
    }

    /// Set the vertical anchoring mode.
    #[must_use]
    pub const fn vertical_anchor(mut self, vertical_anchor: VerticalAnchor) -> Self {
        self.vertical_anchor = vertical_anchor;
        self
    }

    /// Set the container padding. Negative values are treated as zero.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }
}

/// The three nodes a positioning pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayNodes {
    /// The floating element.
    pub overlay: NodeId,
    /// The anchor.
    pub target: NodeId,
    /// The bounding container; its kind is inferred from its tag.
    pub container: NodeId,
}

/// Parse a placement and, for top/bottom, a vertical anchor.
///
/// The vertical anchor is ignored (and not validated) for left/right
/// placements, where it has no meaning.
///
/// # Errors
///
/// [`PositionError::InvalidArgument`] if `placement` is not one of
/// `top`/`bottom`/`left`/`right`, or if it is `top`/`bottom` and
/// `vertical_anchor` is not one of `top`/`bottom`.
pub fn parse_placement(
    placement: &str,
    vertical_anchor: &str,
) -> Result<(Placement, VerticalAnchor), PositionError> {
    let placement =
        Placement::from_str(placement).map_err(|_| PositionError::invalid_placement(placement))?;

    if placement.is_beside() {
        return Ok((placement, VerticalAnchor::default()));
    }

    let anchor = VerticalAnchor::from_str(vertical_anchor)
        .map_err(|_| PositionError::invalid_vertical_anchor(vertical_anchor))?;
    Ok((placement, anchor))
}

/// Position an overlay from untyped placement names.
///
/// The container's [`ContainerKind`](crate::probe::ContainerKind) is inferred
/// from its tag.
///
/// # Errors
///
/// See [`parse_placement`]. No result is produced on error.
pub fn compute_position_str(
    tree: &DomTree,
    viewport: &dyn ViewportProvider,
    placement: &str,
    vertical_anchor: &str,
    nodes: OverlayNodes,
    padding: f32,
) -> Result<PositionResult, PositionError> {
    let (placement, vertical_anchor) = parse_placement(placement, vertical_anchor)?;
    let request = PlacementRequest::new(
        placement,
        nodes.overlay,
        nodes.target,
        ContainerRef::infer(tree, nodes.container),
    )
    .vertical_anchor(vertical_anchor)
    .padding(padding);

    Ok(compute_position(tree, viewport, &request))
}

/// Position an overlay against its anchor, inside its container.
///
/// # Panics
///
/// Panics if any node of `request` is not part of `tree`.
#[must_use]
pub fn compute_position(
    tree: &DomTree,
    viewport: &dyn ViewportProvider,
    request: &PlacementRequest,
) -> PositionResult {
    let probe = Probe::new(tree, viewport);

    // STEP 1: Measure the anchor, the overlay, and the container bounds.
    let anchor = probe.measure_anchor_offset(request.target, request.container);
    let overlay = probe.offset(request.overlay);
    let metrics = probe.measure_container(request.container);

    #[cfg(feature = "position-trace")]
    eprintln!(
        "[POSITION] placement={} anchor={anchor:?} overlay={}x{} container={metrics:?} padding={}",
        request.placement, overlay.width, overlay.height, request.padding
    );

    match request.placement {
        // STEP 2a: Beside the anchor. Centre vertically, then correct vertically.
        Placement::Left | Placement::Right => {
            let proposed_top = anchor.top + (anchor.height - overlay.height) / 2.0;
            let position_left = if request.placement == Placement::Left {
                anchor.left - overlay.width
            } else {
                anchor.left + anchor.width
            };

            let delta = correct_vertical(proposed_top, overlay.height, &metrics, request.padding);

            #[cfg(feature = "position-trace")]
            eprintln!("[POSITION] proposed_top={proposed_top} delta={delta}");

            PositionResult {
                position_left,
                vertical: VerticalPosition::Top(proposed_top + delta),
                arrow: ArrowOffset::Top(arrow_percentage(delta, overlay.height)),
            }
        }

        // STEP 2b: Above or below. Centre horizontally, then correct horizontally.
        Placement::Top | Placement::Bottom => {
            let proposed_left = anchor.left + (anchor.width - overlay.width) / 2.0;

            let vertical = match request.vertical_anchor {
                VerticalAnchor::Top => VerticalPosition::Top(if request.placement == Placement::Top {
                    anchor.top - overlay.height
                } else {
                    anchor.top + anchor.height
                }),
                VerticalAnchor::Bottom => {
                    // Measured from the container's own clientHeight rather than
                    // `metrics.height`; the two are checked but kept apart.
                    check_container_heights(&probe, request.container);
                    let client_height = probe.client_height(request.container.node);
                    VerticalPosition::Bottom(if request.placement == Placement::Top {
                        client_height - anchor.top
                    } else {
                        client_height - (overlay.height + anchor.top + anchor.height)
                    })
                }
            };

            let delta = correct_horizontal(proposed_left, overlay.width, &metrics, request.padding);

            #[cfg(feature = "position-trace")]
            eprintln!("[POSITION] proposed_left={proposed_left} delta={delta} vertical={vertical:?}");

            PositionResult {
                position_left: proposed_left + delta,
                vertical,
                arrow: ArrowOffset::Left(arrow_percentage(delta, overlay.width)),
            }
        }
    }
}

/// Arrow offset that cancels a boundary correction of `delta` pixels on an
/// overlay `extent` pixels long: `50 * (1 - 2 * delta / extent)` percent.
fn arrow_percentage(delta: f32, extent: f32) -> Percentage {
    if extent <= 0.0 {
        let _ = warn_once(
            "Position",
            "overlay has no extent along the corrected axis; arrow kept at 50%",
        );
        return Percentage::CENTER;
    }

    let percentage = Percentage(50.0 * (1.0 - 2.0 * delta / extent));
    if !percentage.is_within_overlay() {
        let _ = warn_once(
            "Position",
            "arrow offset lies outside the overlay; the boundary correction exceeds half its size",
        );
    }
    percentage
}

fn check_container_heights(probe: &Probe<'_>, container: ContainerRef) {
    let heights = probe.container_heights(container);
    if !heights.is_consistent() {
        let _ = warn_once(
            "Position",
            &format!(
                "container clientHeight {} differs from measured height {}; bottom-anchored \
                 overlays use clientHeight",
                heights.client_height, heights.metrics_height
            ),
        );
    }
}
