//! Overlay positioning for Perch.
//!
//! # Scope
//!
//! Given an overlay (tooltip, popover), the anchor it points at, and the
//! container that bounds it, this crate computes where the overlay goes:
//!
//! - **Dimension Probe** ([`probe`]) - container extent and scroll, anchor
//!   offset in the container's coordinate space, overflow-aware anchor width
//! - **Boundary Corrector** ([`boundary`]) - signed delta that keeps the
//!   overlay inside the container, honouring a padding margin
//! - **Placement Engine** ([`placement`]) - top/bottom/left/right placement,
//!   top- or bottom-anchored vertical positions, and the arrow offset that
//!   keeps pointing at the anchor after correction
//!
//! # Not Implemented
//!
//! - Flipping to another side when the requested one does not fit
//! - Scheduling recomputation on resize or scroll
//! - Writing-mode / RTL handling
//!
//! # Example
//!
//! ```ignore
//! let request = PlacementRequest::new(Placement::Right, overlay, anchor, ContainerRef::infer(&tree, body))
//!     .padding(5.0);
//! let result = compute_position(&tree, &ViewportMetrics::new(1280.0, 720.0), &request);
//! ```

/// Boundary correction along either axis.
pub mod boundary;
/// Error types.
pub mod error;
/// Measured rectangles.
pub mod geometry;
/// The placement engine and its request types.
pub mod placement;
/// Read-only geometry queries against the DOM snapshot.
pub mod probe;
/// The computed position and its flat record form.
pub mod result;
/// Window metrics injected into the probe.
pub mod viewport;

pub use boundary::{correct_horizontal, correct_vertical};
pub use error::{Argument, PositionError};
pub use geometry::Rect;
pub use placement::{
    OverlayNodes, Placement, PlacementRequest, VerticalAnchor, compute_position,
    compute_position_str, parse_placement,
};
pub use probe::{ContainerHeights, ContainerKind, ContainerMetrics, ContainerRef, Probe};
pub use result::{ArrowOffset, Percentage, PositionRecord, PositionResult, VerticalPosition};
pub use viewport::{ViewportMetrics, ViewportProvider};
