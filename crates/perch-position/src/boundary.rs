//! Boundary correction: pulling a proposed overlay box back inside its container.
//!
//! Both correctors return a signed pixel delta to add to the proposed edge.
//! Positive moves the overlay down (or right), negative moves it up (or
//! left), zero means it already fits. When the overlay is larger than the
//! container, the leading edge (top or left) wins.

use crate::probe::ContainerMetrics;

/// Delta that brings `[leading, trailing]` inside `[0, limit]`, preferring
/// the leading edge.
fn pull_inside(leading: f32, trailing: f32, limit: f32) -> f32 {
    if leading < 0.0 {
        -leading
    } else if trailing > limit {
        limit - trailing
    } else {
        0.0
    }
}

/// Vertical correction for left/right placements.
///
/// Edges are measured against the scrolled container:
///
/// ```text
/// top_edge    = proposed_top - padding - scroll
/// bottom_edge = proposed_top + padding - scroll + overlay_height
/// ```
#[must_use]
pub fn correct_vertical(
    proposed_top: f32,
    overlay_height: f32,
    metrics: &ContainerMetrics,
    padding: f32,
) -> f32 {
    let top_edge = proposed_top - padding - metrics.scroll;
    let bottom_edge = proposed_top + padding - metrics.scroll + overlay_height;
    pull_inside(top_edge, bottom_edge, metrics.height)
}

/// Horizontal correction for top/bottom placements.
///
/// Horizontal container scroll is not modelled:
///
/// ```text
/// left_edge  = proposed_left - padding
/// right_edge = proposed_left + padding + overlay_width
/// ```
#[must_use]
pub fn correct_horizontal(
    proposed_left: f32,
    overlay_width: f32,
    metrics: &ContainerMetrics,
    padding: f32,
) -> f32 {
    let left_edge = proposed_left - padding;
    let right_edge = proposed_left + padding + overlay_width;
    pull_inside(left_edge, right_edge, metrics.width)
}
