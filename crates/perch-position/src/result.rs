//! The computed overlay position.
//!
//! Each axis has exactly one meaningful field, so the record is a pair of
//! tagged unions instead of a bag of optional keys. [`PositionRecord`] is the
//! flat, serializable view hosts use when they want the familiar
//! `positionTop`/`arrowOffsetLeft` style keys.

use std::fmt;

use serde::Serialize;

/// A percentage of the overlay's extent along one axis.
///
/// Not clamped: a boundary correction larger than half the overlay pushes
/// the arrow outside `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage(pub f32);

impl Percentage {
    /// The arrow sits dead centre.
    pub const CENTER: Self = Self(50.0);

    /// The raw percentage value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Whether the value lies within the overlay (`0..=100`).
    #[must_use]
    pub fn is_within_overlay(self) -> bool {
        (0.0..=100.0).contains(&self.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The overlay's vertical position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalPosition {
    /// Distance of the overlay's top edge from the container's top.
    Top(f32),
    /// Distance of the overlay's bottom edge from the container's bottom.
    Bottom(f32),
}

/// Where the arrow sits along the overlay edge facing the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowOffset {
    /// Horizontal offset, for top/bottom placements.
    Left(Percentage),
    /// Vertical offset, for left/right placements.
    Top(Percentage),
}

impl ArrowOffset {
    /// The percentage, whichever axis it applies to.
    #[must_use]
    pub const fn percentage(self) -> Percentage {
        match self {
            Self::Left(p) | Self::Top(p) => p,
        }
    }
}

/// Final overlay position and matching arrow offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionResult {
    /// Distance of the overlay's left edge from the container's left.
    pub position_left: f32,
    /// Vertical position, from the top or the bottom.
    pub vertical: VerticalPosition,
    /// Arrow offset along the corrected axis.
    pub arrow: ArrowOffset,
}

impl PositionResult {
    /// `positionTop`, if the overlay is top-anchored.
    #[must_use]
    pub const fn position_top(&self) -> Option<f32> {
        match self.vertical {
            VerticalPosition::Top(top) => Some(top),
            VerticalPosition::Bottom(_) => None,
        }
    }

    /// `positionBottom`, if the overlay is bottom-anchored.
    #[must_use]
    pub const fn position_bottom(&self) -> Option<f32> {
        match self.vertical {
            VerticalPosition::Bottom(bottom) => Some(bottom),
            VerticalPosition::Top(_) => None,
        }
    }

    /// `arrowOffsetLeft`, for top/bottom placements.
    #[must_use]
    pub const fn arrow_offset_left(&self) -> Option<Percentage> {
        match self.arrow {
            ArrowOffset::Left(p) => Some(p),
            ArrowOffset::Top(_) => None,
        }
    }

    /// `arrowOffsetTop`, for left/right placements.
    #[must_use]
    pub const fn arrow_offset_top(&self) -> Option<Percentage> {
        match self.arrow {
            ArrowOffset::Top(p) => Some(p),
            ArrowOffset::Left(_) => None,
        }
    }

    /// Flatten into the optional-key record hosts apply as styles.
    #[must_use]
    pub fn to_record(&self) -> PositionRecord {
        PositionRecord {
            position_left: Some(self.position_left),
            position_top: self.position_top(),
            position_bottom: self.position_bottom(),
            arrow_offset_left: self.arrow_offset_left().map(|p| p.to_string()),
            arrow_offset_top: self.arrow_offset_top().map(|p| p.to_string()),
        }
    }
}

/// Flat view of a [`PositionResult`]; unset keys are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    /// Left edge, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_left: Option<f32>,
    /// Top edge, in pixels (top-anchored only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_top: Option<f32>,
    /// Bottom edge distance, in pixels (bottom-anchored only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_bottom: Option<f32>,
    /// Horizontal arrow offset such as `"50%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_offset_left: Option<String>,
    /// Vertical arrow offset such as `"50%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow_offset_top: Option<String>,
}
