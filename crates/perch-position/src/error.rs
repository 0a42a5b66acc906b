//! Errors raised by the placement engine.

use strum_macros::Display;
use thiserror::Error;

/// The request argument an [`PositionError::InvalidArgument`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Argument {
    /// The requested side of the anchor.
    #[strum(serialize = "placement")]
    Placement,
    /// The vertical anchoring mode of a top/bottom overlay.
    #[strum(serialize = "verticalPosition")]
    VerticalAnchor,
}

/// Why a position could not be computed.
///
/// Both cases are fatal to the call: no partial result is produced and the
/// engine never falls back to another placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// An enumerated argument held a value outside its allowed set.
    #[error("calculate_position(): no such {argument} of \"{value}\" found")]
    InvalidArgument {
        /// Which argument was rejected.
        argument: Argument,
        /// The offending value, verbatim.
        value: String,
    },
}

impl PositionError {
    /// An unknown `placement` value.
    #[must_use]
    pub fn invalid_placement(value: &str) -> Self {
        Self::InvalidArgument {
            argument: Argument::Placement,
            value: value.to_string(),
        }
    }

    /// An unknown vertical anchor value.
    #[must_use]
    pub fn invalid_vertical_anchor(value: &str) -> Self {
        Self::InvalidArgument {
            argument: Argument::VerticalAnchor,
            value: value.to_string(),
        }
    }
}
