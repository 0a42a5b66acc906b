//! Common utilities for Perch.
//!
//! This crate provides shared infrastructure used by all Perch components:
//! - **Warning System** - deduplicated, colored terminal output for geometry
//!   that the positioner accepts but that is probably not what the host meant

pub mod warning;
