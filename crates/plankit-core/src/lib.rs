//! # Plankit Core
//!
//! Core types and utilities for Plankit, a structural plan layout engine
//! for construction cost estimation. Provides the shared error types,
//! measurement units, layout constants, and the session configuration
//! object consumed by the designer crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod units;

pub use config::SessionConfig;
pub use error::{DocumentError, EditorError, Error, PartitionError, Result};
pub use units::{dimension_label, format_area, format_length, parse_length, LengthUnit};
