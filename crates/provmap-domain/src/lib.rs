//! provmap Domain Layer
//!
//! This crate contains the value types and trait interfaces shared by every
//! other provmap crate. It has ZERO external dependencies and holds no I/O:
//! geocoding, geodesic math and HTML rendering are modelled as ports in
//! [`traits`] and implemented elsewhere.
//!
//! ## Key Concepts
//!
//! - **Provenance entry**: one recorded custody/location event, as read from input
//! - **Resolved point**: an entry whose location has been geocoded
//! - **Chronological index**: position of a point in the resolved sequence
//! - **Drawing instructions**: markers, paths and the legend handed to a renderer
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and business rules only
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coordinate;
pub mod drawing;
pub mod provenance;
pub mod traits;

// Re-exports for convenience
pub use coordinate::{Coordinate, CoordinateKey};
pub use drawing::{DrawingInstructions, Legend, LegendItem, LegendSwatch, MarkerInstruction, MarkerStyle, PathInstruction, PopupEntry};
pub use provenance::{ProvenanceEntry, ResolvedPoint};
