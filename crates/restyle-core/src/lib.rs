//! restyle-core - style profile model and CSS property utilities
//!
//! This crate provides the data structures shared by every producer and
//! consumer of template styles. It is used by the extractor (which measures an
//! HTML template) and by the built-in catalog (which authors profiles by hand);
//! both hand the same [`StyleProfile`] to the application engine.
//!
//! # Architecture
//!
//! ```text
//! Template HTML ──measure──▶ ┌──────────────┐
//!                            │              │
//!                            │ StyleProfile │ ──▶ apply onto content tree
//! Catalog literal ──────────▶│              │
//!                            └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use restyle_core::{StyleProfile, StyleRecord};
//!
//! let mut profile = StyleProfile::new();
//! profile.push(
//!     "h1",
//!     StyleRecord::new()
//!         .with_style("color", "#2c3e50")
//!         .with_style("font-size", "2.5em"),
//! );
//!
//! // Every h1 past the first falls back to the first authored record.
//! let record = profile.record_for("h1", 7).unwrap();
//! assert_eq!(record.style("font-size"), Some("2.5em"));
//! ```

mod declarations;
mod error;
mod inherit;
mod profile;
pub mod properties;
mod shorthand;
pub mod values;

pub use declarations::{declarations_from_block, parse_declarations, serialize_declarations, Declaration};
pub use error::PropertyError;
pub use inherit::InheritedSet;
pub use profile::{StyleProfile, StyleRecord};
pub use shorthand::{decompose_shorthand, expand_longhands, is_shorthand, BOX_SIDES};
