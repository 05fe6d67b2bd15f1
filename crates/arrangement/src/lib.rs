//! Monspan Arrangement
//!
//! The monitor arrangement and selection engine behind multi-monitor
//! fullscreen:
//! - **Catalog:** displays sorted left-to-right, top-to-bottom
//! - **Selection:** the monitors a user picked, by catalog position
//! - **Requiredness:** unselected monitors that must join the selection
//!   for the capture region to stay rectangular
//! - **Bounds:** the frame-buffer rectangle and the monitors limiting it
//! - **Indices:** the persisted `"1,3,4"` / `"all"` selection string
//!
//! [`Arrangement`] ties these together behind the interface a
//! presentation layer binds against. Everything here is synchronous and
//! allocation-light; derived state is recomputed on every read.

pub mod arrangement;
pub mod bounds;
pub mod catalog;
pub mod error;
pub mod indices;
pub mod required;
pub mod selection;

pub use arrangement::*;
pub use bounds::{BoundingBox, Edge};
pub use catalog::{Catalog, Monitor};
pub use error::*;
pub use indices::{IndexParseError, ParsedSelection};
pub use selection::{RestoreReport, SelectionState};
