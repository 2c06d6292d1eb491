//! Core rendering backends for the layout engine.
//!
//! This crate provides an in-memory implementation of the `Surface` contract:
//! - `DisplayList` records pages and reusable objects as command lists
//! - `MonospaceMetrics` and `HelveticaMetrics` answer text measurement queries

mod display_list;
pub mod metrics;
mod types;

pub use display_list::DisplayList;
pub use metrics::{HelveticaMetrics, MonospaceMetrics};
pub use types::{DrawCommand, ObjectContent, PageContent};
