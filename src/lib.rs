//! Invoice cover sheets on the taxsheet layout engine.
//!
//! An [`InvoiceRecord`] of pre-formatted strings is turned into a
//! [`DocumentLayout`] by [`CoverSheet::build`] and drawn onto any
//! [`Surface`] backend. [`DisplayList`] is an in-memory backend that records
//! the draw calls.

pub mod config;
pub mod error;
pub mod record;
pub mod sheet;

pub use config::{SheetConfig, SheetLabels};
pub use error::SheetError;
pub use record::{Identification, InvoiceRecord, LineItem, Party, Payment, Totals, VatRow};
pub use sheet::{CoverSheet, render_cover_sheet};

pub use taxsheet_layout::{
    Code128C, DocumentLayout, LayoutConfig, LayoutError, PageSummary, RenderSummary,
};
pub use taxsheet_render_core::{DisplayList, DrawCommand, HelveticaMetrics, MonospaceMetrics};
pub use taxsheet_traits::{ObjectHandle, Surface, SurfaceError, TextMeasure};
