use taxsheet_traits::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Pagination made no progress: row {row} does not fit in an empty area of height {available:.2}.")]
    PaginationNoProgress { row: usize, available: f32 },
    #[error("Unsupported content: {0}")]
    UnsupportedContent(String),
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

pub mod algorithms;
pub mod barcode;
pub mod block;
pub mod cache;
pub mod config;
pub mod document;
pub mod element;
pub mod nodes;
pub mod page;
pub mod table;
pub mod text;
pub mod util;

pub use self::block::{Block, BlockId};
pub use self::cache::{BlockCache, RenderedBlock};
pub use self::config::LayoutConfig;
pub use self::document::{DocumentLayout, PageSummary, PageTemplate, RenderSummary};
pub use self::element::Element;
pub use self::nodes::{BarcodeElement, Field, FieldContent, FlexibleLine, VerticalStack};
pub use self::page::Page;
pub use self::table::{Column, ColumnWidth, Table, TableBlock, TableSpec};

pub use self::algorithms::distribute::Span;
pub use self::barcode::Code128C;

// Re-export the types nodes are built from so callers need a single import.
pub use taxsheet_traits::{ObjectHandle, Surface, TextMeasure};
pub use taxsheet_types::{Font, Insets, Point, Rect, Size, TextAlign, VerticalAlign};

#[cfg(test)]
mod test_utils;
