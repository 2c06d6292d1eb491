use taxsheet_layout::LayoutError;
use taxsheet_traits::SurfaceError;
use thiserror::Error;

/// Everything that can go wrong between a record and a rendered cover sheet.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invoice record is invalid: {0}")]
    InvalidRecord(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

// Backend failures outside a layout call still read as layout errors.
impl From<SurfaceError> for SheetError {
    fn from(e: SurfaceError) -> Self {
        SheetError::Layout(LayoutError::Surface(e))
    }
}
