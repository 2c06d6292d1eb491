#![allow(dead_code)]

pub mod fixtures;
pub mod sheet_assertions;

use serde_json::Value;
use taxsheet::{
    DisplayList, HelveticaMetrics, InvoiceRecord, RenderSummary, SheetConfig, SheetError,
    render_cover_sheet,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn record_from(value: &Value) -> Result<InvoiceRecord, SheetError> {
    InvoiceRecord::from_json(&value.to_string())
}

/// Renders `record` with the default config onto a fresh display list.
pub fn render(
    record: &InvoiceRecord,
) -> Result<(DisplayList<HelveticaMetrics>, RenderSummary), SheetError> {
    render_with(record, &SheetConfig::default())
}

pub fn render_with(
    record: &InvoiceRecord,
    config: &SheetConfig,
) -> Result<(DisplayList<HelveticaMetrics>, RenderSummary), SheetError> {
    let mut surface = DisplayList::new(HelveticaMetrics);
    let summary = render_cover_sheet(record, config, &mut surface)?;
    Ok((surface, summary))
}
