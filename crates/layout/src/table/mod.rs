//! Column specs, the row-by-row table printer and its page frame.

mod block;
mod engine;
mod spec;

pub use block::TableBlock;
pub use engine::Table;
pub use spec::{Column, ColumnWidth, TableSpec};

#[cfg(test)]
mod table_test;
