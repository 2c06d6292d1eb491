//! Leaf and container elements of the layout tree.

pub mod barcode;
pub mod field;
pub mod line;
pub mod stack;

pub use barcode::BarcodeElement;
pub use field::{Field, FieldContent, FieldStyle};
pub use line::FlexibleLine;
pub use stack::VerticalStack;

#[cfg(test)]
mod line_test;
