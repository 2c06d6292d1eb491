use crate::LayoutError;
use crate::util::EPSILON;
use itertools::Itertools;
use taxsheet_types::TextAlign;

/// How much of the table width a column takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// A fixed share of the total width, in `0.0..=1.0`.
    Fraction(f32),
    /// Takes whatever the fractional columns leave. At most one per table.
    Flexible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    pub width: ColumnWidth,
    pub align: TextAlign,
}

impl Column {
    pub fn fixed(header: impl Into<String>, fraction: f32) -> Self {
        Self {
            header: header.into(),
            width: ColumnWidth::Fraction(fraction),
            align: TextAlign::Left,
        }
    }

    pub fn flexible(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            width: ColumnWidth::Flexible,
            align: TextAlign::Left,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A validated set of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    columns: Vec<Column>,
}

impl TableSpec {
    pub fn new(columns: Vec<Column>) -> Result<Self, LayoutError> {
        if columns.is_empty() {
            return Err(LayoutError::InvalidConfiguration(
                "table has no columns".to_string(),
            ));
        }

        let flexible = columns
            .iter()
            .positions(|c| c.width == ColumnWidth::Flexible)
            .collect_vec();
        if flexible.len() > 1 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "table has {} flexible columns (at {:?}); at most one is allowed",
                flexible.len(),
                flexible
            )));
        }

        let mut total = 0.0;
        for column in &columns {
            if let ColumnWidth::Fraction(fraction) = column.width {
                if !fraction.is_finite() || fraction <= 0.0 {
                    return Err(LayoutError::InvalidConfiguration(format!(
                        "column '{}' has invalid width fraction {}",
                        column.header, fraction
                    )));
                }
                total += fraction;
            }
        }
        if total > 1.0 + EPSILON / 10.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "column fractions sum to {:.3}, more than the table width",
                total
            )));
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column widths for a table `total` points wide.
    pub fn resolve_widths(&self, total: f32) -> Vec<f32> {
        let fixed: f32 = self
            .columns
            .iter()
            .filter_map(|c| match c.width {
                ColumnWidth::Fraction(f) => Some(f * total),
                ColumnWidth::Flexible => None,
            })
            .sum();
        let rest = (total - fixed).max(0.0);
        self.columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::Fraction(f) => f * total,
                ColumnWidth::Flexible => rest,
            })
            .collect()
    }
}
