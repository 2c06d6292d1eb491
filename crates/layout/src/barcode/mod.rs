//! Code 128, code set C: pairs of digits per symbol.

pub mod patterns;

use crate::LayoutError;
use patterns::{TERMINATION_BAR, pattern};

pub const START_C: u8 = 105;
pub const STOP: u8 = 106;
const CHECKSUM_MODULUS: u32 = 103;

/// An encoded Code 128-C symbol stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128C {
    digits: String,
    symbols: Vec<u8>,
    checksum: u8,
}

impl Code128C {
    /// Encodes a string of ASCII digits.
    ///
    /// Odd-length input is left-padded with a single `'0'`. Any non-digit is
    /// rejected before encoding starts.
    pub fn encode(input: &str) -> Result<Self, LayoutError> {
        if input.is_empty() {
            return Err(LayoutError::UnsupportedContent(
                "barcode input is empty".to_string(),
            ));
        }
        if let Some(bad) = input.chars().find(|c| !c.is_ascii_digit()) {
            return Err(LayoutError::UnsupportedContent(format!(
                "barcode input '{}' contains non-digit '{}'",
                input, bad
            )));
        }

        let digits = if input.len() % 2 == 1 {
            format!("0{}", input)
        } else {
            input.to_string()
        };

        let data: Vec<u8> = digits
            .as_bytes()
            .chunks(2)
            .map(|pair| (pair[0] - b'0') * 10 + (pair[1] - b'0'))
            .collect();
        let checksum = checksum(&data);

        let mut symbols = Vec::with_capacity(data.len() + 3);
        symbols.push(START_C);
        symbols.extend_from_slice(&data);
        symbols.push(checksum);
        symbols.push(STOP);

        Ok(Self {
            digits,
            symbols,
            checksum,
        })
    }

    /// The digits actually encoded, after padding.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Start, data, checksum and stop symbol values in order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Data symbol values, without start, checksum and stop.
    pub fn data(&self) -> &[u8] {
        &self.symbols[1..self.symbols.len() - 2]
    }

    /// Alternating bar/space widths of the whole symbol, starting with a bar.
    pub fn modules(&self) -> Vec<u8> {
        let mut modules: Vec<u8> = self
            .symbols
            .iter()
            .filter_map(|value| pattern(*value))
            .flat_map(|widths| widths.iter().copied())
            .collect();
        modules.push(TERMINATION_BAR);
        modules
    }

    pub fn total_modules(&self) -> u32 {
        self.modules().iter().map(|w| *w as u32).sum()
    }
}

/// Modulo-103 weighted checksum of data symbol values under Start-C.
pub fn checksum(data: &[u8]) -> u8 {
    let mut acc = START_C as u32;
    for (i, value) in data.iter().enumerate() {
        acc = (acc + (i as u32 + 1) * *value as u32) % CHECKSUM_MODULUS;
    }
    acc as u8
}
