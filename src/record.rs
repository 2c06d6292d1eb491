//! The invoice data a cover sheet is printed from.
//!
//! Every value is an already-formatted string; dates, amounts and document
//! numbers are printed exactly as given.

use crate::error::SheetError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identification {
    pub number: String,
    pub issue_date: String,
    pub supply_date: String,
    pub due_date: String,
    pub order_reference: String,
    /// Digits for the Code 128-C barcode. Falls back to the digits of
    /// `number` when absent.
    pub barcode: Option<String>,
}

impl Identification {
    /// The digits the barcode encodes, or `None` when there are none.
    pub fn barcode_digits(&self) -> Option<String> {
        let digits = match &self.barcode {
            Some(explicit) if !explicit.trim().is_empty() => explicit.trim().to_string(),
            _ => self.number.chars().filter(|c| c.is_ascii_digit()).collect(),
        };
        if digits.is_empty() { None } else { Some(digits) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: String,
    pub address: Vec<String>,
    pub tax_id: String,
    pub registration_id: String,
}

impl Party {
    pub fn address_text(&self) -> String {
        self.address.join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub method: String,
    pub bank_account: String,
    pub reference: String,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub code: String,
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub unit_price: String,
    pub vat_rate: String,
    pub total: String,
}

impl LineItem {
    /// Cell texts in column order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.quantity.clone(),
            self.unit.clone(),
            self.unit_price.clone(),
            self.vat_rate.clone(),
            self.total.clone(),
        ]
    }
}

/// One line of the VAT recapitulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VatRow {
    pub rate: String,
    pub base: String,
    pub tax: String,
    pub total: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    pub base: String,
    pub vat: String,
    pub rounding: String,
    pub due: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRecord {
    pub identification: Identification,
    pub supplier: Party,
    pub recipient: Party,
    pub payment: Payment,
    pub items: Vec<LineItem>,
    pub vat_recap: Vec<VatRow>,
    pub totals: Totals,
    pub notes: String,
    pub issued_by: String,
}

impl InvoiceRecord {
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rejects records the cover sheet cannot be printed from.
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.identification.number.trim().is_empty() {
            return Err(SheetError::InvalidRecord(
                "document number is empty".to_string(),
            ));
        }
        let barcode = self.identification.barcode.as_deref().unwrap_or("");
        if !barcode.trim().chars().all(|c| c.is_ascii_digit()) {
            return Err(SheetError::InvalidRecord(format!(
                "barcode '{}' must contain digits only",
                barcode
            )));
        }
        if self.supplier.name.trim().is_empty() {
            return Err(SheetError::InvalidRecord(
                "supplier name is empty".to_string(),
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.description.trim().is_empty() {
                return Err(SheetError::InvalidRecord(format!(
                    "item {} has no description",
                    i + 1
                )));
            }
            if item.total.trim().is_empty() {
                return Err(SheetError::InvalidRecord(format!(
                    "item {} ('{}') has no total",
                    i + 1,
                    item.description
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InvoiceRecord {
        InvoiceRecord {
            identification: Identification {
                number: "FV-2024/0815".to_string(),
                ..Default::default()
            },
            supplier: Party {
                name: "Acme s.r.o.".to_string(),
                ..Default::default()
            },
            items: vec![LineItem {
                description: "Consulting".to_string(),
                total: "1 000.00".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn barcode_falls_back_to_number_digits() {
        let mut id = record().identification;
        assert_eq!(id.barcode_digits().as_deref(), Some("20240815"));
        id.barcode = Some("1258745".to_string());
        assert_eq!(id.barcode_digits().as_deref(), Some("1258745"));
        id.barcode = None;
        id.number = "ABC".to_string();
        assert_eq!(id.barcode_digits(), None);
    }

    #[test]
    fn valid_record_passes() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn missing_required_values_are_rejected() {
        let mut r = record();
        r.identification.number = " ".to_string();
        assert!(matches!(r.validate(), Err(SheetError::InvalidRecord(_))));

        let mut r = record();
        r.items[0].total.clear();
        assert!(matches!(r.validate(), Err(SheetError::InvalidRecord(_))));

        let mut r = record();
        r.identification.barcode = Some("12-34".to_string());
        assert!(matches!(r.validate(), Err(SheetError::InvalidRecord(_))));
    }
}
