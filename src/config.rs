use crate::error::SheetError;
use serde::{Deserialize, Serialize};
use taxsheet_layout::LayoutConfig;

/// Every caption printed on the cover sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLabels {
    pub title: String,

    pub identification: String,
    pub number: String,
    pub issue_date: String,
    pub supply_date: String,
    pub due_date: String,
    pub order_reference: String,

    pub supplier: String,
    pub recipient: String,
    pub address: String,
    pub tax_id: String,
    pub registration_id: String,

    pub payment: String,
    pub payment_method: String,
    pub bank_account: String,
    pub payment_reference: String,
    pub currency: String,

    pub items: String,
    pub continued: String,
    pub item_code: String,
    pub item_description: String,
    pub item_quantity: String,
    pub item_unit: String,
    pub item_unit_price: String,
    pub item_vat_rate: String,
    pub item_total: String,

    pub vat_recap: String,
    pub vat_rate: String,
    pub vat_base: String,
    pub vat_tax: String,
    pub vat_total: String,

    pub totals: String,
    pub total_base: String,
    pub total_vat: String,
    pub rounding: String,
    pub amount_due: String,

    pub notes: String,
    pub issued_by: String,
}

impl Default for SheetLabels {
    fn default() -> Self {
        Self {
            title: "Tax document - invoice".to_string(),

            identification: "Invoice".to_string(),
            number: "Invoice no.".to_string(),
            issue_date: "Date of issue".to_string(),
            supply_date: "Taxable supply date".to_string(),
            due_date: "Due date".to_string(),
            order_reference: "Order".to_string(),

            supplier: "Supplier".to_string(),
            recipient: "Recipient".to_string(),
            address: "Address".to_string(),
            tax_id: "Tax ID".to_string(),
            registration_id: "Reg. ID".to_string(),

            payment: "Payment".to_string(),
            payment_method: "Payment method".to_string(),
            bank_account: "Bank account".to_string(),
            payment_reference: "Reference".to_string(),
            currency: "Currency".to_string(),

            items: "Items".to_string(),
            continued: "(continued)".to_string(),
            item_code: "Code".to_string(),
            item_description: "Description".to_string(),
            item_quantity: "Qty".to_string(),
            item_unit: "Unit".to_string(),
            item_unit_price: "Unit price".to_string(),
            item_vat_rate: "VAT %".to_string(),
            item_total: "Total".to_string(),

            vat_recap: "VAT recapitulation".to_string(),
            vat_rate: "Rate".to_string(),
            vat_base: "Base".to_string(),
            vat_tax: "VAT".to_string(),
            vat_total: "Total".to_string(),

            totals: "Totals".to_string(),
            total_base: "Total base".to_string(),
            total_vat: "Total VAT".to_string(),
            rounding: "Rounding".to_string(),
            amount_due: "Amount due".to_string(),

            notes: "Notes".to_string(),
            issued_by: "Issued by".to_string(),
        }
    }
}

/// Labels plus layout measurements. Missing keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub labels: SheetLabels,
    pub layout: LayoutConfig,
}

impl SheetConfig {
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }
}
