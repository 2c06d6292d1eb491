use serde_json::{Value, json};

/// A record with every section filled and `items` line items.
pub fn invoice_json(items: usize) -> Value {
    let rows: Vec<Value> = (1..=items).map(item_json).collect();
    json!({
        "identification": {
            "number": "FV-2024/0815",
            "issue_date": "03.05.2024",
            "supply_date": "03.05.2024",
            "due_date": "17.05.2024",
            "order_reference": "PO-77812",
            "barcode": "1258745"
        },
        "supplier": {
            "name": "Acme Components s.r.o.",
            "address": ["Průmyslová 12", "602 00 Brno"],
            "tax_id": "CZ12345678",
            "registration_id": "12345678"
        },
        "recipient": {
            "name": "Northwind Trading a.s.",
            "address": ["Harbour Road 4", "Building C, 3rd floor", "110 00 Praha 1"],
            "tax_id": "CZ87654321",
            "registration_id": "87654321"
        },
        "payment": {
            "method": "Bank transfer",
            "bank_account": "123456789/0100",
            "reference": "VS 815",
            "currency": "CZK"
        },
        "items": rows,
        "vat_recap": [
            { "rate": "21 %", "base": "10 000.00", "tax": "2 100.00", "total": "12 100.00" },
            { "rate": "12 %", "base": "500.00", "tax": "60.00", "total": "560.00" }
        ],
        "totals": {
            "base": "10 500.00",
            "vat": "2 160.00",
            "rounding": "0.00",
            "due": "12 660.00"
        },
        "notes": "Goods remain our property until paid in full.",
        "issued_by": "Jana Nováková"
    })
}

pub fn item_json(n: usize) -> Value {
    json!({
        "code": format!("A-{:04}", n),
        "description": format!("Component {}", n),
        "quantity": "2",
        "unit": "pcs",
        "unit_price": "50.00",
        "vat_rate": "21",
        "total": "100.00"
    })
}
