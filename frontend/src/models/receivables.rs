use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub payment_terms_days: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub credit_limit: Decimal,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub vendor_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<String>,
    pub due_date: String,
    pub paid: bool,
    #[serde(default)]
    pub paid_date: Option<String>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Invoice {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Derived server-side from `paid` and `due_date`; never computed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Check,
    Ach,
    Wire,
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Check,
        PaymentMethod::Ach,
        PaymentMethod::Wire,
        PaymentMethod::CreditCard,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PaymentMethod::Check => "check",
            PaymentMethod::Ach => "ach",
            PaymentMethod::Wire => "wire",
            PaymentMethod::CreditCard => "credit_card",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Check => "Check",
            PaymentMethod::Ach => "ACH Transfer",
            PaymentMethod::Wire => "Wire Transfer",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

/// Body of `POST /payments`. General vendor payments carry no invoice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub vendor_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewVendor {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedVendor {
    #[serde(alias = "vendor_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_invoice_with_capitalised_status() {
        let json = r#"{
            "id": "inv-002",
            "invoice_number": "INV-002",
            "vendor_id": "v1",
            "amount": 2300.50,
            "invoice_date": "2025-07-20",
            "due_date": "2025-08-20",
            "paid": false,
            "status": "Overdue"
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Overdue);
        assert_eq!(invoice.amount, Decimal::new(23005, 1));
        assert_eq!(invoice.description(), "");
    }

    #[test]
    fn payment_method_serialises_snake_case() {
        let body = NewPayment {
            invoice_id: None,
            vendor_id: "v1".into(),
            amount: Decimal::from(10),
            payment_method: PaymentMethod::CreditCard,
            notes: String::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["payment_method"], "credit_card");
        assert!(json.get("invoice_id").is_none());
    }

    #[test]
    fn created_vendor_accepts_either_id_field() {
        let created: CreatedVendor =
            serde_json::from_str(r#"{"vendor_id":"v9","name":"Fabrikam"}"#).unwrap();
        assert_eq!(created.id, "v9");
        let created: CreatedVendor = serde_json::from_str(r#"{"id":"v10"}"#).unwrap();
        assert_eq!(created.name, "");
    }

    #[test]
    fn status_labels_round_trip_through_filters() {
        for status in InvoiceStatus::ALL {
            assert_eq!(InvoiceStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(InvoiceStatus::from_label("all"), None);
    }
}
