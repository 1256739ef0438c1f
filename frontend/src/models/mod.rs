pub mod analytics;
pub mod banking;
pub mod receivables;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub use analytics::{ChatSession, HistoryKind, SessionExport, ToolDefinition, ToolUsageStatus};
pub use banking::{
    Account, AccountKind, ActionReceipt, ExternalRecipient, NewAccount, NewTransaction,
    Transaction, TransactionKind, TransactionStatus,
};
pub use receivables::{
    CreatedVendor, Invoice, InvoiceStatus, NewPayment, NewVendor, PaymentMethod, Vendor,
};

/// Parses the timestamp shapes the services emit: RFC 3339, naive
/// `isoformat()` output (treated as UTC) and bare dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `2025-08-15T10:00:00` -> `8/15/2025`; unparseable input is shown as-is.
pub fn short_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn short_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
