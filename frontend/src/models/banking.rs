use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub account_number: String,
    pub account_type: AccountKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Account {
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.account_number.chars().collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("***{}", tail)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Checking,
    Savings,
    Credit,
}

impl AccountKind {
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Checking => "Checking",
            AccountKind::Savings => "Savings",
            AccountKind::Credit => "Credit",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
            AccountKind::Credit => "credit",
        }
    }

    /// Kinds a customer may open from the transfer form.
    pub fn openable() -> [AccountKind; 2] {
        [AccountKind::Checking, AccountKind::Savings]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "checking" => Some(AccountKind::Checking),
            "savings" => Some(AccountKind::Savings),
            "credit" => Some(AccountKind::Credit),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub from_account_id: Option<String>,
    #[serde(default)]
    pub to_account_id: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub status: TransactionStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }

    pub fn is_outflow(&self) -> bool {
        match self.kind {
            TransactionKind::Payment | TransactionKind::Withdrawal => true,
            TransactionKind::Transfer | TransactionKind::Deposit => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Transfer,
    Payment,
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn key(self) -> &'static str {
        match self {
            TransactionKind::Transfer => "transfer",
            TransactionKind::Payment => "payment",
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "transfer" => Some(TransactionKind::Transfer),
            "payment" => Some(TransactionKind::Payment),
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn key(self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// Body of `POST /transactions`. Accounts are referenced by name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    pub from_account_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account_name: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_external_details: Option<ExternalRecipient>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExternalRecipient {
    pub name: String,
    pub account_number: String,
    pub routing_number: String,
    pub bank_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAccount {
    pub name: String,
    pub account_type: AccountKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// `{status, message, ...}` envelope returned by the banking tool endpoints.
/// Account creation answers 201 even when it failed, so `status` must be
/// checked alongside the HTTP code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ActionReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
}

impl ActionReceipt {
    pub fn is_error(&self) -> bool {
        self.status.eq_ignore_ascii_case("error")
    }
}
