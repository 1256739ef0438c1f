use std::collections::BTreeSet;

use crate::models::{Account, Invoice, InvoiceStatus, Transaction, TransactionKind, Vendor};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Maps a select value to a filter choice, `"all"` (or empty) meaning none.
pub fn choice(value: &str) -> Option<String> {
    match value {
        "" | "all" => None,
        other => Some(other.to_string()),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    pub search: String,
    pub account_id: Option<String>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(tx.description(), &needle)
            || contains_ci(tx.category(), &needle);
        let matches_kind = self.kind.map_or(true, |k| tx.kind == k);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| tx.category() == c);
        let matches_account = self
            .account_id
            .as_deref()
            .map_or(true, |id| tx.from_account_id.as_deref() == Some(id));

        matches_search && matches_kind && matches_category && matches_account
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

pub fn categories(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.category().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn kinds(transactions: &[Transaction]) -> Vec<TransactionKind> {
    transactions
        .iter()
        .map(|t| t.kind)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn account_name<'a>(accounts: &'a [Account], id: &str) -> &'a str {
    accounts
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.name.as_str())
        .unwrap_or("Unknown Account")
}

pub fn vendor_name<'a>(vendors: &'a [Vendor], id: &str) -> &'a str {
    vendors
        .iter()
        .find(|v| v.id == id)
        .map(|v| v.name.as_str())
        .unwrap_or("Unknown Vendor")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvoiceFilter {
    pub search: String,
    pub vendor_id: Option<String>,
    pub status: Option<InvoiceStatus>,
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &Invoice, vendors: &[Vendor]) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || contains_ci(&invoice.invoice_number, &needle)
            || contains_ci(invoice.description(), &needle)
            || contains_ci(vendor_name(vendors, &invoice.vendor_id), &needle);
        let matches_status = self.status.map_or(true, |s| invoice.status == s);
        let matches_vendor = self
            .vendor_id
            .as_deref()
            .map_or(true, |id| invoice.vendor_id == id);

        matches_search && matches_status && matches_vendor
    }

    pub fn apply<'a>(&self, invoices: &'a [Invoice], vendors: &[Vendor]) -> Vec<&'a Invoice> {
        invoices.iter().filter(|i| self.matches(i, vendors)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionStatus;
    use rust_decimal::Decimal;

    fn tx(id: &str, from: &str, kind: TransactionKind, category: &str, description: &str) -> Transaction {
        Transaction {
            id: id.into(),
            from_account_id: Some(from.into()),
            to_account_id: None,
            amount: Decimal::from(10),
            kind,
            description: Some(description.into()),
            category: Some(category.into()),
            status: TransactionStatus::Completed,
            created_at: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("1", "acc_a", TransactionKind::Payment, "Groceries", "Weekly shop"),
            tx("2", "acc_b", TransactionKind::Deposit, "Salary", "Payroll"),
            tx("3", "acc_a", TransactionKind::Transfer, "Transfer", "To savings"),
        ]
    }

    fn ids(found: Vec<&Transaction>) -> Vec<&str> {
        found.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let txs = sample();
        assert_eq!(TransactionFilter::default().apply(&txs).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_description_and_category() {
        let txs = sample();
        let filter = TransactionFilter {
            search: "GROC".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&txs)), ["1"]);

        let filter = TransactionFilter {
            search: "payroll".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&txs)), ["2"]);
    }

    #[test]
    fn filters_combine() {
        let txs = sample();
        let filter = TransactionFilter {
            account_id: Some("acc_a".into()),
            kind: Some(TransactionKind::Transfer),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&txs)), ["3"]);

        let filter = TransactionFilter {
            account_id: Some("acc_b".into()),
            category: Some("Groceries".into()),
            ..Default::default()
        };
        assert!(filter.apply(&txs).is_empty());
    }

    #[test]
    fn distinct_options_are_sorted() {
        let txs = sample();
        assert_eq!(categories(&txs), ["Groceries", "Salary", "Transfer"]);
        assert_eq!(
            kinds(&txs),
            [TransactionKind::Transfer, TransactionKind::Payment, TransactionKind::Deposit]
        );
        assert_eq!(choice("all"), None);
        assert_eq!(choice("acc_a"), Some("acc_a".to_string()));
    }

    #[test]
    fn invoice_search_includes_vendor_name() {
        let vendors = vec![Vendor {
            id: "v1".into(),
            name: "Contoso Supplies".into(),
            email: "ap@contoso.test".into(),
            phone: None,
            address: None,
            tax_id: None,
            payment_terms_days: 30,
            credit_limit: Decimal::from(5000),
            is_active: true,
            created_at: None,
            updated_at: None,
        }];
        let invoice = Invoice {
            id: "i1".into(),
            invoice_number: "INV-001".into(),
            vendor_id: "v1".into(),
            amount: Decimal::from(1500),
            description: Some("Office supplies delivery".into()),
            invoice_date: None,
            due_date: "2025-08-15".into(),
            paid: false,
            paid_date: None,
            status: InvoiceStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        let invoices = vec![invoice];

        let by_vendor = InvoiceFilter {
            search: "contoso".into(),
            ..Default::default()
        };
        assert_eq!(by_vendor.apply(&invoices, &vendors).len(), 1);

        let wrong_status = InvoiceFilter {
            status: Some(InvoiceStatus::Paid),
            ..Default::default()
        };
        assert!(wrong_status.apply(&invoices, &vendors).is_empty());

        let orphan = InvoiceFilter {
            search: "unknown vendor".into(),
            ..Default::default()
        };
        assert_eq!(orphan.apply(&invoices, &[]).len(), 1);
        assert_eq!(vendor_name(&[], "v1"), "Unknown Vendor");
    }
}
