use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{
    parse_timestamp, Account, Invoice, InvoiceStatus, Transaction, TransactionKind, Vendor,
};

const MS_PER_DAY: i64 = 86_400_000;
const TREND_MONTHS: i32 = 6;

fn same_month(raw: &str, now: DateTime<Utc>) -> bool {
    parse_timestamp(raw)
        .map(|ts| ts.month() == now.month() && ts.year() == now.year())
        .unwrap_or(false)
}

pub fn share(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    (part / whole * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

pub fn kind_total(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

pub fn monthly_spending(transactions: &[Transaction], now: DateTime<Utc>) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Payment && same_month(t.created_at(), now))
        .map(|t| t.amount)
        .sum()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

pub fn spending_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.kind == TransactionKind::Payment) {
        *totals.entry(tx.category()).or_insert(Decimal::ZERO) += tx.amount;
    }

    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
        })
        .collect();
    out.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthSummary {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

/// Income (deposits) and expenses (payments) for the trailing six calendar
/// months including the current one, oldest first.
pub fn monthly_trend(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<MonthSummary> {
    let current = now.year() * 12 + now.month0() as i32;

    (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            let index = current - back;
            let year = index.div_euclid(12);
            let month = index.rem_euclid(12) as u32 + 1;

            let mut income = Decimal::ZERO;
            let mut expenses = Decimal::ZERO;
            for tx in transactions {
                let in_month = parse_timestamp(tx.created_at())
                    .map(|ts| ts.year() == year && ts.month() == month)
                    .unwrap_or(false);
                if !in_month {
                    continue;
                }
                match tx.kind {
                    TransactionKind::Deposit => income += tx.amount,
                    TransactionKind::Payment => expenses += tx.amount,
                    TransactionKind::Transfer | TransactionKind::Withdrawal => {}
                }
            }

            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b").to_string())
                .unwrap_or_default();

            MonthSummary {
                label,
                year,
                month,
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}

pub fn savings_rate(month: &MonthSummary) -> f64 {
    if month.income <= Decimal::ZERO {
        return 0.0;
    }
    share(month.income - month.expenses, month.income)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavingsHealth {
    Excellent,
    Good,
    NeedsImprovement,
}

impl SavingsHealth {
    pub fn from_rate(rate: f64) -> Self {
        if rate > 20.0 {
            SavingsHealth::Excellent
        } else if rate > 10.0 {
            SavingsHealth::Good
        } else {
            SavingsHealth::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SavingsHealth::Excellent => "Excellent",
            SavingsHealth::Good => "Good",
            SavingsHealth::NeedsImprovement => "Needs Improvement",
        }
    }
}

pub fn over_budget(month: &MonthSummary) -> bool {
    month.expenses > month.income * Decimal::new(8, 1)
}

#[derive(Clone, Debug, PartialEq)]
pub struct BankingKpis {
    pub total_balance: Decimal,
    pub monthly_spending: Decimal,
    pub active_accounts: usize,
}

impl BankingKpis {
    pub fn compute(accounts: &[Account], transactions: &[Transaction], now: DateTime<Utc>) -> Self {
        Self {
            total_balance: total_balance(accounts),
            monthly_spending: monthly_spending(transactions, now),
            active_accounts: accounts.len(),
        }
    }
}

pub fn days_past_due(due_date: &str, now: DateTime<Utc>) -> Option<i64> {
    let due = parse_timestamp(due_date)?;
    Some((now - due).num_milliseconds().div_euclid(MS_PER_DAY))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgingBucket {
    Current,
    Days1To30,
    Days31To60,
    Days61To90,
    Over90,
}

impl AgingBucket {
    pub const ALL: [AgingBucket; 5] = [
        AgingBucket::Current,
        AgingBucket::Days1To30,
        AgingBucket::Days31To60,
        AgingBucket::Days61To90,
        AgingBucket::Over90,
    ];

    pub fn for_days(days_past_due: i64) -> Self {
        match days_past_due {
            d if d <= 0 => AgingBucket::Current,
            1..=30 => AgingBucket::Days1To30,
            31..=60 => AgingBucket::Days31To60,
            61..=90 => AgingBucket::Days61To90,
            _ => AgingBucket::Over90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgingBucket::Current => "Current",
            AgingBucket::Days1To30 => "1-30 days",
            AgingBucket::Days31To60 => "31-60 days",
            AgingBucket::Days61To90 => "61-90 days",
            AgingBucket::Over90 => "90+ days",
        }
    }

    fn index(self) -> usize {
        match self {
            AgingBucket::Current => 0,
            AgingBucket::Days1To30 => 1,
            AgingBucket::Days31To60 => 2,
            AgingBucket::Days61To90 => 3,
            AgingBucket::Over90 => 4,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgingReport {
    amounts: [Decimal; 5],
}

impl AgingReport {
    pub fn amount(&self, bucket: AgingBucket) -> Decimal {
        self.amounts[bucket.index()]
    }

    pub fn total(&self) -> Decimal {
        self.amounts.iter().copied().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgingBucket, Decimal)> + '_ {
        AgingBucket::ALL.into_iter().map(|b| (b, self.amount(b)))
    }
}

/// Partitions unpaid invoices by how long they are past due. An invoice
/// whose due date cannot be read is counted as current.
pub fn aging_report(invoices: &[Invoice], now: DateTime<Utc>) -> AgingReport {
    let mut report = AgingReport::default();
    for invoice in invoices.iter().filter(|i| !i.paid) {
        let bucket = days_past_due(&invoice.due_date, now)
            .map(AgingBucket::for_days)
            .unwrap_or(AgingBucket::Current);
        report.amounts[bucket.index()] += invoice.amount;
    }
    report
}

pub fn total_outstanding(invoices: &[Invoice]) -> Decimal {
    invoices.iter().filter(|i| !i.paid).map(|i| i.amount).sum()
}

pub fn status_total(invoices: &[Invoice], status: InvoiceStatus) -> Decimal {
    invoices
        .iter()
        .filter(|i| i.status == status)
        .map(|i| i.amount)
        .sum()
}

pub fn status_count(invoices: &[Invoice], status: InvoiceStatus) -> usize {
    invoices.iter().filter(|i| i.status == status).count()
}

fn paid_this_month<'a>(
    invoices: &'a [Invoice],
    now: DateTime<Utc>,
) -> impl Iterator<Item = &'a Invoice> + 'a {
    invoices.iter().filter(move |i| {
        i.paid && i.paid_date.as_deref().map(|d| same_month(d, now)).unwrap_or(false)
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }
}

pub fn risk_tier(overdue: Decimal, credit_limit: Decimal) -> RiskTier {
    if overdue > credit_limit * Decimal::new(8, 1) {
        RiskTier::High
    } else if overdue > credit_limit * Decimal::new(5, 1) {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VendorExposure<'a> {
    pub vendor: &'a Vendor,
    pub total_invoices: usize,
    pub outstanding: Decimal,
    pub overdue: Decimal,
    pub risk: RiskTier,
}

pub fn vendor_exposures<'a>(vendors: &'a [Vendor], invoices: &[Invoice]) -> Vec<VendorExposure<'a>> {
    let mut out: Vec<VendorExposure<'a>> = vendors
        .iter()
        .map(|vendor| {
            let mut total_invoices = 0;
            let mut outstanding = Decimal::ZERO;
            let mut overdue = Decimal::ZERO;
            for invoice in invoices.iter().filter(|i| i.vendor_id == vendor.id) {
                total_invoices += 1;
                if !invoice.paid {
                    outstanding += invoice.amount;
                }
                if invoice.status == InvoiceStatus::Overdue {
                    overdue += invoice.amount;
                }
            }
            VendorExposure {
                vendor,
                total_invoices,
                outstanding,
                overdue,
                risk: risk_tier(overdue, vendor.credit_limit),
            }
        })
        .collect();
    out.sort_by(|a, b| b.outstanding.cmp(&a.outstanding));
    out
}

/// Days Sales Outstanding: `outstanding / (average invoice / 30)`, or 0 when
/// there is no average to divide by.
pub fn days_sales_outstanding(invoices: &[Invoice]) -> Decimal {
    if invoices.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = invoices.iter().map(|i| i.amount).sum();
    let daily = total / Decimal::from(invoices.len()) / Decimal::from(30);
    total_outstanding(invoices)
        .checked_div(daily)
        .unwrap_or(Decimal::ZERO)
}

pub fn average_payment_terms(vendors: &[Vendor]) -> f64 {
    if vendors.is_empty() {
        return 0.0;
    }
    let total: u64 = vendors.iter().map(|v| u64::from(v.payment_terms_days)).sum();
    total as f64 / vendors.len() as f64
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReceivablesKpis {
    pub total_outstanding: Decimal,
    pub overdue_amount: Decimal,
    pub overdue_count: usize,
    pub pending_count: usize,
    pub collected_this_month: Decimal,
    pub paid_this_month_count: usize,
    pub active_vendors: usize,
    pub vendor_count: usize,
}

impl ReceivablesKpis {
    pub fn compute(vendors: &[Vendor], invoices: &[Invoice], now: DateTime<Utc>) -> Self {
        Self {
            total_outstanding: total_outstanding(invoices),
            overdue_amount: status_total(invoices, InvoiceStatus::Overdue),
            overdue_count: status_count(invoices, InvoiceStatus::Overdue),
            pending_count: status_count(invoices, InvoiceStatus::Pending),
            collected_this_month: paid_this_month(invoices, now).map(|i| i.amount).sum(),
            paid_this_month_count: paid_this_month(invoices, now).count(),
            active_vendors: vendors.iter().filter(|v| v.is_active).count(),
            vendor_count: vendors.len(),
        }
    }

    pub fn overdue_rate(&self) -> f64 {
        share(self.overdue_amount, self.total_outstanding).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKind, TransactionStatus};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap()
    }

    fn account(id: &str, balance: i64) -> Account {
        Account {
            id: id.into(),
            user_id: "user_1".into(),
            account_number: "000011112222".into(),
            account_type: AccountKind::Checking,
            balance: Decimal::from(balance),
            name: id.into(),
            created_at: None,
        }
    }

    fn tx(kind: TransactionKind, amount: i64, category: &str, created_at: &str) -> Transaction {
        Transaction {
            id: format!("{}-{}", category, created_at),
            from_account_id: Some("a".into()),
            to_account_id: None,
            amount: Decimal::from(amount),
            kind,
            description: Some(format!("{} purchase", category)),
            category: Some(category.into()),
            status: TransactionStatus::Completed,
            created_at: Some(created_at.into()),
        }
    }

    fn vendor(id: &str, credit_limit: i64, terms: u32, active: bool) -> Vendor {
        Vendor {
            id: id.into(),
            name: format!("Vendor {}", id),
            email: format!("{}@example.com", id),
            phone: None,
            address: None,
            tax_id: None,
            payment_terms_days: terms,
            credit_limit: Decimal::from(credit_limit),
            is_active: active,
            created_at: None,
            updated_at: None,
        }
    }

    fn invoice(vendor_id: &str, amount: Decimal, due: DateTime<Utc>, paid: bool, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: format!("inv-{}-{}", vendor_id, due.timestamp()),
            invoice_number: "INV".into(),
            vendor_id: vendor_id.into(),
            amount,
            description: None,
            invoice_date: None,
            due_date: due.format("%Y-%m-%dT%H:%M:%S").to_string(),
            paid,
            paid_date: None,
            status,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn total_balance_sums_accounts() {
        assert_eq!(total_balance(&[account("a", 100)]), Decimal::from(100));
        let kpis = BankingKpis::compute(&[account("a", 100)], &[], now());
        assert_eq!(crate::format::format_money(kpis.total_balance), "$100");
        assert_eq!(kpis.monthly_spending, Decimal::ZERO);
        assert_eq!(kpis.active_accounts, 1);
    }

    #[test]
    fn monthly_spending_counts_this_months_payments_only() {
        let txs = vec![
            tx(TransactionKind::Payment, 40, "Groceries", "2025-09-02T10:00:00"),
            tx(TransactionKind::Payment, 60, "Dining", "2025-09-14T10:00:00"),
            tx(TransactionKind::Payment, 500, "Dining", "2024-09-14T10:00:00"),
            tx(TransactionKind::Deposit, 900, "Salary", "2025-09-01T10:00:00"),
        ];
        assert_eq!(monthly_spending(&txs, now()), Decimal::from(100));
    }

    #[test]
    fn categories_are_sorted_largest_first() {
        let txs = vec![
            tx(TransactionKind::Payment, 40, "Groceries", "2025-09-02"),
            tx(TransactionKind::Payment, 60, "Dining", "2025-09-03"),
            tx(TransactionKind::Payment, 30, "Groceries", "2025-09-04"),
            tx(TransactionKind::Deposit, 900, "Salary", "2025-09-01"),
        ];
        let totals = spending_by_category(&txs);
        assert_eq!(
            totals,
            vec![
                CategoryTotal { category: "Groceries".into(), amount: Decimal::from(70) },
                CategoryTotal { category: "Dining".into(), amount: Decimal::from(60) },
            ]
        );
    }

    #[test]
    fn trend_covers_six_months_oldest_first_across_year_boundary() {
        let jan = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();
        let txs = vec![
            tx(TransactionKind::Deposit, 1000, "Salary", "2025-12-01"),
            tx(TransactionKind::Payment, 300, "Rent", "2025-12-05"),
            tx(TransactionKind::Payment, 50, "Fuel", "2026-01-03"),
            tx(TransactionKind::Transfer, 999, "Transfer", "2026-01-03"),
        ];
        let trend = monthly_trend(&txs, jan);
        let labels: Vec<&str> = trend.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["Aug", "Sep", "Oct", "Nov", "Dec", "Jan"]);
        assert_eq!(trend[0].year, 2025);
        assert_eq!(trend[4].income, Decimal::from(1000));
        assert_eq!(trend[4].net, Decimal::from(700));
        assert_eq!(trend[5].expenses, Decimal::from(50));
        assert_eq!(trend[5].net, Decimal::from(-50));
    }

    #[test]
    fn savings_rate_and_labels() {
        let month = MonthSummary {
            label: "Sep".into(),
            year: 2025,
            month: 9,
            income: Decimal::from(1000),
            expenses: Decimal::from(750),
            net: Decimal::from(250),
        };
        assert_eq!(savings_rate(&month), 25.0);
        assert_eq!(SavingsHealth::from_rate(25.0), SavingsHealth::Excellent);
        assert_eq!(SavingsHealth::from_rate(15.0), SavingsHealth::Good);
        assert_eq!(SavingsHealth::from_rate(10.0), SavingsHealth::NeedsImprovement);
        assert!(!over_budget(&month));

        let broke = MonthSummary { income: Decimal::ZERO, ..month };
        assert_eq!(savings_rate(&broke), 0.0);
        assert!(over_budget(&broke));
    }

    #[test]
    fn invoice_forty_days_late_lands_in_31_to_60() {
        let invoices = vec![invoice(
            "v1",
            Decimal::from(500),
            now() - Duration::days(40),
            false,
            InvoiceStatus::Overdue,
        )];
        let report = aging_report(&invoices, now());
        assert_eq!(report.amount(AgingBucket::Days31To60), Decimal::from(500));
        assert_eq!(report.amount(AgingBucket::Days1To30), Decimal::ZERO);
        assert_eq!(report.amount(AgingBucket::Days61To90), Decimal::ZERO);
    }

    #[test]
    fn bucket_edges() {
        assert_eq!(AgingBucket::for_days(-3), AgingBucket::Current);
        assert_eq!(AgingBucket::for_days(0), AgingBucket::Current);
        assert_eq!(AgingBucket::for_days(1), AgingBucket::Days1To30);
        assert_eq!(AgingBucket::for_days(30), AgingBucket::Days1To30);
        assert_eq!(AgingBucket::for_days(31), AgingBucket::Days31To60);
        assert_eq!(AgingBucket::for_days(90), AgingBucket::Days61To90);
        assert_eq!(AgingBucket::for_days(91), AgingBucket::Over90);
    }

    #[test]
    fn days_past_due_floors_partial_days() {
        let due = (now() - Duration::hours(36)).format("%Y-%m-%dT%H:%M:%S").to_string();
        assert_eq!(days_past_due(&due, now()), Some(1));
        let future = (now() + Duration::hours(2)).format("%Y-%m-%dT%H:%M:%S").to_string();
        assert_eq!(days_past_due(&future, now()), Some(-1));
        assert_eq!(days_past_due("soon", now()), None);
    }

    #[test]
    fn aging_buckets_sum_to_total_outstanding() {
        let mut invoices = Vec::new();
        for (i, days) in [-10i64, 0, 5, 29, 31, 45, 61, 89, 120, 400].iter().enumerate() {
            let amount = Decimal::new(10_001 + 337 * i as i64, 2);
            invoices.push(invoice("v1", amount, now() - Duration::days(*days), false, InvoiceStatus::Pending));
        }
        invoices.push(invoice("v1", Decimal::from(999), now() - Duration::days(50), true, InvoiceStatus::Paid));
        let mut unreadable = invoice("v2", Decimal::new(123, 1), now(), false, InvoiceStatus::Pending);
        unreadable.due_date = "TBD".into();
        invoices.push(unreadable);

        let report = aging_report(&invoices, now());
        assert_eq!(report.total(), total_outstanding(&invoices));
        assert_eq!(report.iter().count(), 5);
    }

    #[test]
    fn risk_tier_thresholds_are_strict() {
        let limit = Decimal::from(1000);
        assert_eq!(risk_tier(Decimal::from(801), limit), RiskTier::High);
        assert_eq!(risk_tier(Decimal::from(800), limit), RiskTier::Medium);
        assert_eq!(risk_tier(Decimal::from(501), limit), RiskTier::Medium);
        assert_eq!(risk_tier(Decimal::from(500), limit), RiskTier::Low);
        assert_eq!(risk_tier(Decimal::ZERO, Decimal::ZERO), RiskTier::Low);
        assert_eq!(risk_tier(Decimal::ONE, Decimal::ZERO), RiskTier::High);
    }

    #[test]
    fn risk_tier_is_monotonic_in_ratio() {
        let limit = Decimal::from(200);
        let mut previous = RiskTier::Low;
        for overdue in 0..400 {
            let tier = risk_tier(Decimal::from(overdue), limit);
            assert!(tier >= previous);
            previous = tier;
        }
    }

    #[test]
    fn vendor_exposures_sorted_by_outstanding() {
        let vendors = vec![vendor("a", 1000, 30, true), vendor("b", 1000, 45, false)];
        let invoices = vec![
            invoice("a", Decimal::from(100), now(), false, InvoiceStatus::Pending),
            invoice("b", Decimal::from(900), now() - Duration::days(10), false, InvoiceStatus::Overdue),
            invoice("b", Decimal::from(50), now(), true, InvoiceStatus::Paid),
        ];
        let exposures = vendor_exposures(&vendors, &invoices);
        assert_eq!(exposures[0].vendor.id, "b");
        assert_eq!(exposures[0].total_invoices, 2);
        assert_eq!(exposures[0].outstanding, Decimal::from(900));
        assert_eq!(exposures[0].risk, RiskTier::High);
        assert_eq!(exposures[1].risk, RiskTier::Low);
    }

    #[test]
    fn dso_is_zero_without_a_divisor() {
        assert_eq!(days_sales_outstanding(&[]), Decimal::ZERO);
        let zeros = vec![invoice("v", Decimal::ZERO, now(), false, InvoiceStatus::Pending)];
        assert_eq!(days_sales_outstanding(&zeros), Decimal::ZERO);
    }

    #[test]
    fn dso_uses_average_invoice_over_thirty_days() {
        let invoices = vec![
            invoice("v", Decimal::from(300), now(), false, InvoiceStatus::Pending),
            invoice("v", Decimal::from(300), now(), true, InvoiceStatus::Paid),
        ];
        // outstanding 300 / (300 / 30)
        assert_eq!(days_sales_outstanding(&invoices), Decimal::from(30));
    }

    #[test]
    fn receivables_kpis() {
        let vendors = vec![vendor("a", 1000, 30, true), vendor("b", 500, 60, false)];
        let mut paid = invoice("a", Decimal::from(250), now(), true, InvoiceStatus::Paid);
        paid.paid_date = Some("2025-09-03T08:00:00".into());
        let mut paid_last_year = invoice("a", Decimal::from(75), now(), true, InvoiceStatus::Paid);
        paid_last_year.paid_date = Some("2024-09-03T08:00:00".into());
        let invoices = vec![
            paid,
            paid_last_year,
            invoice("a", Decimal::from(100), now(), false, InvoiceStatus::Pending),
            invoice("b", Decimal::from(300), now() - Duration::days(5), false, InvoiceStatus::Overdue),
        ];
        let kpis = ReceivablesKpis::compute(&vendors, &invoices, now());
        assert_eq!(kpis.total_outstanding, Decimal::from(400));
        assert_eq!(kpis.overdue_amount, Decimal::from(300));
        assert_eq!(kpis.overdue_count, 1);
        assert_eq!(kpis.pending_count, 1);
        assert_eq!(kpis.collected_this_month, Decimal::from(250));
        assert_eq!(kpis.paid_this_month_count, 1);
        assert_eq!(kpis.active_vendors, 1);
        assert_eq!(kpis.vendor_count, 2);
        assert_eq!(kpis.overdue_rate(), 75.0);
        assert_eq!(average_payment_terms(&vendors), 45.0);
        assert_eq!(average_payment_terms(&[]), 0.0);
    }
}
