use std::rc::Rc;

use futures::try_join;
use yew::prelude::*;

use crate::api::{BankingBackend, ReceivablesBackend};
use crate::error::ApiError;
use crate::format::format_money;
use crate::forms::{PaymentPlan, TransferPlan, VendorRef};
use crate::models::{Account, Invoice, NewAccount, NewVendor, Transaction, Vendor};

pub const BANKING_LOAD_ERROR: &str =
    "Could not connect to the banking service. Please ensure the backend is running and refresh.";
pub const RECEIVABLES_LOAD_ERROR: &str =
    "Could not connect to the accounts receivable service. Please ensure the backend is running and refresh.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BankingSnapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReceivablesSnapshot {
    pub vendors: Vec<Vendor>,
    pub invoices: Vec<Invoice>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

/// Snapshot plus lifecycle flags for one dashboard.
///
/// Once a snapshot has loaded it stays on screen: later mutations only flip
/// `busy`, and their failures land in `error` next to the old data.
#[derive(Debug, PartialEq)]
pub struct DashboardState<S> {
    pub snapshot: Option<Rc<S>>,
    pub busy: bool,
    pub error: Option<String>,
    pub receipt: Option<String>,
}

impl<S> Clone for DashboardState<S> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            busy: self.busy,
            error: self.error.clone(),
            receipt: self.receipt.clone(),
        }
    }
}

impl<S> Default for DashboardState<S> {
    fn default() -> Self {
        Self {
            snapshot: None,
            busy: true,
            error: None,
            receipt: None,
        }
    }
}

impl<S> DashboardState<S> {
    pub fn phase(&self) -> Phase {
        match (&self.snapshot, &self.error) {
            (Some(_), _) => Phase::Ready,
            (None, Some(_)) if !self.busy => Phase::Failed,
            (None, _) => Phase::Loading,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DashboardAction<S> {
    LoadStarted,
    Loaded(S),
    LoadFailed(String),
    MutationStarted,
    MutationSucceeded { snapshot: S, receipt: String },
    MutationFailed(String),
    /// The first step of a two-step mutation went through, the second did
    /// not; the reloaded snapshot shows what the first step created.
    PartiallyApplied { snapshot: S, message: String },
    DismissReceipt,
    DismissError,
}

impl<S> Reducible for DashboardState<S> {
    type Action = DashboardAction<S>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = (*self).clone();
        let next = match action {
            DashboardAction::LoadStarted | DashboardAction::MutationStarted => DashboardState {
                busy: true,
                error: None,
                receipt: None,
                ..current
            },
            DashboardAction::Loaded(snapshot) => DashboardState {
                snapshot: Some(Rc::new(snapshot)),
                busy: false,
                error: None,
                ..current
            },
            DashboardAction::LoadFailed(message) | DashboardAction::MutationFailed(message) => {
                DashboardState {
                    busy: false,
                    error: Some(message),
                    ..current
                }
            }
            DashboardAction::MutationSucceeded { snapshot, receipt } => DashboardState {
                snapshot: Some(Rc::new(snapshot)),
                busy: false,
                error: None,
                receipt: Some(receipt),
            },
            DashboardAction::PartiallyApplied { snapshot, message } => DashboardState {
                snapshot: Some(Rc::new(snapshot)),
                busy: false,
                error: Some(message),
                receipt: None,
            },
            DashboardAction::DismissReceipt => DashboardState {
                receipt: None,
                ..current
            },
            DashboardAction::DismissError => DashboardState {
                error: None,
                ..current
            },
        };
        Rc::new(next)
    }
}

pub async fn fetch_banking(backend: &dyn BankingBackend) -> Result<BankingSnapshot, ApiError> {
    let (accounts, transactions) = try_join!(backend.accounts(), backend.transactions())?;
    tracing::info!(
        accounts = accounts.len(),
        transactions = transactions.len(),
        "banking snapshot loaded"
    );
    Ok(BankingSnapshot {
        accounts,
        transactions,
    })
}

pub async fn load_banking(backend: &dyn BankingBackend) -> DashboardAction<BankingSnapshot> {
    match fetch_banking(backend).await {
        Ok(snapshot) => DashboardAction::Loaded(snapshot),
        Err(err) => {
            tracing::error!(%err, "loading banking data failed");
            DashboardAction::LoadFailed(BANKING_LOAD_ERROR.to_string())
        }
    }
}

async fn reload_banking(
    backend: &dyn BankingBackend,
    receipt: String,
) -> DashboardAction<BankingSnapshot> {
    match fetch_banking(backend).await {
        Ok(snapshot) => DashboardAction::MutationSucceeded { snapshot, receipt },
        Err(err) => {
            tracing::error!(%err, "reload after mutation failed");
            DashboardAction::MutationFailed(BANKING_LOAD_ERROR.to_string())
        }
    }
}

async fn reload_banking_after_partial(
    backend: &dyn BankingBackend,
    message: String,
) -> DashboardAction<BankingSnapshot> {
    match fetch_banking(backend).await {
        Ok(snapshot) => DashboardAction::PartiallyApplied { snapshot, message },
        Err(err) => {
            tracing::error!(%err, "reload after partial transfer failed");
            DashboardAction::MutationFailed(message)
        }
    }
}

/// Opens the destination account when asked to, posts the transaction, and
/// reloads. A transfer rejected after its account was opened still reloads.
pub async fn run_transfer(
    backend: &dyn BankingBackend,
    plan: TransferPlan,
) -> DashboardAction<BankingSnapshot> {
    if let Some(open) = &plan.open_account {
        tracing::info!(name = %open.name, "opening account before transfer");
        if let Err(err) = backend.create_account(open).await {
            tracing::error!(%err, "account creation failed");
            return DashboardAction::MutationFailed(err.to_string());
        }
    }

    let tx = &plan.transaction;
    tracing::info!(from = %tx.from_account_name, amount = %tx.amount, "posting transfer");
    let receipt = match backend.create_transaction(tx).await {
        Ok(receipt) => receipt,
        Err(err) => {
            tracing::error!(%err, "transfer rejected");
            return match &plan.open_account {
                Some(open) => {
                    let message = format!("Opened {}, but the transfer failed: {}", open.name, err);
                    reload_banking_after_partial(backend, message).await
                }
                None => DashboardAction::MutationFailed(err.to_string()),
            };
        }
    };

    let destination = match (&tx.to_account_name, &tx.to_external_details) {
        (Some(name), _) => name.clone(),
        (None, Some(recipient)) => recipient.name.clone(),
        (None, None) => "the recipient".to_string(),
    };
    let message = if receipt.message.trim().is_empty() {
        format!(
            "Transfer of {} to {} completed.",
            format_money(tx.amount),
            destination
        )
    } else {
        receipt.message
    };
    reload_banking(backend, message).await
}

pub async fn run_open_account(
    backend: &dyn BankingBackend,
    account: NewAccount,
) -> DashboardAction<BankingSnapshot> {
    tracing::info!(name = %account.name, kind = account.account_type.key(), "opening account");
    match backend.create_account(&account).await {
        Ok(_) => reload_banking(backend, format!("Opened {}.", account.name)).await,
        Err(err) => {
            tracing::error!(%err, "account creation failed");
            DashboardAction::MutationFailed(err.to_string())
        }
    }
}

pub async fn fetch_receivables(
    backend: &dyn ReceivablesBackend,
) -> Result<ReceivablesSnapshot, ApiError> {
    let (vendors, invoices) = try_join!(backend.vendors(), backend.invoices())?;
    tracing::info!(
        vendors = vendors.len(),
        invoices = invoices.len(),
        "receivables snapshot loaded"
    );
    Ok(ReceivablesSnapshot { vendors, invoices })
}

pub async fn load_receivables(
    backend: &dyn ReceivablesBackend,
) -> DashboardAction<ReceivablesSnapshot> {
    match fetch_receivables(backend).await {
        Ok(snapshot) => DashboardAction::Loaded(snapshot),
        Err(err) => {
            tracing::error!(%err, "loading receivables data failed");
            DashboardAction::LoadFailed(RECEIVABLES_LOAD_ERROR.to_string())
        }
    }
}

async fn reload_receivables(
    backend: &dyn ReceivablesBackend,
    receipt: String,
) -> DashboardAction<ReceivablesSnapshot> {
    match fetch_receivables(backend).await {
        Ok(snapshot) => DashboardAction::MutationSucceeded { snapshot, receipt },
        Err(err) => {
            tracing::error!(%err, "reload after mutation failed");
            DashboardAction::MutationFailed(RECEIVABLES_LOAD_ERROR.to_string())
        }
    }
}

async fn reload_receivables_after_partial(
    backend: &dyn ReceivablesBackend,
    message: String,
) -> DashboardAction<ReceivablesSnapshot> {
    match fetch_receivables(backend).await {
        Ok(snapshot) => DashboardAction::PartiallyApplied { snapshot, message },
        Err(err) => {
            tracing::error!(%err, "reload after partial payment failed");
            DashboardAction::MutationFailed(message)
        }
    }
}

/// Creates the vendor first when the plan names a new one, then records the
/// payment against its id.
pub async fn run_payment(
    backend: &dyn ReceivablesBackend,
    plan: PaymentPlan,
) -> DashboardAction<ReceivablesSnapshot> {
    let vendor_id = match &plan.vendor {
        VendorRef::Existing(id) => id.clone(),
        VendorRef::New(vendor) => {
            tracing::info!(name = %vendor.name, "creating vendor before payment");
            match backend.create_vendor(vendor).await {
                Ok(created) => created.id,
                Err(err) => {
                    tracing::error!(%err, "vendor creation failed");
                    return DashboardAction::MutationFailed(err.to_string());
                }
            }
        }
    };

    let created_vendor = match &plan.vendor {
        VendorRef::New(vendor) => Some(vendor.name.clone()),
        VendorRef::Existing(_) => None,
    };
    let payment = plan.into_payment(vendor_id);
    tracing::info!(vendor = %payment.vendor_id, amount = %payment.amount, "posting payment");
    let receipt = match backend.create_payment(&payment).await {
        Ok(receipt) => receipt,
        Err(err) => {
            tracing::error!(%err, "payment rejected");
            return match created_vendor {
                Some(name) => {
                    let message = format!("Added vendor {}, but the payment failed: {}", name, err);
                    reload_receivables_after_partial(backend, message).await
                }
                None => DashboardAction::MutationFailed(err.to_string()),
            };
        }
    };

    let message = if receipt.message.trim().is_empty() {
        format!("Payment of {} processed successfully.", format_money(payment.amount))
    } else {
        receipt.message
    };
    reload_receivables(backend, message).await
}

pub async fn run_add_vendor(
    backend: &dyn ReceivablesBackend,
    vendor: NewVendor,
) -> DashboardAction<ReceivablesSnapshot> {
    tracing::info!(name = %vendor.name, "adding vendor");
    match backend.create_vendor(&vendor).await {
        Ok(_) => reload_receivables(backend, format!("Added vendor {}.", vendor.name)).await,
        Err(err) => {
            tracing::error!(%err, "vendor creation failed");
            DashboardAction::MutationFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Destination, PaymentForm, PaymentMode, TransferForm, VendorFields};
    use crate::models::{
        AccountKind, ActionReceipt, CreatedVendor, InvoiceStatus, NewPayment, NewTransaction,
    };
    use async_trait::async_trait;
    use futures::executor::block_on;
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    fn account(id: &str, name: &str, balance: i64) -> Account {
        Account {
            id: id.into(),
            user_id: "user_1".into(),
            account_number: "000011112222".into(),
            account_type: AccountKind::Checking,
            balance: Decimal::from(balance),
            name: name.into(),
            created_at: None,
        }
    }

    #[derive(Default)]
    struct FakeBank {
        accounts: Vec<Account>,
        fail_accounts: bool,
        reject_transaction: Option<ApiError>,
        reject_account: Option<ApiError>,
        opened: RefCell<Vec<String>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeBank {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl BankingBackend for FakeBank {
        async fn accounts(&self) -> Result<Vec<Account>, ApiError> {
            self.calls.borrow_mut().push("GET /accounts".into());
            if self.fail_accounts {
                return Err(ApiError::Connectivity("connection refused".into()));
            }
            let mut accounts = self.accounts.clone();
            for name in self.opened.borrow().iter() {
                accounts.push(account(&format!("new-{}", name), name, 0));
            }
            Ok(accounts)
        }

        async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
            self.calls.borrow_mut().push("GET /transactions".into());
            Ok(Vec::new())
        }

        async fn create_transaction(&self, body: &NewTransaction) -> Result<ActionReceipt, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("POST /transactions {}", body.to_account_name.as_deref().unwrap_or("-")));
            match &self.reject_transaction {
                Some(err) => Err(err.clone()),
                None => Ok(ActionReceipt::default()),
            }
        }

        async fn create_account(&self, body: &NewAccount) -> Result<ActionReceipt, ApiError> {
            self.calls.borrow_mut().push(format!("POST /accounts {}", body.name));
            match &self.reject_account {
                Some(err) => Err(err.clone()),
                None => {
                    self.opened.borrow_mut().push(body.name.clone());
                    Ok(ActionReceipt::default())
                }
            }
        }
    }

    #[derive(Default)]
    struct FakeReceivables {
        reject_payment: Option<ApiError>,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ReceivablesBackend for FakeReceivables {
        async fn vendors(&self) -> Result<Vec<Vendor>, ApiError> {
            self.calls.borrow_mut().push("GET /vendors".into());
            Ok(Vec::new())
        }

        async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
            self.calls.borrow_mut().push("GET /invoices".into());
            Ok(Vec::new())
        }

        async fn create_payment(&self, body: &NewPayment) -> Result<ActionReceipt, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("POST /payments {}", body.vendor_id));
            match &self.reject_payment {
                Some(err) => Err(err.clone()),
                None => Ok(ActionReceipt::default()),
            }
        }

        async fn create_vendor(&self, body: &NewVendor) -> Result<CreatedVendor, ApiError> {
            self.calls.borrow_mut().push(format!("POST /vendors {}", body.name));
            Ok(CreatedVendor {
                id: "v_new".into(),
                name: body.name.clone(),
            })
        }
    }

    fn ready_state(snapshot: BankingSnapshot) -> Rc<DashboardState<BankingSnapshot>> {
        Rc::new(DashboardState::default()).reduce(DashboardAction::Loaded(snapshot))
    }

    fn transfer_plan(accounts: &[Account], destination: Destination) -> TransferPlan {
        TransferForm {
            from_account: "a".into(),
            destination,
            to_account: "b".into(),
            new_account_name: "Holiday".into(),
            amount: "20".into(),
            ..Default::default()
        }
        .plan(accounts)
        .unwrap()
    }

    #[test]
    fn initial_load_fetches_both_collections() {
        let bank = FakeBank {
            accounts: vec![account("a", "Everyday", 100)],
            ..Default::default()
        };
        let action = block_on(load_banking(&bank));
        let state = Rc::new(DashboardState::default()).reduce(action);

        assert_eq!(state.phase(), Phase::Ready);
        let snapshot = state.snapshot.as_ref().unwrap();
        assert_eq!(format_money(crate::aggregate::total_balance(&snapshot.accounts)), "$100");
        assert_eq!(bank.calls(), ["GET /accounts", "GET /transactions"]);
    }

    #[test]
    fn failed_load_shows_the_advisory() {
        let bank = FakeBank {
            fail_accounts: true,
            ..Default::default()
        };
        let state = Rc::new(DashboardState::default()).reduce(block_on(load_banking(&bank)));
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.error.as_deref(), Some(BANKING_LOAD_ERROR));
    }

    #[test]
    fn rejected_transfer_keeps_the_previous_snapshot_and_skips_reload() {
        let accounts = vec![account("a", "Everyday", 100), account("b", "Savings", 0)];
        let bank = FakeBank {
            accounts: accounts.clone(),
            reject_transaction: Some(ApiError::Request {
                status: 400,
                message: "Insufficient funds.".into(),
            }),
            ..Default::default()
        };
        let previous = BankingSnapshot {
            accounts: accounts.clone(),
            transactions: Vec::new(),
        };
        let state = ready_state(previous.clone()).reduce(DashboardAction::MutationStarted);
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.busy);

        let action = block_on(run_transfer(&bank, transfer_plan(&accounts, Destination::Existing)));
        let state = state.reduce(action);

        assert_eq!(bank.calls(), ["POST /transactions Savings"]);
        assert_eq!(state.error.as_deref(), Some("Insufficient funds."));
        assert_eq!(state.snapshot.as_deref(), Some(&previous));
        assert!(!state.busy);
        assert!(state.receipt.is_none());
    }

    #[test]
    fn transfer_to_new_account_opens_it_then_reloads() {
        let accounts = vec![account("a", "Everyday", 100)];
        let bank = FakeBank {
            accounts: accounts.clone(),
            ..Default::default()
        };
        let action = block_on(run_transfer(&bank, transfer_plan(&accounts, Destination::NewAccount)));

        assert_eq!(
            bank.calls(),
            [
                "POST /accounts Holiday",
                "POST /transactions Holiday",
                "GET /accounts",
                "GET /transactions"
            ]
        );
        match action {
            DashboardAction::MutationSucceeded { receipt, .. } => {
                assert_eq!(receipt, "Transfer of $20 to Holiday completed.")
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn failed_account_creation_stops_the_transfer() {
        let accounts = vec![account("a", "Everyday", 100)];
        let bank = FakeBank {
            accounts: accounts.clone(),
            reject_account: Some(ApiError::Request {
                status: 201,
                message: "Name already used.".into(),
            }),
            ..Default::default()
        };
        let action = block_on(run_transfer(&bank, transfer_plan(&accounts, Destination::NewAccount)));
        assert_eq!(action, DashboardAction::MutationFailed("Name already used.".into()));
        assert_eq!(bank.calls(), ["POST /accounts Holiday"]);
    }

    #[test]
    fn rejected_transfer_after_opening_an_account_still_reloads() {
        let accounts = vec![account("a", "Everyday", 100)];
        let bank = FakeBank {
            accounts: accounts.clone(),
            reject_transaction: Some(ApiError::Request {
                status: 400,
                message: "Transfer limit exceeded.".into(),
            }),
            ..Default::default()
        };
        let state = ready_state(BankingSnapshot {
            accounts: accounts.clone(),
            transactions: Vec::new(),
        })
        .reduce(DashboardAction::MutationStarted);

        let action = block_on(run_transfer(&bank, transfer_plan(&accounts, Destination::NewAccount)));
        assert_eq!(
            bank.calls(),
            [
                "POST /accounts Holiday",
                "POST /transactions Holiday",
                "GET /accounts",
                "GET /transactions"
            ]
        );

        let state = state.reduce(action);
        let names: Vec<&str> = state
            .snapshot
            .as_ref()
            .unwrap()
            .accounts
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Everyday", "Holiday"]);
        assert_eq!(
            state.error.as_deref(),
            Some("Opened Holiday, but the transfer failed: Transfer limit exceeded.")
        );
        assert!(state.receipt.is_none());
        assert!(!state.busy);
    }

    #[test]
    fn rejected_payment_to_a_new_vendor_still_reloads() {
        let backend = FakeReceivables {
            reject_payment: Some(ApiError::Request {
                status: 400,
                message: "Amount too large.".into(),
            }),
            ..Default::default()
        };
        let plan = PaymentForm {
            mode: PaymentMode::Vendor,
            creating_vendor: true,
            new_vendor: VendorFields {
                name: "Fabrikam".into(),
                email: "ap@fabrikam.test".into(),
                phone: String::new(),
            },
            amount: "250".into(),
            ..Default::default()
        }
        .plan(&[])
        .unwrap();

        let action = block_on(run_payment(&backend, plan));
        assert_eq!(
            *backend.calls.borrow(),
            [
                "POST /vendors Fabrikam",
                "POST /payments v_new",
                "GET /vendors",
                "GET /invoices"
            ]
        );
        assert_eq!(
            action,
            DashboardAction::PartiallyApplied {
                snapshot: ReceivablesSnapshot::default(),
                message: "Added vendor Fabrikam, but the payment failed: Amount too large.".into(),
            }
        );
    }

    #[test]
    fn payment_with_new_vendor_uses_the_created_id() {
        let backend = FakeReceivables::default();
        let plan = PaymentForm {
            mode: PaymentMode::Vendor,
            creating_vendor: true,
            new_vendor: VendorFields {
                name: "Fabrikam".into(),
                email: "ap@fabrikam.test".into(),
                phone: String::new(),
            },
            amount: "250".into(),
            ..Default::default()
        }
        .plan(&[])
        .unwrap();

        let action = block_on(run_payment(&backend, plan));
        assert_eq!(
            *backend.calls.borrow(),
            [
                "POST /vendors Fabrikam",
                "POST /payments v_new",
                "GET /vendors",
                "GET /invoices"
            ]
        );
        let state = Rc::new(DashboardState::default()).reduce(action);
        assert_eq!(
            state.receipt.as_deref(),
            Some("Payment of $250 processed successfully.")
        );
    }

    #[test]
    fn rejected_payment_does_not_reload() {
        let backend = FakeReceivables {
            reject_payment: Some(ApiError::Request {
                status: 400,
                message: "Invoice already paid.".into(),
            }),
            ..Default::default()
        };
        let invoice = Invoice {
            id: "inv-1".into(),
            invoice_number: "INV-1".into(),
            vendor_id: "v1".into(),
            amount: Decimal::from(100),
            description: None,
            invoice_date: None,
            due_date: "2025-08-01".into(),
            paid: false,
            paid_date: None,
            status: InvoiceStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        let plan = PaymentForm {
            vendor_id: "v1".into(),
            invoice_id: "inv-1".into(),
            amount: "100".into(),
            ..Default::default()
        }
        .plan(&[invoice])
        .unwrap();

        let action = block_on(run_payment(&backend, plan));
        assert_eq!(action, DashboardAction::MutationFailed("Invoice already paid.".into()));
        assert_eq!(*backend.calls.borrow(), ["POST /payments v1"]);
    }

    #[test]
    fn receipts_and_errors_can_be_dismissed() {
        let state = ready_state(BankingSnapshot::default())
            .reduce(DashboardAction::MutationSucceeded {
                snapshot: BankingSnapshot::default(),
                receipt: "Done".into(),
            })
            .reduce(DashboardAction::DismissReceipt);
        assert!(state.receipt.is_none());

        let state = state
            .reduce(DashboardAction::MutationFailed("nope".into()))
            .reduce(DashboardAction::DismissError);
        assert!(state.error.is_none());
        assert_eq!(state.phase(), Phase::Ready);
    }
}
