use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::FormError;
use crate::models::{
    Account, AccountKind, ExternalRecipient, Invoice, NewAccount, NewPayment, NewTransaction,
    NewVendor, PaymentMethod, Vendor,
};

pub fn parse_amount(raw: &str) -> Result<Decimal, FormError> {
    let amount = Decimal::from_str(raw.trim()).map_err(|_| FormError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(FormError::InvalidAmount);
    }
    Ok(amount)
}

pub fn preview_amount(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or(Decimal::ZERO)
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Existing,
    NewAccount,
    External,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransferForm {
    pub from_account: String,
    pub destination: Destination,
    pub to_account: String,
    pub new_account_name: String,
    pub new_account_kind: AccountKind,
    pub recipient: ExternalRecipient,
    pub amount: String,
    pub description: String,
}

/// A validated transfer: optionally open an account first, then move money.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferPlan {
    pub open_account: Option<NewAccount>,
    pub transaction: NewTransaction,
}

impl TransferForm {
    pub fn source<'a>(&self, accounts: &'a [Account]) -> Option<&'a Account> {
        accounts.iter().find(|a| a.id == self.from_account)
    }

    pub fn target<'a>(&self, accounts: &'a [Account]) -> Option<&'a Account> {
        match self.destination {
            Destination::Existing => accounts.iter().find(|a| a.id == self.to_account),
            Destination::NewAccount | Destination::External => None,
        }
    }

    pub fn plan(&self, accounts: &[Account]) -> Result<TransferPlan, FormError> {
        if self.from_account.is_empty() {
            return Err(FormError::MissingSource);
        }
        let source = self
            .source(accounts)
            .ok_or_else(|| FormError::UnknownAccount(self.from_account.clone()))?;

        let (open_account, to_account_name, to_external_details, default_description) =
            match self.destination {
                Destination::Existing => {
                    if self.to_account.is_empty() {
                        return Err(FormError::MissingDestination);
                    }
                    let target = self
                        .target(accounts)
                        .ok_or_else(|| FormError::UnknownAccount(self.to_account.clone()))?;
                    (None, Some(target.name.clone()), None, "Internal Transfer".to_string())
                }
                Destination::NewAccount => {
                    let name =
                        required(&self.new_account_name).ok_or(FormError::MissingNewAccountName)?;
                    let open = NewAccount {
                        name: name.clone(),
                        account_type: self.new_account_kind,
                        balance: Decimal::ZERO,
                    };
                    (Some(open), Some(name), None, "Internal Transfer".to_string())
                }
                Destination::External => {
                    let name = required(&self.recipient.name).ok_or(FormError::MissingRecipient)?;
                    let recipient = ExternalRecipient {
                        name: name.clone(),
                        account_number: self.recipient.account_number.trim().to_string(),
                        routing_number: self.recipient.routing_number.trim().to_string(),
                        bank_name: self.recipient.bank_name.trim().to_string(),
                    };
                    (None, None, Some(recipient), format!("Transfer to {}", name))
                }
            };

        let amount = parse_amount(&self.amount)?;

        Ok(TransferPlan {
            open_account,
            transaction: NewTransaction {
                from_account_name: source.name.clone(),
                to_account_name,
                amount,
                description: required(&self.description).unwrap_or(default_description),
                to_external_details,
            },
        })
    }

    pub fn can_submit(&self, accounts: &[Account]) -> bool {
        self.plan(accounts).is_ok()
    }

    /// The amount typed exceeds the source balance. Shown as a warning only;
    /// the backend has the final word.
    pub fn insufficient_funds(&self, accounts: &[Account]) -> bool {
        match (self.source(accounts), parse_amount(&self.amount)) {
            (Some(source), Ok(amount)) => amount > source.balance,
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMode {
    #[default]
    Invoice,
    Vendor,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl VendorFields {
    pub fn to_request(&self) -> Result<NewVendor, FormError> {
        match (required(&self.name), required(&self.email)) {
            (Some(name), Some(email)) => Ok(NewVendor {
                name,
                email,
                phone: required(&self.phone),
            }),
            _ => Err(FormError::IncompleteVendor),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentForm {
    pub mode: PaymentMode,
    pub vendor_id: String,
    pub invoice_id: String,
    pub amount: String,
    pub method: PaymentMethod,
    pub notes: String,
    pub creating_vendor: bool,
    pub new_vendor: VendorFields,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VendorRef {
    Existing(String),
    New(NewVendor),
}

/// A validated payment. A new vendor is created first and its id is only
/// known once the backend answers.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentPlan {
    pub vendor: VendorRef,
    pub invoice_id: Option<String>,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub notes: String,
}

impl PaymentPlan {
    pub fn into_payment(self, vendor_id: String) -> NewPayment {
        NewPayment {
            invoice_id: self.invoice_id,
            vendor_id,
            amount: self.amount,
            payment_method: self.method,
            notes: self.notes,
        }
    }
}

pub fn open_invoices<'a>(invoices: &'a [Invoice], vendor_id: &str) -> Vec<&'a Invoice> {
    invoices
        .iter()
        .filter(|i| i.vendor_id == vendor_id && !i.paid)
        .collect()
}

impl PaymentForm {
    pub fn vendor<'a>(&self, vendors: &'a [Vendor]) -> Option<&'a Vendor> {
        vendors.iter().find(|v| v.id == self.vendor_id)
    }

    pub fn invoice<'a>(&self, invoices: &'a [Invoice]) -> Option<&'a Invoice> {
        match self.mode {
            PaymentMode::Invoice => invoices
                .iter()
                .find(|i| i.id == self.invoice_id && i.vendor_id == self.vendor_id),
            PaymentMode::Vendor => None,
        }
    }

    pub fn plan(&self, invoices: &[Invoice]) -> Result<PaymentPlan, FormError> {
        let vendor = if self.creating_vendor {
            VendorRef::New(self.new_vendor.to_request()?)
        } else if self.vendor_id.is_empty() {
            return Err(FormError::MissingVendor);
        } else {
            VendorRef::Existing(self.vendor_id.clone())
        };

        let invoice_id = match self.mode {
            PaymentMode::Invoice => {
                let invoice = match vendor {
                    VendorRef::Existing(_) => self.invoice(invoices),
                    VendorRef::New(_) => None,
                };
                Some(invoice.ok_or(FormError::MissingInvoice)?.id.clone())
            }
            PaymentMode::Vendor => None,
        };

        let amount = parse_amount(&self.amount)?;

        Ok(PaymentPlan {
            vendor,
            invoice_id,
            amount,
            method: self.method,
            notes: required(&self.notes)
                .unwrap_or_else(|| "Payment processed via AR system".to_string()),
        })
    }

    pub fn can_submit(&self, invoices: &[Invoice]) -> bool {
        self.plan(invoices).is_ok()
    }

    pub fn overpayment(&self, invoices: &[Invoice]) -> Option<Decimal> {
        let invoice = self.invoice(invoices)?;
        let amount = parse_amount(&self.amount).ok()?;
        (amount > invoice.amount).then(|| amount - invoice.amount)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub kind: AccountKind,
    pub opening_balance: String,
}

impl AccountForm {
    /// An empty opening balance means zero; anything else must be a
    /// non-negative number.
    pub fn to_request(&self) -> Result<NewAccount, FormError> {
        let name = required(&self.name).ok_or(FormError::MissingNewAccountName)?;
        let balance = match self.opening_balance.trim() {
            "" => Decimal::ZERO,
            raw => Decimal::from_str(raw)
                .ok()
                .filter(|b| *b >= Decimal::ZERO)
                .ok_or(FormError::InvalidAmount)?,
        };
        Ok(NewAccount {
            name,
            account_type: self.kind,
            balance,
        })
    }
}
