//! Boundary parsing of raw form payloads into typed commands.
//!
//! Everything the UI submits is strings. Each parser either produces a
//! fully typed [`Command`] or a `Validation` error, so partially valid data
//! never reaches the book.

use std::str::FromStr;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::common::{command::Command, error::LedgerError, money::Money};

#[derive(Debug, Clone, serde::Deserialize)]
/// Raw add-customer payload as submitted by the registration form.
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    // blank means not provided
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
/// Raw add-loan payload. `amount` and `due_date` arrive as strings.
pub struct LoanForm {
    pub customer_id: String,
    pub item_name: String,
    pub amount: String,
    pub due_date: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
/// Raw record-repayment payload from the payment dialog.
pub struct RepaymentForm {
    pub loan_id: String,
    pub amount: String,
}

fn parse_id(field: &str, raw: &str) -> Result<Uuid, LedgerError> {
    Uuid::from_str(raw.trim())
        .map_err(|_| LedgerError::Validation(format!("{field} is not a valid id: {raw}")))
}

fn parse_amount(raw: &str) -> Result<Money, LedgerError> {
    Money::from_str(raw).map_err(|_| LedgerError::Validation(format!("invalid amount: {raw}")))
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::Validation(format!("{field} must be YYYY-MM-DD, got: {raw}")))
}

/// Parses the registration form. A blank email is treated as "not
/// provided"; the other fields are required (the handler re-checks them,
/// this just trims and shapes).
///
/// # Examples
/// ```
/// use khaata_core::io::forms::{parse_customer_form, CustomerForm};
/// use khaata_core::common::command::Command;
///
/// let cmd = parse_customer_form(CustomerForm {
///     name: "Asha".into(),
///     phone: "9000000001".into(),
///     email: "".into(),
///     address: "Market Road".into(),
/// })
/// .unwrap();
///
/// assert!(matches!(cmd, Command::AddCustomer { email: None, .. }));
/// ```
pub fn parse_customer_form(form: CustomerForm) -> Result<Command, LedgerError> {
    let email = form.email.trim();
    Ok(Command::AddCustomer {
        name: form.name.trim().to_string(),
        phone: form.phone.trim().to_string(),
        email: if email.is_empty() {
            None
        } else {
            Some(email.to_string())
        },
        address: form.address.trim().to_string(),
    })
}

pub fn parse_loan_form(form: LoanForm) -> Result<Command, LedgerError> {
    Ok(Command::AddLoan {
        customer_id: parse_id("customer_id", &form.customer_id)?,
        item_name: form.item_name.trim().to_string(),
        amount: parse_amount(&form.amount)?,
        due_date: parse_date("due_date", &form.due_date)?,
    })
}

pub fn parse_repayment_form(form: RepaymentForm) -> Result<Command, LedgerError> {
    Ok(Command::RecordRepayment {
        loan_id: parse_id("loan_id", &form.loan_id)?,
        amount: parse_amount(&form.amount)?,
    })
}
