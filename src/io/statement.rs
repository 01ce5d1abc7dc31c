use uuid::Uuid;

use crate::{
    common::error::LedgerError,
    domain::{
        book::Book,
        loan::{Loan, Repayment},
    },
};

#[derive(Debug, serde::Serialize)]
/// Read-only projection of one customer's ledger, shaped for an external
/// statement renderer. Monetary fields are pre-formatted 2-dp strings and
/// statuses use their wire spellings (`overdue`, `partially-paid`, ...),
/// so the renderer never touches domain types.
pub struct CustomerStatement {
    pub customer_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub outstanding_balance: String,
    pub next_due_date: Option<String>,
    pub status: &'static str,
    pub loans: Vec<StatementLoan>,
}

#[derive(Debug, serde::Serialize)]
pub struct StatementLoan {
    pub loan_id: Uuid,
    pub date: String,
    pub item_name: String,
    pub amount: String,
    pub due_date: String,
    pub status: &'static str,
    pub remaining_balance: String,
    pub repayments: Vec<StatementRepayment>,
}

#[derive(Debug, serde::Serialize)]
pub struct StatementRepayment {
    pub repayment_id: Uuid,
    pub date: String,
    pub amount: String,
}

/// Builds the statement for one customer. Loans appear in issue order and
/// repayments in recording order, exactly as stored.
///
/// # Errors
///
/// Returns `CustomerNotFound` when the id has no match.
pub fn customer_statement(book: &Book, customer_id: Uuid) -> Result<CustomerStatement, LedgerError> {
    let customer = book
        .customer(customer_id)
        .ok_or(LedgerError::CustomerNotFound(customer_id))?;

    Ok(CustomerStatement {
        customer_id: customer.id,
        name: customer.name.clone(),
        phone: customer.phone.clone(),
        email: customer.email.clone(),
        address: customer.address.clone(),
        outstanding_balance: customer.outstanding_balance.to_string_2dp(),
        next_due_date: customer.next_due_date.map(|d| d.to_string()),
        status: customer.status.as_str(),
        loans: customer.loans.iter().map(statement_loan).collect(),
    })
}

fn statement_loan(loan: &Loan) -> StatementLoan {
    StatementLoan {
        loan_id: loan.id,
        date: loan.date.to_string(),
        item_name: loan.item_name.clone(),
        amount: loan.amount.to_string_2dp(),
        due_date: loan.due_date.to_string(),
        status: loan.status.as_str(),
        remaining_balance: loan.remaining_balance.to_string_2dp(),
        repayments: loan.repayments.iter().map(statement_repayment).collect(),
    }
}

fn statement_repayment(repayment: &Repayment) -> StatementRepayment {
    StatementRepayment {
        repayment_id: repayment.id,
        date: repayment.date.to_string(),
        amount: repayment.amount.to_string_2dp(),
    }
}
