use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{book::Book, derive, loan::Repayment},
};

/// Applies a repayment against a loan. The one invariant with teeth:
/// `0 < amount <= remaining_balance`, checked before anything mutates, so a
/// rejection leaves the book byte-for-byte unchanged.
pub fn handle(
    book: &mut Book,
    loan_id: Uuid,
    amount: Money,
    today: NaiveDate,
) -> Result<Uuid, LedgerError> {
    let customer_id = book
        .customer_of_loan(loan_id)
        .ok_or(LedgerError::LoanNotFound(loan_id))?;
    let customer = book
        .customers
        .get_mut(&customer_id)
        .ok_or(LedgerError::CustomerNotFound(customer_id))?;
    let loan = customer
        .loan_mut(loan_id)
        .ok_or(LedgerError::LoanNotFound(loan_id))?;

    if amount <= Money::zero() {
        warn!(loan = %loan_id, amount = %amount, "repayment rejected: non-positive amount");
        return Err(LedgerError::Validation(
            "repayment amount must be positive".into(),
        ));
    }
    if amount > loan.remaining_balance {
        warn!(
            loan = %loan_id,
            amount = %amount,
            remaining = %loan.remaining_balance,
            "repayment rejected: exceeds remaining balance"
        );
        return Err(LedgerError::Validation(format!(
            "repayment of {} exceeds remaining balance {}",
            amount, loan.remaining_balance
        )));
    }

    let repayment = Repayment {
        id: Uuid::new_v4(),
        loan_id,
        date: today,
        amount,
    };
    let repayment_id = repayment.id;
    loan.repayments.push(repayment);

    derive::rederive_loan(loan);
    info!(
        loan = %loan_id,
        repayment = %repayment_id,
        amount = %amount,
        remaining = %loan.remaining_balance,
        "repayment recorded"
    );
    derive::rederive_customer(customer, today);

    Ok(repayment_id)
}
