use chrono::NaiveDate;
use uuid::Uuid;

use crate::common::money::Money;

/// A single extension of credit for a named item.
#[derive(Debug, Clone)]
pub struct Loan {
    pub id: Uuid,
    /// Back-reference for lookup only; the owning `Customer` holds the loan.
    pub customer_id: Uuid,
    pub date: NaiveDate,
    pub item_name: String,
    /// Original principal. Always positive.
    pub amount: Money,
    pub due_date: NaiveDate,
    /// Derived. See `domain::derive`.
    pub status: LoanStatus,
    /// Derived: `amount - sum(repayments)`, within `0..=amount`.
    pub remaining_balance: Money,
    pub repayments: Vec<Repayment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Unpaid => "unpaid",
            LoanStatus::PartiallyPaid => "partially-paid",
            LoanStatus::Paid => "paid",
        }
    }
}

/// A payment applied against a loan's remaining balance. Immutable once
/// recorded; never deleted.
#[derive(Debug, Clone)]
pub struct Repayment {
    pub id: Uuid,
    /// Back-reference for lookup only.
    pub loan_id: Uuid,
    pub date: NaiveDate,
    pub amount: Money,
}

impl Loan {
    /// A freshly issued loan: nothing repaid yet.
    pub fn new(
        customer_id: Uuid,
        date: NaiveDate,
        item_name: String,
        amount: Money,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            date,
            item_name,
            amount,
            due_date,
            status: LoanStatus::Unpaid,
            remaining_balance: amount,
            repayments: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.remaining_balance > Money::zero()
    }
}
