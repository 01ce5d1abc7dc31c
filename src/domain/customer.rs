use chrono::NaiveDate;
use uuid::Uuid;

use crate::common::money::Money;
use crate::domain::loan::Loan;

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    /// Derived: sum of `remaining_balance` across owned loans.
    pub outstanding_balance: Money,
    /// Derived: earliest due date among loans with an open balance.
    pub next_due_date: Option<NaiveDate>,
    /// Derived. See `domain::derive`.
    pub status: CustomerStatus,
    /// Owned loans, in issue order.
    pub loans: Vec<Loan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerStatus {
    Overdue,
    UpToDate,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Overdue => "overdue",
            CustomerStatus::UpToDate => "up-to-date",
        }
    }
}

impl Customer {
    /// A newly registered customer with no credit history.
    pub fn new(name: String, phone: String, email: Option<String>, address: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            address,
            outstanding_balance: Money::zero(),
            next_due_date: None,
            status: CustomerStatus::UpToDate,
            loans: Vec::new(),
        }
    }

    pub fn loan(&self, loan_id: Uuid) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == loan_id)
    }

    pub fn loan_mut(&mut self, loan_id: Uuid) -> Option<&mut Loan> {
        self.loans.iter_mut().find(|l| l.id == loan_id)
    }
}
