use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{customer::Customer, loan::Loan};

/// The in-memory credit book: every customer the shop extends credit to,
/// plus a loan-id index so repayments can be recorded by loan id alone.
/// Customers exclusively own their loans; the index holds back-references.
#[derive(Debug, Default)]
pub struct Book {
    pub customers: HashMap<Uuid, Customer>,
    pub loan_owners: HashMap<Uuid, Uuid>,
}
impl Book {
    pub fn new() -> Self {
        Self {
            customers: HashMap::new(),
            loan_owners: HashMap::new(),
        }
    }

    pub fn customers(&self) -> &HashMap<Uuid, Customer> {
        &self.customers
    }

    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn customer_of_loan(&self, loan_id: Uuid) -> Option<Uuid> {
        self.loan_owners.get(&loan_id).copied()
    }

    pub fn loan(&self, loan_id: Uuid) -> Option<&Loan> {
        let owner = self.loan_owners.get(&loan_id)?;
        self.customers.get(owner)?.loan(loan_id)
    }
}
