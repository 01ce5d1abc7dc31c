use chrono::NaiveDate;
use uuid::Uuid;

use crate::common::money::Money;

/// Represents a mutation request routed from the presentation layer to the
/// worker for processing. Raw form payloads are parsed into these by
/// `io::forms` before any mutation is attempted.
#[derive(Debug, Clone)]
pub enum Command {
    AddCustomer {
        name: String,
        phone: String,
        email: Option<String>,
        address: String,
    },
    AddLoan {
        customer_id: Uuid,
        item_name: String,
        amount: Money,
        due_date: NaiveDate,
    },
    RecordRepayment {
        loan_id: Uuid,
        amount: Money,
    },
}

/// Id of the entity a successfully processed command created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    CustomerAdded(Uuid),
    LoanAdded(Uuid),
    RepaymentRecorded(Uuid),
}
