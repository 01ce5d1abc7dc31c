use chrono::NaiveDate;

use crate::{
    common::{
        command::{Command, CommandOutcome},
        error::LedgerError,
    },
    domain::book::Book,
    worker::handlers::{add_customer, add_loan, record_repayment},
};

/// Dispatches commands to the handler for each mutation. `today` is passed
/// through explicitly so issue dates, due-date checks, and status
/// derivation never read the wall clock.
#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        book: &mut Book,
        command: Command,
        today: NaiveDate,
    ) -> Result<CommandOutcome, LedgerError> {
        match command {
            Command::AddCustomer {
                name,
                phone,
                email,
                address,
            } => add_customer::handle(book, name, phone, email, address)
                .map(CommandOutcome::CustomerAdded),
            Command::AddLoan {
                customer_id,
                item_name,
                amount,
                due_date,
            } => add_loan::handle(book, customer_id, item_name, amount, due_date, today)
                .map(CommandOutcome::LoanAdded),
            Command::RecordRepayment { loan_id, amount } => {
                record_repayment::handle(book, loan_id, amount, today)
                    .map(CommandOutcome::RepaymentRecorded)
            }
        }
    }
}
