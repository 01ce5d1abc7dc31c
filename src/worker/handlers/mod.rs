pub mod add_customer;
pub mod add_loan;
pub mod record_repayment;
