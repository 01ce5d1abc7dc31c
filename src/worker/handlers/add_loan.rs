use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{book::Book, derive, loan::Loan},
};

pub fn handle(
    book: &mut Book,
    customer_id: Uuid,
    item_name: String,
    amount: Money,
    due_date: NaiveDate,
    today: NaiveDate,
) -> Result<Uuid, LedgerError> {
    if item_name.trim().is_empty() {
        return Err(LedgerError::Validation("item name is required".into()));
    }
    if amount <= Money::zero() {
        return Err(LedgerError::Validation(
            "loan amount must be positive".into(),
        ));
    }
    // the loan form only offers today or later as a due date
    if due_date < today {
        return Err(LedgerError::Validation(
            "due date must not be in the past".into(),
        ));
    }

    let customer = book
        .customers
        .get_mut(&customer_id)
        .ok_or(LedgerError::CustomerNotFound(customer_id))?;

    let loan = Loan::new(customer_id, today, item_name, amount, due_date);
    let loan_id = loan.id;
    info!(customer = %customer_id, loan = %loan_id, amount = %loan.amount, "loan added");

    customer.loans.push(loan);
    derive::rederive_customer(customer, today);
    book.loan_owners.insert(loan_id, customer_id);

    Ok(loan_id)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::handle;
    use crate::{
        common::{error::LedgerError, money::Money},
        domain::{
            book::Book,
            customer::CustomerStatus,
            loan::LoanStatus,
        },
        worker::handlers::add_customer,
    };

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn seed_customer(book: &mut Book) -> Uuid {
        add_customer::handle(
            book,
            "Asha".to_string(),
            "9000000001".to_string(),
            None,
            "Market Road".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn add_loan_appends_and_rolls_up_to_the_customer() {
        let mut book = Book::new();
        let customer_id = seed_customer(&mut book);
        let today = date("2024-01-10");

        let loan_id = handle(
            &mut book,
            customer_id,
            "rice bag".to_string(),
            money("1000"),
            date("2024-02-10"),
            today,
        )
        .unwrap();

        let loan = book.loan(loan_id).expect("loan recorded");
        assert_eq!(loan.customer_id, customer_id);
        assert_eq!(loan.date, today);
        assert_eq!(loan.amount, money("1000"));
        assert_eq!(loan.remaining_balance, money("1000"));
        assert_eq!(loan.status, LoanStatus::Unpaid);
        assert!(loan.repayments.is_empty());

        let customer = book.customer(customer_id).unwrap();
        assert_eq!(customer.outstanding_balance, money("1000"));
        assert_eq!(customer.next_due_date, Some(date("2024-02-10")));
        assert_eq!(customer.status, CustomerStatus::UpToDate);

        assert_eq!(book.customer_of_loan(loan_id), Some(customer_id));
    }

    #[test]
    fn add_loan_rejects_unknown_customer() {
        let mut book = Book::new();
        let ghost = Uuid::new_v4();

        let err = handle(
            &mut book,
            ghost,
            "rice bag".to_string(),
            money("1000"),
            date("2024-02-10"),
            date("2024-01-10"),
        )
        .unwrap_err();

        assert!(matches!(err, LedgerError::CustomerNotFound(id) if id == ghost));
        assert!(book.loan_owners.is_empty());
    }

    #[test]
    fn add_loan_rejects_non_positive_amount() {
        let mut book = Book::new();
        let customer_id = seed_customer(&mut book);
        let today = date("2024-01-10");

        for bad in ["0", "-5"] {
            let err = handle(
                &mut book,
                customer_id,
                "rice bag".to_string(),
                money(bad),
                date("2024-02-10"),
                today,
            )
            .unwrap_err();
            assert!(err.is_validation());
        }

        let customer = book.customer(customer_id).unwrap();
        assert!(customer.loans.is_empty());
        assert_eq!(customer.outstanding_balance, Money::zero());
    }

    #[test]
    fn add_loan_rejects_past_due_date() {
        let mut book = Book::new();
        let customer_id = seed_customer(&mut book);

        let err = handle(
            &mut book,
            customer_id,
            "rice bag".to_string(),
            money("1000"),
            date("2024-01-09"),
            date("2024-01-10"),
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(book.customer(customer_id).unwrap().loans.is_empty());
    }

    #[test]
    fn next_due_date_tracks_the_earliest_open_loan() {
        let mut book = Book::new();
        let customer_id = seed_customer(&mut book);
        let today = date("2024-01-10");

        handle(
            &mut book,
            customer_id,
            "rice bag".to_string(),
            money("1000"),
            date("2024-03-01"),
            today,
        )
        .unwrap();
        handle(
            &mut book,
            customer_id,
            "cooking oil".to_string(),
            money("300"),
            date("2024-02-01"),
            today,
        )
        .unwrap();

        let customer = book.customer(customer_id).unwrap();
        assert_eq!(customer.outstanding_balance, money("1300"));
        assert_eq!(customer.next_due_date, Some(date("2024-02-01")));
    }
}
