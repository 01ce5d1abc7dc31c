//! Pure recomputation of every derived field in the book.
//!
//! Derived state is pushed: each mutation handler recomputes the affected
//! loan, then its owning customer, so reads are plain field access. Every
//! function here is total and deterministic; "today" is an explicit
//! parameter, never the wall clock.

use chrono::NaiveDate;

use crate::common::money::Money;
use crate::domain::{
    book::Book,
    customer::{Customer, CustomerStatus},
    loan::{Loan, LoanStatus, Repayment},
};

/// `amount - sum(repayments)`, floored at zero so the function stays total
/// on inputs the recording guard never produces.
pub fn loan_remaining(amount: Money, repayments: &[Repayment]) -> Money {
    let repaid = repayments
        .iter()
        .fold(Money::zero(), |acc, r| acc + r.amount);
    if repaid >= amount {
        Money::zero()
    } else {
        amount - repaid
    }
}

/// `Paid` iff nothing remains, `PartiallyPaid` iff something has been paid
/// and something remains, `Unpaid` otherwise.
pub fn loan_status(amount: Money, remaining: Money, repayment_count: usize) -> LoanStatus {
    if remaining.is_zero() {
        LoanStatus::Paid
    } else if remaining < amount && repayment_count > 0 {
        LoanStatus::PartiallyPaid
    } else {
        LoanStatus::Unpaid
    }
}

/// Recomputes a loan's `remaining_balance` and `status` from its repayments.
pub fn rederive_loan(loan: &mut Loan) {
    loan.remaining_balance = loan_remaining(loan.amount, &loan.repayments);
    loan.status = loan_status(loan.amount, loan.remaining_balance, loan.repayments.len());
}

/// Customer-level rollup over a loan list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerRollup {
    pub outstanding_balance: Money,
    pub next_due_date: Option<NaiveDate>,
    pub status: CustomerStatus,
}

/// Outstanding balance is the sum of remaining balances; the next due date
/// is the earliest due date among open loans (`None` once everything is
/// settled); a customer is `Overdue` iff any open loan's due date has
/// passed.
pub fn customer_rollup(loans: &[Loan], today: NaiveDate) -> CustomerRollup {
    let outstanding_balance = loans
        .iter()
        .fold(Money::zero(), |acc, l| acc + l.remaining_balance);
    let next_due_date = loans
        .iter()
        .filter(|l| l.is_open())
        .map(|l| l.due_date)
        .min();
    let overdue = loans.iter().any(|l| l.is_open() && l.due_date < today);
    CustomerRollup {
        outstanding_balance,
        next_due_date,
        status: if overdue {
            CustomerStatus::Overdue
        } else {
            CustomerStatus::UpToDate
        },
    }
}

/// Pushes the rollup onto the customer's derived fields.
pub fn rederive_customer(customer: &mut Customer, today: NaiveDate) {
    let rollup = customer_rollup(&customer.loans, today);
    customer.outstanding_balance = rollup.outstanding_balance;
    customer.next_due_date = rollup.next_due_date;
    customer.status = rollup.status;
}

/// Dashboard aggregates over the whole book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookSummary {
    pub total_outstanding: Money,
    pub overdue_amount: Money,
    pub customer_count: usize,
    pub overdue_count: usize,
}

/// Recomputes every customer's rollup against `today` rather than trusting
/// stored status, so a summary taken days after the last mutation still
/// reflects due dates that have passed since.
pub fn book_summary(book: &Book, today: NaiveDate) -> BookSummary {
    let mut summary = BookSummary {
        total_outstanding: Money::zero(),
        overdue_amount: Money::zero(),
        customer_count: 0,
        overdue_count: 0,
    };
    for customer in book.customers().values() {
        let rollup = customer_rollup(&customer.loans, today);
        summary.customer_count += 1;
        summary.total_outstanding += rollup.outstanding_balance;
        if rollup.status == CustomerStatus::Overdue {
            summary.overdue_count += 1;
            summary.overdue_amount += rollup.outstanding_balance;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use uuid::Uuid;

    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn loan_with_repayments(amount: &str, repaid: &[&str], due: &str) -> Loan {
        let mut loan = Loan::new(
            Uuid::new_v4(),
            date("2024-01-01"),
            "rice bag".to_string(),
            money(amount),
            date(due),
        );
        for r in repaid {
            loan.repayments.push(Repayment {
                id: Uuid::new_v4(),
                loan_id: loan.id,
                date: date("2024-01-15"),
                amount: money(r),
            });
        }
        rederive_loan(&mut loan);
        loan
    }

    #[test]
    fn fresh_loan_is_unpaid_with_full_balance() {
        let loan = loan_with_repayments("1000", &[], "2024-02-01");
        assert_eq!(loan.remaining_balance, money("1000"));
        assert_eq!(loan.status, LoanStatus::Unpaid);
    }

    #[test]
    fn partial_repayment_leaves_partially_paid() {
        let loan = loan_with_repayments("1000", &["400"], "2024-02-01");
        assert_eq!(loan.remaining_balance, money("600"));
        assert_eq!(loan.status, LoanStatus::PartiallyPaid);
    }

    #[test]
    fn full_repayment_across_instalments_is_paid() {
        let loan = loan_with_repayments("1000", &["400", "600"], "2024-02-01");
        assert_eq!(loan.remaining_balance, money("0"));
        assert_eq!(loan.status, LoanStatus::Paid);
    }

    #[test]
    fn remaining_never_goes_negative() {
        // The recording guard forbids over-payment; the deriver still floors.
        assert_eq!(
            loan_remaining(
                money("100"),
                &[Repayment {
                    id: Uuid::new_v4(),
                    loan_id: Uuid::new_v4(),
                    date: date("2024-01-01"),
                    amount: money("150"),
                }]
            ),
            Money::zero()
        );
    }

    #[test]
    fn rollup_sums_remaining_and_picks_earliest_open_due_date() {
        let loans = vec![
            loan_with_repayments("1000", &["400"], "2024-03-01"),
            loan_with_repayments("500", &[], "2024-02-15"),
            loan_with_repayments("200", &["200"], "2024-01-05"), // settled
        ];
        let rollup = customer_rollup(&loans, date("2024-02-01"));
        assert_eq!(rollup.outstanding_balance, money("1100"));
        assert_eq!(rollup.next_due_date, Some(date("2024-02-15")));
        assert_eq!(rollup.status, CustomerStatus::UpToDate);
    }

    #[test]
    fn customer_is_overdue_once_an_open_due_date_passes() {
        let loans = vec![loan_with_repayments("1000", &["400"], "2024-02-01")];
        assert_eq!(
            customer_rollup(&loans, date("2024-02-01")).status,
            CustomerStatus::UpToDate,
            "not overdue on the due date itself"
        );
        assert_eq!(
            customer_rollup(&loans, date("2024-02-02")).status,
            CustomerStatus::Overdue
        );
    }

    #[test]
    fn settled_loan_past_due_does_not_flag_overdue() {
        let loans = vec![loan_with_repayments("1000", &["1000"], "2024-02-01")];
        let rollup = customer_rollup(&loans, date("2024-06-01"));
        assert_eq!(rollup.status, CustomerStatus::UpToDate);
        assert_eq!(rollup.next_due_date, None);
        assert_eq!(rollup.outstanding_balance, Money::zero());
    }

    #[test]
    fn summary_splits_overdue_amount_from_total() {
        let mut book = Book::new();

        let mut on_time = Customer::new(
            "Asha".to_string(),
            "9000000001".to_string(),
            None,
            "Market Road".to_string(),
        );
        on_time
            .loans
            .push(loan_with_repayments("500", &[], "2024-06-01"));
        rederive_customer(&mut on_time, date("2024-03-01"));

        let mut late = Customer::new(
            "Binod".to_string(),
            "9000000002".to_string(),
            None,
            "Temple Street".to_string(),
        );
        late.loans
            .push(loan_with_repayments("1000", &["400"], "2024-02-01"));
        rederive_customer(&mut late, date("2024-03-01"));

        book.customers.insert(on_time.id, on_time);
        book.customers.insert(late.id, late);

        let summary = book_summary(&book, date("2024-03-01"));
        assert_eq!(summary.customer_count, 2);
        assert_eq!(summary.total_outstanding, money("1100"));
        assert_eq!(summary.overdue_amount, money("600"));
        assert_eq!(summary.overdue_count, 1);
    }
}
