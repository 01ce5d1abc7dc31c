use tracing::info;
use uuid::Uuid;

use crate::{
    common::error::LedgerError,
    domain::{book::Book, customer::Customer},
};

pub fn handle(
    book: &mut Book,
    name: String,
    phone: String,
    email: Option<String>,
    address: String,
) -> Result<Uuid, LedgerError> {
    // required fields must survive trimming; never store a blank record
    if name.trim().is_empty() {
        return Err(LedgerError::Validation("customer name is required".into()));
    }
    if phone.trim().is_empty() {
        return Err(LedgerError::Validation("customer phone is required".into()));
    }
    if address.trim().is_empty() {
        return Err(LedgerError::Validation(
            "customer address is required".into(),
        ));
    }

    let customer = Customer::new(name, phone, email, address);
    let id = customer.id;
    info!(customer = %id, name = %customer.name, "customer added");
    book.customers.insert(id, customer);
    Ok(id)
}
