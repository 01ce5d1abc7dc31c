pub mod book;
pub mod customer;
pub mod derive;
pub mod loan;
