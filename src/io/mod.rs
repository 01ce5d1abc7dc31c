pub mod forms;
pub mod statement;
