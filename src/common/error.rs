use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("customer not found: {0}")]
    CustomerNotFound(Uuid),
    #[error("loan not found: {0}")]
    LoanNotFound(Uuid),
    #[error("session store error: {0}")]
    Session(#[from] serde_json::Error),
}

impl LedgerError {
    /// True for the errors a form layer should surface as a field-level
    /// message and re-prompt on, rather than as an empty state.
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}
