/// Reasons a single withdraw or deposit is turned away. None of them change the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("Please enter a valid number")]
    ParseError,

    #[error("Please enter a positive amount")]
    InvalidAmount,

    #[error("Insufficient funds!")]
    InsufficientFunds,

    #[error("Amount is out of range")]
    OutOfRange,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
