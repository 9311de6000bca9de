use crate::domain::{Money, TransactionError};

/// A single in-memory balance. Every operation either fully applies or leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Money, // never negative
}

impl Account {
    pub const DEFAULT_OPENING_BALANCE: Money = Money::from_cents(100_000);

    pub fn new() -> Self {
        Self {
            balance: Self::DEFAULT_OPENING_BALANCE,
        }
    }

    pub fn with_balance(opening: Money) -> Result<Self, TransactionError> {
        if opening.is_negative() {
            return Err(TransactionError::InvalidAmount);
        }
        Ok(Self { balance: opening })
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Money, TransactionError> {
        if !amount.is_positive() {
            return Err(TransactionError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds);
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TransactionError::OutOfRange)?;
        Ok(self.balance)
    }

    /// No ceiling beyond what [`Money`] can represent.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, TransactionError> {
        if !amount.is_positive() {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TransactionError::OutOfRange)?;
        Ok(self.balance)
    }

    pub fn check_balance(&self) -> Money {
        self.balance
    }
}
