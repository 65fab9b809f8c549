//! Currency-tagged exact-decimal amounts.
//!
//! `Money` never goes negative and never mixes currencies: every operation that combines two
//! values checks the currency first and returns a new value instead of mutating.

use super::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Currency used when there is nothing to infer one from (e.g. the total of an empty cart).
pub const DEFAULT_CURRENCY: &str = "PEN";

/// An immutable, non-negative amount in a single currency.
///
/// Equality is numeric: `10.00 PEN == 10.0 PEN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

#[derive(Deserialize)]
struct RawMoney {
    amount: Decimal,
    currency: String,
}

impl TryFrom<RawMoney> for Money {
    type Error = DomainError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::create(raw.amount, &raw.currency)
    }
}

impl Money {
    /// Creates a new amount, normalizing the currency code to trimmed upper case.
    ///
    /// # Errors
    /// `InvalidArgument` when the currency is blank or the amount is negative.
    pub fn create(amount: Decimal, currency: &str) -> Result<Self, DomainError> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(DomainError::invalid_argument("currency must not be blank"));
        }
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_argument(format!(
                "amount must not be negative, got {}",
                amount
            )));
        }
        Ok(Self {
            amount,
            currency: currency.to_uppercase(),
        })
    }

    pub fn zero(currency: &str) -> Result<Self, DomainError> {
        Self::create(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// # Errors
    /// `CurrencyMismatch` on differing currencies, `InvalidArgument` if the sum does not fit in a
    /// `Decimal`.
    pub fn add(&self, other: &Money) -> Result<Money, DomainError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| overflow(format!("{} + {}", self, other)))?;
        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// # Errors
    /// `CurrencyMismatch` on differing currencies, `InvalidArgument` if the result would be
    /// negative.
    pub fn subtract(&self, other: &Money) -> Result<Money, DomainError> {
        self.ensure_same_currency(other)?;
        if other.amount > self.amount {
            return Err(DomainError::invalid_argument(format!(
                "cannot subtract {} from {}",
                other, self
            )));
        }
        Ok(Self {
            amount: self.amount - other.amount,
            currency: self.currency.clone(),
        })
    }

    pub fn is_greater_than(&self, other: &Money) -> Result<bool, DomainError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount > other.amount)
    }

    /// Scales the amount by a line-item quantity.
    ///
    /// # Errors
    /// `InvalidArgument` if the product does not fit in a `Decimal`.
    pub fn multiply(&self, quantity: u32) -> Result<Money, DomainError> {
        let amount = self
            .amount
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| overflow(format!("{} x {}", self, quantity)))?;
        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency.clone(),
                found: other.currency.clone(),
            });
        }
        Ok(())
    }
}

fn overflow(operation: String) -> DomainError {
    DomainError::invalid_argument(format!("amount out of range: {}", operation))
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}
