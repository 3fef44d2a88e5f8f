//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] of the provided `amount` in the provided
    /// [`Currency`].
    #[must_use]
    pub fn new(amount: impl Into<Decimal>, currency: Currency) -> Self {
        Self {
            amount: amount.into(),
            currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        let symbol = currency.symbol();
        match amount.is_integer().then(|| amount.to_i128()).flatten() {
            Some(int) => write!(f, "{symbol}{int}"),
            None => write!(f, "{symbol}{}", amount.normalize()),
        }
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,
    }
}

impl Currency {
    /// Returns the symbol this [`Currency`] is displayed with.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
        }
    }
}

/// Parses a plain amount of money (without any [`Currency`]).
///
/// Accepts integers, decimals and scientific notation, ignoring surrounding
/// whitespace. `NaN`, infinities and values out of the [`Decimal`] range are
/// rejected.
///
/// # Errors
///
/// If the provided string is not a number.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| ParseAmountError)
}

/// Error of parsing an amount of money.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid amount of money")]
pub struct ParseAmountError;
