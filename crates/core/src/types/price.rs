//! Product prices in the smallest currency unit.
//!
//! Prices are stored as an `INT` column holding cents. Customers and artisans
//! type prices in whole currency units ("12.50"), so [`Price::parse_units`]
//! converts with decimal arithmetic rather than floats.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors produced when parsing a price entered in currency units.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a number")]
    NotANumber,
    /// The input is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The input has more than two decimal places.
    #[error("price can have at most two decimal places")]
    TooPrecise,
    /// The amount does not fit in the storage column.
    #[error("price is too large")]
    TooLarge,
}

/// A non-negative price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i32);

impl Price {
    /// Create a price from cents.
    #[must_use]
    pub const fn from_cents(cents: i32) -> Self {
        Self(cents)
    }

    /// Amount in cents.
    #[must_use]
    pub const fn cents(self) -> i32 {
        self.0
    }

    /// Amount in currency units (e.g. dollars).
    #[must_use]
    pub fn units(self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Parse a price typed in currency units, e.g. `"12.5"` -> 1250 cents.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the input is not a non-negative amount with
    /// at most two decimal places that fits in an `i32` number of cents.
    pub fn parse_units(input: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(input.trim()).map_err(|_| PriceError::NotANumber)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(PriceError::TooLarge)?
            .normalize();
        if cents.scale() > 0 {
            return Err(PriceError::TooPrecise);
        }

        i32::try_from(cents.mantissa())
            .map(Self)
            .map_err(|_| PriceError::TooLarge)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.units())
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        Ok(Self(<i32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
