//! Monetary amounts.
//!
//! [`Money`] pairs a [`Decimal`] amount with a [`Currency`]. Amounts are
//! rounded to cents (half away from zero) whenever a value is constructed,
//! so every figure that leaves the engine is already at its final precision.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places money is kept at.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a decimal to cents, with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use ccs_engine::models::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("12.357").unwrap()), Decimal::from_str("12.36").unwrap());
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a decimal as whole dollars with thousands separators, e.g. `530,000`.
pub fn format_whole_dollars(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = whole.abs().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Currency of a [`Money`] amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Australian Dollar.
    #[default]
    Aud,
}

impl Currency {
    /// Returns the ISO 4217 code of this currency.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Aud => "AUD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount of money in some [`Currency`].
///
/// Adding or subtracting amounts in different currencies is a programming
/// error and panics.
///
/// # Example
///
/// ```
/// use ccs_engine::models::{Currency, Money};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let fee = Money::aud(Decimal::from_str("480").unwrap());
/// let subsidy = Money::aud(Decimal::from_str("412.8").unwrap());
///
/// let gap = fee - subsidy;
/// assert_eq!(gap.amount, Decimal::from_str("67.20").unwrap());
/// assert_eq!(gap.currency, Currency::Aud);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, rounded to cents.
    pub amount: Decimal,
    /// The currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new amount in the given currency, rounded to cents.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: round_money(amount),
            currency,
        }
    }

    /// Creates a new amount in Australian dollars, rounded to cents.
    pub fn aud(amount: Decimal) -> Self {
        Self::new(amount, Currency::Aud)
    }

    /// Zero Australian dollars.
    pub fn zero() -> Self {
        Self::aud(Decimal::ZERO)
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        assert_eq!(
            self.currency, rhs.currency,
            "cannot add money with different currencies"
        );
        Money::new(self.amount + rhs.amount, self.currency)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        assert_eq!(
            self.currency, rhs.currency,
            "cannot subtract money with different currencies"
        );
        Money::new(self.amount - rhs.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, multiplier: Decimal) -> Money {
        Money::new(self.amount * multiplier, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = round_money(self.amount).abs();
        let whole = cents.trunc();
        let fraction = ((cents - whole) * Decimal::ONE_HUNDRED).trunc();
        let sign = if self.amount.is_sign_negative() && !cents.is_zero() {
            "-"
        } else {
            ""
        };
        write!(
            f,
            "{sign}${}.{:0>2} {}",
            group_thousands(&whole.normalize().to_string()),
            fraction.normalize().to_string(),
            self.currency
        )
    }
}
