//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price, subtotal, total and average is an i64 count of cents.  │
//! │    Only the average divides, and it rounds half up, explicitly.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price = Money::from_cents(1099);           // $10.99
//! let subtotal = price.multiply_quantity(3);     // $32.97
//! assert_eq!(subtotal.to_string(), "$32.97");
//!
//! // User input is parsed, never converted from f64
//! let typed: Money = "5,000".parse().unwrap();
//! assert_eq!(typed, Money::from_major(5000));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Cents per major currency unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Candidate items may carry negative prices until the
///   store rejects them, so the type must be able to hold them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: Serializes as the plain integer cent count
/// - **Saturating**: Arithmetic clamps at the i64 bounds instead of
///   panicking, so no stored item can make a read fail
///
/// ## Where Money is Used
/// ```text
/// BasketItem.unit_price ──► BasketItem::subtotal() ──► BasketStore::total()
///          │
///          └──────────────► BasketStore::average()
///
/// Every value ends up in BasketSummary, rendered as "$1,234.56"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(5000).cents(), 500_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * CENTS_PER_UNIT)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    ///
    /// let huge = Money::from_cents(i64::MAX / 2 + 1);
    /// assert_eq!(huge.multiply_quantity(2).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Clamps a wide intermediate back into the i64 range.
    fn saturating_from_i128(cents: i128) -> Self {
        Money(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Arithmetic mean of a set of values, rounded half away from zero to the
    /// nearest cent. An empty set averages to zero.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let prices = [Money::from_cents(100), Money::from_cents(200)];
    /// assert_eq!(Money::average_of(prices).cents(), 150);
    ///
    /// // 1 cent + 2 cents = 1.5 cents → 2 cents
    /// let odd = [Money::from_cents(1), Money::from_cents(2)];
    /// assert_eq!(Money::average_of(odd).cents(), 2);
    ///
    /// assert!(Money::average_of([]).is_zero());
    /// ```
    pub fn average_of<I>(values: I) -> Money
    where
        I: IntoIterator<Item = Money>,
    {
        // i128 so summing many large prices cannot overflow before dividing
        let (sum, count) = values
            .into_iter()
            .fold((0i128, 0i128), |(sum, count), m| (sum + m.0 as i128, count + 1));

        if count == 0 {
            return Money::zero();
        }

        let half = count / 2;
        let rounded = if sum >= 0 {
            (sum + half) / count
        } else {
            (sum - half) / count
        };
        Money::saturating_from_i128(rounded)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$1,234.56`, with the sign before the symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.major().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}${}.{:02}", sign, grouped, self.minor_part())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Sums in i128 and clamps once, so the result does not depend on order.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money::saturating_from_i128(iter.map(|m| m.0 as i128).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Errors from parsing user-typed amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' has more than two decimal places")]
    TooManyDecimals(String),

    #[error("'{0}' is too large")]
    OutOfRange(String),
}

/// Parses amounts as a person would type them into a form.
///
/// Accepts an optional sign, an optional `$`, comma thousands separators and
/// up to two decimal places: `"5000"`, `"12.5"`, `"$1,250.99"`, `"-100"`.
///
/// Negative amounts parse successfully; rejecting them is the store's job so
/// the user sees the same "price must be positive" reason either way.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let not_a_number = || ParseMoneyError::NotANumber(input.to_string());

        let (negative, rest) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        let whole: String = whole.chars().filter(|c| *c != ',').collect();
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_a_number());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_a_number());
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals(input.to_string()));
        }

        let out_of_range = || ParseMoneyError::OutOfRange(input.to_string());
        let major: i64 = whole.parse().map_err(|_| out_of_range())?;
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| not_a_number())? * 10,
            _ => fraction.parse().map_err(|_| not_a_number())?,
        };

        let cents = major
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(out_of_range)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
