use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Money amount represented as **integer minor units** (cents).
///
/// Use this type for all monetary values in the ledger (expense amounts,
/// shares, balance totals) to avoid floating-point drift. The magnitude is
/// currency-agnostic: the ledger never attaches a currency symbol.
///
/// # Examples
///
/// ```rust
/// use ledger::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input accepts `.` or `,` as decimal separator and at
/// most two fractional digits:
///
/// ```rust
/// use ledger::MoneyCents;
///
/// assert_eq!("90".parse::<MoneyCents>().unwrap().cents(), 9000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Splits the amount into `n` parts that sum back exactly to `self`.
    ///
    /// Largest-remainder allocation: every part gets `self / n` rounded
    /// towards zero, and the leftover cents are handed out one by one from
    /// the front. Callers rely on the ordering: part `i` belongs to
    /// participant `i`.
    ///
    /// Returns an empty vector for `n == 0`.
    #[must_use]
    pub fn split_evenly(self, n: usize) -> Vec<MoneyCents> {
        if n == 0 {
            return Vec::new();
        }
        let n_i64 = n as i64;
        let base = self.0 / n_i64;
        let leftover = (self.0 % n_i64).unsigned_abs() as usize;
        let step = if self.0 < 0 { -1 } else { 1 };

        (0..n)
            .map(|i| MoneyCents(base + if i < leftover { step } else { 0 }))
            .collect()
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 - rhs.0)
    }
}

impl SubAssign for MoneyCents {
    fn sub_assign(&mut self, rhs: MoneyCents) {
        self.0 -= rhs.0;
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl FromStr for MoneyCents {
    type Err = LedgerError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `-`.
    /// Rejects empty input and more than two fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidAmount(s.trim().to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::InvalidAmount("empty amount".to_string()));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let digits = digits.replace(',', ".");
        let (units_str, frac_str) = match digits.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (digits.as_str(), ""),
        };

        if units_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units_str) || !all_digits(frac_str) {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };
        let frac: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => frac_str.parse().map_err(|_| invalid())?,
            _ => {
                return Err(LedgerError::InvalidAmount(
                    "too many decimals".to_string(),
                ));
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(|| LedgerError::InvalidAmount("amount too large".to_string()))?;

        Ok(MoneyCents(if negative { -total } else { total }))
    }
}
