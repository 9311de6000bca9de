use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::TransactionError;

/// Fixed-point currency amount, stored as a whole number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const SCALE: i64 = 100; // 2 decimal places
    pub const TARGET_DECIMALS: u32 = 2;
    pub const ZERO: Money = Money(0);

    /// Digits left of the point in the largest amount that still fits in cents.
    const MAX_WHOLE_DIGITS: i64 = 17;

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Rounds half to even onto cents. `None` when the result does not fit.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        let rounded =
            value.round_dp_with_strategy(Self::TARGET_DECIMALS, RoundingStrategy::MidpointNearestEven);
        let factor = 10i128.pow(Self::TARGET_DECIMALS - rounded.scale());
        let cents = rounded.mantissa().checked_mul(factor)?;
        i64::try_from(cents).ok().map(Self)
    }

    /// The explicit text-to-amount step that runs before any account operation.
    ///
    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with surrounding whitespace; anything
    /// else is a [`TransactionError::ParseError`]. Well-formed numbers too large for cents
    /// are [`TransactionError::OutOfRange`], and ones too small to reach a cent become zero.
    /// The sign is left for the account to judge.
    pub fn parse_amount(text: &str) -> Result<Self, TransactionError> {
        let (negative, digits, exponent) =
            scan_number(text.trim()).ok_or(TransactionError::ParseError)?;

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }

        // value is digits * 10^exponent, with `whole` digits before the point
        let whole = digits.len() as i64 + exponent;
        if whole > Self::MAX_WHOLE_DIGITS {
            return Err(TransactionError::OutOfRange);
        }
        if whole < -(Self::TARGET_DECIMALS as i64) {
            return Ok(Self::ZERO);
        }

        // cents plus one rounding digit; a trailing 1 stands in for any nonzero tail
        let keep = (whole + Self::TARGET_DECIMALS as i64 + 1) as usize;
        let (kept, dropped) = digits.split_at(keep.min(digits.len()));
        let mut mantissa: i128 = kept.parse().map_err(|_| TransactionError::ParseError)?;
        let mut exponent = exponent + dropped.len() as i64;
        if dropped.bytes().any(|b| b != b'0') {
            mantissa = mantissa * 10 + 1;
            exponent -= 1;
        }
        if exponent > 0 {
            mantissa *= 10i128.pow(exponent as u32);
            exponent = 0;
        }
        if negative {
            mantissa = -mantissa;
        }

        let decimal = Decimal::try_from_i128_with_scale(mantissa, (-exponent) as u32)
            .map_err(|_| TransactionError::OutOfRange)?;
        Self::from_decimal(decimal).ok_or(TransactionError::OutOfRange)
    }
}

/// Splits a number into its sign, its digits with the point removed, and the power of
/// ten they are scaled by. `None` unless the whole text is a plain or scientific decimal.
fn scan_number(text: &str) -> Option<(bool, String, i64)> {
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (coefficient, exponent) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };
    let (int, frac) = coefficient.split_once('.').unwrap_or((coefficient, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
        return None;
    }

    let exponent = match exponent {
        None => 0,
        Some(exp) => {
            let magnitude = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            if magnitude.is_empty() || !all_digits(magnitude) {
                return None;
            }
            // past this either bound check in parse_amount already decides
            let limit = i64::from(u32::MAX);
            exp.parse::<i64>()
                .unwrap_or(if exp.starts_with('-') { -limit } else { limit })
                .clamp(-limit, limit)
        }
    };

    Some((negative, format!("{}{}", int, frac), exponent - frac.len() as i64))
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}
