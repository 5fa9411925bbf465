use num_bigint::{BigInt, BigUint, Sign};
use thiserror::Error;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unsupported base {0}, expected 2..=36")]
    UnsupportedBase(u32),
    #[error("Empty numeral")]
    Empty,
    #[error("Invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
}

fn check_base(base: u32) -> Result<(), DecodeError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedBase(base))
    }
}

/// Decodes a numeral written in `base` into an exact integer.
///
/// Digits are `0-9` followed by `a-z` (case-insensitive), so base 36 is the
/// widest radix accepted. A single leading `+` or `-` is allowed; anything
/// else that is not a digit of `base` is rejected with the offending
/// character and its position.
pub fn decode(value: &str, base: u32) -> Result<BigInt, DecodeError> {
    check_base(base)?;

    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() {
        return Err(DecodeError::Empty);
    }
    let offset = value.len() - digits.len();

    let mut radix_digits = Vec::with_capacity(digits.len());
    for (i, c) in digits.chars().enumerate() {
        let digit = c.to_digit(base).ok_or(DecodeError::InvalidDigit {
            digit: c,
            position: i + offset,
            base,
        })?;
        radix_digits.push(digit as u8);
    }

    // every digit was checked against `base` above
    let magnitude = BigUint::from_radix_be(&radix_digits, base).unwrap_or_default();
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Writes `value` in `base` with lower-case digits. Inverse of [`decode`].
pub fn encode(value: &BigInt, base: u32) -> Result<String, DecodeError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
