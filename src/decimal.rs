//! Two-decimal formatting for computed areas.
//!
//! Rounding is half-up on the shortest decimal representation of the value,
//! so `0.125` prints as `0.13` and `1.005` as `1.01` even though neither is
//! exactly representable as an `f64`.

use std::fmt;

/// An `f64` that displays with exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPlaces(pub f64);

impl fmt::Display for TwoPlaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return write!(f, "NaN");
        }
        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return write!(f, "{}Infinity", sign);
        }

        // `{}` on f64 yields the shortest round-trip digits, never an exponent.
        let shortest = value.abs().to_string();
        let (whole, frac) = shortest.split_once('.').unwrap_or((&shortest, ""));

        let mut digits: Vec<u8> = whole
            .bytes()
            .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
            .collect();

        if frac.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == b'9' {
                    *digit = b'0';
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, b'1');
            }
        }

        if value.is_sign_negative() {
            write!(f, "-")?;
        }
        let point = digits.len() - 2;
        for &digit in &digits[..point] {
            write!(f, "{}", digit as char)?;
        }
        write!(f, ".")?;
        for &digit in &digits[point..] {
            write!(f, "{}", digit as char)?;
        }
        Ok(())
    }
}
