// ============================================================================
// Exact Decimal
// Arbitrary-precision decimal value parsed from text
// ============================================================================

use super::config::{DecimalConfig, Rounding, MAX_DECIMAL_PLACES};
use super::errors::{NumericError, NumericResult};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest scale a `rust_decimal::Decimal` can carry.
const RUST_DECIMAL_MAX_SCALE: i64 = 28;

/// Exact base-10 number with unbounded precision.
///
/// Addition, subtraction and multiplication never round. Division rounds the
/// quotient to a configurable number of fractional digits (20 by default,
/// half-up). Equality, ordering and hashing follow the numeric value, so
/// `1.50` and `1.5` are the same value.
///
/// # Example
/// ```
/// use decimal_kit::numeric::ExactDecimal;
///
/// let price: ExactDecimal = "19.99".parse().unwrap();
/// let qty: ExactDecimal = "3".parse().unwrap();
/// assert_eq!(price.times(&qty).to_string(), "59.97");
/// assert_eq!(price.to_fixed(1), "20.0");
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactDecimal(BigDecimal);

impl ExactDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a decimal-value string (`"1.5"`, `"-0.001"`, `"2e3"`).
    ///
    /// # Errors
    /// Returns `Parse` if the text is not a finite decimal number.
    #[inline]
    pub fn parse(s: &str) -> NumericResult<Self> {
        s.parse()
    }

    /// Wrap an existing `BigDecimal`.
    #[inline]
    pub fn from_big_decimal(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Borrow the underlying `BigDecimal`.
    #[inline]
    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Unwrap into the underlying `BigDecimal`.
    #[inline]
    pub fn into_big_decimal(self) -> BigDecimal {
        self.0
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Check if value is zero (any representation: `0`, `0.00`, `-0`).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.sign() == Sign::Plus
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// `self >= other`, compared exactly.
    #[inline]
    pub fn gte(&self, other: &Self) -> bool {
        self.0 >= other.0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact sum.
    #[inline]
    pub fn plus(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    /// Exact difference.
    #[inline]
    pub fn minus(&self, other: &Self) -> Self {
        Self(&self.0 - &other.0)
    }

    /// Exact product.
    #[inline]
    pub fn times(&self, other: &Self) -> Self {
        Self(&self.0 * &other.0)
    }

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Quotient rounded to 20 fractional digits, half-up.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `other` is zero.
    #[inline]
    pub fn checked_div(&self, other: &Self) -> NumericResult<Self> {
        self.checked_div_with(other, &DecimalConfig::default())
    }

    /// Quotient rounded as described by `config`.
    ///
    /// The quotient is computed exactly on integers up to one guard digit,
    /// with a sticky digit appended when the division leaves a remainder, so
    /// the final rounding sees the same ties as the exact quotient would.
    ///
    /// # Errors
    /// - `DivisionByZero` if `other` is zero
    /// - `InvalidConfig` if `config` fails validation
    /// - `Overflow` if the operand exponents are too far apart to scale
    pub fn checked_div_with(&self, other: &Self, config: &DecimalConfig) -> NumericResult<Self> {
        if other.is_zero() {
            tracing::debug!(dividend = %self, "division by zero");
            return Err(NumericError::DivisionByZero);
        }
        config.validate().map_err(NumericError::InvalidConfig)?;

        let (x_digits, x_scale) = self.0.as_bigint_and_exponent();
        let (y_digits, y_scale) = other.0.as_bigint_and_exponent();

        // Quotient digits at `places + 1` fractional positions
        let guard_scale = i64::from(config.division_places) + 1;
        let shift = guard_scale
            .checked_add(y_scale)
            .and_then(|s| s.checked_sub(x_scale))
            .ok_or(NumericError::Overflow)?;

        let (numerator, denominator) = if shift >= 0 {
            (x_digits * pow10(shift)?, y_digits)
        } else {
            (x_digits, y_digits * pow10(-shift)?)
        };

        let quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;

        let mut digits = quotient * BigInt::from(10u8);
        if !remainder.is_zero() {
            let negative = (numerator.sign() == Sign::Minus) != (denominator.sign() == Sign::Minus);
            digits += BigInt::from(if negative { -1i8 } else { 1i8 });
        }

        let rounded = BigDecimal::new(digits, guard_scale + 1)
            .with_scale_round(i64::from(config.division_places), config.rounding.into());

        Ok(Self(rounded))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render with exactly `places` fractional digits, rounding half-up.
    #[inline]
    pub fn to_fixed(&self, places: u32) -> String {
        self.to_fixed_with(places, Rounding::HalfUp)
    }

    /// Render with exactly `places` fractional digits using `rounding`.
    ///
    /// A negative value keeps its sign even when it rounds to zero
    /// (`-0.001` renders as `-0.00`).
    ///
    /// The string holds `places` fractional digits, so widths beyond
    /// `MAX_DECIMAL_PLACES` are not checked here; the string-level
    /// `to_fixed` functions reject them.
    pub fn to_fixed_with(&self, places: u32, rounding: Rounding) -> String {
        let plain = self
            .0
            .with_scale_round(i64::from(places), rounding.into())
            .to_plain_string();

        if self.is_negative() && !plain.starts_with('-') {
            format!("-{}", plain)
        } else {
            plain
        }
    }

    // ========================================================================
    // Conversion to/from rust_decimal (for fixed-width callers)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if more than 28 significant fractional digits remain
    /// - `Overflow` if the value exceeds the 96-bit mantissa
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let (mut digits, mut scale) = self.0.normalized().as_bigint_and_exponent();

        if scale < 0 {
            digits *= pow10(-scale)?;
            scale = 0;
        }
        if scale > RUST_DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let mantissa = digits.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

/// 10^exp as a big integer.
fn pow10(exp: i64) -> NumericResult<BigInt> {
    let exp = u32::try_from(exp).map_err(|_| NumericError::Overflow)?;
    Ok(BigInt::from(10u8).pow(exp))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromStr for ExactDecimal {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - "1.5e3" -> 1500
    ///
    /// Values whose scale exceeds `MAX_DECIMAL_PLACES` in either direction
    /// (`"1e9223372036854775807"`) are rejected; every later rendering or
    /// alignment of such a value would need that many digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigDecimal::from_str(s).map_err(|err| {
            tracing::debug!(input = s, error = %err, "rejected decimal input");
            NumericError::parse(s)
        })?;

        let (_, scale) = value.as_bigint_and_exponent();
        if scale.unsigned_abs() > u64::from(MAX_DECIMAL_PLACES) {
            tracing::debug!(
                input = s,
                scale,
                "rejected decimal input: exponent out of range"
            );
            return Err(NumericError::parse(s));
        }

        Ok(Self(value))
    }
}

impl From<rust_decimal::Decimal> for ExactDecimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self(BigDecimal::new(BigInt::from(d.mantissa()), i64::from(d.scale())))
    }
}

impl From<i64> for ExactDecimal {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for ExactDecimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl Add for ExactDecimal {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn add(self, rhs: &'a ExactDecimal) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sub for ExactDecimal {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<'a> Sub<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn sub(self, rhs: &'a ExactDecimal) -> Self::Output {
        self.minus(rhs)
    }
}

impl Mul for ExactDecimal {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a> Mul<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn mul(self, rhs: &'a ExactDecimal) -> Self::Output {
        self.times(rhs)
    }
}

impl Neg for ExactDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl PartialEq<i64> for ExactDecimal {
    fn eq(&self, other: &i64) -> bool {
        self.0 == BigDecimal::from(*other)
    }
}

impl PartialOrd<i64> for ExactDecimal {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.0.cmp(&BigDecimal::from(*other)))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDecimal({})", self)
    }
}

/// Plain notation with trailing fractional zeros removed: `10`, `0.25`, `-3`.
impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.normalized().to_plain_string())
    }
}

// ============================================================================
// Serde (decimal strings on the wire)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for ExactDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ExactDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(d("123"), 123);
        assert_eq!(d("-0.001").to_string(), "-0.001");
        assert_eq!(d("1.5e3"), 1500);
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "abc", "1.2.3", "NaN", "Infinity", "1,5"] {
            assert_eq!(
                ExactDecimal::parse(input),
                Err(NumericError::parse(input)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_huge_exponents() {
        for input in ["1e9223372036854775807", "1e-9223372036854775807", "5e1000000001"] {
            assert_eq!(ExactDecimal::parse(input), Err(NumericError::parse(input)));
        }

        let edge = format!("1e{}", MAX_DECIMAL_PLACES);
        assert!(ExactDecimal::parse(&edge).is_ok());
        assert!(ExactDecimal::parse("1e-1000000000").is_ok());
    }

    #[test]
    fn test_display_normalizes() {
        assert_eq!(d("1.500").to_string(), "1.5");
        assert_eq!(d("100").to_string(), "100");
        assert_eq!(d("1e3").to_string(), "1000");
        assert_eq!(d("0.000").to_string(), "0");
        assert_eq!(d("-0").to_string(), "0");
        assert_eq!(d("-12.340").to_string(), "-12.34");
        assert_eq!(format!("{:>6}", d("2.50")), "   2.5");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(d("1.50"), d("1.5"));
        assert_eq!(d("0"), d("-0.000"));
        assert!(d("1.50").gte(&d("1.5")));
        assert!(d("-1").gte(&d("-1.0001")));
        assert!(!d("0.1").gte(&d("0.10000000000000000001")));
    }

    #[test]
    fn test_predicates() {
        assert!(d("0.00").is_zero());
        assert!(!d("0.01").is_zero());
        assert!(d("0.01").is_positive());
        assert!(d("-0.01").is_negative());
        assert!(!d("-0").is_negative());
        assert_eq!(d("-4.2").abs(), d("4.2"));
    }

    #[test]
    fn test_exact_arithmetic() {
        assert_eq!(d("0.1").plus(&d("0.2")).to_string(), "0.3");
        assert_eq!(d("1").minus(&d("2.5")).to_string(), "-1.5");
        assert_eq!(d("2.5").times(&d("4")).to_string(), "10");
        assert_eq!(
            d("123456789012345678901234567890").times(&d("10")).to_string(),
            "1234567890123456789012345678900"
        );
        assert_eq!(
            (d("0.000000000000000000000000000001") + d("1")).to_string(),
            "1.000000000000000000000000000001"
        );
    }

    #[test]
    fn test_operator_traits() {
        let a = d("3");
        let b = d("1.5");
        assert_eq!(&a + &b, d("4.5"));
        assert_eq!(&a - &b, d("1.5"));
        assert_eq!(&a * &b, d("4.5"));
        assert_eq!(-a.clone(), d("-3"));
        assert_eq!(a.clone() * b.clone() - b, d("3"));
    }

    #[test]
    fn test_checked_div_default_places() {
        assert_eq!(
            d("1").checked_div(&d("3")).unwrap().to_string(),
            "0.33333333333333333333"
        );
        assert_eq!(
            d("2").checked_div(&d("3")).unwrap().to_string(),
            "0.66666666666666666667"
        );
        assert_eq!(d("1").checked_div(&d("4")).unwrap().to_string(), "0.25");
        assert_eq!(d("-10").checked_div(&d("4")).unwrap().to_string(), "-2.5");
        assert_eq!(d("1e3").checked_div(&d("0.001")).unwrap(), 1_000_000);
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(d("1").checked_div(&d("0")), Err(NumericError::DivisionByZero));
        assert_eq!(d("0").checked_div(&d("-0.000")), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_checked_div_rounding_modes() {
        let zero_places = |rounding| DecimalConfig::new(0, rounding);

        assert_eq!(
            d("2").checked_div_with(&d("3"), &zero_places(Rounding::HalfUp)).unwrap(),
            1
        );
        assert_eq!(
            d("-2").checked_div_with(&d("3"), &zero_places(Rounding::HalfUp)).unwrap(),
            -1
        );
        assert_eq!(
            d("1").checked_div_with(&d("3"), &zero_places(Rounding::Ceiling)).unwrap(),
            1
        );
        assert_eq!(
            d("-1").checked_div_with(&d("3"), &zero_places(Rounding::Floor)).unwrap(),
            -1
        );
        assert_eq!(
            d("-1").checked_div_with(&d("3"), &zero_places(Rounding::Down)).unwrap(),
            0
        );

        // 0.125 is an exact tie at two places
        let two = |rounding| DecimalConfig::new(2, rounding);
        assert_eq!(
            d("1").checked_div_with(&d("8"), &two(Rounding::HalfUp)).unwrap(),
            d("0.13")
        );
        assert_eq!(
            d("1").checked_div_with(&d("8"), &two(Rounding::HalfEven)).unwrap(),
            d("0.12")
        );
        assert_eq!(
            d("1").checked_div_with(&d("8"), &two(Rounding::HalfDown)).unwrap(),
            d("0.12")
        );

        // 0.1250000001 is not a tie, so every "half" mode goes up
        assert_eq!(
            d("1.0000000008")
                .checked_div_with(&d("8"), &two(Rounding::HalfDown))
                .unwrap(),
            d("0.13")
        );
    }

    #[test]
    fn test_checked_div_invalid_config() {
        let config = DecimalConfig::default().with_division_places(u32::MAX);
        assert!(matches!(
            d("1").checked_div_with(&d("3"), &config),
            Err(NumericError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(d("1.005").to_fixed(2), "1.01");
        assert_eq!(d("1.004").to_fixed(2), "1.00");
        assert_eq!(d("2.5").to_fixed(0), "3");
        assert_eq!(d("-2.5").to_fixed(0), "-3");
        assert_eq!(d("3").to_fixed(4), "3.0000");
        assert_eq!(d("0.5").to_fixed(3), "0.500");
        assert_eq!(d("1e2").to_fixed(1), "100.0");
        assert_eq!(d("0.0001").to_fixed(2), "0.00");
        assert_eq!(d("-0.001").to_fixed(2), "-0.00");
        assert_eq!(d("-0").to_fixed(2), "0.00");
        assert_eq!(d("-0.006").to_fixed(2), "-0.01");
    }

    #[test]
    fn test_to_fixed_with_rounding() {
        assert_eq!(d("2.5").to_fixed_with(0, Rounding::HalfEven), "2");
        assert_eq!(d("3.5").to_fixed_with(0, Rounding::HalfEven), "4");
        assert_eq!(d("1.99").to_fixed_with(1, Rounding::Down), "1.9");
        assert_eq!(d("-1.91").to_fixed_with(1, Rounding::Floor), "-2.0");
        assert_eq!(d("1.01").to_fixed_with(1, Rounding::Up), "1.1");
    }

    #[test]
    fn test_to_decimal() {
        use rust_decimal::Decimal;

        let x = d("123.45").to_decimal().unwrap();
        assert_eq!(x, Decimal::new(12345, 2));

        let y = d("1e5").to_decimal().unwrap();
        assert_eq!(y, Decimal::new(100_000, 0));

        assert_eq!(
            d("0.00000000000000000000000000001").to_decimal(),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(d("1e40").to_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let x = ExactDecimal::from(Decimal::new(-12345, 3));
        assert_eq!(x.to_string(), "-12.345");
        assert_eq!(x.to_decimal().unwrap(), Decimal::new(-12345, 3));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExactDecimal>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let x = d("12.50");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"12.5\"");

        let back: ExactDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);

        let bad: Result<ExactDecimal, _> = serde_json::from_str("\"twelve\"");
        assert!(bad.is_err());
    }
}
