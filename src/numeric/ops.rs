// ============================================================================
// String Arithmetic
// Operations over decimal values given as text
// ============================================================================
//
// Each function parses its operands independently, performs one operation
// and returns. Parse failures surface as `NumericError::Parse` untouched.

use super::config::{DecimalConfig, Rounding, MAX_DECIMAL_PLACES};
use super::errors::{NumericError, NumericResult};
use super::exact_decimal::ExactDecimal;

#[inline]
fn operands(x: &str, y: &str) -> NumericResult<(ExactDecimal, ExactDecimal)> {
    Ok((x.parse()?, y.parse()?))
}

/// `x >= y`, compared exactly.
pub fn gte(x: &str, y: &str) -> NumericResult<bool> {
    let (x, y) = operands(x, y)?;
    Ok(x.gte(&y))
}

/// Exact product `x × y`.
pub fn mul(x: &str, y: &str) -> NumericResult<ExactDecimal> {
    let (x, y) = operands(x, y)?;
    Ok(x.times(&y))
}

/// Exact sum `x + y`.
pub fn plus(x: &str, y: &str) -> NumericResult<ExactDecimal> {
    let (x, y) = operands(x, y)?;
    Ok(x.plus(&y))
}

/// Exact difference `x − y`.
pub fn minus(x: &str, y: &str) -> NumericResult<ExactDecimal> {
    let (x, y) = operands(x, y)?;
    Ok(x.minus(&y))
}

/// Quotient `x ÷ y`, rounded half-up to 20 fractional digits.
///
/// # Errors
/// `DivisionByZero` when `y` is numerically zero, `Parse` on malformed input.
pub fn div(x: &str, y: &str) -> NumericResult<ExactDecimal> {
    div_with(x, y, &DecimalConfig::default())
}

/// Quotient `x ÷ y` rounded as described by `config`.
pub fn div_with(x: &str, y: &str, config: &DecimalConfig) -> NumericResult<ExactDecimal> {
    let (x, y) = operands(x, y)?;
    x.checked_div_with(&y, config)
}

/// Render `x` with exactly `places` fractional digits, rounding half-up.
pub fn to_fixed(x: &str, places: u32) -> NumericResult<String> {
    to_fixed_with(x, places, Rounding::HalfUp)
}

/// Render `x` with exactly `places` fractional digits using `rounding`.
///
/// # Errors
/// `InvalidConfig` when `places` exceeds `MAX_DECIMAL_PLACES`, `Parse` on
/// malformed input.
pub fn to_fixed_with(x: &str, places: u32, rounding: Rounding) -> NumericResult<String> {
    if places > MAX_DECIMAL_PLACES {
        return Err(NumericError::InvalidConfig(format!(
            "Fixed-point places cannot exceed {}",
            MAX_DECIMAL_PLACES
        )));
    }
    let x: ExactDecimal = x.parse()?;
    Ok(x.to_fixed_with(places, rounding))
}

/// Whether `x` is numerically zero (`"0"`, `"0.00"`, `"-0"` all are).
pub fn is_zero(x: &str) -> NumericResult<bool> {
    let x: ExactDecimal = x.parse()?;
    Ok(x.is_zero())
}
