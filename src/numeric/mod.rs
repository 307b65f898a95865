// ============================================================================
// Numeric Module
// Exact decimal arithmetic on string-encoded numbers
// ============================================================================
//
// This module provides:
// - ExactDecimal: arbitrary-precision decimal value (chainable results)
// - gte/mul/plus/minus/div/to_fixed/is_zero: one-shot operations on text
// - DecimalConfig/Rounding: division precision and rounding rule
// - NumericError: error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - Parse failures are returned, never defaulted
// - Division by zero is an error, never a sentinel value
// - Round half-up unless told otherwise

mod config;
mod errors;
mod exact_decimal;
mod ops;

pub use config::{DecimalConfig, Rounding, DEFAULT_DIVISION_PLACES, MAX_DECIMAL_PLACES};
pub use errors::{NumericError, NumericResult};
pub use exact_decimal::ExactDecimal;
pub use ops::{div, div_with, gte, is_zero, minus, mul, plus, to_fixed, to_fixed_with};
