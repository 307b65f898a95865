// ============================================================================
// Decimal Kit Library
// Exact decimal arithmetic on string-encoded numbers and small helpers
// ============================================================================

//! # Decimal Kit
//!
//! Stateless helpers for code that carries numbers around as text.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** on strings (`gte`, `mul`, `plus`, `minus`,
//!   `div`, `to_fixed`, `is_zero`) backed by arbitrary-precision integers
//! - **Chainable results** via [`numeric::ExactDecimal`]
//! - **Time helpers**: `YYYY-MM-DD HH:mm:ss` formatting, minute buckets,
//!   async `wait` (feature `async`)
//! - **SHA-256** hex digests
//! - **Categorized logging** through `tracing`
//!
//! ## Example
//!
//! ```rust
//! use decimal_kit::prelude::*;
//!
//! assert_eq!(gte("1.50", "1.5"), Ok(true));
//! assert_eq!(mul("2.5", "4").unwrap().to_string(), "10");
//! assert_eq!(div("1", "3").unwrap().to_fixed(2), "0.33");
//! assert_eq!(to_fixed("1.005", 2).unwrap(), "1.01");
//!
//! // Results chain
//! let total = plus("0.1", "0.2").unwrap();
//! assert_eq!(total.to_fixed(2), "0.30");
//!
//! // Malformed input is an error, never a default
//! assert!(matches!(is_zero("abc"), Err(NumericError::Parse { .. })));
//! ```

pub mod hash;
pub mod logging;
pub mod numeric;
pub mod time;

// Re-exports for convenience
pub mod prelude {
    pub use crate::hash::sha256;
    pub use crate::logging::{get_log, Logger};
    pub use crate::numeric::{
        div, gte, is_zero, minus, mul, plus, to_fixed, DecimalConfig, ExactDecimal, NumericError,
        NumericResult, Rounding,
    };
    pub use crate::time::{date, date_utc, minute_ms, utc_time_ms};
    #[cfg(feature = "async")]
    pub use crate::time::wait;
}
