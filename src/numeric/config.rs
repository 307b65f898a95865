// ============================================================================
// Decimal Configuration
// Division precision and rounding behaviour
// ============================================================================

use bigdecimal::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a division may be asked to produce.
pub const MAX_DECIMAL_PLACES: u32 = 1_000_000_000;

/// Fractional digits kept by division when no configuration is given.
pub const DEFAULT_DIVISION_PLACES: u32 = 20;

// ============================================================================
// Rounding
// ============================================================================

/// Rounding rule applied when a value is cut to a fixed number of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    #[default]
    HalfUp,
    /// Nearest neighbour, ties towards zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    HalfEven,
}

impl From<Rounding> for RoundingMode {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Up => RoundingMode::Up,
            Rounding::Down => RoundingMode::Down,
            Rounding::Ceiling => RoundingMode::Ceiling,
            Rounding::Floor => RoundingMode::Floor,
            Rounding::HalfUp => RoundingMode::HalfUp,
            Rounding::HalfDown => RoundingMode::HalfDown,
            Rounding::HalfEven => RoundingMode::HalfEven,
        }
    }
}

// ============================================================================
// Decimal Configuration
// ============================================================================

/// Settings for operations whose exact result cannot always be represented.
///
/// Addition, subtraction and multiplication are always exact and ignore this.
/// Division rounds its quotient to `division_places` fractional digits using
/// `rounding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalConfig {
    /// Fractional digits kept in a quotient
    pub division_places: u32,

    /// Rounding rule for the last kept digit
    pub rounding: Rounding,
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            division_places: DEFAULT_DIVISION_PLACES,
            rounding: Rounding::HalfUp,
        }
    }
}

impl DecimalConfig {
    pub fn new(division_places: u32, rounding: Rounding) -> Self {
        Self {
            division_places,
            rounding,
        }
    }

    /// Builder method: Set the number of fractional digits kept by division
    pub fn with_division_places(mut self, places: u32) -> Self {
        self.division_places = places;
        self
    }

    /// Builder method: Set the rounding rule
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.division_places > MAX_DECIMAL_PLACES {
            return Err(format!(
                "Division places cannot exceed {}",
                MAX_DECIMAL_PLACES
            ));
        }

        Ok(())
    }
}
