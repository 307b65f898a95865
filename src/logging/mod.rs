// ============================================================================
// Logging Module
// Categorized, timestamp-prefixed log lines emitted through `tracing`
// ============================================================================
//
// Lines look like:
//
//     [2024-02-29 08:05:09] orders filled 3 at 19.99
//
// The bracketed local timestamp comes first, then the logger's category (if
// any), then every part separated by a single space. Lines are emitted as
// `tracing` events at INFO level with the category as a field; install a
// subscriber (e.g. `init_logging` with the `logging` feature) to see them.

use crate::time::{format_datetime, DATE_FORMAT};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write};

/// Logger that prefixes every line with a timestamp and optional category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logger {
    category: Option<String>,
}

impl Logger {
    /// Logger whose lines carry `category` after the timestamp.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    /// Logger without a category.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Build a line stamped with the current local time.
    pub fn format_line(&self, parts: &[&dyn fmt::Display]) -> String {
        self.format_line_at(&Local::now(), parts)
    }

    /// Build a line stamped with `at`.
    pub fn format_line_at<Tz>(&self, at: &DateTime<Tz>, parts: &[&dyn fmt::Display]) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut line = String::with_capacity(DATE_FORMAT.len() + 32);
        line.push('[');
        line.push_str(&format_datetime(at));
        line.push(']');

        if let Some(category) = &self.category {
            line.push(' ');
            line.push_str(category);
        }

        for part in parts {
            // Writing into a String cannot fail
            let _ = write!(line, " {}", part);
        }

        line
    }

    /// Emit a line at INFO level.
    pub fn log(&self, parts: &[&dyn fmt::Display]) {
        let line = self.format_line(parts);
        tracing::info!(category = self.category().unwrap_or_default(), "{}", line);
    }

    /// Build a line whose last part is `value` rendered as JSON.
    #[cfg(feature = "serde")]
    pub fn format_json_line<T: serde::Serialize>(
        &self,
        label: &str,
        value: &T,
    ) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(value)?;
        Ok(self.format_line(&[&label, &json]))
    }

    /// Emit `label` followed by `value` rendered as JSON.
    ///
    /// # Errors
    /// Returns the serializer error if `value` cannot be rendered as JSON.
    #[cfg(feature = "serde")]
    pub fn log_json<T: serde::Serialize>(
        &self,
        label: &str,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        let line = self.format_json_line(label, value)?;
        tracing::info!(category = self.category().unwrap_or_default(), "{}", line);
        Ok(())
    }
}

/// Logger bound to `category`.
pub fn get_log(category: &str) -> Logger {
    Logger::new(category)
}

/// Emit an uncategorized line.
pub fn log(parts: &[&dyn fmt::Display]) {
    Logger::root().log(parts);
}

/// Install a `tracing-subscriber` fmt subscriber as the global default.
///
/// The subscriber omits its own timestamp since every line carries one.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
#[cfg(feature = "logging")]
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .try_init()
}
