//! Error types for record expansion.
//!
//! Most structural surprises during expansion degrade gracefully and never
//! error: `None` fields are skipped, non-record values under `flatten` keep
//! their wrapping key, and container elements that are not records pass
//! through as leaves. The recoverable error surface is therefore small:
//!
//! - [`Error::NotARecord`]: the dynamic entry point
//!   [`try_map_any`](crate::try_map_any) was handed a value that is not a
//!   record (the panicking [`map_any`](crate::map_any) aborts instead)
//! - [`Error::Conversion`]: a `TryFrom<Value>` extraction found an
//!   incompatible shape
//!
//! ## Examples
//!
//! ```rust
//! use structmap::{try_map_any, MapOptions};
//!
//! let not_a_record = vec!["foo".to_string()];
//! let result = try_map_any(&not_a_record, MapOptions::default());
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all recoverable errors the crate can produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A dynamic conversion was handed something other than a record.
    #[error("expected a record value, found {found}")]
    NotARecord { found: &'static str },

    /// A `TryFrom<Value>` extraction found an incompatible value shape.
    #[error("cannot convert {found} to {expected}")]
    Conversion {
        expected: &'static str,
        found: &'static str,
    },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a not-a-record error naming the shape that was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structmap::Error;
    ///
    /// let err = Error::not_a_record("array");
    /// assert!(err.to_string().contains("found array"));
    /// ```
    pub fn not_a_record(found: &'static str) -> Self {
        Error::NotARecord { found }
    }

    /// Creates a conversion error between two value shapes.
    pub fn conversion(expected: &'static str, found: &'static str) -> Self {
        Error::Conversion { expected, found }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structmap::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
