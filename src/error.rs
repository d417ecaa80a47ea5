//! Error types for builder mutation and value conversion.
//!
//! Every failure the crate can produce is a variant of [`Error`]:
//!
//! - **Capacity errors**: construction with oversized initial content
//!   ([`Error::InvalidCapacity`]) or a mutation that would grow the buffer
//!   past its bound ([`Error::CapacityExceeded`]).
//! - **Range errors**: a removal range that does not lie inside the current
//!   content ([`Error::InvalidRange`]).
//! - **Value errors**: a Rust value with no buffer representation
//!   ([`Error::InvalidValue`]), raised by [`to_value`](crate::to_value).
//!
//! All errors are raised synchronously at the point of violation and none are
//! retried or recovered internally. Apart from the documented partial effects
//! of `append_line` and `append_join`, a rejected operation leaves the buffer
//! unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use strbuilder::{Error, StringBuilder};
//!
//! let mut builder = StringBuilder::try_new("Hello", 10).unwrap();
//! let err = builder.append(" World!").unwrap_err();
//! assert!(matches!(err, Error::CapacityExceeded { .. }));
//! assert_eq!(builder.to_string(), "Hello");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by builder operations and value
/// conversion.
///
/// Capacity and range variants carry the numbers that were compared, so
/// callers can report exactly how far a request missed.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Initial content does not fit the maximum capacity requested at
    /// construction.
    #[error("invalid capacity: initial content is {length} chars but max capacity is {max_capacity}")]
    InvalidCapacity {
        /// Char count of the rejected initial content.
        length: usize,
        /// The requested bound.
        max_capacity: usize,
    },

    /// A mutation would grow the buffer past its maximum capacity.
    #[error("capacity exceeded: {length} + {added} chars would pass max capacity {max_capacity}")]
    CapacityExceeded {
        /// Char count of the buffer at the time of the rejected mutation.
        length: usize,
        /// Char count the mutation attempted to add.
        added: usize,
        /// The configured bound.
        max_capacity: usize,
    },

    /// A removal range extending past the current content.
    #[error("invalid range: start {start} with length {length} does not fit content of length {len}")]
    InvalidRange {
        /// Requested start index.
        start: usize,
        /// Requested removal length.
        length: usize,
        /// Char count of the buffer at the time of the call.
        len: usize,
    },

    /// A value that cannot be converted into a buffer [`Value`](crate::Value).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an invalid-value error for inputs with no buffer
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strbuilder::Error;
    ///
    /// let err = Error::invalid_value("map keys must be strings");
    /// assert!(err.to_string().contains("map keys"));
    /// ```
    pub fn invalid_value<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidValue(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
