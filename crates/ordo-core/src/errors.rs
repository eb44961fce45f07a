//! Error types for ordo-rs.
//!
//! The whole workspace funnels into a single `thiserror`-derived enum.
//! Nothing in the liturgical core is fatal: missing lookup data is
//! reported as `None`/empty by the callers, and only genuinely invalid
//! inputs (a non-existent calendar date) surface as errors.

use thiserror::Error;

/// The top-level error type used throughout ordo-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (maps to `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (maps to `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (invalid or out-of-range calendar date).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested record is absent from a lookup table.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Shorthand `Result` type used throughout ordo-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Require a condition to hold, returning `Err(Error::Precondition(...))`
/// otherwise.
///
/// # Example
/// ```
/// use ordo_core::ensure;
/// fn month(m: u8) -> ordo_core::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(6).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ordo_core::fail;
/// fn always_err() -> ordo_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
