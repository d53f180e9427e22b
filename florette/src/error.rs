//! Error type shared by every fallible operation in the crate.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` impls from the `#[error]` attributes,
//! so each variant documents its own message.

/// Result type for florette operations.
pub type Result<T> = std::result::Result<T, FloretteError>;

/// Failures detected at the point of the call.
///
/// Both variants are deterministic functions of caller input; retrying
/// without changing the input gives the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FloretteError {
    /// A precondition on an argument was violated (empty palette, empty
    /// choice source, seed out of range, undefined curve parameters).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The geometry cannot be scaled because every point sits at the origin.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl FloretteError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FloretteError::InvalidArgument(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        FloretteError::DegenerateGeometry(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_category() {
        let err = FloretteError::invalid("palette is empty");
        assert_eq!(err.to_string(), "invalid argument: palette is empty");

        let err = FloretteError::degenerate("max radius is 0");
        assert_eq!(err.to_string(), "degenerate geometry: max radius is 0");
    }
}
