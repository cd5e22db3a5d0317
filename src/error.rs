//! Crate error taxonomy.
//!
//! Both variants are fatal: a run either completes with a feasible best
//! solution or fails fast before any search state is created.

use std::fmt;

/// Errors surfaced to the caller of the loader or the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed problem instance: profit/weight length mismatch or an
    /// unparseable instance file.
    Input(String),

    /// Invalid solver configuration, rejected before the search starts.
    /// Never silently clamped.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input(msg) => write!(f, "input error: {msg}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::Input("profit and weight counts differ".into());
        assert_eq!(
            err.to_string(),
            "input error: profit and weight counts differ"
        );
        let err = Error::Config("cooling_rate must be positive".into());
        assert!(err.to_string().starts_with("configuration error:"));
    }
}
