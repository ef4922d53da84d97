//! Parse outcomes
//!
//! Every parser produces a `PResult<T>`: `Ok` with the recognized value or
//! `Err` with a short tag naming the combinator that gave up. The standard
//! `Result` already provides `map`, `and_then`, `unwrap` and `unwrap_err`;
//! `Validate` adds predicate-based demotion of an `Ok` value.

use thiserror::Error;

/// Failure of a parser
///
/// The message is a diagnostic tag (`"char"`, `"tag"`, `"many_m_n char"`),
/// never used for control flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap an inner failure with the tag of the enclosing combinator
    pub fn context(tag: &str, inner: ParseError) -> Self {
        Self {
            message: format!("{} {}", tag, inner.message),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of running a parser
pub type PResult<T> = Result<T, ParseError>;

/// Demote a success to a failure when its value does not pass a check
pub trait Validate<T>: Sized {
    /// Turns `Ok(v)` into `Err(message)` iff `predicate(&v)` is false.
    /// An `Err` passes through untouched.
    fn validate<F>(self, message: &str, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool;
}

impl<T> Validate<T> for PResult<T> {
    fn validate<F>(self, message: &str, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(_) => Err(ParseError::new(message)),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_passes_failure_through() {
        let ok: PResult<i32> = Ok(2);
        assert_eq!(ok.map(|v| v * 10), Ok(20));

        let err: PResult<i32> = Err(ParseError::new("char"));
        assert_eq!(err.map(|v| v * 10), Err(ParseError::new("char")));
    }

    #[test]
    fn test_and_then_chains_fallible_steps() {
        let ok: PResult<&str> = Ok("42");
        let parsed = ok.and_then(|s| s.parse::<u32>().map_err(|_| ParseError::new("int")));
        assert_eq!(parsed, Ok(42));

        let bad: PResult<&str> = Ok("4x");
        let parsed = bad.and_then(|s| s.parse::<u32>().map_err(|_| ParseError::new("int")));
        assert_eq!(parsed.unwrap_err().message(), "int");
    }

    #[test]
    fn test_validate() {
        let ok: PResult<usize> = Ok(3);
        assert_eq!(ok.clone().validate("too small", |v| *v > 1), Ok(3));
        assert_eq!(
            ok.validate("too small", |v| *v > 5),
            Err(ParseError::new("too small"))
        );

        // An existing failure keeps its own message
        let err: PResult<usize> = Err(ParseError::new("tag"));
        assert_eq!(err.validate("ignored", |_| true).unwrap_err().message(), "tag");
    }

    #[test]
    fn test_context_prefixes_tag() {
        let err = ParseError::context("many_m_n", ParseError::new("char"));
        assert_eq!(err.to_string(), "many_m_n char");
    }
}
