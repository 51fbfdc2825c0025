//! Terminal result of a prompt run
//!
//! A prompt ends in exactly one of two ways: the human submitted a value, or
//! the human aborted the prompt. `Outcome` makes the second case a first-class
//! variant instead of a sentinel value, so callers match on it exhaustively.

/// What a prompt run resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The human submitted this value.
    Value(T),
    /// The human aborted the prompt.
    Cancelled,
}

impl<T> Outcome<T> {
    /// Returns `true` if the human aborted the prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    /// Consumes the outcome, returning the submitted value if there is one.
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    /// Converts from `&Outcome<T>` to `Outcome<&T>`.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }

    /// Maps the submitted value, leaving a cancellation untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

impl<T: Into<serde_json::Value>> Outcome<T> {
    /// Converts the submitted value into the JSON currency used by
    /// [`Group`](crate::group::Group) steps.
    pub fn into_json(self) -> Outcome<serde_json::Value> {
        self.map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_cancellation() {
        let cancelled: Outcome<u32> = Outcome::Cancelled;
        assert_eq!(cancelled.map(|n| n + 1), Outcome::Cancelled);
        assert_eq!(Outcome::Value(1).map(|n| n + 1), Outcome::Value(2));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Outcome::Value("x").value(), Some("x"));
        assert_eq!(Outcome::<&str>::Cancelled.value(), None);
        assert!(Outcome::<&str>::Cancelled.is_cancelled());
        assert!(!Outcome::Value("x").is_cancelled());
    }

    #[test]
    fn test_into_json() {
        assert_eq!(
            Outcome::Value("ann".to_string()).into_json(),
            Outcome::Value(serde_json::Value::String("ann".into()))
        );
    }
}
