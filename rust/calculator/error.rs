use thiserror::Error;

/// Failures raised by [Calculator](crate::calculator::Calculator) operations.
///
/// Every other operation propagates IEEE 754 values (overflow, NaN) silently.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor given to `divide` compared equal to `0.0`, which includes `-0.0`.
    #[error("Division by zero!")]
    DivisionByZero,

    /// `average` was given a sequence with no elements.
    #[error("Cannot compute average of empty vector")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(CalculatorError::DivisionByZero.to_string(), "Division by zero!");
        assert_eq!(
            CalculatorError::EmptyInput.to_string(),
            "Cannot compute average of empty vector"
        );
    }
}
