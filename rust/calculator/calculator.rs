use crate::calculator::error::CalculatorError;
use crate::json::JSON;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "python")]
use pyo3::pyclass;

/// A calculator holding a single scalar `value`.
///
/// The binary arithmetic methods are pure functions of their arguments and never read or
/// modify the held `value`, which is only accessed through [Calculator::set_value] and
/// [Calculator::get_value].
///
/// No internal synchronization is provided. Callers sharing an instance across threads must
/// serialize access themselves, e.g. behind a `Mutex`, or give each caller its own instance.
#[cfg_attr(feature = "python", pyclass(module = "calculator"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    pub(crate) value: f64,
}

impl Calculator {
    /// Constructs a new `Calculator` holding `initial_value`.
    ///
    /// No validation is performed; NaN and infinite values are accepted.
    pub fn new(initial_value: f64) -> Self {
        Calculator {
            value: initial_value,
        }
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Return `a / b`.
    ///
    /// Errors with [CalculatorError::DivisionByZero] if `b == 0.0`. The comparison is exact,
    /// so `-0.0` is also rejected while any subnormal divisor is accepted.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        if b == 0.0 {
            debug!(dividend = a, "division by zero rejected");
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }

    /// Return the sum of `numbers`, accumulated left to right from `0.0`.
    ///
    /// An empty slice returns `0.0`.
    pub fn sum(&self, numbers: &[f64]) -> f64 {
        numbers.iter().fold(0.0_f64, |acc, x| acc + x)
    }

    /// Return the arithmetic mean of `numbers`, as `sum(numbers) / numbers.len()`.
    ///
    /// Errors with [CalculatorError::EmptyInput] if `numbers` has no elements.
    pub fn average(&self, numbers: &[f64]) -> Result<f64, CalculatorError> {
        if numbers.is_empty() {
            debug!("average of empty sequence rejected");
            return Err(CalculatorError::EmptyInput);
        }
        Ok(self.sum(numbers) / numbers.len() as f64)
    }

    /// Return `base` raised to `exponent` with IEEE 754 `pow` semantics.
    ///
    /// Undefined cases, such as a negative base with a fractional exponent, yield NaN.
    pub fn power(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    pub fn greet(&self, name: &str) -> String {
        format!("Hello, {}! Welcome to Pybind11!", name)
    }
}

impl JSON for Calculator {}
