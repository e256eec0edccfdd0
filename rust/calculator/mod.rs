//! A calculator holding a single scalar, with arithmetic and aggregate operations.
//!
//! The [Calculator] remembers one `f64` through [Calculator::set_value] and
//! [Calculator::get_value]. Its arithmetic and aggregate methods are independent of that
//! stored value and act only on their arguments.
//!
//! Only two failures exist, both reported as a [CalculatorError]:
//!
//! - [CalculatorError::DivisionByZero] from [Calculator::divide],
//! - [CalculatorError::EmptyInput] from [Calculator::average].

mod calculator;
#[cfg(feature = "python")]
pub(crate) mod calculator_py;
mod error;

pub use crate::calculator::calculator::Calculator;
pub use crate::calculator::error::CalculatorError;
