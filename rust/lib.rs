//! This is the documentation for calculator-rs
//!
//! A small numeric library made up of two independent parts:
//!
//! - [calculator], a [Calculator](calculator::Calculator) holding one scalar value and
//!   offering arithmetic, aggregate and exponentiation operations,
//! - [standalone], free functions for circle areas and Fibonacci sequences.
//!
//! Module level constants are available in [constants].
//!
//! With the `python` feature enabled the crate also builds a pyo3 extension module named
//! `calculator` exposing all of the above.

#[cfg(test)]
mod tests;

pub mod constants;
pub use constants::{PI, VERSION};

pub mod json;

pub mod calculator;
pub use calculator::{Calculator, CalculatorError};

pub mod standalone;
pub use standalone::{compute_area, generate_fibonacci};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "calculator")]
fn calculator_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use crate::json::json_py::from_json_py;
    use crate::standalone::standalone_py::{compute_area_py, generate_fibonacci_py};

    m.add("__doc__", "Calculator module: arithmetic, aggregates and standalone helpers.")?;

    // JSON
    m.add_function(wrap_pyfunction!(from_json_py, m)?)?;

    // Calculator
    m.add_class::<Calculator>()?;

    // Standalone
    m.add_function(wrap_pyfunction!(compute_area_py, m)?)?;
    m.add_function(wrap_pyfunction!(generate_fibonacci_py, m)?)?;

    // Attributes
    m.add("PI", PI)?;
    m.add("VERSION", VERSION)?;

    Ok(())
}
