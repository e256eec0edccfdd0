//! Wrapper to export the `Calculator` to Python using pyo3 bindings.

use crate::calculator::{Calculator, CalculatorError};
use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use bincode::config::legacy;
use bincode::serde::{decode_from_slice, encode_to_vec};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

impl From<CalculatorError> for PyErr {
    fn from(err: CalculatorError) -> Self {
        PyRuntimeError::new_err(err.to_string())
    }
}

#[pymethods]
impl Calculator {
    #[new]
    #[pyo3(signature = (initial_value=0.0))]
    fn new_py(initial_value: f64) -> Self {
        Calculator::new(initial_value)
    }

    /// Return the sum of ``a`` and ``b``.
    #[pyo3(name = "add")]
    fn add_py(&self, a: f64, b: f64) -> f64 {
        self.add(a, b)
    }

    /// Return ``a`` minus ``b``.
    #[pyo3(name = "subtract")]
    fn subtract_py(&self, a: f64, b: f64) -> f64 {
        self.subtract(a, b)
    }

    /// Return the product of ``a`` and ``b``.
    #[pyo3(name = "multiply")]
    fn multiply_py(&self, a: f64, b: f64) -> f64 {
        self.multiply(a, b)
    }

    /// Return ``a`` divided by ``b``.
    ///
    /// Raises
    /// ------
    /// RuntimeError
    ///     If ``b`` is zero.
    #[pyo3(name = "divide")]
    fn divide_py(&self, a: f64, b: f64) -> PyResult<f64> {
        Ok(self.divide(a, b)?)
    }

    /// Set the value held by the calculator.
    #[pyo3(name = "set_value")]
    fn set_value_py(&mut self, value: f64) {
        self.set_value(value)
    }

    /// Return the value held by the calculator.
    #[pyo3(name = "get_value")]
    fn get_value_py(&self) -> f64 {
        self.get_value()
    }

    /// Return the sum of a list of floats.
    #[pyo3(name = "sum")]
    fn sum_py(&self, numbers: Vec<f64>) -> f64 {
        self.sum(&numbers)
    }

    /// Return the arithmetic mean of a list of floats.
    ///
    /// Raises
    /// ------
    /// RuntimeError
    ///     If ``numbers`` is empty.
    #[pyo3(name = "average")]
    fn average_py(&self, numbers: Vec<f64>) -> PyResult<f64> {
        Ok(self.average(&numbers)?)
    }

    /// Return ``base`` raised to the power ``exponent``.
    #[staticmethod]
    #[pyo3(name = "power")]
    fn power_py(base: f64, exponent: f64) -> f64 {
        Calculator::power(base, exponent)
    }

    /// Return a greeting addressed to ``name``.
    #[pyo3(name = "greet")]
    fn greet_py(&self, name: &str) -> String {
        self.greet(name)
    }

    fn __repr__(&self) -> String {
        format!("<Calculator: {:?}>", self.value)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self == other
    }

    // JSON
    /// Return a JSON representation of the object.
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::Calculator(*self).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `Calculator` to JSON.",
            )),
        }
    }

    // Pickling
    fn __setstate__(&mut self, state: Bound<'_, PyBytes>) -> PyResult<()> {
        let (calc, _): (Calculator, usize) = decode_from_slice(state.as_bytes(), legacy())
            .map_err(|e| {
                PyValueError::new_err(format!("Could not unpickle `Calculator`.\n{}", e))
            })?;
        *self = calc;
        Ok(())
    }
    fn __getstate__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = encode_to_vec(self, legacy()).map_err(|e| {
            PyValueError::new_err(format!("Could not pickle `Calculator`.\n{}", e))
        })?;
        Ok(PyBytes::new(py, &bytes))
    }
    fn __getnewargs__(&self) -> PyResult<(f64,)> {
        Ok((self.value,))
    }
}
