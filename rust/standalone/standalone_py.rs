//! Wrapper to export the standalone functions to Python using pyo3 bindings.

use crate::standalone::{compute_area, generate_fibonacci};
use pyo3::prelude::*;

/// Return the area of a circle of the given ``radius``.
#[pyfunction]
#[pyo3(name = "compute_area")]
pub(crate) fn compute_area_py(radius: f64) -> f64 {
    compute_area(radius)
}

/// Return a list of the first ``n`` Fibonacci numbers.
#[pyfunction]
#[pyo3(name = "generate_fibonacci")]
pub(crate) fn generate_fibonacci_py(n: i64) -> Vec<i64> {
    generate_fibonacci(n)
}
