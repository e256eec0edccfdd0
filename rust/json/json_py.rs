//! Wrapper to allow de/serializable objects in Rust to be passed to/from Python using pyo3
//! bindings.
//!
//! Any pyclass that is serializable is added as a DeserializedObj and then converted to JSON.
//! Having been deserialized it is matched, unpacked and passed back to Python.

use crate::calculator::Calculator;
use crate::json::JSON;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Container for all of the Python exposed Rust objects which are deserializable.
#[derive(Serialize, Deserialize, FromPyObject, IntoPyObject)]
pub(crate) enum DeserializedObj {
    Calculator(Calculator),
}

impl JSON for DeserializedObj {}

#[pyfunction]
#[pyo3(name = "from_json")]
pub(crate) fn from_json_py(_py: Python<'_>, json: &str) -> PyResult<DeserializedObj> {
    match DeserializedObj::from_json(json) {
        Ok(v) => Ok(v),
        Err(e) => Err(PyValueError::new_err(format!(
            "Could not create Class or Struct from given JSON.\n{}",
            e
        ))),
    }
}
