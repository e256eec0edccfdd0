//! Allows serialization and deserialization to JSON, with the ``serde`` crate.

#[cfg(feature = "python")]
pub(crate) mod json_py;

use serde::{Deserialize, Serialize};

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;

    #[test]
    fn non_finite_values_do_not_serialize() {
        // serde_json writes non-finite floats as `null`, which cannot be read back as f64.
        let calc = Calculator::new(f64::NAN);
        let json = calc.to_json().unwrap();
        assert_eq!(json, "{\"value\":null}");
        assert!(Calculator::from_json(&json).is_err());
    }

    #[test]
    fn malformed_json() {
        assert!(Calculator::from_json("{\"val\":1.0}").is_err());
        assert!(Calculator::from_json("not json").is_err());
    }
}
