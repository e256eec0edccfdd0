//! Module level constants exposed alongside the calculator.

/// The value of *pi* used by [compute_area](crate::standalone::compute_area).
///
/// This is a fixed 16 significant digit literal and is not taken from [std::f64::consts].
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793;

/// The version of the library, as declared in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn pi_literal() {
        assert_eq!(PI, 3.141592653589793_f64);
        assert_eq!(PI.to_bits(), std::f64::consts::PI.to_bits());
    }

    #[test]
    fn version_string() {
        assert_eq!(VERSION, "1.0.0");
    }
}
