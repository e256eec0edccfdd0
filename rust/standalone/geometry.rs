use crate::constants::PI;

/// Return the area of a circle with the given `radius`, as `PI * radius * radius`.
///
/// `radius` is not validated; a negative radius yields the same positive area as its
/// absolute value, and NaN propagates.
pub fn compute_area(radius: f64) -> f64 {
    PI * radius * radius
}
