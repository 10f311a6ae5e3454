use num_traits::Float;

/// Euclidean norm, accumulated with `hypot` so large components do not overflow.
pub fn norm(elements: &[f64]) -> f64 {
    elements.iter().fold(0f64, |acc, &e| Float::hypot(acc, e))
}
