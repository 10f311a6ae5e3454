use thiserror::Error;

use crate::container::Shape;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The slice handed to an exact-length conversion does not match the shape.
    #[error("{shape} expects {expected} components, got {found}")]
    Length {
        shape: Shape,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::Length {
            shape: Shape::Mat4x3,
            expected: 12,
            found: 9,
        };
        assert_eq!(e.to_string(), "mat4x3 expects 12 components, got 9");
    }
}
