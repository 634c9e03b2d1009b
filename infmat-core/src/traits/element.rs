//! Value type constraints for matrix entries

use core::fmt::Debug;

/// Trait for types that can be stored as matrix values
///
/// A value must be:
/// - Copy: reads hand out values, never references into storage
/// - PartialEq: compaction compares every assignment against the default
/// - Debug: used in trace output and assertion messages
///
/// Implemented for every type meeting these bounds.
pub trait MatrixElement: Copy + PartialEq + Debug {
    /// Check whether this value is the given default, i.e. "absent"
    #[inline]
    fn is_default(&self, default: &Self) -> bool {
        self == default
    }
}

impl<T: Copy + PartialEq + Debug> MatrixElement for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Rgb(u8, u8, u8);

    #[test]
    fn test_is_default() {
        assert!(0i32.is_default(&0));
        assert!(!7i32.is_default(&0));
        assert!((-1i64).is_default(&-1));

        // Non-literal value types work the same way
        let black = Rgb(0, 0, 0);
        assert!(Rgb(0, 0, 0).is_default(&black));
        assert!(!Rgb(0, 1, 0).is_default(&black));
    }
}
