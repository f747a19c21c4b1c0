//! Strongly-typed index newtypes.
//!
//! These types prevent mixing up snapshot rows and mode columns of the
//! interpolation coefficient matrix.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Create an iterator over [0, n).
            pub fn iter(n: usize) -> impl ExactSizeIterator<Item = $name> {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_index!(
    /// Position of a snapshot in the input set (row of the coefficient matrix).
    ///
    /// # Example
    ///
    /// ```
    /// use pod_rs::types::SnapshotIndex;
    ///
    /// let s = SnapshotIndex::new(3);
    /// assert_eq!(s.get(), 3);
    /// assert_eq!(s.to_string(), "S3");
    /// ```
    SnapshotIndex,
    "S"
);

define_index!(
    /// Rank of a POD mode, 0 being the most energetic
    /// (column of the coefficient matrix).
    ///
    /// # Example
    ///
    /// ```
    /// use pod_rs::types::ModeIndex;
    ///
    /// let modes: Vec<_> = ModeIndex::iter(3).collect();
    /// assert_eq!(modes.len(), 3);
    /// assert_eq!(modes[2].get(), 2);
    /// ```
    ModeIndex,
    "M"
);
