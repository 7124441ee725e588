//! `Dim`: strong-typed Cartesian axis index.
//!
//! Every per-axis quantity in a mesh descriptor (corners, extents, cell
//! counts, edge arrays) is indexed by one of the three Cartesian axes. `Dim`
//! replaces raw integer indices so an out-of-range axis is unrepresentable.

use std::fmt;

/// One of the three Cartesian axes of a structured grid.
///
/// The discriminants 0, 1, 2 index per-axis arrays directly via
/// [`Dim::index`].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(u8)]
pub enum Dim {
    /// First axis (x).
    I = 0,
    /// Second axis (y).
    J = 1,
    /// Third axis (z).
    K = 2,
}

impl Dim {
    /// All axes in index order, for per-axis iteration.
    pub const ALL: [Dim; 3] = [Dim::I, Dim::J, Dim::K];

    /// Returns the array index of this axis (0, 1, or 2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Prints the axis letter only, for use in error messages.
impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Dim::I => "I",
            Dim::J => "J",
            Dim::K => "K",
        };
        write!(f, "{letter}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_cover_the_axes() {
        assert_eq!(Dim::I.index(), 0);
        assert_eq!(Dim::J.index(), 1);
        assert_eq!(Dim::K.index(), 2);
        for (i, dim) in Dim::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Dim::J), "J");
        assert_eq!(format!("{:?}", Dim::K), "K");
    }

    #[test]
    fn ordering_follows_index() {
        assert!(Dim::I < Dim::J);
        assert!(Dim::J < Dim::K);
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let d = Dim::K;
        let s = serde_json::to_string(&d).unwrap();
        let d2: Dim = serde_json::from_str(&s).unwrap();
        assert_eq!(d2, d);
    }

    #[test]
    fn bincode_roundtrip() {
        let d = Dim::J;
        let bytes = bincode::serialize(&d).unwrap();
        let d2: Dim = bincode::deserialize(&bytes).unwrap();
        assert_eq!(d2, d);
    }
}
