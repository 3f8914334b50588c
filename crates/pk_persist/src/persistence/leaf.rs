use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// Leaf

/// The value encoding of a leaf property.
///
/// Rust has a dozen scalar types but an archive only needs a handful of
/// encodings. Every persistable scalar widens into one of these five when it
/// crosses the archive boundary, and narrows back under a range check when it
/// returns through [`Persist::apply_leaf`].
///
/// [`Persist::apply_leaf`]: crate::Persist::apply_leaf
///
/// # Examples
///
/// ```
/// use pk_persist::{Leaf, Persist};
///
/// assert!(matches!(7_u16.persist_ref().to_leaf(), Some(Leaf::UInt(7))));
/// assert!(matches!((-7_i16).persist_ref().to_leaf(), Some(Leaf::Int(-7))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// The widened encoding of `i8` up to `i64`, and `isize`.
    Int(i64),
    /// The widened encoding of `u8` up to `u64`, and `usize`.
    UInt(u64),
    /// The widened encoding of `f32` and `f64`.
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Leaf {
    /// Returns the encoding discriminator, mostly for error reporting.
    pub const fn kind(&self) -> LeafKind {
        match self {
            Self::Int(_) => LeafKind::Int,
            Self::UInt(_) => LeafKind::UInt,
            Self::Float(_) => LeafKind::Float,
            Self::Bool(_) => LeafKind::Bool,
            Self::Str(_) => LeafKind::Str,
        }
    }

    /// Reads the leaf as a signed integer.
    ///
    /// An unsigned leaf is accepted when its value fits; every other encoding
    /// returns `None`.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::UInt(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// Reads the leaf as an unsigned integer.
    ///
    /// A signed leaf is accepted when it is non-negative; every other
    /// encoding returns `None`.
    pub fn to_uint(&self) -> Option<u64> {
        match self {
            Self::UInt(value) => Some(*value),
            Self::Int(value) => u64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// Reads the leaf as a float.
    ///
    /// Integer leaves of either sign are accepted, rounding to the nearest
    /// representable value the way `as` casts do.
    pub fn to_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            Self::UInt(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Reads the leaf as a `bool`. No coercion, the encoding must match.
    pub const fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// LeafKind

/// A pure enumeration of the [`Leaf`] encodings.
///
/// Carried by [`PersistError::MismatchedLeaf`] so a failed coercion can name
/// the encoding it received without dragging the value along.
///
/// [`PersistError::MismatchedLeaf`]: crate::PersistError::MismatchedLeaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Int,
    UInt,
    Float,
    Bool,
    Str,
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.pad("Int"),
            Self::UInt => f.pad("UInt"),
            Self::Float => f.pad("Float"),
            Self::Bool => f.pad("Bool"),
            Self::Str => f.pad("Str"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::{Leaf, LeafKind};

    #[test]
    fn integer_readings_are_range_checked() {
        assert_eq!(Leaf::Int(-5).to_int(), Some(-5));
        assert_eq!(Leaf::UInt(5).to_int(), Some(5));
        assert_eq!(Leaf::UInt(u64::MAX).to_int(), None);

        assert_eq!(Leaf::Int(-5).to_uint(), None);
        assert_eq!(Leaf::Int(5).to_uint(), Some(5));
        assert_eq!(Leaf::UInt(u64::MAX).to_uint(), Some(u64::MAX));
    }

    #[test]
    fn floats_accept_integers_but_not_the_reverse() {
        assert_eq!(Leaf::Int(-2).to_float(), Some(-2.0));
        assert_eq!(Leaf::UInt(2).to_float(), Some(2.0));
        assert_eq!(Leaf::Float(0.5).to_float(), Some(0.5));

        assert_eq!(Leaf::Float(2.0).to_int(), None);
        assert_eq!(Leaf::Float(2.0).to_uint(), None);
    }

    #[test]
    fn bool_and_str_stay_exact() {
        assert_eq!(Leaf::Bool(true).to_bool(), Some(true));
        assert_eq!(Leaf::Int(1).to_bool(), None);
        assert_eq!(Leaf::Str(String::from("true")).to_bool(), None);
    }

    #[test]
    fn kind_names_every_encoding() {
        assert_eq!(Leaf::Str(String::new()).kind(), LeafKind::Str);
        assert_eq!(Leaf::Float(0.0).kind(), LeafKind::Float);
        assert_eq!(LeafKind::UInt.to_string(), "UInt");
    }
}
