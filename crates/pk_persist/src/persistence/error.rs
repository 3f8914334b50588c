use core::{error, fmt};

use crate::ops::PersistKind;
use crate::persistence::LeafKind;

// -----------------------------------------------------------------------------
// PersistError

/// An error that occurs when loading archived values back into a property.
///
/// The walk engine stops at the first failing property and hands the error
/// up unchanged, so the variant always describes the innermost failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The archive has no entry under the requested property name.
    MissingProperty {
        /// Name the property was declared with.
        name: &'static str,
    },
    /// The entry exists, but its node shape is not what the property
    /// declares, like a nested record where a scalar is expected.
    MismatchedNodeKind {
        /// Name the property was declared with.
        name: &'static str,
        /// Kind of node found in the archive.
        from_kind: PersistKind,
        /// Kind the property declares.
        to_kind: PersistKind,
    },
    /// A leaf value could not be coerced into the declared property type,
    /// either because the encodings differ or the value is out of range.
    MismatchedLeaf {
        /// Encoding of the leaf found in the archive.
        from_kind: LeafKind,
        /// Full path of the property type.
        to_type: &'static str,
    },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::MissingProperty { name } => {
                write!(f, "no entry found under the property name `{name}`")
            }
            PersistError::MismatchedNodeKind {
                name,
                from_kind,
                to_kind,
            } => write!(
                f,
                "attempted to load a `{from_kind}` node under `{name}` into a `{to_kind}` property"
            ),
            PersistError::MismatchedLeaf { from_kind, to_type } => {
                write!(f, "attempted to apply a `{from_kind}` leaf to `{to_type}`")
            }
        }
    }
}

impl error::Error for PersistError {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::ops::PersistKind;
    use crate::{LeafKind, PersistError};

    #[test]
    fn messages_name_the_failing_side() {
        let error = PersistError::MissingProperty { name: "age" };
        assert_eq!(
            error.to_string(),
            "no entry found under the property name `age`"
        );

        let error = PersistError::MismatchedNodeKind {
            name: "display",
            from_kind: PersistKind::Leaf,
            to_kind: PersistKind::Composite,
        };
        assert_eq!(
            error.to_string(),
            "attempted to load a `Leaf` node under `display` into a `Composite` property"
        );

        let error = PersistError::MismatchedLeaf {
            from_kind: LeafKind::Str,
            to_type: "u8",
        };
        assert_eq!(
            error.to_string(),
            "attempted to apply a `Str` leaf to `u8`"
        );
    }
}
