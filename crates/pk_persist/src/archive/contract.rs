use alloc::boxed::Box;
use core::{error, fmt};

use crate::persistence::{Leaf, PersistError};

// -----------------------------------------------------------------------------
// Archive

/// The storage contract a walk drives.
///
/// An archive is a named-slot store holding one [`Leaf`] or one nested
/// archive per name. The walk decides what is stored and under which name,
/// the backend decides how stored values are encoded. File transport is part
/// of the contract so callers never touch a backend's text format directly.
///
/// Implementors must start empty via [`Default`]: every composite property
/// is serialized into a fresh archive of the same backend before it is
/// handed over with [`store_child`].
///
/// # Examples
///
/// ```
/// use pk_persist::Leaf;
/// use pk_persist::archive::{Archive, JsonArchive};
///
/// let mut archive = JsonArchive::default();
/// archive.store_leaf("age", Leaf::UInt(36));
///
/// assert_eq!(archive.retrieve_leaf("age"), Ok(Leaf::UInt(36)));
/// assert!(archive.retrieve_leaf("name").is_err());
/// ```
///
/// [`store_child`]: Archive::store_child
pub trait Archive: Default {
    /// Stores a leaf encoding under `name`, replacing any prior entry.
    fn store_leaf(&mut self, name: &'static str, value: Leaf);

    /// Retrieves the leaf stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`PersistError::MissingProperty`] if nothing is stored under
    ///   `name`.
    /// - [`PersistError::MismatchedNodeKind`] if the entry is a nested
    ///   archive.
    fn retrieve_leaf(&self, name: &'static str) -> Result<Leaf, PersistError>;

    /// Stores a finished nested archive under `name`, replacing any prior
    /// entry.
    fn store_child(&mut self, name: &'static str, child: Self);

    /// Retrieves a copy of the nested archive stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`PersistError::MissingProperty`] if nothing is stored under
    ///   `name`.
    /// - [`PersistError::MismatchedNodeKind`] if the entry is a leaf.
    fn retrieve_child(&self, name: &'static str) -> Result<Self, PersistError>;

    crate::cfg::std! {
        /// Writes the whole document to `path`, replacing the file.
        ///
        /// # Errors
        ///
        /// [`DocumentError::Io`] when the destination cannot be written.
        fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), DocumentError>;

        /// Reads a whole document from `path`, replacing nothing on failure.
        ///
        /// # Errors
        ///
        /// - [`DocumentError::Io`] when the source cannot be read.
        /// - [`DocumentError::Malformed`] when the text does not parse as
        ///   this backend's format.
        fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, DocumentError>;
    }
}

// -----------------------------------------------------------------------------
// DocumentError

/// An error produced by the whole-document half of the [`Archive`] contract.
#[derive(Debug)]
pub enum DocumentError {
    /// Touching the document file failed.
    #[cfg(feature = "std")]
    Io(std::io::Error),
    /// The document text does not parse as the backend's format.
    Malformed(Box<dyn error::Error + Send + Sync>),
}

impl DocumentError {
    /// Wraps a backend parse error.
    #[inline]
    pub fn malformed<E: error::Error + Send + Sync + 'static>(error: E) -> Self {
        Self::Malformed(Box::new(error))
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::Io(error) => write!(f, "document file access failed: {error}"),
            Self::Malformed(error) => write!(f, "document text is malformed: {error}"),
        }
    }
}

impl error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Io(error) => Some(error),
            Self::Malformed(error) => Some(&**error),
        }
    }
}

crate::cfg::std! {
    impl From<std::io::Error> for DocumentError {
        #[inline]
        fn from(error: std::io::Error) -> Self {
            Self::Io(error)
        }
    }
}
