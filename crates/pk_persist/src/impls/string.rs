use alloc::string::String;

use crate::ops::PersistRef;
use crate::persistence::impl_persist_cast_fn;
use crate::{Leaf, Persist, PersistError};

impl Persist for String {
    impl_persist_cast_fn!("alloc::string::String");

    #[inline]
    fn persist_ref(&self) -> PersistRef<'_> {
        PersistRef::Leaf(Leaf::Str(self.clone()))
    }

    fn apply_leaf(&mut self, value: Leaf) -> Result<(), PersistError> {
        match value {
            Leaf::Str(text) => {
                *self = text;
                Ok(())
            }
            other => Err(PersistError::MismatchedLeaf {
                from_kind: other.kind(),
                to_type: self.type_path(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{Leaf, Persist};

    #[test]
    fn text_round_trips_without_reencoding() {
        let mut text = String::from("old");

        let leaf = text.persist_ref().to_leaf();
        assert_eq!(leaf, Some(Leaf::Str(String::from("old"))));

        assert!(text.apply_leaf(Leaf::Str(String::from("new"))).is_ok());
        assert_eq!(text, "new");

        assert!(text.apply_leaf(Leaf::Bool(false)).is_err());
        assert_eq!(text, "new");
    }
}
