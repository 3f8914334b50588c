//! Hand-written sample types for the walk tests.
//!
//! The types implement [`Persist`] and [`Properties`] by hand, so the tests
//! stay derive-free and exercise the same route the derive generates. The
//! [`MapArchive`] is a second backend next to the JSON one, which keeps the
//! walk honest about only talking to the [`Archive`] contract.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::Persist;
use crate::archive::Archive;
use crate::ops::{PersistKind, PersistMut, PersistRef};
use crate::persistence::{Leaf, PersistError};
use crate::props::{Properties, Property, PropertyList};

crate::cfg::std! {
    use crate::archive::DocumentError;
}

// -----------------------------------------------------------------------------
// Sample types

#[derive(Default, Clone, PartialEq, Debug)]
pub(super) struct Monitor {
    pub label: String,
    pub width: u32,
}

impl Persist for Monitor {
    fn type_path(&self) -> &'static str {
        "samples::Monitor"
    }

    fn set(&mut self, value: Box<dyn Persist>) -> Result<(), Box<dyn Persist>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn persist_kind(&self) -> PersistKind {
        PersistKind::Composite
    }

    #[inline]
    fn persist_ref(&self) -> PersistRef<'_> {
        PersistRef::Composite(self)
    }

    #[inline]
    fn persist_mut(&mut self) -> PersistMut<'_> {
        PersistMut::Composite(self)
    }
}

impl Properties for Monitor {
    fn properties() -> &'static PropertyList<Self> {
        static PROPERTIES: [Property<Monitor>; 2] = [
            Property::new::<String>("label", |owner| &owner.label, |owner| &mut owner.label),
            Property::new::<u32>("width", |owner| &owner.width, |owner| &mut owner.width),
        ];
        static LIST: PropertyList<Monitor> = PropertyList::new(&PROPERTIES);
        &LIST
    }
}

#[derive(Default, Clone, PartialEq, Debug)]
pub(super) struct Workstation {
    pub monitor: Monitor,
    pub seat: u8,
    pub shared: bool,
}

impl Persist for Workstation {
    fn type_path(&self) -> &'static str {
        "samples::Workstation"
    }

    fn set(&mut self, value: Box<dyn Persist>) -> Result<(), Box<dyn Persist>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn persist_kind(&self) -> PersistKind {
        PersistKind::Composite
    }

    #[inline]
    fn persist_ref(&self) -> PersistRef<'_> {
        PersistRef::Composite(self)
    }

    #[inline]
    fn persist_mut(&mut self) -> PersistMut<'_> {
        PersistMut::Composite(self)
    }
}

impl Properties for Workstation {
    fn properties() -> &'static PropertyList<Self> {
        static PROPERTIES: [Property<Workstation>; 3] = [
            Property::new::<Monitor>(
                "monitor",
                |owner| &owner.monitor,
                |owner| &mut owner.monitor,
            ),
            Property::new::<u8>("seat", |owner| &owner.seat, |owner| &mut owner.seat),
            Property::new::<bool>("shared", |owner| &owner.shared, |owner| &mut owner.shared),
        ];
        static LIST: PropertyList<Workstation> = PropertyList::new(&PROPERTIES);
        &LIST
    }
}

// -----------------------------------------------------------------------------
// MapArchive

/// The smallest possible [`Archive`]: one flat ordered map per record.
#[derive(Default, Clone, PartialEq, Debug)]
pub(super) struct MapArchive {
    entries: BTreeMap<&'static str, Entry>,
}

#[derive(Clone, PartialEq, Debug)]
pub(super) enum Entry {
    Leaf(Leaf),
    Child(MapArchive),
}

impl MapArchive {
    pub fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }
}

impl Archive for MapArchive {
    fn store_leaf(&mut self, name: &'static str, value: Leaf) {
        self.entries.insert(name, Entry::Leaf(value));
    }

    fn retrieve_leaf(&self, name: &'static str) -> Result<Leaf, PersistError> {
        match self.entries.get(name) {
            Some(Entry::Leaf(leaf)) => Ok(leaf.clone()),
            Some(Entry::Child(_)) => Err(PersistError::MismatchedNodeKind {
                name,
                from_kind: PersistKind::Composite,
                to_kind: PersistKind::Leaf,
            }),
            None => Err(PersistError::MissingProperty { name }),
        }
    }

    fn store_child(&mut self, name: &'static str, child: Self) {
        self.entries.insert(name, Entry::Child(child));
    }

    fn retrieve_child(&self, name: &'static str) -> Result<Self, PersistError> {
        match self.entries.get(name) {
            Some(Entry::Child(child)) => Ok(child.clone()),
            Some(Entry::Leaf(_)) => Err(PersistError::MismatchedNodeKind {
                name,
                from_kind: PersistKind::Leaf,
                to_kind: PersistKind::Composite,
            }),
            None => Err(PersistError::MissingProperty { name }),
        }
    }

    crate::cfg::std! {
        fn save_to_file(&self, _path: impl AsRef<std::path::Path>) -> Result<(), DocumentError> {
            unimplemented!("the map archive only lives in memory")
        }

        fn load_from_file(_path: impl AsRef<std::path::Path>) -> Result<Self, DocumentError> {
            unimplemented!("the map archive only lives in memory")
        }
    }
}
