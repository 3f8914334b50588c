use crate::archive::Archive;
use crate::ops::{Composite, PersistMut};
use crate::persistence::PersistError;
use crate::props::Properties;

crate::cfg::debug! {
    use super::trace::PROPERTY_PATH_STACK;
}

// -----------------------------------------------------------------------------
// Deserialize

/// Loads archived values back into `value`, property by property.
///
/// Properties are visited in declaration order. A leaf property asks the
/// archive for the leaf stored under its name and applies it in place. A
/// composite property retrieves the named nested record, loads it into a
/// default-constructed stand-in of the field type and assigns the stand-in
/// over the field once the whole record loaded.
///
/// # Errors
///
/// The walk stops at the first failing property and hands its error up
/// unchanged. Properties before the failing one keep their loaded values,
/// properties after it stay untouched, and a composite property whose
/// record failed half-way keeps its prior value.
///
/// # Examples
///
/// ```
/// use pk_persist::archive::JsonArchive;
/// use pk_persist::derive::Persist;
/// use pk_persist::walk;
///
/// #[derive(Persist, Default, PartialEq, Debug)]
/// struct Monitor {
///     label: String,
///     width: u32,
/// }
///
/// let stored = Monitor { label: "left".into(), width: 1920 };
/// let archive = walk::serialize::<JsonArchive>(&stored);
///
/// let mut fresh = Monitor::default();
/// walk::deserialize(&archive, &mut fresh)?;
///
/// assert_eq!(fresh, stored);
/// # Ok::<(), pk_persist::PersistError>(())
/// ```
pub fn deserialize<A: Archive>(
    archive: &A,
    value: &mut dyn Composite,
) -> Result<(), PersistError> {
    crate::cfg::debug! {
        // Perhaps useless, it can be cleared by `pop` usually.
        PROPERTY_PATH_STACK.with_borrow_mut(|path| path.clear());
    }

    load_composite(archive, value)
}

/// Default-constructs a `T` and loads `archive` into it.
///
/// This is [`deserialize`] for callers who have no instance yet. On failure
/// the half-loaded instance is dropped and only the error survives.
///
/// # Examples
///
/// ```
/// use pk_persist::archive::JsonArchive;
/// use pk_persist::derive::Persist;
/// use pk_persist::walk;
///
/// #[derive(Persist, Default, PartialEq, Debug)]
/// struct Monitor {
///     label: String,
///     width: u32,
/// }
///
/// let archive = JsonArchive::from_json_str(r#"{"label":"left","width":1920}"#)?;
/// let monitor: Monitor = walk::from_archive(&archive)?;
///
/// assert_eq!(monitor.width, 1920);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn from_archive<T: Properties, A: Archive>(archive: &A) -> Result<T, PersistError> {
    let mut value = T::default();
    deserialize(archive, &mut value)?;
    Ok(value)
}

fn load_composite<A: Archive>(
    archive: &A,
    value: &mut dyn Composite,
) -> Result<(), PersistError> {
    for index in 0..value.property_len() {
        let name = value.name_at(index).expect("valid index");
        let slot = value.property_at_mut(index).expect("valid index");

        crate::cfg::debug! {
            PROPERTY_PATH_STACK.with_borrow_mut(|path| path.push(name));
        }

        match slot.persist_mut() {
            PersistMut::Leaf(leaf_slot) => {
                let leaf = archive.retrieve_leaf(name).map_err(report)?;
                leaf_slot.apply_leaf(leaf).map_err(report)?;
            }
            PersistMut::Composite(child_slot) => {
                let nested = archive.retrieve_child(name).map_err(report)?;

                let mut staged = child_slot.boxed_default();
                load_composite(&nested, &mut *staged)?;

                child_slot
                    .set(staged)
                    .expect("staged default matches the slot type");
            }
        }

        crate::cfg::debug! {
            PROPERTY_PATH_STACK.with_borrow_mut(|path| path.pop());
        }
    }

    Ok(())
}

/// Hands a walk error up, reporting the failure path first.
#[inline]
fn report(error: PersistError) -> PersistError {
    crate::cfg::debug! {
        PROPERTY_PATH_STACK.with_borrow(|path| {
            log::debug!("loading failed at {path:?}: {error}");
        });
    }
    error
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Leaf;
    use crate::archive::Archive;
    use crate::ops::PersistKind;
    use crate::walk::samples::{MapArchive, Monitor, Workstation};
    use crate::walk::{deserialize, from_archive, serialize};
    use crate::{LeafKind, PersistError};

    fn left_monitor() -> Monitor {
        Monitor {
            label: String::from("left"),
            width: 1920,
        }
    }

    #[test]
    fn round_trip_restores_every_property() {
        let workstation = Workstation {
            monitor: left_monitor(),
            seat: 4,
            shared: true,
        };

        let archive = serialize::<MapArchive>(&workstation);
        let copy: Workstation = from_archive(&archive).unwrap();

        assert_eq!(copy, workstation);
    }

    #[test]
    fn missing_entries_keep_earlier_loads() {
        let mut archive = serialize::<MapArchive>(&Workstation {
            monitor: left_monitor(),
            seat: 4,
            shared: true,
        });
        archive.remove("seat");

        let mut target = Workstation::default();
        let error = deserialize(&archive, &mut target);

        assert_eq!(error, Err(PersistError::MissingProperty { name: "seat" }));
        // The monitor sits before the seat in declaration order, so it is
        // already loaded. The shared flag sits after and stays untouched.
        assert_eq!(target.monitor, left_monitor());
        assert_eq!(target.seat, 0);
        assert!(!target.shared);
    }

    #[test]
    fn wrong_node_kinds_are_reported_not_applied() {
        let mut archive = MapArchive::default();
        archive.store_leaf("monitor", Leaf::UInt(1));
        archive.store_leaf("seat", Leaf::UInt(4));

        let mut target = Workstation::default();
        let error = deserialize(&archive, &mut target);

        assert_eq!(
            error,
            Err(PersistError::MismatchedNodeKind {
                name: "monitor",
                from_kind: PersistKind::Leaf,
                to_kind: PersistKind::Composite,
            })
        );
        assert_eq!(target.seat, 0);
    }

    #[test]
    fn half_loaded_records_do_not_assign() {
        let mut broken = MapArchive::default();
        broken.store_leaf("label", Leaf::Str(String::from("right")));
        broken.store_leaf("width", Leaf::Str(String::from("wide")));

        let mut archive = MapArchive::default();
        archive.store_child("monitor", broken);
        archive.store_leaf("seat", Leaf::UInt(9));

        let mut target = Workstation {
            monitor: left_monitor(),
            seat: 4,
            shared: true,
        };
        let error = deserialize(&archive, &mut target);

        assert_eq!(
            error,
            Err(PersistError::MismatchedLeaf {
                from_kind: LeafKind::Str,
                to_type: "u32",
            })
        );
        // The stand-in that took "right" was dropped, not assigned.
        assert_eq!(target.monitor, left_monitor());
        // The failure sits before the seat, so the seat stays untouched.
        assert_eq!(target.seat, 4);
        assert!(target.shared);
    }

    #[test]
    fn loading_is_addressed_by_name_not_position() {
        let mut archive = MapArchive::default();
        archive.store_leaf("shared", Leaf::Bool(true));
        archive.store_leaf("seat", Leaf::UInt(7));

        let mut child = MapArchive::default();
        child.store_leaf("width", Leaf::UInt(640));
        child.store_leaf("label", Leaf::Str(String::from("spare")));
        archive.store_child("monitor", child);

        let copy: Workstation = from_archive(&archive).unwrap();

        assert_eq!(copy.seat, 7);
        assert!(copy.shared);
        assert_eq!(copy.monitor.label, "spare");
        assert_eq!(copy.monitor.width, 640);
    }
}
