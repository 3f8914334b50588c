use crate::archive::Archive;
use crate::ops::{Composite, PersistRef};

// -----------------------------------------------------------------------------
// Serialize

/// Stores every declared property of `value` into a fresh archive.
///
/// Properties are visited in declaration order. A leaf property is handed to
/// the archive as its [`Leaf`] encoding. A composite property is serialized
/// into a brand-new archive of the same backend first and the finished
/// result is stored as a nested record, so arbitrary nesting depth falls out
/// of the recursion.
///
/// There is no failure path: a property whose type has no encoding does not
/// satisfy [`Persist`] and already fails to compile at its declaration.
///
/// # Examples
///
/// ```
/// use pk_persist::archive::JsonArchive;
/// use pk_persist::derive::Persist;
/// use pk_persist::walk;
///
/// #[derive(Persist, Default)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let ada = Person { name: "Ada".into(), age: 36 };
/// let archive = walk::serialize::<JsonArchive>(&ada);
///
/// assert_eq!(archive.to_json_string(), r#"{"age":36,"name":"Ada"}"#);
/// ```
///
/// [`Leaf`]: crate::Leaf
/// [`Persist`]: crate::Persist
pub fn serialize<A: Archive>(value: &dyn Composite) -> A {
    let mut archive = A::default();
    store_composite(value, &mut archive);
    archive
}

fn store_composite<A: Archive>(value: &dyn Composite, archive: &mut A) {
    for (index, property) in value.iter_properties().enumerate() {
        let name = value.name_at(index).expect("valid index");

        match property.persist_ref() {
            PersistRef::Leaf(leaf) => archive.store_leaf(name, leaf),
            PersistRef::Composite(child) => {
                let mut nested = A::default();
                store_composite(child, &mut nested);
                archive.store_child(name, nested);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Leaf;
    use crate::archive::{JsonArchive, Node};
    use crate::walk::samples::{Monitor, Workstation};
    use crate::walk::serialize;

    #[test]
    fn declaration_order_drives_the_visit() {
        let workstation = Workstation {
            monitor: Monitor {
                label: String::from("left"),
                width: 1920,
            },
            seat: 4,
            shared: true,
        };

        let archive = serialize::<JsonArchive>(&workstation);
        let document = archive.document();

        assert_eq!(document.name_at(0), Some("monitor"));
        assert_eq!(document.name_at(1), Some("seat"));
        assert_eq!(document.name_at(2), Some("shared"));
        assert_eq!(document.get("seat"), Some(&Node::Leaf(Leaf::UInt(4))));
    }

    #[test]
    fn nested_records_match_their_own_serialization() {
        let monitor = Monitor {
            label: String::from("left"),
            width: 1920,
        };
        let workstation = Workstation {
            monitor: monitor.clone(),
            seat: 4,
            shared: true,
        };

        let alone = serialize::<JsonArchive>(&monitor);
        let nested = serialize::<JsonArchive>(&workstation);

        assert_eq!(
            nested.document().get("monitor"),
            Some(&Node::Child(alone.document().clone()))
        );

        // One entry per declared property, the child keeps its own two and
        // none of them leak into the parent.
        assert_eq!(nested.document().len(), 3);
        assert_eq!(alone.document().len(), 2);
        assert!(nested.document().get("label").is_none());
    }

    #[test]
    fn sibling_entries_stay_independent() {
        let mut workstation = Workstation {
            monitor: Monitor {
                label: String::from("left"),
                width: 1920,
            },
            seat: 4,
            shared: true,
        };

        let before = serialize::<JsonArchive>(&workstation);
        workstation.seat = 5;
        let after = serialize::<JsonArchive>(&workstation);

        assert_eq!(
            before.document().get("monitor"),
            after.document().get("monitor")
        );
        assert_eq!(
            before.document().get("shared"),
            after.document().get("shared")
        );
        assert_ne!(before.document().get("seat"), after.document().get("seat"));
    }
}
