use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::{String, ToString};
use core::{error, fmt};

use serde_json::{Map, Number, Value};

use crate::archive::{Archive, Document, DocumentError, Node};
use crate::persistence::{Leaf, PersistError};

crate::cfg::std! {
    use std::path::Path;
}

// -----------------------------------------------------------------------------
// JsonArchive

/// [`Archive`] backend rendering documents as JSON text.
///
/// The in-memory side is a plain [`Document`]; JSON only appears at the text
/// boundary. One document becomes one JSON object, every slot becomes one
/// member keyed by its name, nested documents become nested objects and
/// leaves become native JSON scalars. No envelope or type tag is written:
/// the text's shape is defined entirely by the property lists that produced
/// it.
///
/// # Number encodings
///
/// JSON has a single number grammar, so loading picks the narrowest reading
/// that fits: `i64` first, then `u64`, then `f64`. The cross-signed leaf
/// conversions make that choice invisible to properties.
///
/// Non-finite floats have no JSON encoding. Storing one writes `null` and
/// reports the anomaly through [`log`].
///
/// # Examples
///
/// ```
/// use pk_persist::Leaf;
/// use pk_persist::archive::{Archive, JsonArchive};
///
/// let mut archive = JsonArchive::new();
/// archive.store_leaf("label", Leaf::Str("left".into()));
/// archive.store_leaf("width", Leaf::UInt(1920));
///
/// let text = archive.to_json_string();
/// assert_eq!(text, r#"{"label":"left","width":1920}"#);
///
/// let loaded = JsonArchive::from_json_str(&text)?;
/// assert_eq!(loaded, archive);
/// # Ok::<(), pk_persist::archive::DocumentError>(())
/// ```
#[derive(Default, Clone, PartialEq)]
pub struct JsonArchive {
    document: Document,
}

impl JsonArchive {
    /// Creates an empty archive.
    #[inline]
    pub const fn new() -> Self {
        Self {
            document: Document::new(),
        }
    }

    /// Returns the document tree behind the archive.
    #[inline]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Renders the whole document as compact JSON text.
    pub fn to_json_string(&self) -> String {
        encode(&self.document).to_string()
    }

    /// Renders the whole document as indented JSON text.
    pub fn to_json_string_pretty(&self) -> String {
        format!("{:#}", encode(&self.document))
    }

    /// Parses JSON text into a fresh archive.
    ///
    /// # Errors
    ///
    /// [`DocumentError::Malformed`] when the text is not JSON, when its root
    /// is not an object, or when it contains a value the document model has
    /// no slot for (`null` or an array).
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text).map_err(DocumentError::malformed)?;

        match value {
            Value::Object(object) => {
                let document = decode_object(object).map_err(DocumentError::malformed)?;
                Ok(Self { document })
            }
            other => Err(DocumentError::malformed(JsonValueError::new(&other))),
        }
    }
}

impl fmt::Debug for JsonArchive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonArchive(")?;
        self.document.fmt(f)?;
        write!(f, ")")
    }
}

impl Archive for JsonArchive {
    #[inline]
    fn store_leaf(&mut self, name: &'static str, value: Leaf) {
        self.document.store_leaf(name, value);
    }

    #[inline]
    fn retrieve_leaf(&self, name: &'static str) -> Result<Leaf, PersistError> {
        self.document.retrieve_leaf(name)
    }

    #[inline]
    fn store_child(&mut self, name: &'static str, child: Self) {
        self.document.store_child(name, child.document);
    }

    fn retrieve_child(&self, name: &'static str) -> Result<Self, PersistError> {
        let child = self.document.retrieve_child(name)?;
        Ok(Self {
            document: child.clone(),
        })
    }

    crate::cfg::std! {
        fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
            std::fs::write(path, self.to_json_string_pretty())?;
            Ok(())
        }

        fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
            let text = std::fs::read_to_string(path)?;
            Self::from_json_str(&text)
        }
    }
}

// -----------------------------------------------------------------------------
// JSON conversion

fn encode(document: &Document) -> Value {
    let mut object = Map::new();
    for (name, node) in document.iter() {
        let value = match node {
            Node::Leaf(leaf) => encode_leaf(leaf),
            Node::Child(child) => encode(child),
        };
        object.insert(name.to_owned(), value);
    }
    Value::Object(object)
}

fn encode_leaf(leaf: &Leaf) -> Value {
    match leaf {
        Leaf::Int(int) => Value::Number((*int).into()),
        Leaf::UInt(uint) => Value::Number((*uint).into()),
        Leaf::Float(float) => match Number::from_f64(*float) {
            Some(number) => Value::Number(number),
            None => {
                log::warn!("`{float}` has no JSON encoding, storing null");
                Value::Null
            }
        },
        Leaf::Bool(flag) => Value::Bool(*flag),
        Leaf::Str(text) => Value::String(text.clone()),
    }
}

fn decode_object(object: Map<String, Value>) -> Result<Document, JsonValueError> {
    let mut document = Document::with_capacity(object.len());
    for (name, value) in object {
        document.set(name, decode_node(value)?);
    }
    Ok(document)
}

fn decode_node(value: Value) -> Result<Node, JsonValueError> {
    match value {
        Value::Object(object) => Ok(Node::Child(decode_object(object)?)),
        Value::Bool(flag) => Ok(Node::Leaf(Leaf::Bool(flag))),
        Value::Number(number) => Ok(Node::Leaf(decode_number(&number))),
        Value::String(text) => Ok(Node::Leaf(Leaf::Str(text))),
        other => Err(JsonValueError::new(&other)),
    }
}

fn decode_number(number: &Number) -> Leaf {
    if let Some(int) = number.as_i64() {
        Leaf::Int(int)
    } else if let Some(uint) = number.as_u64() {
        Leaf::UInt(uint)
    } else {
        // i64 and u64 are checked, the rest of the JSON number grammar is a
        // float.
        Leaf::Float(number.as_f64().unwrap_or(f64::NAN))
    }
}

// -----------------------------------------------------------------------------
// JsonValueError

/// An error for JSON values the document model has no slot for.
///
/// The model stores scalars and nested objects. `null` carries no type to
/// decode into and arrays are container values, which the engine does not
/// walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonValueError {
    found: &'static str,
}

impl JsonValueError {
    fn new(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Self { found }
    }
}

impl fmt::Display for JsonValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON `{}` values have no document encoding", self.found)
    }
}

impl error::Error for JsonValueError {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::archive::{Archive, JsonArchive, Node};
    use crate::{Leaf, LeafKind};

    fn sample() -> JsonArchive {
        let mut monitor = JsonArchive::new();
        monitor.store_leaf("label", Leaf::Str(String::from("left")));
        monitor.store_leaf("width", Leaf::UInt(1920));

        let mut archive = JsonArchive::new();
        archive.store_leaf("seat", Leaf::Int(-2));
        archive.store_leaf("shared", Leaf::Bool(true));
        archive.store_child("monitor", monitor);
        archive
    }

    #[test]
    fn text_round_trip_keeps_every_node() {
        let archive = sample();
        let text = archive.to_json_string();

        assert_eq!(
            text,
            r#"{"monitor":{"label":"left","width":1920},"seat":-2,"shared":true}"#
        );

        let loaded = JsonArchive::from_json_str(&text).unwrap();
        assert_eq!(loaded, archive);
    }

    #[test]
    fn numbers_take_the_narrowest_reading() {
        let text = r#"{"a":-1,"b":18446744073709551615,"c":2.5}"#;
        let archive = JsonArchive::from_json_str(text).unwrap();

        assert_eq!(archive.retrieve_leaf("a"), Ok(Leaf::Int(-1)));
        assert_eq!(archive.retrieve_leaf("b"), Ok(Leaf::UInt(u64::MAX)));
        assert_eq!(archive.retrieve_leaf("c"), Ok(Leaf::Float(2.5)));
    }

    #[test]
    fn leaf_kinds_survive_the_text() {
        let archive = sample();
        let loaded = JsonArchive::from_json_str(&archive.to_json_string()).unwrap();

        let leaf = loaded.retrieve_leaf("seat").unwrap();
        assert_eq!(leaf.kind(), LeafKind::Int);

        let monitor = loaded.retrieve_child("monitor").unwrap();
        let leaf = monitor.retrieve_leaf("width").unwrap();
        assert_eq!(leaf.kind(), LeafKind::UInt);
    }

    #[test]
    fn non_finite_floats_store_as_null() {
        let mut archive = JsonArchive::new();
        archive.store_leaf("ratio", Leaf::Float(f64::NAN));

        let text = archive.to_json_string();
        assert_eq!(text, r#"{"ratio":null}"#);

        // And null has no reading back.
        assert!(JsonArchive::from_json_str(&text).is_err());
    }

    #[test]
    fn rejects_text_without_an_object_root() {
        assert!(JsonArchive::from_json_str("[1,2]").is_err());
        assert!(JsonArchive::from_json_str("17").is_err());
        assert!(JsonArchive::from_json_str("{\"open").is_err());
        assert!(JsonArchive::from_json_str(r#"{"tags":["a"]}"#).is_err());
    }

    crate::cfg::std! {
        #[test]
        fn files_round_trip_through_disk() {
            let directory = tempfile::tempdir().unwrap();
            let path = directory.path().join("workstation.json");

            let archive = sample();
            archive.save_to_file(&path).unwrap();

            let loaded = JsonArchive::load_from_file(&path).unwrap();
            assert_eq!(loaded, archive);
        }
    }

    #[test]
    fn documents_keep_walk_order_but_text_sorts() {
        let archive = sample();

        assert_eq!(archive.document().name_at(0), Some("seat"));
        assert!(matches!(
            archive.document().node_at(2),
            Some(Node::Child(_))
        ));
    }
}
