//! Typed data binding for ActivityStreams-style JSON-LD.
//!
//! Every vocabulary type is a [`Record`] driven by a static [`TypeSchema`].
//! Each declared property holds polymorphic [`Cell`]s: a nested object
//! resolved through the [`Registry`], an IRI, a literal, or an unknown value
//! kept verbatim. Unrecognized keys survive a round trip as extensions.
//!
//! ```
//! use ld_bind::vocab::{props, Add};
//!
//! let add: Add = ld_bind::from_str(r#"{
//!     "@context": "https://www.w3.org/ns/activitystreams",
//!     "type": "Add",
//!     "actor": "https://example.com/alice",
//!     "object": {"type": "Note", "content": "hi"}
//! }"#).unwrap();
//!
//! assert!(add.first(&props::ACTOR).unwrap().is_iri());
//! let json = ld_bind::to_value(&add).unwrap();
//! assert_eq!(json["object"]["content"], "hi");
//! assert!(json.get("@context").is_none());
//! ```

pub use serde;
pub use serde_json;

pub mod cell;
pub mod codec;
pub mod duration;
pub mod error;
pub mod iri;
pub mod lang_map;
mod macros;
pub mod options;
pub mod record;
pub mod registry;
pub mod schema;
pub mod session;
pub mod slot;
pub mod unknown;
pub mod vocab;

pub use cell::Cell;
pub use codec::{LangString, Lexical, Scalar, Units};
pub use duration::Duration;
pub use error::{BindError, Result};
pub use iri::Iri;
pub use lang_map::LangMap;
pub use options::Options;
pub use record::Record;
pub use registry::{Constructor, Registry};
pub use schema::{Capability, Kind, Property, ScalarKind, TypeSchema};
pub use slot::Slot;

use serde_json::{Map, Value};

use crate::cell::{type_names, TYPE_KEY};
use crate::error::json_type_name;

// === Vocabulary Trait ===

/// A typed view over a [`Record`] of one fixed schema.
///
/// Implemented by every type declared through [`vocabulary!`].
pub trait Vocabulary: Sized {
    fn schema() -> &'static TypeSchema;

    fn as_record(&self) -> &Record;

    fn as_record_mut(&mut self) -> &mut Record;

    fn into_record(self) -> Record;

    #[doc(hidden)]
    fn wrap(record: Record) -> Self;

    /// Fails with [`BindError::SchemaMismatch`] when `record` belongs to
    /// another type.
    fn from_record(record: Record) -> Result<Self> {
        let expected = Self::schema();
        if record.schema() != expected {
            return Err(BindError::SchemaMismatch {
                expected: expected.name,
                found: record.type_name(),
            });
        }
        Ok(Self::wrap(record))
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self> {
        Self::from_map_with(map, Registry::builtin(), &Options::default())
    }

    fn from_map_with(map: &Map<String, Value>, registry: &Registry, options: &Options) -> Result<Self> {
        let mut record = Record::new(Self::schema());
        record.deserialize_map_with(map, registry, options)?;
        Ok(Self::wrap(record))
    }

    fn to_map(&self) -> Result<Map<String, Value>> {
        self.as_record().serialize_map()
    }
}

// === Serialization Functions ===

pub fn to_value<T: Vocabulary>(value: &T) -> Result<Value> {
    Ok(Value::Object(value.to_map()?))
}

pub fn to_string<T: Vocabulary>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(&to_value(value)?)?)
}

pub fn to_string_pretty<T: Vocabulary>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(value)?)?)
}

pub fn from_value<T: Vocabulary>(value: &Value) -> Result<T> {
    match value {
        Value::Object(map) => T::from_map(map),
        other => Err(BindError::NotAnObject {
            type_name: T::schema().name,
            found: json_type_name(other),
        }),
    }
}

pub fn from_str<T: Vocabulary>(text: &str) -> Result<T> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

// === Untyped Decoding ===

/// Decode an object whose concrete type is not known up front.
///
/// Type names are resolved as an Object first, then as a Link. Returns
/// `None` for non-objects and for types the builtin registry does not know.
pub fn decode_any(value: &Value) -> Result<Option<Record>> {
    decode_any_with(value, Registry::builtin(), &Options::default())
}

pub fn decode_any_with(value: &Value, registry: &Registry, options: &Options) -> Result<Option<Record>> {
    let Value::Object(map) = value else {
        return Ok(None);
    };
    let names = type_names(map.get(TYPE_KEY));
    for capability in [Capability::Object, Capability::Link] {
        for name in &names {
            if let Some(constructor) = registry.resolve(capability, name) {
                tracing::trace!(capability = %capability, type_name = %name, "resolved top-level object");
                let mut record = constructor.construct();
                record.deserialize_map_with(map, registry, options)?;
                return Ok(Some(record));
            }
        }
    }
    tracing::debug!(types = ?names, "no registered type for top-level object");
    Ok(None)
}
