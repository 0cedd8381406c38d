//! One vocabulary instance: typed slots, natural-language maps and
//! extension entries, plus the map-level (de)serializer.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cell::{Cell, TYPE_KEY};
use crate::codec::Scalar;
use crate::error::{BindError, Result};
use crate::iri::Iri;
use crate::lang_map::LangMap;
use crate::options::Options;
use crate::registry::Registry;
use crate::schema::{Kind, Property, TypeSchema};
use crate::session::{Decoder, Encoder};
use crate::slot::Slot;

/// Dropped on input, never written.
pub const CONTEXT_KEY: &str = "@context";

const ID_KEY: &str = "id";

/// Instance of one [`TypeSchema`].
///
/// Every JSON key lives in exactly one place: a property slot, a language
/// map, or the extension map.
#[derive(Clone, PartialEq)]
pub struct Record {
    schema: &'static TypeSchema,
    slots: HashMap<&'static str, Slot>,
    lang_maps: HashMap<&'static str, LangMap>,
    unknown: Map<String, Value>,
}

impl Record {
    pub fn new(schema: &'static TypeSchema) -> Self {
        Record {
            schema,
            slots: HashMap::new(),
            lang_maps: HashMap::new(),
            unknown: Map::new(),
        }
    }

    pub fn schema(&self) -> &'static TypeSchema {
        self.schema
    }

    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    // === Deserialization ===

    /// Merge `map` into this record using the builtin registry and default
    /// options.
    pub fn deserialize_map(&mut self, map: &Map<String, Value>) -> Result<()> {
        self.deserialize_map_with(map, Registry::builtin(), &Options::default())
    }

    /// Merge `map` into this record.
    ///
    /// Keys are visited in map order and a later key overwrites the slot an
    /// earlier one filled. Only nested structural failures are errors, and
    /// changes made before the failing key are kept.
    pub fn deserialize_map_with(
        &mut self,
        map: &Map<String, Value>,
        registry: &Registry,
        options: &Options,
    ) -> Result<()> {
        self.decode_map(&Decoder::new(registry, options), map)
    }

    pub(crate) fn decode_map(&mut self, decoder: &Decoder<'_>, map: &Map<String, Value>) -> Result<()> {
        for (key, value) in map {
            if key == CONTEXT_KEY {
                continue;
            }
            if let Some(property) = self.schema.property(key) {
                self.decode_property(decoder, property, value)?;
            } else if let Some(property) = self.schema.property_for_map_key(key)
                && let Value::Object(entries) = value
            {
                self.unknown.shift_remove(key);
                self.lang_maps.insert(property.name, LangMap::from_json(entries));
            } else {
                tracing::debug!(type_name = self.schema.name, key = %key, "keeping extension key");
                if let Some(property) = self.schema.property_for_map_key(key) {
                    self.lang_maps.remove(property.name);
                }
                self.unknown.insert(key.clone(), decoder.unknown(value)?);
            }
        }
        Ok(())
    }

    fn decode_property(
        &mut self,
        decoder: &Decoder<'_>,
        property: &'static Property,
        value: &Value,
    ) -> Result<()> {
        let slot = if property.functional {
            Slot::Functional(Cell::decode(decoder, property, value)?)
        } else {
            let mut cells = Vec::new();
            match value {
                Value::Array(items) => {
                    for item in items {
                        cells.extend(Cell::decode(decoder, property, item)?);
                    }
                }
                single => cells.extend(Cell::decode(decoder, property, single)?),
            }
            Slot::NonFunctional(cells)
        };
        if slot.is_empty() {
            self.slots.remove(property.name);
        } else {
            self.slots.insert(property.name, slot);
        }
        Ok(())
    }

    // === Serialization ===

    pub fn serialize_map(&self) -> Result<Map<String, Value>> {
        self.serialize_map_with(&Options::default())
    }

    /// Build a fresh JSON object: extensions, then `type`, then every
    /// property in schema order, each followed by its language map.
    pub fn serialize_map_with(&self, options: &Options) -> Result<Map<String, Value>> {
        self.encode_map(&Encoder::new(options))
    }

    pub(crate) fn encode_map(&self, encoder: &Encoder<'_>) -> Result<Map<String, Value>> {
        let mut out = Map::new();
        for (key, value) in &self.unknown {
            out.insert(key.clone(), encoder.unknown(value)?);
        }
        out.insert(TYPE_KEY.to_string(), self.encode_types(encoder)?);

        for property in self.schema.properties() {
            if property.name != TYPE_KEY
                && let Some(slot) = self.slots.get(property.name)
            {
                let values = encode_cells(slot.as_slice(), encoder)?;
                if let Some(value) = collapse(values) {
                    out.insert(property.name.to_string(), value);
                }
            }
            if let Some(key) = property.lang_map
                && let Some(map) = self.lang_maps.get(property.name)
            {
                out.insert(key.to_string(), map.to_json());
            }
        }
        Ok(out)
    }

    /// Declared type values with the schema's own name appended when
    /// missing.
    fn encode_types(&self, encoder: &Encoder<'_>) -> Result<Value> {
        let mut values = encode_cells(self.values_named(TYPE_KEY), encoder)?;
        if !values.iter().any(|value| value.as_str() == Some(self.schema.name)) {
            values.push(Value::String(self.schema.name.to_string()));
        }
        Ok(collapse(values).unwrap_or_default())
    }

    // === Reading ===

    /// Number of values held by `property`.
    pub fn len(&self, property: &Property) -> usize {
        self.values(property).len()
    }

    pub fn is_empty_property(&self, property: &Property) -> bool {
        self.values(property).is_empty()
    }

    /// Values in insertion order; empty for unset or undeclared properties.
    pub fn values(&self, property: &Property) -> &[Cell] {
        self.values_named(property.name)
    }

    pub fn get(&self, property: &Property, index: usize) -> Option<&Cell> {
        self.values(property).get(index)
    }

    /// Nested record at `index`, for editing in place. Other cells are
    /// replaced through [`Record::set`] so that their kind is checked.
    pub fn get_record_mut(&mut self, property: &Property, index: usize) -> Option<&mut Record> {
        self.slots
            .get_mut(property.name)
            .and_then(|slot| slot.as_mut_slice().get_mut(index))
            .and_then(Cell::as_record_mut)
    }

    pub fn first(&self, property: &Property) -> Option<&Cell> {
        self.values(property).first()
    }

    fn values_named(&self, name: &str) -> &[Cell] {
        self.slots.get(name).map(Slot::as_slice).unwrap_or_default()
    }

    // === Writing ===

    /// Replace every value of `property` with `cell`.
    pub fn set(&mut self, property: &Property, cell: impl Into<Cell>) -> Result<()> {
        let cell = cell.into();
        let declared = self.checked(property, &cell)?;
        self.slot_mut(declared).set(cell);
        Ok(())
    }

    pub fn append(&mut self, property: &Property, cell: impl Into<Cell>) -> Result<()> {
        let cell = cell.into();
        let declared = self.checked_multi(property, &cell)?;
        self.slot_mut(declared).append(cell);
        Ok(())
    }

    pub fn prepend(&mut self, property: &Property, cell: impl Into<Cell>) -> Result<()> {
        let cell = cell.into();
        let declared = self.checked_multi(property, &cell)?;
        self.slot_mut(declared).prepend(cell);
        Ok(())
    }

    /// Remove the value at `index`; later values shift left.
    pub fn remove(&mut self, property: &Property, index: usize) -> Option<Cell> {
        let slot = self.slots.get_mut(property.name)?;
        let removed = slot.remove(index);
        if slot.is_empty() {
            self.slots.remove(property.name);
        }
        removed
    }

    /// Unset `property`, returning whatever it held.
    pub fn clear(&mut self, property: &Property) -> Vec<Cell> {
        match self.slots.remove(property.name) {
            Some(Slot::Functional(cell)) => cell.into_iter().collect(),
            Some(Slot::NonFunctional(cells)) => cells,
            None => Vec::new(),
        }
    }

    pub fn set_iri(&mut self, property: &Property, iri: &str) -> Result<()> {
        self.set(property, Iri::parse(iri)?)
    }

    pub fn append_iri(&mut self, property: &Property, iri: &str) -> Result<()> {
        self.append(property, Iri::parse(iri)?)
    }

    pub fn set_string(&mut self, property: &Property, text: impl Into<String>) -> Result<()> {
        self.set(property, Scalar::String(text.into()))
    }

    pub fn append_string(&mut self, property: &Property, text: impl Into<String>) -> Result<()> {
        self.append(property, Scalar::String(text.into()))
    }

    /// Store `record` under the first capability of `property` it
    /// satisfies.
    pub fn set_object(&mut self, property: &Property, record: impl Into<Record>) -> Result<()> {
        let declared = self.declared(property)?;
        let cell = Cell::for_record(declared, record.into())?;
        self.set(declared, cell)
    }

    pub fn append_object(&mut self, property: &Property, record: impl Into<Record>) -> Result<()> {
        let declared = self.declared(property)?;
        let cell = Cell::for_record(declared, record.into())?;
        self.append(declared, cell)
    }

    fn slot_mut(&mut self, property: &'static Property) -> &mut Slot {
        self.slots
            .entry(property.name)
            .or_insert_with(|| Slot::for_property(property))
    }

    fn declared(&self, property: &Property) -> Result<&'static Property> {
        self.schema
            .property(property.name)
            .ok_or_else(|| BindError::UndeclaredProperty {
                type_name: self.schema.name,
                property: property.name.to_string(),
            })
    }

    fn checked(&self, property: &Property, cell: &Cell) -> Result<&'static Property> {
        let declared = self.declared(property)?;
        let allowed = match cell {
            Cell::Unknown(_) => true,
            Cell::Nested(capability, record) => {
                declared.allows(Kind::Nested(*capability)) && record.schema().satisfies(*capability)
            }
            other => other.kind().is_some_and(|kind| declared.allows(kind)),
        };
        if !allowed {
            return Err(BindError::KindNotAllowed {
                property: declared.name,
                kind: cell
                    .kind()
                    .map_or_else(|| "unknown".to_string(), |kind| kind.to_string()),
            });
        }
        Ok(declared)
    }

    fn checked_multi(&self, property: &Property, cell: &Cell) -> Result<&'static Property> {
        let declared = self.checked(property, cell)?;
        if declared.functional {
            return Err(BindError::Functional {
                property: declared.name,
            });
        }
        Ok(declared)
    }

    // === Natural-language maps ===

    pub fn lang_map(&self, property: &Property) -> Option<&LangMap> {
        self.lang_maps.get(property.name)
    }

    pub fn set_lang_map(&mut self, property: &Property, map: LangMap) -> Result<()> {
        let declared = self.declared_lang_map(property)?;
        self.take_lang_map_key(declared);
        self.lang_maps.insert(declared.name, map);
        Ok(())
    }

    /// Add one language variant, creating the map when absent.
    pub fn insert_lang(
        &mut self,
        property: &Property,
        tag: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<()> {
        let declared = self.declared_lang_map(property)?;
        self.take_lang_map_key(declared);
        self.lang_maps.entry(declared.name).or_default().insert(tag, text);
        Ok(())
    }

    pub fn clear_lang_map(&mut self, property: &Property) -> Option<LangMap> {
        self.lang_maps.remove(property.name)
    }

    /// A malformed map read from JSON sits in the extension map until a
    /// real map takes its key.
    fn take_lang_map_key(&mut self, property: &Property) {
        if let Some(key) = property.lang_map
            && self.unknown.shift_remove(key).is_some()
        {
            tracing::debug!(type_name = self.schema.name, key, "dropping malformed language map");
        }
    }

    fn declared_lang_map(&self, property: &Property) -> Result<&'static Property> {
        let declared = self.declared(property)?;
        if declared.lang_map.is_none() {
            return Err(BindError::KindNotAllowed {
                property: declared.name,
                kind: "natural-language map".to_string(),
            });
        }
        Ok(declared)
    }

    // === Extensions ===

    pub fn unknown(&self, key: &str) -> Option<&Value> {
        self.unknown.get(key)
    }

    pub fn unknown_entries(&self) -> &Map<String, Value> {
        &self.unknown
    }

    /// Store an extension entry. Declared keys and `@context` belong to the
    /// schema and are refused.
    pub fn set_unknown(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        if key == CONTEXT_KEY || self.schema.declares_key(&key) {
            return Err(BindError::ReservedKey {
                type_name: self.schema.name,
                key,
            });
        }
        self.unknown.insert(key, value);
        Ok(())
    }

    pub fn remove_unknown(&mut self, key: &str) -> Option<Value> {
        self.unknown.shift_remove(key)
    }

    // === Convenience ===

    /// Declared `type` names as strings, in order. The schema's own name is
    /// only included when it was set explicitly.
    pub fn types(&self) -> Vec<&str> {
        self.values_named(TYPE_KEY)
            .iter()
            .filter_map(|cell| cell.as_str().or_else(|| cell.as_iri().map(Iri::as_str)))
            .collect()
    }

    pub fn id(&self) -> Option<&Iri> {
        self.values_named(ID_KEY).first().and_then(Cell::as_iri)
    }
}

fn encode_cells(cells: &[Cell], encoder: &Encoder<'_>) -> Result<Vec<Value>> {
    cells.iter().map(|cell| cell.encode(encoder)).collect()
}

/// Zero values: omitted. One: bare. More: an array.
fn collapse(mut values: Vec<Value>) -> Option<Value> {
    match values.len() {
        0 => None,
        1 => values.pop(),
        _ => Some(Value::Array(values)),
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("type", &self.schema.name)
            .field("slots", &self.slots)
            .field("lang_maps", &self.lang_maps)
            .field("unknown", &self.unknown)
            .finish()
    }
}

impl Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.serialize_map()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
