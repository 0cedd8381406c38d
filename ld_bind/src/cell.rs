//! One polymorphic property value.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::codec::{LangString, Scalar};
use crate::duration::Duration;
use crate::error::{BindError, Result};
use crate::iri::Iri;
use crate::record::Record;
use crate::schema::{Capability, Kind, Property};
use crate::session::{Decoder, Encoder};

/// The `type` key every vocabulary object carries.
pub const TYPE_KEY: &str = "type";

/// Exactly one alternative out of a property's declared kinds, or an
/// unknown value kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A vocabulary object, stored under the capability it was matched as.
    Nested(Capability, Box<Record>),
    Iri(Iri),
    Scalar(Scalar),
    Unknown(Value),
}

impl Cell {
    /// Classify `value` against `property`'s kinds.
    ///
    /// `null` yields `None`. A shape no kind accepts is kept as
    /// [`Cell::Unknown`]; only a failing nested record propagates an error.
    pub fn decode(decoder: &Decoder<'_>, property: &Property, value: &Value) -> Result<Option<Cell>> {
        if value.is_null() {
            return Ok(None);
        }
        if let Value::Object(map) = value
            && map.contains_key(TYPE_KEY)
            && let Some(cell) = Self::decode_nested(decoder, property, map)?
        {
            return Ok(Some(cell));
        }
        if !value.is_array() {
            for scalar in property.scalars() {
                if let Some(decoded) = Scalar::decode(scalar, value) {
                    tracing::trace!(property = property.name, kind = scalar.as_str(), "matched literal");
                    return Ok(Some(Cell::Scalar(decoded)));
                }
            }
            if property.allows(Kind::Iri)
                && let Some(iri) = value.as_str().and_then(|s| Iri::parse(s).ok())
            {
                tracing::trace!(property = property.name, "matched IRI");
                return Ok(Some(Cell::Iri(iri)));
            }
        }

        if decoder.options().strict_iris && property.is_iri_only() {
            return Err(BindError::InvalidIri {
                iri: value.to_string(),
                reason: format!("`{}` only accepts IRIs", property.name),
            });
        }
        tracing::debug!(property = property.name, "value matched no declared kind, keeping it as unknown");
        Ok(Some(Cell::Unknown(decoder.unknown(value)?)))
    }

    /// Capabilities first, then type names, both in declared order. The
    /// first resolvable pair wins.
    fn decode_nested(
        decoder: &Decoder<'_>,
        property: &Property,
        map: &Map<String, Value>,
    ) -> Result<Option<Cell>> {
        let names = type_names(map.get(TYPE_KEY));
        for capability in property.capabilities() {
            for name in &names {
                let Some(constructor) = decoder.registry().resolve(capability, name) else {
                    continue;
                };
                tracing::trace!(
                    property = property.name,
                    capability = %capability,
                    type_name = %name,
                    "resolved nested object"
                );
                let mut record = constructor.construct();
                record.decode_map(&decoder.nested()?, map)?;
                return Ok(Some(Cell::Nested(capability, Box::new(record))));
            }
        }
        Ok(None)
    }

    pub fn encode(&self, encoder: &Encoder<'_>) -> Result<Value> {
        match self {
            Cell::Nested(_, record) => Ok(Value::Object(record.encode_map(&encoder.nested()?)?)),
            Cell::Iri(iri) => Ok(Value::String(iri.as_str().to_string())),
            Cell::Scalar(scalar) => scalar.encode(),
            Cell::Unknown(value) => encoder.unknown(value),
        }
    }

    /// Schema kind of the populated alternative; `None` for unknown values.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Cell::Nested(capability, _) => Some(Kind::Nested(*capability)),
            Cell::Iri(_) => Some(Kind::Iri),
            Cell::Scalar(scalar) => Some(Kind::Scalar(scalar.kind())),
            Cell::Unknown(_) => None,
        }
    }

    /// Wrap `record` under the first capability of `property` it satisfies.
    pub fn for_record(property: &Property, record: Record) -> Result<Cell> {
        let schema = record.schema();
        match property.capabilities().find(|c| schema.satisfies(*c)) {
            Some(capability) => Ok(Cell::Nested(capability, Box::new(record))),
            None => Err(BindError::KindNotAllowed {
                property: property.name,
                kind: format!("`{}` object", schema.name),
            }),
        }
    }

    pub fn is_nested(&self, capability: Capability) -> bool {
        matches!(self, Cell::Nested(c, _) if *c == capability)
    }

    pub fn as_nested(&self, capability: Capability) -> Option<&Record> {
        match self {
            Cell::Nested(c, record) if *c == capability => Some(record),
            _ => None,
        }
    }

    /// The nested record regardless of capability.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Cell::Nested(_, record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Cell::Nested(_, record) => Some(record),
            _ => None,
        }
    }

    pub fn capability(&self) -> Option<Capability> {
        match self {
            Cell::Nested(c, _) => Some(*c),
            _ => None,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Cell::Iri(_))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Cell::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The IRI a value points at: the IRI itself, or a nested object's `id`.
    pub fn reference(&self) -> Option<&Iri> {
        match self {
            Cell::Iri(iri) => Some(iri),
            Cell::Nested(_, record) => record.id(),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Cell::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Text of a string-like literal (string, media type, tag, relation).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Scalar(
                Scalar::String(s) | Scalar::MediaType(s) | Scalar::Bcp47(s) | Scalar::Rfc5988(s),
            ) => Some(s),
            _ => None,
        }
    }

    pub fn as_lang_string(&self) -> Option<&LangString> {
        match self {
            Cell::Scalar(Scalar::LangString(ls)) => Some(ls),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Scalar(Scalar::Float(f)) => Some(*f.value()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Scalar(Scalar::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Cell::Scalar(Scalar::NonNegativeInteger(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Cell::Scalar(Scalar::DateTime(dt)) => Some(dt.value()),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            Cell::Scalar(Scalar::Duration(d)) => Some(d.value()),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Cell::Unknown(_))
    }

    pub fn as_unknown(&self) -> Option<&Value> {
        match self {
            Cell::Unknown(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Iri> for Cell {
    fn from(iri: Iri) -> Self {
        Cell::Iri(iri)
    }
}

impl From<Scalar> for Cell {
    fn from(scalar: Scalar) -> Self {
        Cell::Scalar(scalar)
    }
}

/// `"Note"` and `["Note", ...]` become a list of names; other entries are
/// ignored.
pub fn type_names(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}
