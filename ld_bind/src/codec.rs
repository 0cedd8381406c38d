//! Primitive value codecs.
//!
//! Every `decode_*` function inspects one JSON value and returns `None` when
//! the value does not have the codec's shape. Decoders never fail the
//! surrounding deserialization; the caller moves on to the next alternative.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{Map, Number, Value};

use crate::duration::Duration;
use crate::error::{BindError, Result};
use crate::schema::ScalarKind;

/// A parsed literal plus the JSON it was read from.
///
/// Decoded values write back their source unchanged. Values built in code
/// have no source and are written in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexical<T, S = String> {
    value: T,
    source: Option<S>,
}

impl<T, S> Lexical<T, S> {
    pub fn new(value: T) -> Self {
        Lexical { value, source: None }
    }

    pub fn with_source(value: T, source: S) -> Self {
        Lexical {
            value,
            source: Some(source),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T, S> From<T> for Lexical<T, S> {
    fn from(value: T) -> Self {
        Lexical::new(value)
    }
}

/// A decoded literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    LangString(LangString),
    Float(Lexical<f64, Number>),
    Boolean(bool),
    DateTime(Lexical<DateTime<FixedOffset>>),
    Duration(Lexical<Duration>),
    MediaType(String),
    NonNegativeInteger(u64),
    Bcp47(String),
    Rfc5988(String),
    Units(Units),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::String(_) => ScalarKind::String,
            Scalar::LangString(_) => ScalarKind::LangString,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::DateTime(_) => ScalarKind::DateTime,
            Scalar::Duration(_) => ScalarKind::Duration,
            Scalar::MediaType(_) => ScalarKind::MediaType,
            Scalar::NonNegativeInteger(_) => ScalarKind::NonNegativeInteger,
            Scalar::Bcp47(_) => ScalarKind::Bcp47,
            Scalar::Rfc5988(_) => ScalarKind::Rfc5988,
            Scalar::Units(_) => ScalarKind::Units,
        }
    }

    /// Decode `value` with the codec for `kind`.
    pub fn decode(kind: ScalarKind, value: &Value) -> Option<Scalar> {
        match kind {
            ScalarKind::String => decode_string(value).map(Scalar::String),
            ScalarKind::LangString => LangString::decode(value).map(Scalar::LangString),
            ScalarKind::Float => decode_float(value).map(Scalar::Float),
            ScalarKind::Boolean => value.as_bool().map(Scalar::Boolean),
            ScalarKind::DateTime => decode_date_time(value).map(Scalar::DateTime),
            ScalarKind::Duration => decode_duration(value).map(Scalar::Duration),
            ScalarKind::MediaType => decode_media_type(value).map(Scalar::MediaType),
            ScalarKind::NonNegativeInteger => value.as_u64().map(Scalar::NonNegativeInteger),
            ScalarKind::Bcp47 => decode_bcp47(value).map(Scalar::Bcp47),
            ScalarKind::Rfc5988 => decode_rfc5988(value).map(Scalar::Rfc5988),
            ScalarKind::Units => value.as_str().and_then(Units::parse).map(Scalar::Units),
        }
    }

    pub fn encode(&self) -> Result<Value> {
        Ok(match self {
            Scalar::String(s)
            | Scalar::MediaType(s)
            | Scalar::Bcp47(s)
            | Scalar::Rfc5988(s) => Value::String(s.clone()),
            Scalar::LangString(ls) => serde_json::to_value(ls)?,
            Scalar::Float(f) => match f.source() {
                Some(number) => Value::Number(number.clone()),
                None => encode_float(*f.value())?,
            },
            Scalar::Boolean(b) => Value::Bool(*b),
            Scalar::DateTime(dt) => Value::String(match dt.source() {
                Some(text) => text.clone(),
                None => encode_date_time(dt.value()),
            }),
            Scalar::Duration(d) => Value::String(match d.source() {
                Some(text) => text.clone(),
                None => d.value().to_string(),
            }),
            Scalar::NonNegativeInteger(n) => Value::Number((*n).into()),
            Scalar::Units(u) => Value::String(u.as_str().to_string()),
        })
    }
}

pub fn decode_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// The source number is kept, so integers past 2^53 survive a round trip
/// even though [`Lexical::value`] rounds them.
pub fn decode_float(value: &Value) -> Option<Lexical<f64, Number>> {
    match value {
        Value::Number(n) => Some(Lexical::with_source(n.as_f64()?, n.clone())),
        _ => None,
    }
}

/// Canonical form for floats built in code. Integral values inside the
/// exactly representable range are written as JSON integers.
pub fn encode_float(value: f64) -> Result<Value> {
    const EXACT: f64 = 9_007_199_254_740_992.0;
    if !value.is_finite() {
        return Err(BindError::NonFiniteFloat { value });
    }
    if value.fract() == 0.0 && value.abs() <= EXACT {
        return Ok(Value::Number(Number::from(value as i64)));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or(BindError::NonFiniteFloat { value })
}

pub fn decode_date_time(value: &Value) -> Option<Lexical<DateTime<FixedOffset>>> {
    let text = value.as_str()?;
    let parsed = DateTime::parse_from_rfc3339(text).ok()?;
    Some(Lexical::with_source(parsed, text.to_string()))
}

/// Canonical form for date-times built in code.
pub fn encode_date_time(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn decode_duration(value: &Value) -> Option<Lexical<Duration>> {
    let text = value.as_str()?;
    Some(Lexical::with_source(Duration::parse(text)?, text.to_string()))
}

/// `type "/" subtype *( ";" parameter )`
pub fn decode_media_type(value: &Value) -> Option<String> {
    let text = value.as_str()?;
    let essence = text.split(';').next()?.trim();
    let (kind, subtype) = essence.split_once('/')?;
    let is_token = |s: &str| {
        !s.is_empty()
            && s.chars().all(|c| {
                c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c)
            })
    };
    (is_token(kind) && is_token(subtype)).then(|| text.to_string())
}

/// `1*8ALPHA *( "-" 1*8alphanum )`
pub fn decode_bcp47(value: &Value) -> Option<String> {
    let text = value.as_str()?;
    let mut subtags = text.split('-');
    let primary = subtags.next()?;
    let well_formed = (1..=8).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic())
        && subtags.all(|tag| {
            (1..=8).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphanumeric())
        });
    well_formed.then(|| text.to_string())
}

pub fn decode_rfc5988(value: &Value) -> Option<String> {
    let text = value.as_str()?;
    (!text.is_empty() && !text.chars().any(char::is_whitespace)).then(|| text.to_string())
}

/// Language-tagged string, written as a JSON-LD value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangString {
    pub value: String,
    pub language: String,
}

impl LangString {
    pub fn new(value: impl Into<String>, language: impl Into<String>) -> Self {
        LangString {
            value: value.into(),
            language: language.into(),
        }
    }

    /// Accepts exactly `{"@value": string, "@language": string}`. Value
    /// objects with other keys are left for the unknown fallback.
    pub fn decode(value: &Value) -> Option<LangString> {
        let map: &Map<String, Value> = value.as_object()?;
        if map.len() != 2 {
            return None;
        }
        Some(LangString {
            value: map.get("@value")?.as_str()?.to_string(),
            language: map.get("@language")?.as_str()?.to_string(),
        })
    }
}

impl serde::Serialize for LangString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("@value", &self.value)?;
        map.serialize_entry("@language", &self.language)?;
        map.end()
    }
}

/// Units keyword of a `Place` radius or altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    Centimeters,
    Feet,
    Inches,
    Kilometers,
    Meters,
    Miles,
}

impl Units {
    pub fn parse(text: &str) -> Option<Units> {
        Some(match text {
            "cm" => Units::Centimeters,
            "feet" => Units::Feet,
            "inches" => Units::Inches,
            "km" => Units::Kilometers,
            "m" => Units::Meters,
            "miles" => Units::Miles,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Centimeters => "cm",
            Units::Feet => "feet",
            Units::Inches => "inches",
            Units::Kilometers => "km",
            Units::Meters => "m",
            Units::Miles => "miles",
        }
    }
}
