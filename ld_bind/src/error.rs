use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindError {
    #[error("JSON-LD serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON object for `{type_name}`, found {found}")]
    NotAnObject {
        type_name: &'static str,
        found: &'static str,
    },

    #[error("nesting exceeds the configured depth limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("invalid IRI `{iri}`: {reason}")]
    InvalidIri { iri: String, reason: String },

    #[error("invalid {kind} literal `{text}`")]
    InvalidLiteral { kind: &'static str, text: String },

    #[error("cannot encode non-finite float {value}")]
    NonFiniteFloat { value: f64 },

    #[error("`{type_name}` does not declare the property `{property}`")]
    UndeclaredProperty {
        type_name: &'static str,
        property: String,
    },

    #[error("property `{property}` does not accept {kind} values")]
    KindNotAllowed {
        property: &'static str,
        kind: String,
    },

    #[error("property `{property}` is functional and holds at most one value")]
    Functional { property: &'static str },

    #[error("`{key}` is reserved by the `{type_name}` schema and cannot be stored as an extension")]
    ReservedKey {
        type_name: &'static str,
        key: String,
    },

    #[error("expected a `{expected}` record, found `{found}`")]
    SchemaMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, BindError>;

/// Short JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
