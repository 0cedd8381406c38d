//! Pass-through codec for values no schema alternative claims.

use serde_json::{Map, Value};

use crate::error::{BindError, Result};

/// Deep-copy `value`, rebuilding maps and arrays level by level.
///
/// `depth` is the nesting level `value` sits at; exceeding `limit` fails
/// instead of recursing further.
pub fn normalize(value: &Value, depth: usize, limit: usize) -> Result<Value> {
    if depth > limit {
        return Err(BindError::DepthExceeded { limit });
    }
    Ok(match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| normalize(item, depth + 1, limit))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(map) => Value::Object(normalize_map(map, depth, limit)?),
        scalar => scalar.clone(),
    })
}

pub fn normalize_map(
    map: &Map<String, Value>,
    depth: usize,
    limit: usize,
) -> Result<Map<String, Value>> {
    map.iter()
        .map(|(key, value)| Ok((key.clone(), normalize(value, depth + 1, limit)?)))
        .collect()
}
