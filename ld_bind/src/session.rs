//! Recursion state threaded through one decode or encode call.

use serde_json::Value;

use crate::error::{BindError, Result};
use crate::options::Options;
use crate::registry::Registry;
use crate::unknown;

#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    registry: &'a Registry,
    options: &'a Options,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(registry: &'a Registry, options: &'a Options) -> Self {
        Decoder {
            registry,
            options,
            depth: 0,
        }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// One level further down.
    pub fn nested(&self) -> Result<Decoder<'a>> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(BindError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(Decoder { depth, ..*self })
    }

    /// Copy a value nothing in the schema claims.
    pub fn unknown(&self, value: &Value) -> Result<Value> {
        unknown::normalize(value, self.depth + 1, self.options.max_depth)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    options: &'a Options,
    depth: usize,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a Options) -> Self {
        Encoder { options, depth: 0 }
    }

    pub fn nested(&self) -> Result<Encoder<'a>> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(BindError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(Encoder { depth, ..*self })
    }

    pub fn unknown(&self, value: &Value) -> Result<Value> {
        unknown::normalize(value, self.depth + 1, self.options.max_depth)
    }
}
