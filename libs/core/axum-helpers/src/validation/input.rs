use super::Location;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Path parameters and JSON body of a single request, as seen by validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInput {
    params: Map<String, Value>,
    body: Value,
}

impl RequestInput {
    pub fn new(params: HashMap<String, String>, body: Value) -> Self {
        Self {
            params: params
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect(),
            body,
        }
    }

    /// Input without path parameters.
    pub fn from_body(body: Value) -> Self {
        Self::new(HashMap::new(), body)
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params
            .insert(name.to_string(), Value::String(value.to_string()));
        self
    }

    pub fn get(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.get(field),
        }
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.get(Location::Params, name)
    }

    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.get(Location::Body, name)
    }
}

impl Default for RequestInput {
    fn default() -> Self {
        Self::from_body(Value::Object(Map::new()))
    }
}
