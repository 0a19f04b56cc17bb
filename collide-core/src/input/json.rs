//! [`Input`]s from JSON: arrays are lists, and objects expose their `circle`, `line` and `x`/`y` members as accessors.

use serde_json::{Map, Value};

use crate::error::ProbeError;

use super::{Accessor, Input, ShapeSource};

/// A JSON object viewed as a [`ShapeSource`].
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    fn member(&self, key: &str) -> Option<Accessor> {
        self.0.get(key).cloned().map(|v| Input::from(v).into())
    }
}

impl ShapeSource for JsonObject {
    fn circle(&self) -> Result<Option<Accessor>, ProbeError> {
        Ok(self.member("circle"))
    }
    fn line(&self) -> Result<Option<Accessor>, ProbeError> {
        Ok(self.member("line"))
    }
    fn point(&self) -> Result<Option<Accessor>, ProbeError> {
        match (self.0.get("x"), self.0.get("y")) {
            (Some(x), Some(y)) => Ok(Some(Input::List(vec![x.clone().into(), y.clone().into()]).into())),
            _ => Ok(None),
        }
    }
}

impl From<Value> for Input {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Input::Null,
            Value::Bool(b) => Input::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Input::Int(i),
                None => Input::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Input::Str(s),
            Value::Array(items) => Input::List(items.into_iter().map(Input::from).collect()),
            Value::Object(map) => Input::object(JsonObject(map)),
        }
    }
}

impl Input {
    pub fn from_json(s: &str) -> Result<Input, serde_json::Error> {
        Ok(serde_json::from_str::<Value>(s)?.into())
    }
}
