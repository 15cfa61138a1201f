use serde_json::{Map, Value};

pub type Properties = Map<String, Value>;

/// The shape a value was expected to have when decoding failed.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Expected {
    String,
    Number,
    Position,
    Rings,
}

/// Outcome of reading one typed value out of a JSON structure.
///
/// Decoding never fails hard: a key can be `Missing`, or present with the
/// wrong shape (`Mismatch`), and callers decide how to degrade.
#[derive(PartialEq, Debug, Clone)]
pub enum ParseResult<T> {
    Value(T),
    Missing,
    Mismatch(Expected),
}

impl<T> ParseResult<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            ParseResult::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            ParseResult::Value(value) => ParseResult::Value(f(value)),
            ParseResult::Missing => ParseResult::Missing,
            ParseResult::Mismatch(expected) => ParseResult::Mismatch(expected),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> ParseResult<U>) -> ParseResult<U> {
        match self {
            ParseResult::Value(value) => f(value),
            ParseResult::Missing => ParseResult::Missing,
            ParseResult::Mismatch(expected) => ParseResult::Mismatch(expected),
        }
    }
}

fn lookup<'a>(map: &'a Properties, key: &str) -> ParseResult<&'a Value> {
    match map.get(key) {
        Some(Value::Null) | None => ParseResult::Missing,
        Some(value) => ParseResult::Value(value),
    }
}

pub fn string<'a>(map: &'a Properties, key: &str) -> ParseResult<&'a str> {
    lookup(map, key).and_then(|value| match value.as_str() {
        Some(s) => ParseResult::Value(s),
        None => ParseResult::Mismatch(Expected::String),
    })
}

pub fn number(map: &Properties, key: &str) -> ParseResult<f64> {
    lookup(map, key).and_then(|value| match value.as_f64() {
        Some(n) => ParseResult::Value(n),
        None => ParseResult::Mismatch(Expected::Number),
    })
}

pub fn field<'a>(map: &'a Properties, key: &str) -> ParseResult<&'a Value> {
    lookup(map, key)
}

/// Decodes a GeoJSON position, which must be exactly `[lon, lat]`.
pub fn position(value: &Value) -> ParseResult<(f64, f64)> {
    let pair = match value.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => return ParseResult::Mismatch(Expected::Position),
    };
    match (pair[0].as_f64(), pair[1].as_f64()) {
        (Some(lon), Some(lat)) => ParseResult::Value((lon, lat)),
        _ => ParseResult::Mismatch(Expected::Position),
    }
}

/// Decodes polygon coordinates: a list of rings, each a list of positions.
/// A single bad position rejects the whole value.
pub fn rings(value: &Value) -> ParseResult<Vec<Vec<(f64, f64)>>> {
    let rings = match value.as_array() {
        Some(rings) => rings,
        None => return ParseResult::Mismatch(Expected::Rings),
    };
    let mut decoded = Vec::with_capacity(rings.len());
    for ring in rings {
        let positions = match ring.as_array() {
            Some(positions) => positions,
            None => return ParseResult::Mismatch(Expected::Rings),
        };
        let mut decoded_ring = Vec::with_capacity(positions.len());
        for position_value in positions {
            match position(position_value) {
                ParseResult::Value(pair) => decoded_ring.push(pair),
                _ => return ParseResult::Mismatch(Expected::Rings),
            }
        }
        decoded.push(decoded_ring);
    }
    ParseResult::Value(decoded)
}
