//! Action dispatcher: `key=value` request in, `{REQ, RES}` envelope out.
//!
//! Actions
//! - `echo`: returns the request parameters.
//! - `ShapesOverlaps`: `Width Height RadiusMax HowMany MaxEdges`, optional `Seed`.
//!
//! Status mapping: a missing `Action` and generator `InvalidArgument` → 400.
//! Unknown actions, missing or unparsable parameters, and any other generator
//! failure → 500 with `ERROR_MESSAGE`.

use anyhow::{bail, Result};
use serde_json::{json, Map, Value};
use shape_overlaps::{generate, GenParams, GeneratorError};
use std::fmt;

#[derive(Debug)]
pub enum DispatchError {
    BadRequest(String),
    Internal(String),
}

impl DispatchError {
    fn status(&self) -> (u16, &'static str) {
        match self {
            Self::BadRequest(_) => (400, "Bad Request"),
            Self::Internal(_) => (500, "Internal Server Error"),
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(m) | Self::Internal(m) => f.write_str(m),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<GeneratorError> for DispatchError {
    fn from(err: GeneratorError) -> Self {
        if err.is_invalid_argument() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

/// Parse `key=value` arguments into a request map (first `=` splits).
pub fn parse_pairs<I, S>(args: I) -> Result<Map<String, Value>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut req = Map::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected key=value, got {arg:?}");
        };
        if key.is_empty() {
            bail!("empty key in {arg:?}");
        }
        req.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(req)
}

/// Run the request's action and wrap the outcome in the response envelope.
pub fn dispatch(req: Map<String, Value>) -> Value {
    let mut res = Map::new();
    res.insert("STATUS".into(), json!(200));
    res.insert("STATUS_MSG".into(), json!("OK"));

    match req.get("Action").and_then(Value::as_str) {
        None => {
            res.insert("STATUS".into(), json!(400));
            res.insert("STATUS_MSG".into(), json!("Bad Request"));
            res.insert("MESSAGE".into(), json!("the Action parameter is required"));
        }
        Some(action) => {
            res.insert("ACTION".into(), json!(action));
            tracing::info!(action, "dispatch");
            match run_action(action, &req) {
                Ok(result) => {
                    res.insert("RESULT".into(), result);
                }
                Err(err) => {
                    let (status, msg) = err.status();
                    tracing::warn!(action, status, error = %err, "action failed");
                    res.insert("STATUS".into(), json!(status));
                    res.insert("STATUS_MSG".into(), json!(msg));
                    let key = if status == 400 { "MESSAGE" } else { "ERROR_MESSAGE" };
                    res.insert(key.into(), json!(err.to_string()));
                }
            }
        }
    }
    json!({ "REQ": Value::Object(req), "RES": Value::Object(res) })
}

fn run_action(action: &str, req: &Map<String, Value>) -> Result<Value, DispatchError> {
    match action {
        "echo" => Ok(Value::Object(req.clone())),
        "ShapesOverlaps" => shapes_overlaps(req),
        other => Err(DispatchError::Internal(format!("unknown action {other:?}"))),
    }
}

fn shapes_overlaps(req: &Map<String, Value>) -> Result<Value, DispatchError> {
    let params = GenParams {
        width: int_param(req, "Width")?,
        height: int_param(req, "Height")?,
        radius_max: int_param(req, "RadiusMax")?,
        how_many: int_param(req, "HowMany")?,
        max_edges: int_param(req, "MaxEdges")?,
    };
    let seed = match req.get("Seed") {
        Some(_) => int_param::<u64>(req, "Seed")?,
        None => rand::random(),
    };
    let result = generate(params, seed)?;
    let mut value =
        serde_json::to_value(&result).map_err(|e| DispatchError::Internal(e.to_string()))?;
    if let Value::Object(map) = &mut value {
        map.insert("seed".into(), json!(seed));
    }
    Ok(value)
}

fn int_param<T: std::str::FromStr>(req: &Map<String, Value>, key: &str) -> Result<T, DispatchError> {
    let raw = req
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| DispatchError::Internal(format!("missing parameter {key}")))?;
    raw.trim()
        .parse()
        .map_err(|_| DispatchError::Internal(format!("parameter {key} must be an integer, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(pairs: &[&str]) -> Value {
        dispatch(parse_pairs(pairs).unwrap())
    }

    #[test]
    fn missing_action_is_bad_request() {
        let out = request(&["Width=10"]);
        assert_eq!(out["RES"]["STATUS"], 400);
        assert_eq!(out["REQ"]["Width"], "10");
    }

    #[test]
    fn echo_returns_request() {
        let out = request(&["Action=echo", "msg=hi=there"]);
        assert_eq!(out["RES"]["STATUS"], 200);
        assert_eq!(out["RES"]["RESULT"]["msg"], "hi=there");
    }

    #[test]
    fn shapes_overlaps_success_is_seeded() {
        let args = [
            "Action=ShapesOverlaps",
            "Width=600",
            "Height=400",
            "RadiusMax=40",
            "HowMany=12",
            "MaxEdges=6",
            "Seed=5",
        ];
        let a = request(&args);
        let b = request(&args);
        assert_eq!(a["RES"]["STATUS"], 200);
        assert_eq!(a["RES"]["RESULT"]["totalCount"], 12);
        assert_eq!(a["RES"]["RESULT"]["seed"], 5);
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_values_map_to_400() {
        let out = request(&[
            "Action=ShapesOverlaps",
            "Width=600",
            "Height=400",
            "RadiusMax=40",
            "HowMany=12",
            "MaxEdges=2",
        ]);
        assert_eq!(out["RES"]["STATUS"], 400);
        assert!(out["RES"]["RESULT"].is_null());
        assert!(out["RES"]["MESSAGE"].is_string());
        let out = request(&[
            "Action=ShapesOverlaps",
            "Width=600",
            "Height=400",
            "RadiusMax=40",
            "HowMany=9223372036854775807",
            "MaxEdges=6",
        ]);
        assert_eq!(out["RES"]["STATUS"], 400);
    }

    #[test]
    fn malformed_requests_map_to_500() {
        let out = request(&["Action=ShapesOverlaps", "Width=abc"]);
        assert_eq!(out["RES"]["STATUS"], 500);
        assert!(out["RES"]["ERROR_MESSAGE"].as_str().unwrap().contains("Width"));
        let out = request(&["Action=ShapesOverlaps", "Width=10"]);
        assert_eq!(out["RES"]["STATUS"], 500);
        let out = request(&["Action=nope"]);
        assert_eq!(out["RES"]["STATUS"], 500);
        assert_eq!(out["RES"]["ACTION"], "nope");
        assert!(out["RES"]["MESSAGE"].is_null());
    }

    #[test]
    fn generator_failures_split_by_kind() {
        let bad = DispatchError::from(GeneratorError::InvalidArgument {
            reason: "x".into(),
        });
        assert_eq!(bad.status().0, 400);
        let degenerate = DispatchError::from(GeneratorError::DegenerateGeometry {
            reason: "y".into(),
        });
        assert_eq!(degenerate.status().0, 500);
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(parse_pairs(["novalue"]).is_err());
        assert!(parse_pairs(["=v"]).is_err());
    }
}
