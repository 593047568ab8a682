//! Request handling for the line protocol
//!
//! One JSON request per line in, one JSON response per line out.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use unitd::{Catalog, Input, Measure, UnitdError};

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const METHOD_NOT_FOUND: &str = "METHOD_NOT_FOUND";
pub const INVALID_PARAMS: &str = "INVALID_PARAMS";

#[derive(Debug, Deserialize)]
pub struct Request {
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProtocolError>,
}

#[derive(Debug, Serialize)]
pub struct ProtocolError {
    pub code: String,
    pub message: String,
}

impl ProtocolError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self { code: code.to_string(), message: message.into() }
    }
}

impl From<UnitdError> for ProtocolError {
    fn from(err: UnitdError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl Response {
    pub fn error(id: Option<JsonValue>, error: ProtocolError) -> Self {
        Self { id, result: None, error: Some(error) }
    }
}

/// Number or quantity string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Operand {
    Number(f64),
    Text(String),
}

impl From<Operand> for Input {
    fn from(operand: Operand) -> Self {
        match operand {
            Operand::Number(n) => Input::Number(n),
            Operand::Text(s) => Input::Text(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ParseParams {
    value: Operand,
    precision: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ApplyParams {
    op: String,
    lhs: Operand,
    rhs: Operand,
    rhs_precision: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    value: Operand,
    to: String,
}

pub fn handle_request(catalog: &Catalog, request: &Request) -> Response {
    let result = match request.method.as_str() {
        "parse" => params(request).and_then(|p| handle_parse(catalog, p)),
        "apply" => params(request).and_then(|p| handle_apply(catalog, p)),
        "convert" => params(request).and_then(|p| handle_convert(catalog, p)),
        "list_units" => Ok(handle_list_units(catalog)),
        "list_operations" => Ok(handle_list_operations(catalog)),
        _ => Err(ProtocolError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )),
    };

    match result {
        Ok(r) => Response { id: request.id.clone(), result: Some(r), error: None },
        Err(e) => Response::error(request.id.clone(), e),
    }
}

fn params<T: for<'de> Deserialize<'de>>(request: &Request) -> Result<T, ProtocolError> {
    let raw = request.params.clone().unwrap_or(JsonValue::Null);
    serde_json::from_value(raw)
        .map_err(|e| ProtocolError::new(INVALID_PARAMS, format!("Invalid params for {}: {}", request.method, e)))
}

fn measure_json(measure: &Measure) -> JsonValue {
    json!({
        "measure": measure,
        "display": measure.to_string(),
    })
}

fn handle_parse(catalog: &Catalog, p: ParseParams) -> Result<JsonValue, ProtocolError> {
    let measure = catalog.measure(p.value, None, p.precision)?;
    Ok(measure_json(&measure))
}

fn handle_apply(catalog: &Catalog, p: ApplyParams) -> Result<JsonValue, ProtocolError> {
    let lhs = catalog.measure(p.lhs, None, None)?;
    let result = lhs.apply(catalog, &p.op, p.rhs, None, p.rhs_precision)?;
    Ok(measure_json(&result))
}

fn handle_convert(catalog: &Catalog, p: ConvertParams) -> Result<JsonValue, ProtocolError> {
    let measure = catalog.measure(p.value, None, None)?;
    let converted = measure.convert_to(catalog, p.to.as_str())?;
    Ok(measure_json(&converted))
}

fn handle_list_units(catalog: &Catalog) -> JsonValue {
    let units: Vec<_> = catalog
        .units()
        .units()
        .filter(|u| !u.unit_type().is_reserved())
        .map(|u| u.as_ref())
        .collect();
    json!({ "units": units })
}

fn handle_list_operations(catalog: &Catalog) -> JsonValue {
    json!({ "operations": catalog.operations().list() })
}
