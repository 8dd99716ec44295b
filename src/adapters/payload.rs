use crate::domain::model::ServiceRecord;
use crate::domain::ports::PayloadShape;
use crate::utils::error::{DashboardError, Result};
use serde_json::Value;

/// 把端點回傳的 JSON 轉成服務清單
pub fn decode_services(body: Value, shape: PayloadShape) -> Result<Vec<ServiceRecord>> {
    match shape {
        PayloadShape::Flat => decode_flat(body),
        PayloadShape::Listing => decode_listing(body),
        PayloadShape::Auto => match detect_shape(&body) {
            Some(shape) => decode_services(body, shape),
            None => Err(DashboardError::payload(format!(
                "expected an array of services or a data.children listing, got {}",
                kind(&body)
            ))),
        },
    }
}

pub fn detect_shape(body: &Value) -> Option<PayloadShape> {
    match body {
        Value::Array(_) => Some(PayloadShape::Flat),
        Value::Object(_) if body.pointer("/data/children").is_some() => {
            Some(PayloadShape::Listing)
        }
        _ => None,
    }
}

fn decode_flat(body: Value) -> Result<Vec<ServiceRecord>> {
    let Value::Array(items) = body else {
        return Err(DashboardError::payload(format!(
            "expected an array of services, got {}",
            kind(&body)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| into_record(item, &format!("[{}]", i)))
        .collect()
}

fn decode_listing(mut body: Value) -> Result<Vec<ServiceRecord>> {
    let children = match body.pointer_mut("/data/children").map(Value::take) {
        Some(Value::Array(children)) => children,
        Some(other) => {
            return Err(DashboardError::payload(format!(
                "data.children must be an array, got {}",
                kind(&other)
            )))
        }
        None => return Err(DashboardError::payload("missing data.children")),
    };

    children
        .into_iter()
        .enumerate()
        .map(|(i, mut child)| {
            let path = format!("data.children[{}].data", i);
            match child.get_mut("data").map(Value::take) {
                Some(data) => into_record(data, &path),
                None => Err(DashboardError::payload(format!("missing {}", path))),
            }
        })
        .collect()
}

fn into_record(value: Value, path: &str) -> Result<ServiceRecord> {
    match value {
        Value::Object(map) => Ok(ServiceRecord::new(map)),
        other => Err(DashboardError::payload(format!(
            "{} must be an object, got {}",
            path,
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
