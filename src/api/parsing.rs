use serde_json::Value;

use crate::BriefError;

pub const SESSION_COOKIE: &str = "session_token";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Request path from an HTTP API (v2) or REST API (v1) event.
pub fn request_path(payload: &Value) -> &str {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("/")
}

pub fn request_method(payload: &Value) -> String {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
        .to_ascii_uppercase()
}

/// Reads a query parameter, preferring the parsed map over `rawQueryString`.
pub fn query_param(payload: &Value, name: &str) -> Option<String> {
    if let Some(v) = v_str(payload, &["queryStringParameters", name]) {
        return Some(v.to_string());
    }
    v_str(payload, &["rawQueryString"]).and_then(|q| {
        q.split('&').find_map(|kv| {
            let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
            if k == name {
                decode_url_component(v).ok()
            } else {
                None
            }
        })
    })
}

pub fn decode_url_component(raw: &str) -> Result<String, BriefError> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|s| s.into_owned())
        .map_err(|e| BriefError::ParseError(format!("Failed to decode URL component: {e}")))
}

/// Parses a JSON request body. Empty or missing bodies yield `Value::Null`.
pub fn json_body(payload: &Value) -> Result<Value, BriefError> {
    match v_str(payload, &["body"]).map(str::trim) {
        None | Some("") => Ok(Value::Null),
        Some(body) => serde_json::from_str(body)
            .map_err(|e| BriefError::ParseError(format!("Invalid JSON body: {e}"))),
    }
}

/// Looks for `name` in the JSON body first, then in the query string.
pub fn request_param(payload: &Value, body: &Value, name: &str) -> Option<String> {
    body.get(name)
        .and_then(|v| v.as_str())
        .map(ToString::to_string)
        .or_else(|| query_param(payload, name))
}

pub fn cookie_value(payload: &Value, name: &str) -> Option<String> {
    let from_list = payload
        .get("cookies")
        .and_then(|c| c.as_array())
        .and_then(|cookies| {
            cookies
                .iter()
                .filter_map(|c| c.as_str())
                .find_map(|c| parse_cookie_pair(c, name))
        });
    if from_list.is_some() {
        return from_list;
    }

    payload
        .get("headers")
        .and_then(|h| get_header_value(h, "Cookie"))
        .and_then(|header| header.split(';').find_map(|c| parse_cookie_pair(c, name)))
}

fn parse_cookie_pair(pair: &str, name: &str) -> Option<String> {
    let (k, v) = pair.trim().split_once('=')?;
    if k.trim() == name {
        Some(v.trim().to_string())
    } else {
        None
    }
}

/// Session credential from `Authorization: Bearer`, the session cookie or
/// the `token` query parameter, in that order.
pub fn session_credential(payload: &Value) -> Option<String> {
    let bearer = payload
        .get("headers")
        .and_then(|h| get_header_value(h, "Authorization"))
        .and_then(|v| {
            v.strip_prefix("Bearer ")
                .or_else(|| v.strip_prefix("bearer "))
        })
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    bearer
        .or_else(|| cookie_value(payload, SESSION_COOKIE))
        .or_else(|| query_param(payload, "token"))
        .filter(|t| !t.is_empty())
}
