//! Response builders for the Lambda HTTP handler.

use serde_json::{Value, json};

use super::parsing::SESSION_COOKIE;

/// Returns a 200 OK response with a JSON body.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns a 302 redirect response.
#[must_use]
pub fn redirect(url: &str) -> Value {
    json!({
        "statusCode": 302,
        "headers": { "Location": url },
        "body": ""
    })
}

/// Returns a 302 redirect that also drops the session cookie.
#[must_use]
pub fn redirect_clearing_session(url: &str) -> Value {
    json!({
        "statusCode": 302,
        "headers": { "Location": url },
        "cookies": [format!("{SESSION_COOKIE}=; Max-Age=0; Path=/; HttpOnly; Secure; SameSite=Lax")],
        "body": ""
    })
}
