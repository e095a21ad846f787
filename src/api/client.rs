use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use yansi::Paint;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("platform API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// Core HTTP client function for platform API calls. Handles
/// authentication, request building, and error responses; logs each
/// request as a replayable curl command unless silenced.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
) -> Result<Value, ApiError> {
    let url = format!("{}{}", api_base_url, endpoint);

    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(&url).fg(yansi::Color::Cyan)));
    if !api_token.is_empty() {
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Authorization: Bearer <token>'").fg(yansi::Color::Magenta)
        ));
    }
    if let Some(ref d) = body {
        let json_str = serde_json::to_string(d).unwrap_or_default();
        let escaped = json_str.replace('\'', "'\\''");
        parts.push(format!(
            "{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));

    let mut req = match method {
        "GET" => client.get(&url),
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        "PATCH" => client.patch(&url),
        "DELETE" => client.delete(&url),
        _ => client.get(&url),
    };
    if !api_token.is_empty() {
        req = req.bearer_auth(api_token);
    }
    if let Some(d) = body {
        req = req.json(&d);
    }

    let resp = req.send().await?;
    let status = resp.status();
    let payload: Value = resp.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let message = payload
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error")
            .to_string();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(payload)
}
