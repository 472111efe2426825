//! Request and response dumps for `--debug`
//!
//! Dumps are plain HTTP/1.1-style text. Authorization values keep their
//! scheme and lose the credential.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Request, StatusCode};

pub(super) fn log_request(request: &Request) {
    tracing::debug!("REQUEST:\n{}", format_request(request));
}

pub(super) fn log_response(status: StatusCode, headers: &HeaderMap, body: &str) {
    tracing::debug!("RESPONSE:\n{}", format_response(status, headers, body));
}

fn format_request(request: &Request) -> String {
    let url = request.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut buf = format!("{} {} {:?}\n", request.method(), target, request.version());
    if let Some(host) = url.host_str() {
        match url.port() {
            Some(port) => buf.push_str(&format!("host: {}:{}\n", host, port)),
            None => buf.push_str(&format!("host: {}\n", host)),
        }
    }
    push_headers(&mut buf, request.headers());

    if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
        buf.push('\n');
        buf.push_str(&String::from_utf8_lossy(body));
    }

    buf
}

fn format_response(status: StatusCode, headers: &HeaderMap, body: &str) -> String {
    let mut buf = format!("HTTP/1.1 {}\n", status);
    push_headers(&mut buf, headers);
    buf.push('\n');
    buf.push_str(body);
    buf
}

fn push_headers(buf: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        let value = if *name == AUTHORIZATION {
            redact(value)
        } else {
            value.to_string()
        };
        buf.push_str(&format!("{}: {}\n", name, value));
    }
}

fn redact(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{} [redacted]", scheme),
        None => "[redacted]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn request_dump_redacts_authorization() {
        let request = reqwest::Client::new()
            .post("http://127.0.0.1:8080/oauth2/token")
            .header(AUTHORIZATION, "Basic a2V5OnNlY3JldA==")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded;charset=UTF-8")
            .body("grant_type=client_credentials")
            .build()
            .unwrap();

        let dump = format_request(&request);

        assert!(dump.starts_with("POST /oauth2/token HTTP/1.1\n"));
        assert!(dump.contains("host: 127.0.0.1:8080\n"));
        assert!(dump.contains("authorization: Basic [redacted]\n"));
        assert!(!dump.contains("a2V5OnNlY3JldA=="));
        assert!(dump.ends_with("\ngrant_type=client_credentials"));
    }

    #[test]
    fn request_dump_keeps_query() {
        let request = reqwest::Client::new()
            .get("https://api.example.com/1.1/statuses/user_timeline.json?count=3&screen_name=dev")
            .bearer_auth("AAAA")
            .build()
            .unwrap();

        let dump = format_request(&request);

        assert!(dump
            .starts_with("GET /1.1/statuses/user_timeline.json?count=3&screen_name=dev HTTP/1.1"));
        assert!(dump.contains("host: api.example.com\n"));
        assert!(dump.contains("authorization: Bearer [redacted]\n"));
    }

    #[test]
    fn response_dump_includes_status_and_body() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let dump = format_response(StatusCode::OK, &headers, r#"[{"text":"hi"}]"#);

        assert_eq!(
            dump,
            "HTTP/1.1 200 OK\ncontent-type: application/json\n\n[{\"text\":\"hi\"}]"
        );
    }

    #[test]
    fn redact_without_scheme() {
        assert_eq!(redact("opaque"), "[redacted]");
    }
}
