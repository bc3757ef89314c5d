use crate::config::HttpConfig;
use crate::error::ClientError;
use crate::payload::Payload;
use hyper::ext::ReasonPhrase;
use reqwest::{blocking, StatusCode, Url};
use serde_json::Value;
use std::fmt;
use std::fmt::Formatter;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// 원격 서비스와 통신하는 유일한 지점
///
/// 구현체는 요청 한 번에 한 번의 HTTP 호출만 수행하고, 응답 바디를 JSON으로 해석하여 반환해야 한다.
/// GET 요청은 페이로드를 쿼리 스트링으로, POST 요청은 `application/x-www-form-urlencoded` 바디로 전송한다.
pub trait Transport {
    fn request(&self, url: &str, method: Method, payload: &Payload) -> Result<Value, ClientError>;
}

/// [`reqwest::blocking::Client`]를 사용하는 HTTP 구현체
pub struct HttpTransport {
    client: blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, ClientError> {
        let client = blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| ClientError::RequestFailed(format!("failed to build http client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn request(&self, url: &str, method: Method, payload: &Payload) -> Result<Value, ClientError> {
        let parsed_url = Url::parse(url)
            .map_err(|_| ClientError::InvalidBaseUrl(url.to_string()))?;
        let pairs = payload.to_pairs();

        debug!(%method, url, params = ?pairs, "sending request");

        let builder = match method {
            Method::Get => self.client.get(parsed_url).query(&pairs),
            Method::Post => self.client.post(parsed_url).form(&pairs),
        };

        let response = builder.send()
            .map_err(|err| {
                warn!(%method, url, error = %err, "request failed");
                ClientError::RequestFailed(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%method, url, status = status.as_u16(), "unexpected response status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: status_message(status, response.extensions().get::<ReasonPhrase>()),
            });
        }

        let text = response.text()
            .map_err(|err| {
                warn!(%method, url, error = %err, "failed to read response body");
                ClientError::ResponseTextExtractionFailed(err.to_string())
            })?;

        serde_json::from_str::<Value>(&text)
            .map_err(|err| {
                warn!(%method, url, error = %err, "response is not valid json");
                ClientError::ResponseParseFailed(err.to_string())
            })
    }
}

/// 서버가 보낸 상태 메시지를 우선 사용한다.
/// hyper는 표준과 다른 메시지일 때만 [`ReasonPhrase`]를 남기므로 없으면 표준 메시지를 사용한다.
fn status_message(status: StatusCode, reason: Option<&ReasonPhrase>) -> String {
    match reason {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    }
}
