use thiserror::Error;

/// 에러의 분류
///
/// 호출자는 이 값으로 잘못된 입력, 원격/네트워크 실패, 응답 해석 실패를 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 네트워크 요청 전에 실패 (잘못된 입력)
    Validation,
    /// 네트워크 요청 중 실패 또는 2xx 이외의 응답
    Transport,
    /// 응답은 받았으나 JSON으로 해석할 수 없음
    Decode,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("invalid parameter \"{value}\", must be one of: {}", .allowed.join(", "))]
    InvalidParameter {
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("invalid url: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("http error {status}: {message}")]
    Status { status: u16, message: String },
    /// 바디를 읽는 도중 연결이 끊기거나 타임아웃이 발생함
    #[error("failed to read response body: {0}")]
    ResponseTextExtractionFailed(String),
    #[error("failed to parse response body: {0}")]
    ResponseParseFailed(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::InvalidParameter { .. } => ErrorKind::Validation,
            ClientError::InvalidBaseUrl(_)
            | ClientError::RequestFailed(_)
            | ClientError::Status { .. }
            | ClientError::ResponseTextExtractionFailed(_) => ErrorKind::Transport,
            ClientError::ResponseParseFailed(_) => ErrorKind::Decode,
        }
    }
}
