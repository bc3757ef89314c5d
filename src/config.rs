pub mod log;

use serde::Deserialize;
use std::env;

/// HTTP 요청의 기본 타임아웃 시간(초)
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const DEFAULT_USER_AGENT: &'static str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.149 Safari/537.36";

/// 환경 변수로 설정 값을 덮어쓸 때 사용하는 접두사 (예: `ABEBOOKS__HTTP__TIMEOUT_SECONDS=5`)
const ENV_PREFIX: &'static str = "ABEBOOKS";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    /// 요청 한 건의 최대 대기 시간(초), 설정하지 않을 시 10초
    timeout_seconds: Option<u64>,

    /// 모든 요청에 사용할 User-Agent 헤더
    user_agent: Option<String>,
}

impl HttpConfig {
    pub fn new(timeout_seconds: Option<u64>, user_agent: Option<String>) -> Self {
        Self { timeout_seconds, user_agent }
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    http: HttpConfig,
    logger: Option<log::Config>,
}

impl AppConfig {
    pub fn http(&self) -> &HttpConfig {
        &self.http
    }

    pub fn logger(&self) -> Option<&log::Config> {
        self.logger.as_ref()
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `config/{RUN_MODE}.json` 파일과 `ABEBOOKS__` 접두사 환경 변수로부터 설정을 읽는다.
/// 설정 파일이 없으면 기본값을 사용한다.
pub fn load_config() -> Result<AppConfig, ::config::ConfigError> {
    let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config = ::config::Config::builder()
        .add_source(::config::File::with_name(&format!("config/{}.json", env)).required(false))
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
        )
        .build()?;

    config.try_deserialize()
}
