use crate::config::HttpConfig;
use crate::error::ClientError;
use crate::payload::{ParamValue, Payload};
use crate::request;
use crate::request::{Endpoint, Request, SearchOptions};
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;
use tracing::debug;

/// AbeBooks 서비스 기본 경로
pub const BASE_URL: &'static str = "https://www.abebooks.com/servlet";

/// AbeBooks 마켓플레이스 클라이언트
///
/// 상태를 가지지 않으며 각 메소드는 한 번의 HTTP 요청만 수행한다.
/// 응답은 원격 서비스가 반환한 JSON을 그대로 반환한다.
pub struct Client<T = HttpTransport>
where
    T: Transport,
{
    transport: T,
}

impl Client<HttpTransport> {
    pub fn new() -> Result<Self, ClientError> {
        Self::from_config(&HttpConfig::default())
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl <T> Client<T>
where
    T: Transport,
{
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    fn send(&self, request: Request) -> Result<Value, ClientError> {
        let url = format!("{}{}", BASE_URL, request.endpoint().path());
        debug!(endpoint = ?request.endpoint(), "dispatching request");

        self.transport.request(&url, request.method(), request.payload())
    }

    fn get_price(&self, payload: Payload) -> Result<Value, ClientError> {
        self.send(Request::new(Endpoint::Pricing, payload))
    }

    fn get_recommendations(&self, payload: Payload) -> Result<Value, ClientError> {
        self.send(Request::new(Endpoint::Recommendations, payload))
    }

    pub fn search_by_keyword(&self, keyword: &str, options: &SearchOptions) -> Result<Value, ClientError> {
        self.send(request::search_by_keyword(keyword, options))
    }

    pub fn get_book_details(&self, book_id: impl Into<ParamValue>) -> Result<Value, ClientError> {
        self.send(request::book_details(book_id))
    }

    pub fn search_by_publisher(&self, publisher: &str, options: &SearchOptions) -> Result<Value, ClientError> {
        self.send(request::search_by_publisher(publisher, options))
    }

    pub fn get_seller_info(&self, seller_id: impl Into<ParamValue>) -> Result<Value, ClientError> {
        self.send(request::seller_info(seller_id))
    }

    /// `condition`은 "new", "used", "collectible" 중 하나여야 하며 그 외의 값은 요청 전에 실패한다.
    pub fn search_by_condition(&self, condition: &str, options: &SearchOptions) -> Result<Value, ClientError> {
        self.send(request::search_by_condition(condition, options)?)
    }

    /// `currency`를 지정하지 않으면 USD로 검색한다.
    pub fn search_by_price_range(
        &self,
        min_price: impl Into<ParamValue>,
        max_price: impl Into<ParamValue>,
        currency: Option<&str>,
        options: &SearchOptions,
    ) -> Result<Value, ClientError> {
        self.send(request::search_by_price_range(min_price, max_price, currency, options))
    }

    pub fn search_by_year(&self, year_from: i32, year_to: Option<i32>, options: &SearchOptions) -> Result<Value, ClientError> {
        self.send(request::search_by_year(year_from, year_to, options))
    }

    pub fn search_by_location(
        &self,
        country: &str,
        state: Option<&str>,
        city: Option<&str>,
        options: &SearchOptions,
    ) -> Result<Value, ClientError> {
        self.send(request::search_by_location(country, state, city, options))
    }

    pub fn get_price_by_isbn(&self, isbn: &str) -> Result<Value, ClientError> {
        let request = request::price_by_isbn(isbn);
        self.get_price(request.into_payload())
    }

    pub fn get_price_by_author_title(&self, author: &str, title: &str) -> Result<Value, ClientError> {
        let request = request::price_by_author_title(author, title);
        self.get_price(request.into_payload())
    }

    /// `binding`은 "hard" 또는 "soft"만 가능하다.
    pub fn get_price_by_author_title_binding(&self, author: &str, title: &str, binding: &str) -> Result<Value, ClientError> {
        let request = request::price_by_author_title_binding(author, title, binding)?;
        self.get_price(request.into_payload())
    }

    pub fn get_recommendations_by_isbn(&self, isbn: &str) -> Result<Value, ClientError> {
        let request = request::recommendations_by_isbn(isbn);
        self.get_recommendations(request.into_payload())
    }
}
