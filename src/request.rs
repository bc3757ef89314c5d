use crate::error::ClientError;
use crate::payload::{ParamValue, Payload};
use crate::transport::Method;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// 키워드 검색의 기본 정렬 기준
const DEFAULT_SORT_BY: &'static str = "relevance";
/// 기본 페이지 번호
const DEFAULT_PAGE: u32 = 1;
/// 기본 페이지당 결과 개수
const DEFAULT_PER_PAGE: u32 = 20;
/// 가격 범위 검색의 기본 통화
const DEFAULT_CURRENCY: &'static str = "USD";

const ALL_CONDITIONS: &'static [&'static str] = &["new", "used", "collectible"];
const ALL_BINDINGS: &'static [&'static str] = &["hard", "soft"];

/// 요청을 보낼 원격 엔드포인트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    BookDetails,
    SellerProfile,
    Pricing,
    Recommendations,
}

impl Endpoint {
    /// 서비스 기본 경로 뒤에 붙는 하위 경로
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "/SearchResults",
            Endpoint::BookDetails => "/BookDetails",
            Endpoint::SellerProfile => "/SellerProfile",
            Endpoint::Pricing => "/DWRestService/pricingservice",
            Endpoint::Recommendations => "/RecommendationsApi",
        }
    }

    /// 가격 조회 서비스만 POST를 사용한다.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Pricing => Method::Post,
            _ => Method::Get,
        }
    }
}

/// 도서 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    New,
    Used,
    Collectible,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Collectible => "collectible",
        }
    }
}

impl FromStr for Condition {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Condition::New),
            "used" => Ok(Condition::Used),
            "collectible" => Ok(Condition::Collectible),
            _ => Err(ClientError::InvalidParameter {
                value: s.to_string(),
                allowed: ALL_CONDITIONS,
            }),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 제본 형태로 가격 조회 컨테이너를 선택할 때만 사용된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Hard,
    Soft,
}

impl Binding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Binding::Hard => "hard",
            Binding::Soft => "soft",
        }
    }

    pub fn container(&self) -> &'static str {
        match self {
            Binding::Hard => "priced-from-hard",
            Binding::Soft => "priced-from-soft",
        }
    }
}

impl FromStr for Binding {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hard" => Ok(Binding::Hard),
            "soft" => Ok(Binding::Soft),
            _ => Err(ClientError::InvalidParameter {
                value: s.to_string(),
                allowed: ALL_BINDINGS,
            }),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 검색 요청의 추가 옵션
///
/// `sort_by`, `page`, `per_page`는 각각 `sortBy`, `pageNum`, `pageSize` 파라미터로 전송 된다.
/// 그 외의 키는 [`SearchOptionsBuilder::param`]으로 추가하며 이름 그대로 전송 된다.
/// 추가 파라미터는 마지막에 적용 되므로 같은 키가 있을 경우 항상 추가 파라미터의 값이 사용된다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    sort_by: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
    extra: Payload,
}

#[derive(Debug, Default)]
pub struct SearchOptionsBuilder {
    sort_by: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
    extra: Payload,
}

impl SearchOptions {
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    pub fn extra(&self) -> &Payload {
        &self.extra
    }

    /// 설정된 값만 파라미터로 변환한다.
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert_opt("sortBy", self.sort_by.as_deref())
            .insert_opt("pageNum", self.page)
            .insert_opt("pageSize", self.per_page)
            .merge(&self.extra);
        payload
    }
}

impl SearchOptionsBuilder {
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.insert(key, value);
        self
    }

    pub fn build(self) -> SearchOptions {
        SearchOptions {
            sort_by: self.sort_by,
            page: self.page,
            per_page: self.per_page,
            extra: self.extra,
        }
    }
}

/// 전송할 엔드포인트와 파라미터
///
/// 아래의 함수들은 네트워크 요청 없이 요청만 만들어 내므로 실제로 어떤 값이 전송 될지 확인하는데 사용할 수 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    endpoint: Endpoint,
    payload: Payload,
}

impl Request {
    pub fn new(endpoint: Endpoint, payload: Payload) -> Self {
        Self { endpoint, payload }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

fn search(mut base: Payload, options: &SearchOptions) -> Request {
    base.merge(&options.to_payload());
    Request::new(Endpoint::Search, base)
}

pub fn search_by_keyword(keyword: &str, options: &SearchOptions) -> Request {
    let base = Payload::new()
        .with("action", "search")
        .with("keyword", keyword)
        .with("sortBy", options.sort_by().unwrap_or(DEFAULT_SORT_BY))
        .with("pageNum", options.page().unwrap_or(DEFAULT_PAGE))
        .with("pageSize", options.per_page().unwrap_or(DEFAULT_PER_PAGE));

    search(base, options)
}

pub fn book_details(book_id: impl Into<ParamValue>) -> Request {
    Request::new(Endpoint::BookDetails, Payload::new().with("bi", book_id))
}

/// 출판사 이름으로 키워드 검색을 하며 `publisher=true`를 함께 보낸다.
/// 옵션에 `publisher` 키가 있다면 옵션의 값이 사용된다.
pub fn search_by_publisher(publisher: &str, options: &SearchOptions) -> Request {
    let mut extra = Payload::new().with("publisher", true);
    extra.merge(options.extra());

    let options = SearchOptions {
        extra,
        ..options.clone()
    };
    search_by_keyword(publisher, &options)
}

pub fn seller_info(seller_id: impl Into<ParamValue>) -> Request {
    Request::new(Endpoint::SellerProfile, Payload::new().with("sellerId", seller_id))
}

pub fn search_by_condition(condition: &str, options: &SearchOptions) -> Result<Request, ClientError> {
    let condition = Condition::from_str(condition)?;
    let base = Payload::new()
        .with("condition", condition.as_str())
        .with("filterBy", "condition");

    Ok(search(base, options))
}

pub fn search_by_price_range(
    min_price: impl Into<ParamValue>,
    max_price: impl Into<ParamValue>,
    currency: Option<&str>,
    options: &SearchOptions,
) -> Request {
    let base = Payload::new()
        .with("minPrice", min_price)
        .with("maxPrice", max_price)
        .with("currency", currency.unwrap_or(DEFAULT_CURRENCY));

    search(base, options)
}

/// `year_to`가 없을 때만 `year_from`과 같은 값으로 설정한다. `Some(0)`은 그대로 전송 된다.
pub fn search_by_year(year_from: i32, year_to: Option<i32>, options: &SearchOptions) -> Request {
    let base = Payload::new()
        .with("yearFrom", year_from)
        .with("yearTo", year_to.unwrap_or(year_from));

    search(base, options)
}

pub fn search_by_location(
    country: &str,
    state: Option<&str>,
    city: Option<&str>,
    options: &SearchOptions,
) -> Request {
    let mut base = Payload::new().with("country", country);
    base.insert_opt("state", state)
        .insert_opt("city", city);

    search(base, options)
}

pub fn price_by_isbn(isbn: &str) -> Request {
    let payload = Payload::new()
        .with("action", "getPricingDataByISBN")
        .with("isbn", isbn)
        .with("container", format!("pricingService-{}", isbn));

    Request::new(Endpoint::Pricing, payload)
}

pub fn price_by_author_title(author: &str, title: &str) -> Request {
    let payload = Payload::new()
        .with("action", "getPricingDataForAuthorTitleStandardAddToBasket")
        .with("an", author)
        .with("tn", title)
        .with("container", "oe-search-all");

    Request::new(Endpoint::Pricing, payload)
}

pub fn price_by_author_title_binding(author: &str, title: &str, binding: &str) -> Result<Request, ClientError> {
    let binding = Binding::from_str(binding)?;
    let payload = Payload::new()
        .with("action", "getPricingDataForAuthorTitleBindingRefinements")
        .with("an", author)
        .with("tn", title)
        .with("container", binding.container());

    Ok(Request::new(Endpoint::Pricing, payload))
}

pub fn recommendations_by_isbn(isbn: &str) -> Request {
    let payload = Payload::new()
        .with("pageId", "plp")
        .with("itemIsbn13", isbn);

    Request::new(Endpoint::Recommendations, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(request: &Request) -> Vec<(String, String)> {
        request.payload().to_pairs()
    }

    fn p(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn keyword_search_uses_defaults() {
        let request = search_by_keyword("dune", &SearchOptions::default());

        assert_eq!(request.endpoint(), Endpoint::Search);
        assert_eq!(request.method(), Method::Get);
        assert_eq!(pairs(&request), vec![
            p("action", "search"),
            p("keyword", "dune"),
            p("pageNum", "1"),
            p("pageSize", "20"),
            p("sortBy", "relevance"),
        ]);
    }

    #[test]
    fn keyword_search_page_option_replaces_only_page_number() {
        let options = SearchOptions::builder().page(2).build();

        let request = search_by_keyword("dune", &options);

        assert_eq!(pairs(&request), vec![
            p("action", "search"),
            p("keyword", "dune"),
            p("pageNum", "2"),
            p("pageSize", "20"),
            p("sortBy", "relevance"),
        ]);
    }

    #[test]
    fn keyword_search_extra_params_override_computed_keys() {
        let options = SearchOptions::builder()
            .sort_by("priceAsc")
            .param("sortBy", "newest")
            .param("action", "browse")
            .param("binding", "hard")
            .build();

        let request = search_by_keyword("dune", &options);
        let payload = request.payload();

        assert_eq!(payload.get("sortBy"), Some(&ParamValue::from("newest")));
        assert_eq!(payload.get("action"), Some(&ParamValue::from("browse")));
        assert_eq!(payload.get("binding"), Some(&ParamValue::from("hard")));
        assert_eq!(payload.get("pageSize"), Some(&ParamValue::Int(20)));
    }

    #[test]
    fn publisher_search_adds_publisher_flag() {
        let request = search_by_publisher("Ace", &SearchOptions::default());
        let payload = request.payload();

        assert_eq!(request.endpoint(), Endpoint::Search);
        assert_eq!(payload.get("keyword"), Some(&ParamValue::from("Ace")));
        assert_eq!(payload.get("publisher"), Some(&ParamValue::Bool(true)));
        assert_eq!(payload.get("action"), Some(&ParamValue::from("search")));
    }

    #[test]
    fn publisher_search_lets_caller_override_flag() {
        let options = SearchOptions::builder()
            .per_page(50)
            .param("publisher", false)
            .build();

        let request = search_by_publisher("Ace", &options);
        let payload = request.payload();

        assert_eq!(payload.get("publisher"), Some(&ParamValue::Bool(false)));
        assert_eq!(payload.get("pageSize"), Some(&ParamValue::Int(50)));
    }

    #[test]
    fn condition_search_accepts_closed_set() {
        for condition in ["new", "used", "collectible"] {
            let request = search_by_condition(condition, &SearchOptions::default()).unwrap();

            assert_eq!(pairs(&request), vec![p("condition", condition), p("filterBy", "condition")]);
        }
    }

    #[test]
    fn condition_search_forwards_options() {
        let options = SearchOptions::builder().page(3).param("keyword", "dune").build();

        let request = search_by_condition("used", &options).unwrap();

        assert_eq!(pairs(&request), vec![
            p("condition", "used"),
            p("filterBy", "condition"),
            p("keyword", "dune"),
            p("pageNum", "3"),
        ]);
    }

    #[test]
    fn condition_search_rejects_unknown_condition() {
        let result = search_by_condition("mint", &SearchOptions::default());

        assert_eq!(result, Err(ClientError::InvalidParameter {
            value: "mint".to_string(),
            allowed: &["new", "used", "collectible"],
        }));
    }

    #[test]
    fn price_range_defaults_currency() {
        let request = search_by_price_range(10, 25.5, None, &SearchOptions::default());

        assert_eq!(pairs(&request), vec![
            p("currency", "USD"),
            p("maxPrice", "25.5"),
            p("minPrice", "10"),
        ]);
    }

    #[test]
    fn price_range_uses_given_currency() {
        let request = search_by_price_range(5, 50, Some("EUR"), &SearchOptions::default());

        assert_eq!(request.payload().get("currency"), Some(&ParamValue::from("EUR")));
    }

    #[test]
    fn year_search_defaults_to_same_year() {
        let request = search_by_year(2000, None, &SearchOptions::default());

        assert_eq!(pairs(&request), vec![p("yearFrom", "2000"), p("yearTo", "2000")]);
    }

    #[test]
    fn year_search_with_range() {
        let request = search_by_year(2000, Some(2010), &SearchOptions::default());

        assert_eq!(pairs(&request), vec![p("yearFrom", "2000"), p("yearTo", "2010")]);
    }

    #[test]
    fn year_search_keeps_explicit_zero() {
        let request = search_by_year(2000, Some(0), &SearchOptions::default());

        assert_eq!(pairs(&request), vec![p("yearFrom", "2000"), p("yearTo", "0")]);
    }

    #[test]
    fn location_search_omits_missing_state_and_city() {
        let request = search_by_location("US", None, None, &SearchOptions::default());

        assert_eq!(pairs(&request), vec![p("country", "US")]);
    }

    #[test]
    fn location_search_with_state_and_city() {
        let request = search_by_location("US", Some("MA"), Some("Boston"), &SearchOptions::default());

        assert_eq!(pairs(&request), vec![p("city", "Boston"), p("country", "US"), p("state", "MA")]);
    }

    #[test]
    fn price_by_isbn_builds_container_from_isbn() {
        let request = price_by_isbn("9780441013593");

        assert_eq!(request.endpoint(), Endpoint::Pricing);
        assert_eq!(request.method(), Method::Post);
        assert_eq!(pairs(&request), vec![
            p("action", "getPricingDataByISBN"),
            p("container", "pricingService-9780441013593"),
            p("isbn", "9780441013593"),
        ]);
    }

    #[test]
    fn price_by_author_title_uses_search_all_container() {
        let request = price_by_author_title("Frank Herbert", "Dune");

        assert_eq!(pairs(&request), vec![
            p("action", "getPricingDataForAuthorTitleStandardAddToBasket"),
            p("an", "Frank Herbert"),
            p("container", "oe-search-all"),
            p("tn", "Dune"),
        ]);
    }

    #[test]
    fn price_by_binding_selects_container() {
        let hard = price_by_author_title_binding("Frank Herbert", "Dune", "hard").unwrap();
        let soft = price_by_author_title_binding("Frank Herbert", "Dune", "soft").unwrap();

        assert_eq!(hard.payload().get("container"), Some(&ParamValue::from("priced-from-hard")));
        assert_eq!(soft.payload().get("container"), Some(&ParamValue::from("priced-from-soft")));
        assert_eq!(
            hard.payload().get("action"),
            Some(&ParamValue::from("getPricingDataForAuthorTitleBindingRefinements"))
        );
    }

    #[test]
    fn price_by_binding_rejects_unknown_binding() {
        let result = price_by_author_title_binding("Frank Herbert", "Dune", "leather");

        assert!(matches!(
            result,
            Err(ClientError::InvalidParameter { ref value, .. }) if value == "leather"
        ));
    }

    #[test]
    fn recommendations_by_isbn_payload() {
        let request = recommendations_by_isbn("9780441013593");

        assert_eq!(request.endpoint(), Endpoint::Recommendations);
        assert_eq!(request.method(), Method::Get);
        assert_eq!(pairs(&request), vec![p("itemIsbn13", "9780441013593"), p("pageId", "plp")]);
    }

    #[test]
    fn details_and_seller_payloads() {
        assert_eq!(pairs(&book_details(31415926)), vec![p("bi", "31415926")]);
        assert_eq!(seller_info("seller-42").endpoint(), Endpoint::SellerProfile);
        assert_eq!(pairs(&seller_info("seller-42")), vec![p("sellerId", "seller-42")]);
    }
}
