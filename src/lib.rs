//! AbeBooks 마켓플레이스 내부 웹 엔드포인트 클라이언트
//!
//! 키워드, 출판사, 상태, 가격 범위, 출판 연도, 판매 지역으로 매물을 검색하고
//! 도서 상세, 판매자 정보, ISBN 혹은 저자/제목 기반의 가격 및 추천 정보를 조회한다.
//!
//! 요청 파라미터의 구성은 [`request`] 모듈에서 네트워크 없이 이루어지며,
//! 실제 전송은 [`transport::Transport`] 구현체가 담당한다.
//!
//! ```no_run
//! use abebooks_client::{Client, SearchOptions};
//!
//! let client = Client::new()?;
//! let options = SearchOptions::builder().page(2).build();
//! let results = client.search_by_keyword("dune", &options)?;
//! println!("{}", results);
//! # Ok::<(), abebooks_client::ClientError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod request;
pub mod transport;

pub use client::{Client, BASE_URL};
pub use error::{ClientError, ErrorKind};
pub use payload::{ParamValue, Payload};
pub use request::{Binding, Condition, SearchOptions};
pub use transport::{HttpTransport, Method, Transport};
