use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Formatter;

/// 요청 파라미터로 전송 가능한 스칼라 값
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(v) => write!(f, "{:?}", v),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// `i64` 범위를 넘는 값은 문자열로 전송 된다.
impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(ParamValue::Int)
            .unwrap_or_else(|_| ParamValue::Str(value.to_string()))
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(ParamValue::Int)
            .unwrap_or_else(|_| ParamValue::Str(value.to_string()))
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Str(format!("{:?}", value))
    }
}

/// GET 쿼리 스트링 또는 POST 폼 바디로 전송 되는 키/값 목록
///
/// 키 순서로 정렬 되어 있어 같은 인자로 만든 요청은 항상 같은 순서로 인코딩 된다.
/// 같은 키를 다시 넣으면 나중 값이 이전 값을 덮어쓴다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    params: BTreeMap<String, ParamValue>,
}

impl Payload {
    pub fn new() -> Self {
        Payload::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// 값이 없을 경우 키 자체를 추가하지 않는다.
    pub fn insert_opt<V>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self
    where
        V: Into<ParamValue>,
    {
        if let Some(v) = value {
            self.params.insert(key.into(), v.into());
        }
        self
    }

    /// `other`의 값들로 같은 키의 값을 덮어쓴다.
    pub fn merge(&mut self, other: &Payload) -> &mut Self {
        for (key, value) in other.iter() {
            self.params.insert(key.to_string(), value.clone());
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.params.iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}
