use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
/// 页码上限，保证 (page - 1) * size 不溢出
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

impl PaginationQuery {
    /// 规范化分页参数：page 限制在 1..=MAX_PAGE，size 限制在 1..=100
    pub fn normalize(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
        let page = page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE) as u64;
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as u64;
        (page, size)
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

// 支持字符串到i64的转换（查询字符串里的数字都是字符串）
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            i64::try_from(value).map_err(|_| Error::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clamps_bounds() {
        assert_eq!(PaginationQuery::normalize(None, None), (1, 10));
        assert_eq!(PaginationQuery::normalize(Some(0), Some(0)), (1, 1));
        assert_eq!(PaginationQuery::normalize(Some(-3), Some(500)), (1, 100));
        assert_eq!(PaginationQuery::normalize(Some(4), Some(25)), (4, 25));
    }

    #[test]
    fn test_normalize_caps_huge_page() {
        let (page, size) = PaginationQuery::normalize(Some(i64::MAX), Some(MAX_PAGE_SIZE));
        assert_eq!(page, MAX_PAGE as u64);
        assert!((page - 1).checked_mul(size).is_some());
        assert!(page.checked_mul(size).is_some());
    }

    #[test]
    fn test_deserialize_accepts_strings_and_numbers() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page": "2", "size": 30}"#).expect("valid pagination");
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 30);

        let query: PaginationQuery = serde_json::from_str("{}").expect("defaults");
        assert_eq!(query.page, DEFAULT_PAGE);
        assert_eq!(query.size, DEFAULT_PAGE_SIZE);

        assert!(serde_json::from_str::<PaginationQuery>(r#"{"page": "abc"}"#).is_err());
    }
}
