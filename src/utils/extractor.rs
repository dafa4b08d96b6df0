//! 路径参数提取器
//!
//! 解析失败时直接返回 400 和统一的 JSON 错误体，处理函数拿到的一定是合法值。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// 解析路径中的正整数 ID
pub fn parse_positive_id(raw: &str) -> Result<i64, String> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("Invalid id: '{raw}'")),
    }
}

/// 路径参数 `{id}`
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().query("id");
        ready(parse_positive_id(raw).map(SafeIDI64).map_err(bad_request))
    }
}

/// 路径参数 `{title}`，已做百分号解码
#[derive(Debug, Clone)]
pub struct SafeCourseTitle(pub String);

impl FromRequest for SafeCourseTitle {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let title = req.match_info().query("title").trim().to_string();
        if title.is_empty() {
            ready(Err(bad_request("Course title must not be empty".to_string())))
        } else {
            ready(Ok(SafeCourseTitle(title)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("42"), Ok(42));
        assert!(parse_positive_id("0").is_err());
        assert!(parse_positive_id("-1").is_err());
        assert!(parse_positive_id("abc").is_err());
        assert!(parse_positive_id("99999999999999999999").is_err());
    }
}
