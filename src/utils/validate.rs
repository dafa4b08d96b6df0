use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+(:\d+)?(/[^\s]*)?$")
        .expect("Invalid url regex")
});

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_RATING: f64 = 5.0;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters long");
    }
    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err("Password must be at most 128 characters long");
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), &'static str> {
    if !URL_RE.is_match(url) {
        return Err("Link must be an http(s) URL");
    }
    Ok(())
}

pub fn validate_course_title(title: &str) -> Result<(), &'static str> {
    let len = title.trim().chars().count();
    if len == 0 || title.chars().count() > MAX_TITLE_LENGTH {
        return Err("Course title must be between 1 and 100 characters");
    }
    Ok(())
}

pub fn validate_rating(rating: f64) -> Result<(), &'static str> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err("Rating must be between 0 and 5");
    }
    Ok(())
}

pub fn validate_price(price: i64) -> Result<(), &'static str> {
    if price < 0 {
        return Err("Price must not be negative");
    }
    Ok(())
}

/// 校验创建课程请求的全部字段
pub fn validate_create_course(req: &CreateCourseRequest) -> Result<(), &'static str> {
    validate_course_title(&req.title)?;
    validate_url(&req.link)?;
    validate_url(&req.img_link)?;
    validate_rating(req.rating)?;
    validate_price(req.price)
}

/// 只校验补丁中出现的字段
pub fn validate_update_course(req: &UpdateCourseRequest) -> Result<(), &'static str> {
    if let Some(title) = &req.title {
        validate_course_title(title)?;
    }
    if let Some(link) = &req.link {
        validate_url(link)?;
    }
    if let Some(img_link) = &req.img_link {
        validate_url(img_link)?;
    }
    if let Some(rating) = req.rating {
        validate_rating(rating)?;
    }
    if let Some(price) = req.price {
        validate_price(price)?;
    }
    Ok(())
}

/// 问答文本字段：不能为空白
pub fn validate_non_blank(value: &str, field: &'static str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> CreateCourseRequest {
        CreateCourseRequest {
            title: "웹의 이해".to_string(),
            link: "https://www.example.link".to_string(),
            img_link: "https://www.examplelink.link".to_string(),
            rating: 0.0,
            price: 0,
        }
    }

    #[test]
    fn test_email() {
        assert!(validate_email("mbti@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_url() {
        assert!(validate_url("https://www.example.link").is_ok());
        assert!(validate_url("http://localhost.dev:8000/img/a.png").is_ok());
        assert!(validate_url("wwwheefsdfdsa").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_valid_course() {
        assert!(validate_create_course(&sample_course()).is_ok());
    }

    #[test]
    fn test_invalid_course_fields() {
        let mut course = sample_course();
        course.img_link = "wwwheefsdfdsa".to_string();
        assert!(validate_create_course(&course).is_err());

        let mut course = sample_course();
        course.title = "   ".to_string();
        assert!(validate_create_course(&course).is_err());

        let mut course = sample_course();
        course.rating = 5.5;
        assert!(validate_create_course(&course).is_err());

        let mut course = sample_course();
        course.price = -1;
        assert!(validate_create_course(&course).is_err());
    }

    #[test]
    fn test_update_only_checks_present_fields() {
        assert!(validate_update_course(&UpdateCourseRequest::default()).is_ok());

        let update = UpdateCourseRequest {
            title: Some("앱의 이해".to_string()),
            ..Default::default()
        };
        assert!(validate_update_course(&update).is_ok());

        let update = UpdateCourseRequest {
            title: Some("hi".to_string()),
            img_link: Some("wwwheefsdfdsa".to_string()),
            ..Default::default()
        };
        assert!(validate_update_course(&update).is_err());
    }

    #[test]
    fn test_non_blank() {
        assert!(validate_non_blank("E", "type").is_ok());
        assert_eq!(
            validate_non_blank(" ", "contents"),
            Err("contents must not be empty".to_string())
        );
    }
}
