//! 静态页面路由
//!
//! 使用 rust-embed 在编译时嵌入 `static/` 下的页面：
//! - `/` 首页
//! - `/MBTI` 测试入口，`/MBTI/result/{id}` 十六种结果页
//! - 其余 GET 路径按文件名查找资源
//!
//! 配置了 `assets.override_dir` 时优先读取该目录（开发用）。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::{Component, Path};

use crate::config::AppConfig;

/// 编译时从 static/ 目录读取文件
#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

const HOME_PAGE: &str = "home/home.html";
const MBTI_INDEX: &str = "MBTI/index.html";

/// MBTI 结果页数量（16 种人格）
const RESULT_PAGE_COUNT: u8 = 16;

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// 检查是否应该设置长期缓存
fn should_cache(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    matches!(
        ext,
        "js" | "css" | "woff" | "woff2" | "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp"
    )
}

/// 结果页路径；只接受 "0" 到 "15" 的规范写法
fn result_page_path(raw: &str) -> Option<String> {
    let id = raw.parse::<u8>().ok()?;
    (id < RESULT_PAGE_COUNT && id.to_string() == raw).then(|| format!("MBTI/page/result-{id}.html"))
}

/// 拒绝包含 `..` 或绝对路径的请求
fn is_safe_relative(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// 尝试从覆盖目录读取文件
fn try_override_file(path: &str) -> Option<Vec<u8>> {
    let dir = &AppConfig::get().assets.override_dir;
    if dir.is_empty() {
        return None;
    }
    std::fs::read(Path::new(dir).join(path)).ok()
}

fn get_embedded_file(path: &str) -> Option<Vec<u8>> {
    StaticAssets::get(path).map(|f| f.data.to_vec())
}

/// 获取文件内容（优先覆盖目录，然后嵌入资源）
fn get_file(path: &str) -> Option<Vec<u8>> {
    if !is_safe_relative(path) {
        return None;
    }
    try_override_file(path).or_else(|| get_embedded_file(path))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("Not Found")
}

fn serve_file(path: &str) -> HttpResponse {
    let Some(data) = get_file(path) else {
        return not_found();
    };

    let mut response = HttpResponse::Ok();
    response.content_type(get_mime_type(path));

    if should_cache(path) {
        response.insert_header(("Cache-Control", "public, max-age=31536000, immutable"));
    } else {
        response.insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"));
    }

    response.body(data)
}

pub async fn home() -> ActixResult<HttpResponse> {
    Ok(serve_file(HOME_PAGE))
}

pub async fn mbti_index() -> ActixResult<HttpResponse> {
    Ok(serve_file(MBTI_INDEX))
}

pub async fn mbti_test(_test_id: web::Path<String>) -> ActixResult<HttpResponse> {
    Ok(serve_file(MBTI_INDEX))
}

pub async fn mbti_result(result_id: web::Path<String>) -> ActixResult<HttpResponse> {
    match result_page_path(&result_id) {
        Some(page) => Ok(serve_file(&page)),
        None => {
            tracing::warn!("Unknown MBTI result id: {}", result_id.as_str());
            Ok(serve_file(MBTI_INDEX))
        }
    }
}

/// 根路径上的非 GET 请求
pub async fn echo_method(req: HttpRequest) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Got a {} request", req.method())))
}

pub async fn serve_asset(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');
    Ok(serve_file(path))
}

/// 配置静态页面路由（放在最后作为 fallback）
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(home))
            .route(web::post().to(echo_method))
            .route(web::put().to(echo_method))
            .route(web::delete().to(echo_method)),
    )
    .route("/MBTI", web::get().to(mbti_index))
    .route("/MBTI/result/{result_id}", web::get().to(mbti_result))
    .route("/MBTI/{test_id}", web::get().to(mbti_test))
    .route("/{tail:.*}", web::get().to(serve_asset));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};

    #[test]
    fn test_get_mime_type() {
        assert_eq!(get_mime_type("home/home.html"), "text/html; charset=utf-8");
        assert_eq!(get_mime_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(get_mime_type("image.png"), "image/png");
        assert_eq!(get_mime_type("unknown.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_should_cache() {
        assert!(should_cache("app.js"));
        assert!(should_cache("logo.png"));
        assert!(!should_cache("MBTI/index.html"));
    }

    #[test]
    fn test_result_page_path() {
        assert_eq!(
            result_page_path("0").as_deref(),
            Some("MBTI/page/result-0.html")
        );
        assert_eq!(
            result_page_path("15").as_deref(),
            Some("MBTI/page/result-15.html")
        );
        assert!(result_page_path("16").is_none());
        assert!(result_page_path("07").is_none());
        assert!(result_page_path("-1").is_none());
        assert!(result_page_path("abc").is_none());
    }

    #[test]
    fn test_every_result_page_is_embedded() {
        for id in 0..RESULT_PAGE_COUNT {
            let page = format!("MBTI/page/result-{id}.html");
            assert!(StaticAssets::get(&page).is_some(), "missing {page}");
        }
        assert!(StaticAssets::get(HOME_PAGE).is_some());
        assert!(StaticAssets::get(MBTI_INDEX).is_some());
    }

    #[test]
    fn test_rejects_path_traversal() {
        assert!(!is_safe_relative("../Cargo.toml"));
        assert!(!is_safe_relative("/etc/passwd"));
        assert!(is_safe_relative("MBTI/index.html"));
    }

    #[actix_web::test]
    async fn test_static_routes() {
        let app = actix_test::init_service(App::new().configure(configure_frontend_routes)).await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, get_embedded_file(HOME_PAGE).unwrap());

        let req = actix_test::TestRequest::get().uri("/MBTI").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, get_embedded_file(MBTI_INDEX).unwrap());

        let req = actix_test::TestRequest::get().uri("/MBTI/result/3").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(
            body,
            get_embedded_file("MBTI/page/result-3.html").unwrap()
        );

        let req = actix_test::TestRequest::get().uri("/MBTI/result/99").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, get_embedded_file(MBTI_INDEX).unwrap());

        let req = actix_test::TestRequest::get().uri("/MBTI/quiz-1").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, get_embedded_file(MBTI_INDEX).unwrap());

        let req = actix_test::TestRequest::get().uri("/no/such/file.html").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_root_echoes_method() {
        let app = actix_test::init_service(App::new().configure(configure_frontend_routes)).await;

        for (req, expected) in [
            (actix_test::TestRequest::post(), "Got a POST request"),
            (actix_test::TestRequest::put(), "Got a PUT request"),
            (actix_test::TestRequest::delete(), "Got a DELETE request"),
        ] {
            let body = actix_test::call_and_read_body(&app, req.uri("/").to_request()).await;
            assert_eq!(body, expected);
        }
    }
}
