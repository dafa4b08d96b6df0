/*!
 * 速率限制中间件
 *
 * 按客户端 IP 做固定窗口计数，窗口内超过上限返回 429 Too Many Requests。
 * 窗口从该 IP 第一次放行的请求开始计时，到期后整体重置。
 * 被拒绝的请求不计数，也不会延长窗口。
 *
 * ```rust,ignore
 * web::scope("/api/v1/users")
 *     .service(
 *         web::resource("/login")
 *             .wrap(RateLimit::login())
 *             .route(web::post().to(login)),
 *     )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::Expiry;
use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 单个键的窗口计数
#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    started: Instant,
    window: Duration,
    count: u32,
}

impl WindowCounter {
    fn ends_at(&self) -> Instant {
        self.started + self.window
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.ends_at().saturating_duration_since(now)
    }

    /// 距离窗口结束的秒数（向上取整，至少 1）
    fn retry_after_secs(&self, now: Instant) -> u64 {
        let remaining = self.remaining(now);
        let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        secs.max(1)
    }
}

/// 条目在所属窗口结束时过期，更新计数不会顺延
struct WindowExpiry;

impl Expiry<String, WindowCounter> for WindowExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &WindowCounter,
        created_at: Instant,
    ) -> Option<Duration> {
        Some(value.remaining(created_at))
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &WindowCounter,
        updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.remaining(updated_at))
    }
}

/// 全局计数缓存，所有 worker 共享
/// 键: 前缀:ip，值: 当前窗口的起点和计数
static RATE_LIMIT_CACHE: Lazy<Cache<String, WindowCounter>> = Lazy::new(|| {
    Cache::builder()
        .expire_after(WindowExpiry)
        .max_capacity(100_000)
        .build()
});

/// 计算一次请求后的计数，返回 None 表示拒绝
fn admit(
    current: Option<WindowCounter>,
    now: Instant,
    window: Duration,
    max_requests: u32,
) -> Option<WindowCounter> {
    match current {
        Some(counter) if now < counter.ends_at() => {
            (counter.count < max_requests).then_some(WindowCounter {
                count: counter.count + 1,
                ..counter
            })
        }
        _ => (max_requests > 0).then_some(WindowCounter {
            started: now,
            window,
            count: 1,
        }),
    }
}

#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录端点限制，取自 `rate_limit` 配置
    pub fn login() -> Self {
        let config = &AppConfig::get().rate_limit;
        Self::new(config.login_max_requests, config.login_window_secs).with_prefix("login")
    }
}

/// 从请求中提取客户端 IP
///
/// 部署在反向代理之后时需要代理正确设置 X-Forwarded-For / X-Real-IP。
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            let identifier = format!("ip:{}", extract_client_ip(&req));
            let cache_key = if key_prefix.is_empty() {
                identifier
            } else {
                format!("{}:{}", key_prefix, identifier)
            };

            let now = Instant::now();
            let window = Duration::from_secs(window_secs.max(1));

            // 读取和更新在同一个原子操作内完成
            let result = RATE_LIMIT_CACHE
                .entry(cache_key.clone())
                .and_compute_with(|entry| {
                    let op = match admit(entry.map(|e| e.into_value()), now, window, max_requests)
                    {
                        Some(counter) => Op::Put(counter),
                        None => Op::Nop,
                    };
                    ready(op)
                })
                .await;

            let retry_after = match result {
                CompResult::Inserted(_) | CompResult::ReplacedWith(_) => None,
                CompResult::Unchanged(entry) => Some(entry.into_value().retry_after_secs(now)),
                CompResult::StillNone(_) | CompResult::Removed(_) => Some(window.as_secs()),
            };

            if let Some(retry_after) = retry_after {
                warn!(
                    "Rate limit exceeded for key: {} (limit: {} per {}s)",
                    cache_key, max_requests, window_secs
                );
                return Ok(req
                    .into_response(create_rate_limit_response(retry_after).map_into_right_body()));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use futures_util::future::join_all;

    const WINDOW: Duration = Duration::from_secs(60);

    fn at(base: Instant, secs: u64) -> Instant {
        base + Duration::from_secs(secs)
    }

    #[test]
    fn test_login_preset_follows_config() {
        let login = RateLimit::login();
        let config = &AppConfig::get().rate_limit;
        assert_eq!(login.max_requests, config.login_max_requests);
        assert_eq!(login.window_secs, config.login_window_secs);
        assert_eq!(login.key_prefix, "login");
    }

    #[test]
    fn test_window_is_fixed_from_first_request() {
        let base = Instant::now();
        let mut counter = None;
        for secs in [0, 10, 20, 30, 50] {
            counter = admit(counter, at(base, secs), WINDOW, 5);
            assert!(counter.is_some(), "request at t={secs} should pass");
        }

        // 窗口内第 6 次被拒绝，且不改变计数
        assert!(admit(counter, at(base, 55), WINDOW, 5).is_none());
        let counter = counter.unwrap();
        assert_eq!(counter.count, 5);
        assert_eq!(counter.started, base);
        assert_eq!(counter.retry_after_secs(at(base, 55)), 5);

        // 窗口从 t=0 开始，t=65 已经是新窗口
        let renewed = admit(Some(counter), at(base, 65), WINDOW, 5).unwrap();
        assert_eq!(renewed.count, 1);
        assert_eq!(renewed.started, at(base, 65));
    }

    #[test]
    fn test_zero_limit_rejects_everything() {
        assert!(admit(None, Instant::now(), WINDOW, 0).is_none());
    }

    #[actix_web::test]
    async fn test_requests_over_limit_get_429() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimit::new(2, 60).with_prefix("test-over-limit"))
                    .route(web::post().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        for _ in 0..2 {
            let req = actix_test::TestRequest::post()
                .uri("/limited")
                .insert_header(("X-Forwarded-For", "203.0.113.9"))
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }

        let req = actix_test::TestRequest::post()
            .uri("/limited")
            .insert_header(("X-Forwarded-For", "203.0.113.9"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let retry_after: u64 = resp
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap();
        assert!((1..=60).contains(&retry_after));
    }

    #[actix_web::test]
    async fn test_concurrent_requests_respect_limit() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/burst")
                    .wrap(RateLimit::new(3, 60).with_prefix("test-burst"))
                    .route(web::post().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let responses = join_all((0..10).map(|_| {
            let req = actix_test::TestRequest::post()
                .uri("/burst")
                .insert_header(("X-Forwarded-For", "203.0.113.77"))
                .to_request();
            actix_test::call_service(&app, req)
        }))
        .await;

        let allowed = responses
            .iter()
            .filter(|resp| resp.status().is_success())
            .count();
        assert_eq!(allowed, 3);
    }
}
