pub mod rate_limit;
pub mod request_log;

pub use rate_limit::RateLimit;
pub use request_log::RequestLog;
