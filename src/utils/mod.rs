pub mod extractor;
pub mod parameter_error_handler;
pub mod password;
pub mod patch;
pub mod sql;
pub mod validate;

pub use extractor::{SafeCourseTitle, SafeIDI64};
pub use parameter_error_handler::{json_error_handler, query_error_handler};
pub use patch::PartialUpdate;
pub use sql::{escape_like_pattern, is_foreign_key_violation, is_unique_violation};
