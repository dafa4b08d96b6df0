//! SQL 相关的小工具

/// 转义 LIKE 模式中的通配符
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 判断数据库错误信息是否为唯一约束冲突（SQLite / PostgreSQL / MySQL）
pub fn is_unique_violation(msg: &str) -> bool {
    msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("Duplicate entry")
}

/// 判断数据库错误信息是否为外键约束冲突
pub fn is_foreign_key_violation(msg: &str) -> bool {
    msg.contains("FOREIGN KEY constraint failed")
        || msg.contains("violates foreign key constraint")
        || msg.contains("a foreign key constraint fails")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("web"), "web");
        assert_eq!(escape_like_pattern("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_constraint_detection() {
        assert!(is_unique_violation(
            "error returned from database: UNIQUE constraint failed: users.email"
        ));
        assert!(is_unique_violation(
            "duplicate key value violates unique constraint \"courses_title_key\""
        ));
        assert!(!is_unique_violation("connection reset"));
        assert!(is_foreign_key_violation("FOREIGN KEY constraint failed"));
        assert!(!is_foreign_key_violation("UNIQUE constraint failed"));
    }
}
