//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() / error_type() / message() 访问方法
/// - snake_case 便捷构造函数
macro_rules! define_mbti_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum MbtiError {
            $($variant(String),)*
        }

        impl MbtiError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(MbtiError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MbtiError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(MbtiError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl MbtiError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MbtiError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_mbti_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    ForeignKeyViolation("E005", "Foreign Key Violation"),
    PasswordHashing("E006", "Password Hashing Error"),
    Serialization("E007", "Serialization Error"),
}

impl MbtiError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误按约束类型归类
    pub fn from_db(context: &str, err: sea_orm::DbErr) -> Self {
        let msg = format!("{context}: {err}");
        if crate::utils::is_unique_violation(&msg) {
            MbtiError::UniqueViolation(msg)
        } else if crate::utils::is_foreign_key_violation(&msg) {
            MbtiError::ForeignKeyViolation(msg)
        } else {
            MbtiError::DatabaseOperation(msg)
        }
    }
}

impl fmt::Display for MbtiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MbtiError {}

impl From<sea_orm::DbErr> for MbtiError {
    fn from(err: sea_orm::DbErr) -> Self {
        MbtiError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MbtiError {
    fn from(err: serde_json::Error) -> Self {
        MbtiError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MbtiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MbtiError::database_config("test").code(), "E001");
        assert_eq!(MbtiError::unique_violation("test").code(), "E004");
        assert_eq!(MbtiError::password_hashing("test").code(), "E006");
        assert_eq!(MbtiError::serialization("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            MbtiError::foreign_key_violation("test").error_type(),
            "Foreign Key Violation"
        );
        assert_eq!(
            MbtiError::password_hashing("test").error_type(),
            "Password Hashing Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = MbtiError::database_operation("Course 999");
        let formatted = err.format_simple();
        assert!(formatted.contains("Database Operation Error"));
        assert!(formatted.contains("Course 999"));
    }

    #[test]
    fn test_from_db_classifies_constraints() {
        let unique = MbtiError::from_db(
            "创建课程失败",
            sea_orm::DbErr::Custom("UNIQUE constraint failed: courses.title".into()),
        );
        assert!(matches!(unique, MbtiError::UniqueViolation(_)));

        let fk = MbtiError::from_db(
            "创建答案失败",
            sea_orm::DbErr::Custom("FOREIGN KEY constraint failed".into()),
        );
        assert!(matches!(fk, MbtiError::ForeignKeyViolation(_)));

        let other = MbtiError::from_db("查询失败", sea_orm::DbErr::Custom("boom".into()));
        assert!(matches!(other, MbtiError::DatabaseOperation(_)));
    }
}
