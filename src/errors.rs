//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_auction_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AuctionSystemError {
            $($variant(String),)*
        }

        impl AuctionSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AuctionSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AuctionSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AuctionSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AuctionSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AuctionSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_auction_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    NotFound("E004", "Resource Not Found"),
}

impl AuctionSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AuctionSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AuctionSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AuctionSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        AuctionSystemError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AuctionSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AuctionSystemError::database_config("test").code(), "E001");
        assert_eq!(AuctionSystemError::database_operation("test").code(), "E003");
        assert_eq!(AuctionSystemError::not_found("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AuctionSystemError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            AuctionSystemError::not_found("test").error_type(),
            "Resource Not Found"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AuctionSystemError::not_found("auction 42");
        assert_eq!(err.message(), "auction 42");
    }

    #[test]
    fn test_format_simple() {
        let err = AuctionSystemError::database_operation("disk I/O error");
        let formatted = err.format_simple();
        assert_eq!(formatted, "Database Operation Error: disk I/O error");
        assert_eq!(err.to_string(), formatted);
    }

    #[test]
    fn test_from_db_err() {
        let err: AuctionSystemError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }
}
