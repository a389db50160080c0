use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

// 统一的错误响应结构，成功响应直接返回实体本身
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ErrorResponse {
    pub code: i32,
    pub message: String,
    pub entity_name: Option<String>,
    pub error_key: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            entity_name: None,
            error_key: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 带实体名与错误键的错误（对应 `X-{app}-error` 提示头）
    pub fn for_entity(
        code: ErrorCode,
        message: impl Into<String>,
        entity_name: &str,
        error_key: &str,
    ) -> Self {
        Self {
            entity_name: Some(entity_name.to_string()),
            error_key: Some(error_key.to_string()),
            ..Self::new(code, message)
        }
    }
}
