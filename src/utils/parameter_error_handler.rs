use actix_web::{HttpRequest, HttpResponse, error::InternalError, error::JsonPayloadError};
use tracing::debug;

use crate::models::{ErrorCode, ErrorResponse};

/// 请求体 JSON 解析失败时返回统一的 400 错误
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Unsupported content type, expected JSON".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {e}"),
        other => format!("Invalid request body: {other}"),
    };
    debug!("JSON payload rejected on {}: {}", req.path(), message);

    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, &message));
    InternalError::from_response(err, response).into()
}
