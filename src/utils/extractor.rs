//! 请求提取器
//!
//! 路径中的 `{id}` 无法解析为 i64 时直接返回 400，而不是 actix 默认的 404。
//! PATCH 请求体类型不符时返回 415。

use actix_web::http::header::CONTENT_TYPE;
use actix_web::mime::{self, Mime};
use actix_web::{
    FromRequest, HttpMessage, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ErrorCode, ErrorResponse};

/// 安全的 i64 路径 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

impl SafeIDI64 {
    fn parse(raw: Option<&str>) -> Result<Self, String> {
        let raw = raw.ok_or_else(|| "Missing id path parameter".to_string())?;
        raw.parse::<i64>()
            .map(SafeIDI64)
            .map_err(|_| format!("Invalid id path parameter: {raw}"))
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req.match_info().get("id")).map_err(|msg| {
            let response =
                HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, &msg));
            InternalError::from_response(msg, response).into()
        }))
    }
}

/// PATCH 只接受 `application/json` 与 `application/merge-patch+json`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchContentType;

impl PatchContentType {
    fn accepts(mime: Option<&Mime>) -> bool {
        let Some(mime) = mime else {
            return false;
        };
        if mime.type_() != mime::APPLICATION {
            return false;
        }
        match mime.suffix() {
            None => mime.subtype() == mime::JSON,
            Some(suffix) => suffix == mime::JSON && mime.subtype() == "merge-patch",
        }
    }
}

impl FromRequest for PatchContentType {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let mime = req.mime_type().ok().flatten();
        if Self::accepts(mime.as_ref()) {
            return ready(Ok(PatchContentType));
        }

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none");
        let msg = format!("Unsupported content type for PATCH: {content_type}");
        let response = HttpResponse::UnsupportedMediaType()
            .json(ErrorResponse::new(ErrorCode::UnsupportedMediaType, &msg));
        ready(Err(InternalError::from_response(msg, response).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(SafeIDI64::parse(Some("42")), Ok(SafeIDI64(42)));
        assert_eq!(SafeIDI64::parse(Some("-1")), Ok(SafeIDI64(-1)));
        assert!(SafeIDI64::parse(Some("abc")).is_err());
        assert!(SafeIDI64::parse(Some("9223372036854775808")).is_err());
        assert!(SafeIDI64::parse(None).is_err());
    }

    #[test]
    fn test_patch_content_types() {
        let accepts = |raw: &str| PatchContentType::accepts(raw.parse::<Mime>().ok().as_ref());

        assert!(accepts("application/json"));
        assert!(accepts("application/json; charset=utf-8"));
        assert!(accepts("application/merge-patch+json"));
        assert!(!accepts("application/vnd.api+json"));
        assert!(!accepts("application/json-patch+json"));
        assert!(!accepts("text/plain"));
        assert!(!PatchContentType::accepts(None));
    }
}
