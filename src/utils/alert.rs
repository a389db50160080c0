//! 提示响应头与错误响应
//!
//! 成功的写操作返回 `X-{app}-alert` 与 `X-{app}-params`，
//! 失败返回 `X-{app}-error` 与 `X-{app}-params`。
//! 开启翻译时提示头携带翻译键，否则携带英文消息。

use actix_web::{HttpResponse, HttpResponseBuilder};
use tracing::error;

use crate::config::{AppConfig, AppSettings};
use crate::errors::AuctionSystemError;
use crate::models::{ErrorCode, ErrorResponse};
use crate::utils::validate::IdViolation;

/// 待写入响应的提示头
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertHeaders(Vec<(String, String)>);

impl AlertHeaders {
    pub fn headers(&self) -> &[(String, String)] {
        &self.0
    }

    /// 写入响应构建器
    pub fn apply(self, builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
        for header in self.0 {
            builder.insert_header(header);
        }
        builder
    }
}

fn alert(settings: &AppSettings, message: String, param: String) -> AlertHeaders {
    AlertHeaders(vec![
        (settings.header_name("alert"), message),
        (settings.header_name("params"), param),
    ])
}

pub fn creation_alert_with(settings: &AppSettings, entity_name: &str, id: i64) -> AlertHeaders {
    let message = if settings.enable_translation {
        format!("{}.{entity_name}.created", settings.application_name)
    } else {
        format!("A new {entity_name} is created with identifier {id}")
    };
    alert(settings, message, id.to_string())
}

pub fn update_alert_with(settings: &AppSettings, entity_name: &str, id: i64) -> AlertHeaders {
    let message = if settings.enable_translation {
        format!("{}.{entity_name}.updated", settings.application_name)
    } else {
        format!("A {entity_name} is updated with identifier {id}")
    };
    alert(settings, message, id.to_string())
}

pub fn deletion_alert_with(settings: &AppSettings, entity_name: &str, id: i64) -> AlertHeaders {
    let message = if settings.enable_translation {
        format!("{}.{entity_name}.deleted", settings.application_name)
    } else {
        format!("A {entity_name} is deleted with identifier {id}")
    };
    alert(settings, message, id.to_string())
}

pub fn failure_alert_with(
    settings: &AppSettings,
    entity_name: &str,
    error_key: &str,
    default_message: &str,
) -> AlertHeaders {
    let message = if settings.enable_translation {
        format!("error.{error_key}")
    } else {
        default_message.to_string()
    };
    AlertHeaders(vec![
        (settings.header_name("error"), message),
        (settings.header_name("params"), entity_name.to_string()),
    ])
}

pub fn entity_creation_alert(entity_name: &str, id: i64) -> AlertHeaders {
    creation_alert_with(&AppConfig::get().app, entity_name, id)
}

pub fn entity_update_alert(entity_name: &str, id: i64) -> AlertHeaders {
    update_alert_with(&AppConfig::get().app, entity_name, id)
}

pub fn entity_deletion_alert(entity_name: &str, id: i64) -> AlertHeaders {
    deletion_alert_with(&AppConfig::get().app, entity_name, id)
}

/// 400：ID 规则校验失败
pub fn bad_request_alert(entity_name: &str, violation: IdViolation) -> HttpResponse {
    let message = violation.message(entity_name);
    let error_key = violation.error_key();

    let mut builder = HttpResponse::BadRequest();
    failure_alert_with(&AppConfig::get().app, entity_name, error_key, &message)
        .apply(&mut builder);
    builder.json(ErrorResponse::for_entity(
        violation.code(),
        message,
        entity_name,
        error_key,
    ))
}

/// 404：记录不存在
pub fn not_found(entity_name: &str, code: ErrorCode) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::for_entity(
        code,
        format!("The requested {entity_name} was not found"),
        entity_name,
        "notfound",
    ))
}

/// 500：存储层错误
pub fn internal_error(entity_name: &str, err: &AuctionSystemError) -> HttpResponse {
    error!("{} storage failure: {}", entity_name, err);
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        ErrorCode::InternalServerError,
        format!("Failed to process {entity_name}: {}", err.format_simple()),
    ))
}
