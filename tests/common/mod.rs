#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use rust_auction_next::config::DatabaseConfig;
use rust_auction_next::models::auctions::entities::Auction;
use rust_auction_next::models::offers::entities::Offer;
use rust_auction_next::routes;
use rust_auction_next::storage::Storage;
use rust_auction_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_auction_next::utils::json_error_handler;

/// 每个测试独立的内存数据库
pub async fn memory_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::connect("sqlite::memory:", &DatabaseConfig::default())
        .await
        .expect("in-memory database should open");
    Arc::new(storage)
}

/// 与 main.rs 相同的路由和 JSON 配置
pub fn build_app(
    storage: Arc<dyn Storage>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(storage))
        .configure(routes::configure_auction_routes)
        .configure(routes::configure_offer_routes)
}

pub fn header<B>(resp: &ServiceResponse<B>, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn id_of(body: &Value) -> i64 {
    body["id"].as_i64().expect("response body should carry an id")
}

/// 直接写入存储，绕过 HTTP 层
pub async fn seed_auction(storage: &Arc<dyn Storage>, description: &str) -> i64 {
    let auction = storage
        .save_auction(Auction::new(None, Some(description.to_string())))
        .await
        .expect("seed auction");
    auction.id.expect("seeded auction id")
}

pub async fn seed_offer(storage: &Arc<dyn Storage>, value: f64, auction_id: Option<i64>) -> i64 {
    let auction = match auction_id {
        Some(id) => storage
            .get_auction_by_id(id)
            .await
            .expect("load auction")
            .map(|a| a.to_ref()),
        None => None,
    };
    let offer = storage
        .save_offer(Offer::new(None, Some(value), auction))
        .await
        .expect("seed offer");
    offer.id.expect("seeded offer id")
}
