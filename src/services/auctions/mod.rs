pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auctions::requests::AuctionRequest;
use crate::storage::Storage;

/// 提示头与错误响应中使用的实体名
pub const ENTITY_NAME: &str = "auction";

pub struct AuctionService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuctionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建拍卖
    pub async fn create_auction(
        &self,
        req: &HttpRequest,
        auction_data: AuctionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_auction(self, req, auction_data).await
    }

    // 整体更新拍卖
    pub async fn update_auction(
        &self,
        req: &HttpRequest,
        auction_id: i64,
        auction_data: AuctionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_auction(self, req, auction_id, auction_data).await
    }

    // 部分更新拍卖
    pub async fn partial_update_auction(
        &self,
        req: &HttpRequest,
        auction_id: i64,
        auction_data: AuctionRequest,
    ) -> ActixResult<HttpResponse> {
        update::partial_update_auction(self, req, auction_id, auction_data).await
    }

    // 获取全部拍卖
    pub async fn list_auctions(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_auctions(self, req).await
    }

    // 根据 ID 获取拍卖
    pub async fn get_auction(&self, req: &HttpRequest, auction_id: i64) -> ActixResult<HttpResponse> {
        get::get_auction(self, req, auction_id).await
    }

    // 根据 ID 删除拍卖
    pub async fn delete_auction(
        &self,
        req: &HttpRequest,
        auction_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_auction(self, req, auction_id).await
    }
}
