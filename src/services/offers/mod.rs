pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::offers::requests::OfferRequest;
use crate::storage::Storage;
use crate::utils::{IdViolation, alert};

/// 提示头与错误响应中使用的实体名
pub const ENTITY_NAME: &str = "offer";

pub struct OfferService {
    storage: Option<Arc<dyn Storage>>,
}

impl OfferService {
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

    // 创建报价
    pub async fn create_offer(
        &self,
        req: &HttpRequest,
        offer_data: OfferRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_offer(self, req, offer_data).await
    }

    // 整体更新报价
    pub async fn update_offer(
        &self,
        req: &HttpRequest,
        offer_id: i64,
        offer_data: OfferRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_offer(self, req, offer_id, offer_data).await
    }

    // 部分更新报价
    pub async fn partial_update_offer(
        &self,
        req: &HttpRequest,
        offer_id: i64,
        offer_data: OfferRequest,
    ) -> ActixResult<HttpResponse> {
        update::partial_update_offer(self, req, offer_id, offer_data).await
    }

    // 获取全部报价
    pub async fn list_offers(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_offers(self, req).await
    }

    // 根据 ID 获取报价
    pub async fn get_offer(&self, req: &HttpRequest, offer_id: i64) -> ActixResult<HttpResponse> {
        get::get_offer(self, req, offer_id).await
    }

    // 根据 ID 删除报价
    pub async fn delete_offer(&self, req: &HttpRequest, offer_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_offer(self, req, offer_id).await
    }
}

/// 报价引用的拍卖必须存在
pub(crate) async fn check_auction_reference(
    storage: &Arc<dyn Storage>,
    auction_id: Option<i64>,
) -> Result<(), HttpResponse> {
    let Some(auction_id) = auction_id else {
        return Ok(());
    };

    match storage.auction_exists(auction_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(alert::bad_request_alert(
            ENTITY_NAME,
            IdViolation::AuctionNotFound,
        )),
        Err(e) => Err(alert::internal_error(ENTITY_NAME, &e)),
    }
}
