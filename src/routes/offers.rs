use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::offers::requests::OfferRequest;
use crate::services::OfferService;
use crate::utils::{PatchContentType, SafeIDI64};

// 懒加载的全局 OFFER_SERVICE 实例
static OFFER_SERVICE: Lazy<OfferService> = Lazy::new(OfferService::new_lazy);

// HTTP处理程序
pub async fn list_offers(req: HttpRequest) -> ActixResult<HttpResponse> {
    OFFER_SERVICE.list_offers(&req).await
}

pub async fn create_offer(
    req: HttpRequest,
    offer_data: web::Json<OfferRequest>,
) -> ActixResult<HttpResponse> {
    OFFER_SERVICE
        .create_offer(&req, offer_data.into_inner())
        .await
}

pub async fn get_offer(req: HttpRequest, offer_id: SafeIDI64) -> ActixResult<HttpResponse> {
    OFFER_SERVICE.get_offer(&req, offer_id.0).await
}

pub async fn update_offer(
    req: HttpRequest,
    offer_id: SafeIDI64,
    offer_data: web::Json<OfferRequest>,
) -> ActixResult<HttpResponse> {
    OFFER_SERVICE
        .update_offer(&req, offer_id.0, offer_data.into_inner())
        .await
}

pub async fn partial_update_offer(
    req: HttpRequest,
    _content_type: PatchContentType,
    offer_id: SafeIDI64,
    offer_data: web::Json<OfferRequest>,
) -> ActixResult<HttpResponse> {
    OFFER_SERVICE
        .partial_update_offer(&req, offer_id.0, offer_data.into_inner())
        .await
}

pub async fn delete_offer(req: HttpRequest, offer_id: SafeIDI64) -> ActixResult<HttpResponse> {
    OFFER_SERVICE.delete_offer(&req, offer_id.0).await
}

// 配置路由
pub fn configure_offer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/offers")
            .service(
                web::resource("")
                    .route(web::get().to(list_offers))
                    .route(web::post().to(create_offer)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_offer))
                    .route(web::put().to(update_offer))
                    // 仅 application/json 与 application/merge-patch+json
                    .route(web::patch().to(partial_update_offer))
                    .route(web::delete().to(delete_offer)),
            ),
    );
}
