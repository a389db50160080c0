use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auctions::requests::AuctionRequest;
use crate::services::AuctionService;
use crate::utils::{PatchContentType, SafeIDI64};

// 懒加载的全局 AUCTION_SERVICE 实例
static AUCTION_SERVICE: Lazy<AuctionService> = Lazy::new(AuctionService::new_lazy);

// HTTP处理程序
pub async fn list_auctions(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUCTION_SERVICE.list_auctions(&req).await
}

pub async fn create_auction(
    req: HttpRequest,
    auction_data: web::Json<AuctionRequest>,
) -> ActixResult<HttpResponse> {
    AUCTION_SERVICE
        .create_auction(&req, auction_data.into_inner())
        .await
}

pub async fn get_auction(req: HttpRequest, auction_id: SafeIDI64) -> ActixResult<HttpResponse> {
    AUCTION_SERVICE.get_auction(&req, auction_id.0).await
}

pub async fn update_auction(
    req: HttpRequest,
    auction_id: SafeIDI64,
    auction_data: web::Json<AuctionRequest>,
) -> ActixResult<HttpResponse> {
    AUCTION_SERVICE
        .update_auction(&req, auction_id.0, auction_data.into_inner())
        .await
}

pub async fn partial_update_auction(
    req: HttpRequest,
    _content_type: PatchContentType,
    auction_id: SafeIDI64,
    auction_data: web::Json<AuctionRequest>,
) -> ActixResult<HttpResponse> {
    AUCTION_SERVICE
        .partial_update_auction(&req, auction_id.0, auction_data.into_inner())
        .await
}

pub async fn delete_auction(req: HttpRequest, auction_id: SafeIDI64) -> ActixResult<HttpResponse> {
    AUCTION_SERVICE.delete_auction(&req, auction_id.0).await
}

// 配置路由
pub fn configure_auction_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auctions")
            .service(
                web::resource("")
                    .route(web::get().to(list_auctions))
                    .route(web::post().to(create_auction)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_auction))
                    .route(web::put().to(update_auction))
                    // 仅 application/json 与 application/merge-patch+json
                    .route(web::patch().to(partial_update_auction))
                    .route(web::delete().to(delete_auction)),
            ),
    );
}
