use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{AuctionService, ENTITY_NAME};
use crate::models::ErrorCode;
use crate::utils::alert;

pub async fn get_auction(
    service: &AuctionService,
    request: &HttpRequest,
    auction_id: i64,
) -> ActixResult<HttpResponse> {
    debug!("REST request to get Auction : {}", auction_id);
    let storage = service.get_storage(request);

    match storage.get_auction_by_id(auction_id).await {
        Ok(Some(auction)) => Ok(HttpResponse::Ok().json(auction)),
        Ok(None) => Ok(alert::not_found(ENTITY_NAME, ErrorCode::AuctionNotFound)),
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
