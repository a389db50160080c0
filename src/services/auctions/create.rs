use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::LOCATION};
use tracing::{debug, info};

use super::{AuctionService, ENTITY_NAME};
use crate::models::auctions::requests::AuctionRequest;
use crate::utils::{alert, validate_new_id};

pub async fn create_auction(
    service: &AuctionService,
    request: &HttpRequest,
    auction_data: AuctionRequest,
) -> ActixResult<HttpResponse> {
    debug!("REST request to save Auction : {:?}", auction_data);

    // 新拍卖不能带 ID
    if let Err(violation) = validate_new_id(auction_data.id) {
        return Ok(alert::bad_request_alert(ENTITY_NAME, violation));
    }

    let storage = service.get_storage(request);

    match storage.save_auction(auction_data.into_auction()).await {
        Ok(auction) => {
            let id = auction.id.unwrap_or_default();
            info!("Auction {} created successfully", id);

            let mut builder = HttpResponse::Created();
            builder.insert_header((LOCATION, format!("/api/auctions/{id}")));
            alert::entity_creation_alert(ENTITY_NAME, id).apply(&mut builder);
            Ok(builder.json(auction))
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
