use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, info};

use super::{AuctionService, ENTITY_NAME};
use crate::models::ErrorCode;
use crate::models::auctions::requests::AuctionRequest;
use crate::storage::Storage;
use crate::utils::{IdViolation, alert, validate_update_id};

pub async fn update_auction(
    service: &AuctionService,
    request: &HttpRequest,
    auction_id: i64,
    auction_data: AuctionRequest,
) -> ActixResult<HttpResponse> {
    debug!(
        "REST request to update Auction : {}, {:?}",
        auction_id, auction_data
    );
    let storage = service.get_storage(request);

    if let Err(resp) = check_update_preconditions(&storage, auction_id, auction_data.id).await {
        return Ok(resp);
    }

    // 整体覆盖，缺省字段置空
    match storage.save_auction(auction_data.into_auction()).await {
        Ok(auction) => {
            info!("Auction {} updated successfully", auction_id);
            let mut builder = HttpResponse::Ok();
            alert::entity_update_alert(ENTITY_NAME, auction_id).apply(&mut builder);
            Ok(builder.json(auction))
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}

pub async fn partial_update_auction(
    service: &AuctionService,
    request: &HttpRequest,
    auction_id: i64,
    auction_data: AuctionRequest,
) -> ActixResult<HttpResponse> {
    debug!(
        "REST request to partial update Auction partially : {}, {:?}",
        auction_id, auction_data
    );
    let storage = service.get_storage(request);

    if let Err(resp) = check_update_preconditions(&storage, auction_id, auction_data.id).await {
        return Ok(resp);
    }

    let mut existing = match storage.get_auction_by_id(auction_id).await {
        Ok(Some(auction)) => auction,
        Ok(None) => return Ok(alert::not_found(ENTITY_NAME, ErrorCode::AuctionNotFound)),
        Err(e) => return Ok(alert::internal_error(ENTITY_NAME, &e)),
    };

    auction_data.merge_into(&mut existing);

    match storage.save_auction(existing).await {
        Ok(auction) => {
            info!("Auction {} partially updated successfully", auction_id);
            let mut builder = HttpResponse::Ok();
            alert::entity_update_alert(ENTITY_NAME, auction_id).apply(&mut builder);
            Ok(builder.json(auction))
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}

/// 更新前置校验：ID 非空、与路径一致、记录存在
async fn check_update_preconditions(
    storage: &Arc<dyn Storage>,
    auction_id: i64,
    body_id: Option<i64>,
) -> Result<(), HttpResponse> {
    validate_update_id(auction_id, body_id)
        .map_err(|violation| alert::bad_request_alert(ENTITY_NAME, violation))?;

    match storage.auction_exists(auction_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(alert::bad_request_alert(
            ENTITY_NAME,
            IdViolation::IdNotFound,
        )),
        Err(e) => Err(alert::internal_error(ENTITY_NAME, &e)),
    }
}
