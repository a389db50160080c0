use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, info};

use super::{ENTITY_NAME, OfferService, check_auction_reference};
use crate::models::ErrorCode;
use crate::models::offers::requests::OfferRequest;
use crate::storage::Storage;
use crate::utils::{IdViolation, alert, validate_update_id};

pub async fn update_offer(
    service: &OfferService,
    request: &HttpRequest,
    offer_id: i64,
    offer_data: OfferRequest,
) -> ActixResult<HttpResponse> {
    debug!("REST request to update Offer : {}, {:?}", offer_id, offer_data);
    let storage = service.get_storage(request);

    if let Err(resp) = check_update_preconditions(&storage, offer_id, &offer_data).await {
        return Ok(resp);
    }

    // 整体覆盖，缺省字段（包括所属拍卖）置空
    match storage.save_offer(offer_data.into_offer()).await {
        Ok(offer) => {
            info!("Offer {} updated successfully", offer_id);
            let mut builder = HttpResponse::Ok();
            alert::entity_update_alert(ENTITY_NAME, offer_id).apply(&mut builder);
            Ok(builder.json(offer))
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}

pub async fn partial_update_offer(
    service: &OfferService,
    request: &HttpRequest,
    offer_id: i64,
    offer_data: OfferRequest,
) -> ActixResult<HttpResponse> {
    debug!(
        "REST request to partial update Offer partially : {}, {:?}",
        offer_id, offer_data
    );
    let storage = service.get_storage(request);

    if let Err(resp) = check_update_preconditions(&storage, offer_id, &offer_data).await {
        return Ok(resp);
    }

    let mut existing = match storage.get_offer_by_id(offer_id).await {
        Ok(Some(offer)) => offer,
        Ok(None) => return Ok(alert::not_found(ENTITY_NAME, ErrorCode::OfferNotFound)),
        Err(e) => return Ok(alert::internal_error(ENTITY_NAME, &e)),
    };

    offer_data.merge_into(&mut existing);

    match storage.save_offer(existing).await {
        Ok(offer) => {
            info!("Offer {} partially updated successfully", offer_id);
            let mut builder = HttpResponse::Ok();
            alert::entity_update_alert(ENTITY_NAME, offer_id).apply(&mut builder);
            Ok(builder.json(offer))
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}

/// 更新前置校验：ID 非空、与路径一致、记录存在、引用的拍卖存在
async fn check_update_preconditions(
    storage: &Arc<dyn Storage>,
    offer_id: i64,
    offer_data: &OfferRequest,
) -> Result<(), HttpResponse> {
    validate_update_id(offer_id, offer_data.id)
        .map_err(|violation| alert::bad_request_alert(ENTITY_NAME, violation))?;

    match storage.offer_exists(offer_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err(alert::bad_request_alert(
                ENTITY_NAME,
                IdViolation::IdNotFound,
            ));
        }
        Err(e) => return Err(alert::internal_error(ENTITY_NAME, &e)),
    }

    check_auction_reference(storage, offer_data.auction_id()).await
}
