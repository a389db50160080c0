use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::LOCATION};
use tracing::{debug, info};

use super::{ENTITY_NAME, OfferService, check_auction_reference};
use crate::models::offers::requests::OfferRequest;
use crate::utils::{alert, validate_new_id};

pub async fn create_offer(
    service: &OfferService,
    request: &HttpRequest,
    offer_data: OfferRequest,
) -> ActixResult<HttpResponse> {
    debug!("REST request to save Offer : {:?}", offer_data);

    // 新报价不能带 ID
    if let Err(violation) = validate_new_id(offer_data.id) {
        return Ok(alert::bad_request_alert(ENTITY_NAME, violation));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_auction_reference(&storage, offer_data.auction_id()).await {
        return Ok(resp);
    }

    match storage.save_offer(offer_data.into_offer()).await {
        Ok(offer) => {
            let id = offer.id.unwrap_or_default();
            info!(
                "Offer {} created successfully for auction {:?}",
                id,
                offer.auction_id()
            );

            let mut builder = HttpResponse::Created();
            builder.insert_header((LOCATION, format!("/api/offers/{id}")));
            alert::entity_creation_alert(ENTITY_NAME, id).apply(&mut builder);
            Ok(builder.json(offer))
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
