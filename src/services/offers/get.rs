use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{ENTITY_NAME, OfferService};
use crate::models::ErrorCode;
use crate::utils::alert;

pub async fn get_offer(
    service: &OfferService,
    request: &HttpRequest,
    offer_id: i64,
) -> ActixResult<HttpResponse> {
    debug!("REST request to get Offer : {}", offer_id);
    let storage = service.get_storage(request);

    match storage.get_offer_by_id(offer_id).await {
        Ok(Some(offer)) => Ok(HttpResponse::Ok().json(offer)),
        Ok(None) => Ok(alert::not_found(ENTITY_NAME, ErrorCode::OfferNotFound)),
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
