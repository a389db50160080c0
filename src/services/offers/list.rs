use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{ENTITY_NAME, OfferService};
use crate::utils::alert;

pub async fn list_offers(
    service: &OfferService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    debug!("REST request to get all Offers");
    let storage = service.get_storage(request);

    match storage.list_offers().await {
        Ok(offers) => Ok(HttpResponse::Ok().json(offers)),
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
