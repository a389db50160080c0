use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::{AuctionService, ENTITY_NAME};
use crate::utils::alert;

pub async fn list_auctions(
    service: &AuctionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    debug!("REST request to get all Auctions");
    let storage = service.get_storage(request);

    match storage.list_auctions().await {
        Ok(auctions) => Ok(HttpResponse::Ok().json(auctions)),
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
