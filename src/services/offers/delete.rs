use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, info};

use super::{ENTITY_NAME, OfferService};
use crate::utils::alert;

pub async fn delete_offer(
    service: &OfferService,
    request: &HttpRequest,
    offer_id: i64,
) -> ActixResult<HttpResponse> {
    debug!("REST request to delete Offer : {}", offer_id);
    let storage = service.get_storage(request);

    match storage.delete_offer(offer_id).await {
        Ok(removed) => {
            if removed {
                info!("Offer {} deleted successfully", offer_id);
            }
            let mut builder = HttpResponse::NoContent();
            alert::entity_deletion_alert(ENTITY_NAME, offer_id).apply(&mut builder);
            Ok(builder.finish())
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
